use std::io;

use att_codekit::{AccessToken, AttClient, MessageText, SendSms, format_addresses};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let token = required_env("ATT_ACCESS_TOKEN")?;
    // Comma-separated, e.g. "+15551234567,+15557654321".
    let addresses = required_env("ATT_ADDRESSES")?;
    let message = std::env::var("ATT_MESSAGE")
        .unwrap_or_else(|_| "Hello from the att-codekit demo.".to_owned());

    let client = match std::env::var("ATT_BASE_URL") {
        Ok(base_url) => AttClient::builder(AccessToken::new(token)?)
            .base_url(base_url)
            .build()?,
        Err(_) => AttClient::new(AccessToken::new(token)?),
    };

    let request = SendSms::new(
        format_addresses(&addresses)?,
        MessageText::new(message)?,
        true,
    );
    let sent = client.sms().send_message(request).await?;
    println!("message id: {}", sent.message_id.as_str());
    if let Some(url) = sent.resource_url {
        println!("resource url: {url}");
    }

    Ok(())
}
