use std::io;

use att_codekit::{AccessToken, AttClient, MessageId};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let token = std::env::var("ATT_ACCESS_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ATT_ACCESS_TOKEN environment variable is required",
        )
    })?;
    let message_id = std::env::var("ATT_MESSAGE_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ATT_MESSAGE_ID environment variable is required",
        )
    })?;

    let client = AttClient::new(AccessToken::new(token)?);
    let status = client
        .sms()
        .delivery_status(&MessageId::new(message_id)?)
        .await?;

    for delivery in &status.deliveries {
        println!(
            "{}: {} (final: {})",
            delivery.address.as_deref().unwrap_or("<unknown>"),
            delivery.status.as_str(),
            delivery.status.is_final()
        );
    }

    Ok(())
}
