use std::io;

use att_codekit::{AccessToken, AttClient, RegistrationId};

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
    let short_code = std::env::var("ATT_SHORT_CODE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ATT_SHORT_CODE environment variable is required",
        )
    })?;

    let client = AttClient::new(AccessToken::new(token)?);
    let inbox = client
        .sms()
        .inbound_messages(&RegistrationId::new(short_code)?)
        .await?;

    println!(
        "{} message(s) in batch, {} still pending",
        inbox.number_in_batch, inbox.total_pending
    );
    for message in &inbox.messages {
        println!("[{}] {}: {}", message.message_id, message.sender_address, message.message);
    }

    Ok(())
}
