use std::io;

use att_codekit::{AccessToken, AttClient, AttError, MessageId};

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
    match client.mms().status(&MessageId::new(message_id)?).await {
        Ok(status) => {
            for delivery in &status.deliveries {
                println!(
                    "{}: {}",
                    delivery.id.as_deref().unwrap_or("<no id>"),
                    delivery.status.as_str()
                );
            }
        }
        Err(err @ AttError::Request { .. }) => {
            match err.fault() {
                Some(fault) => eprintln!("{}: {}", fault.message_id, fault.rendered_text()),
                None => eprintln!("{err}"),
            }
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
