use std::io;

use att_codekit::{AccessToken, AttClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Must be a subscriber-consented token, not a client-credentials one.
    let token = std::env::var("ATT_ACCESS_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ATT_ACCESS_TOKEN environment variable is required",
        )
    })?;

    let client = AttClient::new(AccessToken::new(token)?);
    let caps = client.device_capabilities().device_capabilities().await?;
    println!("{caps:#?}");

    Ok(())
}
