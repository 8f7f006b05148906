use std::io;

use att_codekit::{
    AccessToken, AttClient, Attachment, MmsOptions, Priority, SendMms, Subject, format_addresses,
};

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
    let addresses = std::env::var("ATT_ADDRESSES").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ATT_ADDRESSES environment variable is required",
        )
    })?;
    // Comma-separated file paths; may be empty.
    let files = std::env::var("ATT_ATTACHMENTS").unwrap_or_default();
    let subject = std::env::var("ATT_SUBJECT").unwrap_or_else(|_| "att-codekit demo".to_owned());

    let attachments = files
        .split(',')
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(Attachment::from_path)
        .collect();
    let options = MmsOptions {
        subject: Some(Subject::new(subject)?),
        priority: Some(Priority::Normal),
        notify_delivery_status: false,
    };

    let client = AttClient::new(AccessToken::new(token)?);
    let request = SendMms::new(format_addresses(&addresses)?, attachments, options);
    let sent = client.mms().send_message(request).await?;
    println!("message id: {}", sent.message_id.as_str());

    Ok(())
}
