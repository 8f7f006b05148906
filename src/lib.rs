//! Typed Rust client for the AT&T SMS v3, MMS v3 and Device Capabilities v2 REST APIs.
//!
//! The crate is split into a domain layer of strong types, a transport layer for wire-format
//! quirks, and a small client layer issuing authenticated requests. An OAuth access token is
//! obtained out of band and handed to [`AttClient`].
//!
//! ```rust,no_run
//! use att_codekit::{AccessToken, AttClient, MessageText, SendSms, format_addresses};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), att_codekit::AttError> {
//!     let client = AttClient::new(AccessToken::new("...")?);
//!     let request = SendSms::new(
//!         format_addresses("+15551234567,+15557654321")?,
//!         MessageText::new("hello")?,
//!         true,
//!     );
//!     let sent = client.sms().send_message(request).await?;
//!     let status = client.sms().delivery_status(&sent.message_id).await?;
//!     println!("{} deliveries", status.deliveries.len());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    AttClient, AttClientBuilder, AttError, DEFAULT_BASE_URL, DeviceCapabilitiesService,
    MmsService, SmsService,
};
pub use domain::{
    AccessToken, Address, AddressList, ApiFault, Attachment, AttachmentSource, DeliveryInfo,
    DeliveryState, DeliveryStatus, DeviceCapabilities, FaultKind, InboundMessage,
    InboundMessages, KnownDeliveryState, MessageId, MessageText, MmsOptions, PhoneNumber,
    Priority, RegistrationId, SendMms, SendResult, SendSms, Subject, ValidationError,
    format_addresses,
};
pub use transport::ParseError;
