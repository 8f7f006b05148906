//! Transport layer: wire-format details (JSON payloads and response decoding).

mod delivery;
mod device;
mod fault;
mod json;
mod mms;
mod outbound;
mod sms;

pub use delivery::decode_delivery_status;
pub use device::decode_device_capabilities;
pub use fault::decode_api_fault;
pub use json::ParseError;
pub use mms::{decode_send_mms_response, encode_send_mms_payload};
pub use sms::{decode_inbound_messages, decode_send_sms_response, encode_send_sms_body};
