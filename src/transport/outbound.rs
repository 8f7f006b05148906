use serde::Deserialize;
use serde_json::Value;

use super::json::{ParseError, StringOrNumber, required};
use crate::domain::{Address, AddressList, MessageId, SendResult};

/// `address` is a plain string for one recipient and a list otherwise.
pub fn address_value(addresses: &AddressList) -> Value {
    match addresses.as_slice() {
        [only] => Value::String(only.as_str().to_owned()),
        many => Value::Array(
            many.iter()
                .map(Address::as_str)
                .map(|addr| Value::String(addr.to_owned()))
                .collect(),
        ),
    }
}

/// Body of `outboundSMSResponse` / `outboundMessageResponse`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SendResultJson {
    message_id: Option<StringOrNumber>,
    #[serde(default)]
    resource_reference: Option<ResourceReferenceJson>,
}

#[derive(Debug, Deserialize)]
struct ResourceReferenceJson {
    #[serde(default, rename = "resourceURL")]
    resource_url: Option<String>,
}

impl SendResultJson {
    pub(super) fn into_send_result(self) -> Result<SendResult, ParseError> {
        let raw = required(self.message_id, MessageId::FIELD)?.into_string();
        let message_id = MessageId::new(raw).map_err(|_| ParseError::InvalidField {
            field: MessageId::FIELD,
            expected: "a non-empty string",
        })?;

        Ok(SendResult {
            message_id,
            resource_url: self
                .resource_reference
                .and_then(|reference| reference.resource_url),
        })
    }
}
