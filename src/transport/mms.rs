use serde::Deserialize;
use serde_json::{Map, Value, json};

use super::json::{ParseError, decode, required};
use super::outbound::{SendResultJson, address_value};
use crate::domain::{Address, Priority, SendMms, SendResult, Subject};

#[derive(Debug, Deserialize)]
struct SendMmsJsonResponse {
    #[serde(rename = "outboundMessageResponse")]
    outbound_message_response: Option<SendResultJson>,
}

/// Build `{"outboundMessageRequest":{...}}`. Absent subject or priority are left out, not
/// sent as `null`.
pub fn encode_send_mms_payload(request: &SendMms) -> Value {
    let options = request.options();

    let mut outbound = Map::new();
    outbound.insert(
        Address::FIELD.to_owned(),
        address_value(request.addresses()),
    );
    if let Some(subject) = options.subject.as_ref() {
        outbound.insert(Subject::FIELD.to_owned(), json!(subject.as_str()));
    }
    if let Some(priority) = options.priority {
        outbound.insert(Priority::FIELD.to_owned(), json!(priority.as_str()));
    }
    outbound.insert(
        "notifyDeliveryStatus".to_owned(),
        Value::Bool(options.notify_delivery_status),
    );

    json!({ "outboundMessageRequest": outbound })
}

pub fn decode_send_mms_response(json: &str) -> Result<SendResult, ParseError> {
    let response: SendMmsJsonResponse = decode(json)?;
    required(response.outbound_message_response, "outboundMessageResponse")?.into_send_result()
}
