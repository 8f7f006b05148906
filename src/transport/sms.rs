use serde::Deserialize;
use serde_json::{Value, json};

use super::json::{OneOrMany, ParseError, StringOrNumber, decode, required};
use super::outbound::{SendResultJson, address_value};
use crate::domain::{InboundMessage, InboundMessages, SendResult, SendSms};

#[derive(Debug, Deserialize)]
struct SendSmsJsonResponse {
    #[serde(rename = "outboundSMSResponse")]
    outbound_sms_response: Option<SendResultJson>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InboundMessagesJsonResponse {
    inbound_sms_message_list: Option<InboundMessageListJson>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InboundMessageListJson {
    #[serde(default)]
    inbound_sms_message: Option<OneOrMany<InboundMessageJson>>,
    number_of_messages_in_this_batch: Option<StringOrNumber>,
    total_number_of_pending_messages: Option<StringOrNumber>,
    #[serde(default)]
    resource_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InboundMessageJson {
    message_id: Option<StringOrNumber>,
    message: Option<String>,
    sender_address: Option<String>,
}

pub fn encode_send_sms_body(request: &SendSms) -> Value {
    json!({
        "outboundSMSRequest": {
            "address": address_value(request.addresses()),
            "message": request.message().as_str(),
            "notifyDeliveryStatus": request.notify_delivery_status(),
        }
    })
}

pub fn decode_send_sms_response(json: &str) -> Result<SendResult, ParseError> {
    let response: SendSmsJsonResponse = decode(json)?;
    required(response.outbound_sms_response, "outboundSMSResponse")?.into_send_result()
}

pub fn decode_inbound_messages(json: &str) -> Result<InboundMessages, ParseError> {
    let response: InboundMessagesJsonResponse = decode(json)?;
    let list = required(response.inbound_sms_message_list, "InboundSmsMessageList")?;

    let messages = list
        .inbound_sms_message
        .map(OneOrMany::into_vec)
        .unwrap_or_default()
        .into_iter()
        .map(|message| {
            Ok(InboundMessage {
                message_id: required(message.message_id, "MessageId")?.into_string(),
                message: required(message.message, "Message")?,
                sender_address: required(message.sender_address, "SenderAddress")?,
            })
        })
        .collect::<Result<Vec<_>, ParseError>>()?;

    Ok(InboundMessages {
        messages,
        number_in_batch: required(
            list.number_of_messages_in_this_batch,
            "NumberOfMessagesInThisBatch",
        )?
        .into_count("NumberOfMessagesInThisBatch")?,
        total_pending: required(
            list.total_number_of_pending_messages,
            "TotalNumberOfPendingMessages",
        )?
        .into_count("TotalNumberOfPendingMessages")?,
        resource_url: list.resource_url,
    })
}
