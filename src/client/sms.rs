use super::http::ApiRequest;
use super::{AttError, ServiceContext};
use crate::domain::{
    DeliveryStatus, InboundMessages, MessageId, RegistrationId, SendResult, SendSms,
};
use crate::transport;

const OUTBOX: [&str; 4] = ["sms", "v3", "messaging", "outbox"];

/// SMS v3 façade.
///
/// Obtained from [`AttClient::sms`](super::AttClient::sms). Every method is one HTTP
/// round trip; the façade itself is stateless and may be shared between tasks.
#[derive(Clone)]
pub struct SmsService {
    ctx: ServiceContext,
}

impl SmsService {
    pub(super) fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Send an SMS to one or more addresses.
    ///
    /// Errors:
    /// - [`AttError::Request`] for non-2xx HTTP responses,
    /// - [`AttError::Parse`] when the response lacks `outboundSMSResponse.messageId`.
    pub async fn send_message(&self, request: SendSms) -> Result<SendResult, AttError> {
        let body = self.send_message_raw(request).await?;
        Ok(transport::decode_send_sms_response(&body)?)
    }

    /// Like [`SmsService::send_message`] but returns the undecoded response body.
    pub async fn send_message_raw(&self, request: SendSms) -> Result<String, AttError> {
        let url = self.ctx.endpoint(&OUTBOX)?;
        let payload = transport::encode_send_sms_body(&request);
        self.ctx
            .execute(ApiRequest::post_json(url, &payload).accept_json())
            .await
    }

    /// Fetch delivery status for a previously sent SMS.
    pub async fn delivery_status(
        &self,
        message_id: &MessageId,
    ) -> Result<DeliveryStatus, AttError> {
        let body = self.delivery_status_raw(message_id).await?;
        Ok(transport::decode_delivery_status(&body)?)
    }

    pub async fn delivery_status_raw(&self, message_id: &MessageId) -> Result<String, AttError> {
        let url = self
            .ctx
            .endpoint(&["sms", "v3", "messaging", "outbox", message_id.as_str()])?;
        self.ctx.execute(ApiRequest::get(url).accept_json()).await
    }

    /// Fetch messages sent to the application's registered short code.
    pub async fn inbound_messages(
        &self,
        registration_id: &RegistrationId,
    ) -> Result<InboundMessages, AttError> {
        let body = self.inbound_messages_raw(registration_id).await?;
        Ok(transport::decode_inbound_messages(&body)?)
    }

    pub async fn inbound_messages_raw(
        &self,
        registration_id: &RegistrationId,
    ) -> Result<String, AttError> {
        let url = self
            .ctx
            .endpoint(&["sms", "v3", "messaging", "inbox", registration_id.as_str()])?;
        self.ctx.execute(ApiRequest::get(url).accept_json()).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::client::fake::FakeTransport;
    use crate::client::http::{HttpMethod, RequestBody};
    use crate::client::test_client;
    use crate::domain::{Address, AddressList, MessageText, format_addresses};

    fn sms(transport: &FakeTransport) -> SmsService {
        test_client(transport).sms()
    }

    fn json_body(transport: &FakeTransport) -> Value {
        match transport.last_request().unwrap().body {
            RequestBody::Json(text) => serde_json::from_str(&text).unwrap(),
            other => panic!("expected JSON body, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn send_message_to_one_address_parses_message_id() {
        let transport =
            FakeTransport::new(201, r#"{"outboundSMSResponse":{"messageId":"abc123"}}"#);
        let request = SendSms::new(
            AddressList::one(Address::new("+15551234567").unwrap()),
            MessageText::new("hello").unwrap(),
            true,
        );

        let result = sms(&transport).send_message(request).await.unwrap();
        assert_eq!(result.message_id.as_str(), "abc123");

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, HttpMethod::Post);
        assert_eq!(sent.url, "https://example.invalid/sms/v3/messaging/outbox");
        assert_eq!(sent.header("authorization"), Some("Bearer test_token"));
        assert_eq!(sent.header("content-type"), Some("application/json"));
        assert_eq!(sent.header("accept"), Some("application/json"));
        assert_eq!(
            json_body(&transport),
            json!({
                "outboundSMSRequest": {
                    "address": "+15551234567",
                    "message": "hello",
                    "notifyDeliveryStatus": true
                }
            })
        );
    }

    #[tokio::test]
    async fn send_message_to_two_addresses_sends_a_list() {
        let transport =
            FakeTransport::new(201, r#"{"outboundSMSResponse":{"messageId":"m2"}}"#);
        let request = SendSms::new(
            format_addresses("+1555000001,+1555000002").unwrap(),
            MessageText::new("hi").unwrap(),
            false,
        );

        sms(&transport).send_message(request).await.unwrap();

        match transport.last_request().unwrap().body {
            RequestBody::Json(text) => assert!(
                text.contains(r#""address":["+1555000001","+1555000002"]"#),
                "{text}"
            ),
            other => panic!("expected JSON body, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn send_message_maps_non_success_status_even_with_json_body() {
        let transport =
            FakeTransport::new(500, r#"{"outboundSMSResponse":{"messageId":"x"}}"#);
        let request = SendSms::new(
            format_addresses("+15551234567").unwrap(),
            MessageText::new("hello").unwrap(),
            false,
        );

        let err = sms(&transport).send_message(request).await.unwrap_err();
        assert!(matches!(
            err,
            AttError::Request {
                status: 500,
                body: Some(_),
                fault: None
            }
        ));
    }

    #[tokio::test]
    async fn send_message_maps_invalid_json_to_parse_error() {
        let transport = FakeTransport::new(201, "{ not json }");
        let request = SendSms::new(
            format_addresses("+15551234567").unwrap(),
            MessageText::new("hello").unwrap(),
            false,
        );

        let err = sms(&transport).send_message(request).await.unwrap_err();
        assert!(matches!(err, AttError::Parse(_)));
    }

    #[tokio::test]
    async fn send_message_raw_returns_body_verbatim() {
        let raw = r#"{"outboundSMSResponse":{"messageId":"abc123"}}"#;
        let transport = FakeTransport::new(201, raw);
        let request = SendSms::new(
            format_addresses("+15551234567").unwrap(),
            MessageText::new("hello").unwrap(),
            false,
        );

        let body = sms(&transport).send_message_raw(request).await.unwrap();
        assert_eq!(body, raw);
    }

    #[tokio::test]
    async fn delivery_status_uses_outbox_id_path() {
        let json = r#"
        {
          "DeliveryInfoList": {
            "DeliveryInfo": [
              { "Id": "msg0", "Address": "tel:3500000992", "DeliveryStatus": "DeliveredToTerminal" }
            ],
            "ResourceUrl": "https://api.att.com/sms/v3/messaging/outbox/SMSa9b192780e8e7d5f"
          }
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let id = MessageId::new("SMSa9b192780e8e7d5f").unwrap();

        let status = sms(&transport).delivery_status(&id).await.unwrap();
        assert_eq!(status.deliveries[0].status.as_str(), "DeliveredToTerminal");

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, HttpMethod::Get);
        assert_eq!(
            sent.url,
            "https://example.invalid/sms/v3/messaging/outbox/SMSa9b192780e8e7d5f"
        );
        assert_eq!(sent.body, RequestBody::Empty);
        assert_eq!(sent.header("authorization"), Some("Bearer test_token"));
    }

    #[tokio::test]
    async fn delivery_status_missing_field_is_named() {
        let json = r#"{"DeliveryInfoList":{"DeliveryInfo":[{"Id":"msg0"}]}}"#;
        let transport = FakeTransport::new(200, json);
        let id = MessageId::new("SMS1").unwrap();

        let err = sms(&transport).delivery_status(&id).await.unwrap_err();
        match err {
            AttError::Parse(parse) => assert_eq!(parse.field(), Some("DeliveryStatus")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn inbound_messages_uses_inbox_path() {
        let json = r#"
        {
          "InboundSmsMessageList": {
            "InboundSmsMessage": [
              { "MessageId": "6c01", "Message": "Hello", "SenderAddress": "tel:4257850159" }
            ],
            "NumberOfMessagesInThisBatch": "1",
            "TotalNumberOfPendingMessages": "0"
          }
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let registration = RegistrationId::new("48507075").unwrap();

        let inbox = sms(&transport).inbound_messages(&registration).await.unwrap();
        assert_eq!(inbox.messages.len(), 1);
        assert_eq!(inbox.messages[0].message, "Hello");

        let sent = transport.last_request().unwrap();
        assert_eq!(
            sent.url,
            "https://example.invalid/sms/v3/messaging/inbox/48507075"
        );
    }

    #[tokio::test]
    async fn transport_failure_is_not_retried() {
        let transport = FakeTransport::failing("dns failure");
        let id = MessageId::new("SMS1").unwrap();

        let err = sms(&transport).delivery_status(&id).await.unwrap_err();
        assert!(matches!(err, AttError::Transport(_)));
        assert_eq!(transport.request_count(), 1);
    }
}
