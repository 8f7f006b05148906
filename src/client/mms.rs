use super::http::{ApiRequest, FilePart, MultipartBody};
use super::{AttError, ServiceContext};
use crate::domain::{AttachmentSource, DeliveryStatus, MessageId, SendMms, SendResult};
use crate::transport;

/// MMS v3 façade.
///
/// Messages are posted as `multipart/form-data`: the JSON request document first, then one
/// part per attachment in the order given.
#[derive(Clone)]
pub struct MmsService {
    ctx: ServiceContext,
}

impl MmsService {
    pub(super) fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Send an MMS with zero or more attachments.
    ///
    /// Attachments backed by a path are read before any network I/O; an unreadable file fails
    /// with [`AttError::Attachment`] and nothing is sent.
    pub async fn send_message(&self, request: SendMms) -> Result<SendResult, AttError> {
        let url = self.ctx.endpoint(&["mms", "v3", "messaging", "outbox"])?;
        let files = load_attachments(&request).await?;
        let payload = transport::encode_send_mms_payload(&request);
        let body = MultipartBody::new(&payload, files);

        let response = self
            .ctx
            .execute(ApiRequest::post_multipart(url, body).accept_json())
            .await?;
        Ok(transport::decode_send_mms_response(&response)?)
    }

    /// Fetch delivery status for a previously sent MMS.
    pub async fn status(&self, message_id: &MessageId) -> Result<DeliveryStatus, AttError> {
        let url = self
            .ctx
            .endpoint(&["mms", "v3", "messaging", "outbox", message_id.as_str()])?;
        let body = self.ctx.execute(ApiRequest::get(url).accept_json()).await?;
        Ok(transport::decode_delivery_status(&body)?)
    }
}

async fn load_attachments(request: &SendMms) -> Result<Vec<FilePart>, AttError> {
    let mut parts = Vec::with_capacity(request.attachments().len());
    for (index, attachment) in request.attachments().iter().enumerate() {
        let data = match attachment.source() {
            AttachmentSource::Path(path) => {
                tokio::fs::read(path)
                    .await
                    .map_err(|source| AttError::Attachment {
                        path: path.clone(),
                        source,
                    })?
            }
            AttachmentSource::Bytes { data, .. } => data.clone(),
        };
        tracing::debug!(
            file_name = %attachment.file_name(),
            bytes = data.len(),
            "attaching file"
        );
        parts.push(FilePart {
            name: attachment.field_name(index),
            file_name: attachment.file_name(),
            content_type: attachment.content_type(),
            data,
        });
    }
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use serde_json::{Value, json};

    use super::*;
    use crate::client::fake::FakeTransport;
    use crate::client::http::{HttpMethod, RequestBody};
    use crate::client::test_client;
    use crate::domain::{Attachment, MmsOptions, Priority, Subject, format_addresses};

    const SENT: &str = r#"{"outboundMessageResponse":{"messageId":"MMSa9b4c4d6e4b","resourceReference":{"resourceURL":"https://api.att.com/mms/v3/messaging/outbox/MMSa9b4c4d6e4b"}}}"#;

    fn multipart(transport: &FakeTransport) -> MultipartBody {
        match transport.last_request().unwrap().body {
            RequestBody::Multipart(body) => body,
            other => panic!("expected multipart body, got {other:?}"),
        }
    }

    fn request_document(body: &MultipartBody) -> Value {
        serde_json::from_str(&body.root).unwrap()
    }

    #[tokio::test]
    async fn send_message_posts_document_and_file_parts() {
        let mut file = tempfile::Builder::new().suffix(".jpg").tempfile().unwrap();
        file.write_all(b"\xff\xd8jpeg").unwrap();

        let transport = FakeTransport::new(201, SENT);
        let request = SendMms::new(
            format_addresses("+15551234567,+15557654321").unwrap(),
            vec![
                Attachment::from_path(file.path()),
                Attachment::from_bytes("coupon.txt", "save 10%").unwrap(),
            ],
            MmsOptions {
                subject: Some(Subject::new("Coupons").unwrap()),
                priority: Some(Priority::High),
                notify_delivery_status: true,
            },
        );

        let result = test_client(&transport)
            .mms()
            .send_message(request)
            .await
            .unwrap();
        assert_eq!(result.message_id.as_str(), "MMSa9b4c4d6e4b");
        assert!(result.resource_url.unwrap().ends_with("/MMSa9b4c4d6e4b"));

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, HttpMethod::Post);
        assert_eq!(sent.url, "https://example.invalid/mms/v3/messaging/outbox");
        assert_eq!(sent.header("authorization"), Some("Bearer test_token"));
        assert_eq!(sent.header("accept"), Some("application/json"));
        assert_eq!(sent.header("content-type"), None);

        let body = multipart(&transport);
        assert_eq!(
            request_document(&body),
            json!({
                "outboundMessageRequest": {
                    "address": ["+15551234567", "+15557654321"],
                    "subject": "Coupons",
                    "priority": "High",
                    "notifyDeliveryStatus": true
                }
            })
        );

        assert_eq!(body.files.len(), 2);
        assert_eq!(body.files[0].name, "file0");
        assert_eq!(body.files[0].content_type, "image/jpeg");
        assert_eq!(body.files[0].data, b"\xff\xd8jpeg");
        assert_eq!(body.files[1].name, "file1");
        assert_eq!(body.files[1].file_name, "coupon.txt");
        assert_eq!(body.files[1].content_type, "text/plain");
    }

    #[tokio::test]
    async fn send_message_omits_absent_subject_and_priority() {
        let transport = FakeTransport::new(201, SENT);
        let request = SendMms::new(
            format_addresses("+15551234567").unwrap(),
            Vec::new(),
            MmsOptions::default(),
        );

        test_client(&transport)
            .mms()
            .send_message(request)
            .await
            .unwrap();

        let body = multipart(&transport);
        assert!(body.files.is_empty());
        assert_eq!(
            request_document(&body),
            json!({
                "outboundMessageRequest": {
                    "address": "+15551234567",
                    "notifyDeliveryStatus": false
                }
            })
        );
    }

    #[tokio::test]
    async fn attachment_overrides_reach_the_file_part() {
        let transport = FakeTransport::new(201, SENT);
        let attachment = Attachment::from_bytes("card.dat", "BEGIN:VCARD")
            .unwrap()
            .with_field_name("contact")
            .with_content_type("text/x-vcard")
            .unwrap();
        let request = SendMms::new(
            format_addresses("+15551234567").unwrap(),
            vec![attachment],
            MmsOptions::default(),
        );

        test_client(&transport)
            .mms()
            .send_message(request)
            .await
            .unwrap();

        let body = multipart(&transport);
        assert_eq!(body.files[0].name, "contact");
        assert_eq!(body.files[0].file_name, "card.dat");
        assert_eq!(body.files[0].content_type, "text/x-vcard");
    }

    #[tokio::test]
    async fn unreadable_attachment_fails_before_sending() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.png");

        let transport = FakeTransport::new(201, SENT);
        let request = SendMms::new(
            format_addresses("+15551234567").unwrap(),
            vec![Attachment::from_path(&missing)],
            MmsOptions::default(),
        );

        let err = test_client(&transport)
            .mms()
            .send_message(request)
            .await
            .unwrap_err();
        match err {
            AttError::Attachment { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn status_decodes_delivery_info() {
        let json = r#"
        {
          "DeliveryInfoList": {
            "DeliveryInfo": {
              "Id": "ad9b1d5b",
              "Address": "tel:3500000992",
              "DeliveryStatus": "DeliveryImpossible"
            },
            "ResourceUrl": "https://api.att.com/mms/v3/messaging/outbox/MMSa9b4c4d6e4b"
          }
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let id = MessageId::new("MMSa9b4c4d6e4b").unwrap();

        let status = test_client(&transport).mms().status(&id).await.unwrap();
        assert_eq!(status.deliveries.len(), 1);
        assert!(status.deliveries[0].status.is_final());

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, HttpMethod::Get);
        assert_eq!(
            sent.url,
            "https://example.invalid/mms/v3/messaging/outbox/MMSa9b4c4d6e4b"
        );
    }

    #[tokio::test]
    async fn status_surfaces_gateway_fault() {
        let json = r#"{"RequestError":{"PolicyException":{"MessageId":"POL0001","Text":"A policy error occurred. %1","Variables":"Rate limit"}}}"#;
        let transport = FakeTransport::new(403, json);
        let id = MessageId::new("MMS1").unwrap();

        let err = test_client(&transport).mms().status(&id).await.unwrap_err();
        assert!(err.is_auth_error());
        let fault = err.fault().unwrap();
        assert_eq!(fault.message_id, "POL0001");
        assert_eq!(fault.rendered_text(), "A policy error occurred. Rate limit");
    }
}
