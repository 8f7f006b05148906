//! Domain layer: strong types with validation and invariants (no I/O).

mod address;
mod request;
mod response;
mod validation;
mod value;

pub use address::{ADDRESS_DELIMITER, AddressList, format_addresses};
pub use request::{
    Attachment, AttachmentSource, DEFAULT_ATTACHMENT_CONTENT_TYPE, MmsOptions, SendMms, SendSms,
    content_type_for,
};
pub use response::{
    ApiFault, DeliveryInfo, DeliveryState, DeliveryStatus, DeviceCapabilities, FaultKind,
    InboundMessage, InboundMessages, KnownDeliveryState, SendResult,
};
pub use validation::ValidationError;
pub use value::{
    AccessToken, Address, MessageId, MessageText, PhoneNumber, Priority, RegistrationId, Subject,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_rejects_empty() {
        assert!(matches!(
            AccessToken::new("   "),
            Err(ValidationError::Empty {
                field: AccessToken::FIELD
            })
        ));
    }

    #[test]
    fn phone_number_converts_into_address_list() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::US), " 4255550123 ").unwrap();
        assert_eq!(pn.raw(), "4255550123");
        let list = AddressList::one(pn.into());
        assert_eq!(list.as_slice()[0].as_str(), "+14255550123");
    }

    #[test]
    fn send_sms_exposes_its_parts() {
        let request = SendSms::new(
            format_addresses("+15551234567").unwrap(),
            MessageText::new("hello").unwrap(),
            true,
        );
        assert_eq!(request.addresses().len(), 1);
        assert_eq!(request.message().as_str(), "hello");
        assert!(request.notify_delivery_status());
    }

    #[test]
    fn send_mms_keeps_attachment_order() {
        let request = SendMms::new(
            format_addresses("a@example.com").unwrap(),
            vec![
                Attachment::from_path("one.jpg"),
                Attachment::from_path("two.gif"),
            ],
            MmsOptions {
                priority: Some(Priority::High),
                ..Default::default()
            },
        );
        let names = request
            .attachments()
            .iter()
            .map(Attachment::file_name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["one.jpg", "two.gif"]);
        assert_eq!(request.options().priority, Some(Priority::High));
    }
}
