use std::path::{Path, PathBuf};

use crate::domain::address::AddressList;
use crate::domain::validation::ValidationError;
use crate::domain::value::{MessageText, Priority, Subject};

/// Content type used when the attachment extension is not recognised.
pub const DEFAULT_ATTACHMENT_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Debug, Clone)]
pub struct SendSms {
    addresses: AddressList,
    message: MessageText,
    notify_delivery_status: bool,
}

impl SendSms {
    pub fn new(addresses: AddressList, message: MessageText, notify_delivery_status: bool) -> Self {
        Self {
            addresses,
            message,
            notify_delivery_status,
        }
    }

    pub fn addresses(&self) -> &AddressList {
        &self.addresses
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn notify_delivery_status(&self) -> bool {
        self.notify_delivery_status
    }
}

#[derive(Debug, Clone, Default)]
pub struct MmsOptions {
    pub subject: Option<Subject>,
    pub priority: Option<Priority>,
    pub notify_delivery_status: bool,
}

#[derive(Debug, Clone)]
pub struct SendMms {
    addresses: AddressList,
    attachments: Vec<Attachment>,
    options: MmsOptions,
}

impl SendMms {
    pub fn new(addresses: AddressList, attachments: Vec<Attachment>, options: MmsOptions) -> Self {
        Self {
            addresses,
            attachments,
            options,
        }
    }

    pub fn addresses(&self) -> &AddressList {
        &self.addresses
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    pub fn options(&self) -> &MmsOptions {
        &self.options
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentSource {
    /// Read from disk when the message is sent.
    Path(PathBuf),
    /// Already in memory.
    Bytes { file_name: String, data: Vec<u8> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One MMS attachment.
///
/// Unless overridden, the multipart field name is `file<index>` and the content type is
/// inferred from the file extension.
pub struct Attachment {
    source: AttachmentSource,
    field_name: Option<String>,
    content_type: Option<String>,
}

impl Attachment {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "attachment";

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            source: AttachmentSource::Path(path.into()),
            field_name: None,
            content_type: None,
        }
    }

    pub fn from_bytes(
        file_name: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) -> Result<Self, ValidationError> {
        let file_name = file_name.into();
        if file_name.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self {
            source: AttachmentSource::Bytes {
                file_name,
                data: data.into(),
            },
            field_name: None,
            content_type: None,
        })
    }

    /// Override the multipart field name.
    pub fn with_field_name(mut self, name: impl Into<String>) -> Self {
        self.field_name = Some(name.into());
        self
    }

    /// Override the content type instead of inferring it from the extension.
    ///
    /// The value must look like `type/subtype`, optionally followed by `;name=value`
    /// parameters.
    pub fn with_content_type(
        mut self,
        content_type: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let content_type = content_type.into();
        let trimmed = content_type.trim();
        if !is_media_type(trimmed) {
            return Err(ValidationError::InvalidContentType {
                input: content_type,
            });
        }
        self.content_type = Some(trimmed.to_owned());
        Ok(self)
    }

    pub fn source(&self) -> &AttachmentSource {
        &self.source
    }

    /// File name reported in the multipart part.
    pub fn file_name(&self) -> String {
        match &self.source {
            AttachmentSource::Path(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| Self::FIELD.to_owned()),
            AttachmentSource::Bytes { file_name, .. } => file_name.clone(),
        }
    }

    /// Multipart field name for the attachment at `index`.
    pub fn field_name(&self, index: usize) -> String {
        self.field_name
            .clone()
            .unwrap_or_else(|| format!("file{index}"))
    }

    pub fn content_type(&self) -> String {
        match &self.content_type {
            Some(content_type) => content_type.clone(),
            None => content_type_for(Path::new(&self.file_name())).to_owned(),
        }
    }
}

fn is_token(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|b| {
            b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
        })
}

fn is_param_value(value: &str) -> bool {
    match value.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')) {
        Some(quoted) => !quoted.contains('"'),
        None => is_token(value),
    }
}

/// RFC 9110 media type: `type "/" subtype *( ";" name "=" value )`.
fn is_media_type(value: &str) -> bool {
    let mut params = value.split(';');
    let essence = params.next().unwrap_or_default().trim();
    let Some((kind, subtype)) = essence.split_once('/') else {
        return false;
    };
    is_token(kind)
        && is_token(subtype)
        && params.all(|param| match param.trim().split_once('=') {
            Some((name, value)) => is_token(name) && is_param_value(value),
            None => false,
        })
}

/// Best-effort content type for the media formats MMS gateways accept.
pub fn content_type_for(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return DEFAULT_ATTACHMENT_CONTENT_TYPE;
    };
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "wbmp" => "image/vnd.wap.wbmp",
        "txt" => "text/plain",
        "vcf" => "text/x-vcard",
        "vcs" => "text/x-vcalendar",
        "smil" => "application/smil",
        "amr" => "audio/amr",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "midi" | "mid" => "audio/midi",
        "3gp" => "video/3gpp",
        "mp4" => "video/mp4",
        _ => DEFAULT_ATTACHMENT_CONTENT_TYPE,
    }
}
