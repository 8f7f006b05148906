use std::fmt;

use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Clone, PartialEq, Eq, Hash)]
/// OAuth access token sent as `Authorization: Bearer <token>`.
///
/// Invariant: non-empty after trimming. Acquiring and refreshing the token is the caller's
/// job; the client only attaches it. `Debug` output never contains the token.
pub struct AccessToken(String);

impl AccessToken {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "access_token";

    /// Create a validated [`AccessToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A single destination address (`address`): phone number, short code or email.
///
/// Invariant: non-empty after trimming. The value is sent as provided; use
/// [`PhoneNumber`] when E.164 normalization is wanted.
pub struct Address(String);

impl Address {
    /// JSON field name used by the messaging APIs (`address`).
    pub const FIELD: &'static str = "address";

    /// Create a validated (non-empty) address.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the trimmed address.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for Address {
    /// Convert an already-parsed phone number to its E.164 form.
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`message`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// JSON field name used by the SMS API (`message`).
    pub const FIELD: &'static str = "message";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// MMS subject line (`subject`).
///
/// Invariant: non-empty after trimming. The original value is preserved.
pub struct Subject(String);

impl Subject {
    /// JSON field name used by the MMS API (`subject`).
    pub const FIELD: &'static str = "subject";

    /// Create a validated subject.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// MMS delivery priority (`priority`).
pub enum Priority {
    Low,
    Normal,
    High,
}

impl Priority {
    /// JSON field name used by the MMS API (`priority`).
    pub const FIELD: &'static str = "priority";

    /// Wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Normal => "Normal",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Message id returned by an SMS or MMS send (`messageId`).
///
/// Invariant: non-empty after trimming.
pub struct MessageId(String);

impl MessageId {
    /// JSON field name used by the messaging APIs (`messageId`).
    pub const FIELD: &'static str = "messageId";

    /// Create a validated [`MessageId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated message id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Registration id (the application's registered short code) used to read the SMS inbox.
///
/// Invariant: non-empty after trimming.
pub struct RegistrationId(String);

impl RegistrationId {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "registration_id";

    /// Create a validated [`RegistrationId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated registration id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Phone number normalized to E.164, convertible into an [`Address`].
pub struct PhoneNumber {
    raw: String,
    e164: String,
}

impl PhoneNumber {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "address";

    /// Parse `input`, falling back to `default_region` when it has no country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        match phonenumber::parse(default_region, raw) {
            Ok(number) => Ok(Self {
                e164: phonenumber::format(&number)
                    .mode(phonenumber::Mode::E164)
                    .to_string(),
                raw: raw.to_owned(),
            }),
            Err(_) => Err(ValidationError::InvalidPhoneNumber {
                input: raw.to_owned(),
            }),
        }
    }

    /// Input as given, trimmed.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn e164(&self) -> &str {
        &self.e164
    }
}
