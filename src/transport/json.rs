use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
/// Response body could not be decoded into the expected model.
pub enum ParseError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response is not a JSON object")]
    UnexpectedRoot,

    #[error("response is missing required field `{field}`")]
    MissingField { field: &'static str },

    #[error("response field `{field}` is not {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}

impl ParseError {
    /// Name of the offending field, when the failure is tied to one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field } | Self::InvalidField { field, .. } => Some(*field),
            Self::Json(_) | Self::UnexpectedRoot => None,
        }
    }
}

/// Decode a response whose root must be a JSON object.
pub(super) fn decode<T: DeserializeOwned>(json: &str) -> Result<T, ParseError> {
    let value: Value = serde_json::from_str(json)?;
    if !value.is_object() {
        return Err(ParseError::UnexpectedRoot);
    }
    Ok(serde_json::from_value(value)?)
}

/// Wire structs keep every field optional; required ones are checked here so the error
/// names the field.
pub(super) fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ParseError> {
    value.ok_or(ParseError::MissingField { field })
}

/// Id-like scalar the gateway sends either quoted or as a bare number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(super) enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

impl StringOrNumber {
    pub(super) fn into_string(self) -> String {
        match self {
            Self::String(value) => value,
            Self::Number(value) => value.to_string(),
        }
    }

    pub(super) fn into_count(self, field: &'static str) -> Result<u32, ParseError> {
        let count = match &self {
            Self::String(value) => value.trim().parse::<u32>().ok(),
            Self::Number(value) => value.as_u64().and_then(|value| u32::try_from(value).ok()),
        };
        count.ok_or(ParseError::InvalidField {
            field,
            expected: "a non-negative integer",
        })
    }
}

/// Capability flag: `"Y"`/`"N"`, `"true"`/`"false"` or a JSON boolean.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub(super) enum WireFlag {
    Bool(bool),
    Text(String),
}

impl WireFlag {
    /// A blank string reads as "not reported".
    pub(super) fn into_bool(self, field: &'static str) -> Result<Option<bool>, ParseError> {
        let text = match self {
            Self::Bool(value) => return Ok(Some(value)),
            Self::Text(text) => text,
        };
        match text.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" | "true" => Ok(Some(true)),
            "n" | "no" | "false" => Ok(Some(false)),
            "" => Ok(None),
            _ => Err(ParseError::InvalidField {
                field,
                expected: "a Y/N flag",
            }),
        }
    }
}

/// The gateway collapses one-element lists into a bare object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(super) enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub(super) fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}
