use serde::Deserialize;

use crate::domain::{ApiFault, FaultKind};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct FaultJsonEnvelope {
    request_error: RequestErrorJson,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RequestErrorJson {
    #[serde(default)]
    service_exception: Option<ExceptionJson>,
    #[serde(default)]
    policy_exception: Option<ExceptionJson>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ExceptionJson {
    message_id: String,
    text: String,
    #[serde(default)]
    variables: Option<String>,
}

/// Best-effort decode of `{"RequestError":{"ServiceException"|"PolicyException":{...}}}`.
///
/// Returns `None` for anything that does not look like a gateway fault.
pub fn decode_api_fault(body: &str) -> Option<ApiFault> {
    let envelope: FaultJsonEnvelope = serde_json::from_str(body).ok()?;
    let RequestErrorJson {
        service_exception,
        policy_exception,
    } = envelope.request_error;

    let (kind, exception) = match (service_exception, policy_exception) {
        (Some(service), _) => (FaultKind::Service, service),
        (None, Some(policy)) => (FaultKind::Policy, policy),
        (None, None) => return None,
    };

    Some(ApiFault {
        kind,
        message_id: exception.message_id,
        text: exception.text,
        variables: exception.variables.filter(|vars| !vars.trim().is_empty()),
    })
}
