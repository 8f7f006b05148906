use crate::domain::value::MessageId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendResult {
    pub message_id: MessageId,
    pub resource_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryStatus {
    pub resource_url: Option<String>,
    pub deliveries: Vec<DeliveryInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryInfo {
    pub id: Option<String>,
    pub address: Option<String>,
    pub status: DeliveryState,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Delivery state reported for one recipient (`DeliveryStatus`).
///
/// This value is preserved as-is even when the state is unknown to this crate.
pub struct DeliveryState(String);

impl DeliveryState {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Map this state to a known variant, if one exists.
    pub fn known(&self) -> Option<KnownDeliveryState> {
        KnownDeliveryState::from_wire(&self.0)
    }

    /// Returns `true` once the gateway will not report further progress.
    pub fn is_final(&self) -> bool {
        matches!(
            self.known(),
            Some(KnownDeliveryState::DeliveredToTerminal | KnownDeliveryState::DeliveryImpossible)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum KnownDeliveryState {
    DeliveredToNetwork,
    DeliveredToTerminal,
    DeliveryImpossible,
    DeliveryUncertain,
    MessageWaiting,
}

impl KnownDeliveryState {
    pub fn from_wire(value: &str) -> Option<Self> {
        Some(match value {
            "DeliveredToNetwork" => Self::DeliveredToNetwork,
            "DeliveredToTerminal" => Self::DeliveredToTerminal,
            "DeliveryImpossible" => Self::DeliveryImpossible,
            "DeliveryUncertain" => Self::DeliveryUncertain,
            "MessageWaiting" => Self::MessageWaiting,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessages {
    pub messages: Vec<InboundMessage>,
    pub number_in_batch: u32,
    pub total_pending: u32,
    pub resource_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub message_id: String,
    pub message: String,
    pub sender_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeviceCapabilities {
    pub type_allocation_code: String,
    pub name: Option<String>,
    pub vendor: Option<String>,
    pub model: Option<String>,
    pub firmware_version: Option<String>,
    pub ua_prof: Option<String>,
    pub mms_capable: Option<bool>,
    pub assisted_gps: Option<bool>,
    pub location_technology: Option<String>,
    pub device_browser: Option<String>,
    pub wap_push_capable: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// `ServiceException`: the request itself was rejected.
    Service,
    /// `PolicyException`: the request violated an account or API policy.
    Policy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Structured error body returned by the gateway alongside non-2xx statuses.
pub struct ApiFault {
    pub kind: FaultKind,
    pub message_id: String,
    pub text: String,
    pub variables: Option<String>,
}

impl ApiFault {
    /// `text` with `%1`, `%2`, ... replaced by the comma-separated `variables`.
    pub fn rendered_text(&self) -> String {
        let Some(variables) = self.variables.as_deref() else {
            return self.text.clone();
        };
        let values = variables.split(',').map(str::trim).collect::<Vec<_>>();
        // Highest index first so `%1` never clobbers the prefix of `%10`.
        values
            .iter()
            .enumerate()
            .rev()
            .fold(self.text.clone(), |text, (idx, value)| {
                text.replace(&format!("%{}", idx + 1), value)
            })
    }
}
