use serde::Deserialize;

use super::json::{ParseError, StringOrNumber, WireFlag, decode, required};
use crate::domain::DeviceCapabilities;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DeviceCapabilitiesJsonResponse {
    device_info: Option<DeviceInfoJson>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DeviceInfoJson {
    device_id: Option<DeviceIdJson>,
    capabilities: Option<CapabilitiesJson>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DeviceIdJson {
    type_allocation_code: Option<StringOrNumber>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CapabilitiesJson {
    #[serde(default)]
    name: Option<StringOrNumber>,
    #[serde(default)]
    vendor: Option<StringOrNumber>,
    #[serde(default)]
    model: Option<StringOrNumber>,
    #[serde(default)]
    firmware_version: Option<StringOrNumber>,
    #[serde(default)]
    ua_prof: Option<StringOrNumber>,
    #[serde(default)]
    mms_capable: Option<WireFlag>,
    #[serde(default)]
    assisted_gps: Option<WireFlag>,
    #[serde(default)]
    location_technology: Option<StringOrNumber>,
    #[serde(default)]
    device_browser: Option<StringOrNumber>,
    #[serde(default)]
    wap_push_capable: Option<WireFlag>,
}

fn text(value: Option<StringOrNumber>) -> Option<String> {
    value.map(StringOrNumber::into_string)
}

fn flag(value: Option<WireFlag>, field: &'static str) -> Result<Option<bool>, ParseError> {
    match value {
        Some(value) => value.into_bool(field),
        None => Ok(None),
    }
}

pub fn decode_device_capabilities(json: &str) -> Result<DeviceCapabilities, ParseError> {
    let response: DeviceCapabilitiesJsonResponse = decode(json)?;
    let info = required(response.device_info, "DeviceInfo")?;
    let device_id = required(info.device_id, "DeviceId")?;
    let caps = required(info.capabilities, "Capabilities")?;

    Ok(DeviceCapabilities {
        type_allocation_code: required(device_id.type_allocation_code, "TypeAllocationCode")?
            .into_string(),
        name: text(caps.name),
        vendor: text(caps.vendor),
        model: text(caps.model),
        firmware_version: text(caps.firmware_version),
        ua_prof: text(caps.ua_prof),
        mms_capable: flag(caps.mms_capable, "MmsCapable")?,
        assisted_gps: flag(caps.assisted_gps, "AssistedGps")?,
        location_technology: text(caps.location_technology),
        device_browser: text(caps.device_browser),
        wap_push_capable: flag(caps.wap_push_capable, "WapPushCapable")?,
    })
}
