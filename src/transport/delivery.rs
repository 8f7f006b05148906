use serde::Deserialize;

use super::json::{OneOrMany, ParseError, StringOrNumber, decode, required};
use crate::domain::{DeliveryInfo, DeliveryState, DeliveryStatus};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DeliveryStatusJsonResponse {
    delivery_info_list: Option<DeliveryInfoListJson>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DeliveryInfoListJson {
    #[serde(default)]
    delivery_info: Option<OneOrMany<DeliveryInfoJson>>,
    #[serde(default)]
    resource_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DeliveryInfoJson {
    #[serde(default)]
    id: Option<StringOrNumber>,
    #[serde(default)]
    address: Option<String>,
    delivery_status: Option<String>,
}

impl DeliveryInfoJson {
    fn into_delivery_info(self) -> Result<DeliveryInfo, ParseError> {
        Ok(DeliveryInfo {
            id: self.id.map(StringOrNumber::into_string),
            address: self.address,
            status: DeliveryState::new(required(self.delivery_status, "DeliveryStatus")?),
        })
    }
}

/// Decode a `DeliveryInfoList` body; SMS and MMS share the shape.
pub fn decode_delivery_status(json: &str) -> Result<DeliveryStatus, ParseError> {
    let response: DeliveryStatusJsonResponse = decode(json)?;
    let list = required(response.delivery_info_list, "DeliveryInfoList")?;

    let deliveries = list
        .delivery_info
        .map(OneOrMany::into_vec)
        .unwrap_or_default()
        .into_iter()
        .map(DeliveryInfoJson::into_delivery_info)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DeliveryStatus {
        resource_url: list.resource_url,
        deliveries,
    })
}
