use super::http::ApiRequest;
use super::{AttError, ServiceContext};
use crate::domain::DeviceCapabilities;
use crate::transport;

/// Device Capabilities v2 façade.
///
/// The device is identified by the network from the subscriber token, so the request carries
/// no parameters and only the `Authorization` header.
#[derive(Clone)]
pub struct DeviceCapabilitiesService {
    ctx: ServiceContext,
}

impl DeviceCapabilitiesService {
    pub(super) fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub async fn device_capabilities(&self) -> Result<DeviceCapabilities, AttError> {
        let body = self.device_capabilities_raw().await?;
        Ok(transport::decode_device_capabilities(&body)?)
    }

    pub async fn device_capabilities_raw(&self) -> Result<String, AttError> {
        let url = self.ctx.endpoint(&["rest", "2", "Devices", "Info"])?;
        self.ctx.execute(ApiRequest::get(url)).await
    }
}
