//! Client layer: configuration, authenticated HTTP calls, and the per-API service façades.

mod device;
#[cfg(test)]
mod fake;
mod http;
mod mms;
mod sms;

use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{AccessToken, ApiFault, ValidationError};
use crate::transport::ParseError;

pub use device::DeviceCapabilitiesService;
pub use mms::MmsService;
pub use sms::SmsService;

use http::{ApiRequest, HttpTransport, ReqwestTransport};

/// Production gateway for all AT&T REST APIs.
pub const DEFAULT_BASE_URL: &str = "https://api.att.com";

#[derive(Debug, thiserror::Error)]
/// Errors returned by the service façades.
///
/// This error preserves:
/// - transport failures (no HTTP response at all),
/// - non-2xx HTTP responses with their status and raw body,
/// - decode failures naming the offending field,
/// - validation failures of caller input.
pub enum AttError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    ///
    /// `body` is `None` when the server sent a blank body. `fault` is set when the body is a
    /// gateway `RequestError` document.
    #[error("request failed with HTTP status {status}")]
    Request {
        status: u16,
        body: Option<String>,
        fault: Option<ApiFault>,
    },

    /// Response body could not be decoded into the expected model.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// An MMS attachment could not be read from disk.
    #[error("failed to read attachment {}: {source}", path.display())]
    Attachment {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl AttError {
    /// HTTP status for [`AttError::Request`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Decoded gateway fault for [`AttError::Request`], if the body carried one.
    pub fn fault(&self) -> Option<&ApiFault> {
        match self {
            Self::Request { fault, .. } => fault.as_ref(),
            _ => None,
        }
    }

    /// Returns `true` when the token was rejected (HTTP 401/403).
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

#[derive(Debug)]
struct ServiceConfig {
    base_url: String,
    token: AccessToken,
}

/// Immutable configuration plus the shared transport; cloned into every façade.
#[derive(Clone)]
pub(crate) struct ServiceContext {
    config: Arc<ServiceConfig>,
    http: Arc<dyn HttpTransport>,
}

impl ServiceContext {
    fn endpoint(&self, segments: &[&str]) -> Result<Url, AttError> {
        let invalid = || ValidationError::InvalidBaseUrl {
            input: self.config.base_url.clone(),
        };
        let mut url = Url::parse(&self.config.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn execute(&self, request: ApiRequest) -> Result<String, AttError> {
        http::execute(self.http.as_ref(), &self.config.token, request).await
    }
}

fn validate_base_url(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    let invalid = || ValidationError::InvalidBaseUrl {
        input: input.to_owned(),
    };
    let url = Url::parse(trimmed).map_err(|_| invalid())?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(invalid());
    }
    Ok(trimmed.to_owned())
}

#[derive(Debug, Clone)]
/// Builder for [`AttClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct AttClientBuilder {
    token: AccessToken,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl AttClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(token: AccessToken) -> Self {
        Self {
            token,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the gateway base URL. A path prefix (e.g. a proxy mount point) is kept and
    /// API paths are appended to it.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build an [`AttClient`].
    pub fn build(self) -> Result<AttClient, AttError> {
        let base_url = validate_base_url(&self.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| AttError::Transport(Box::new(err)))?;

        Ok(AttClient::from_parts(
            base_url,
            self.token,
            Arc::new(ReqwestTransport::new(client)),
        ))
    }
}

#[derive(Clone)]
/// Entry point holding the gateway URL and bearer token.
///
/// The client is cheap to clone and hands out façades that share its configuration and HTTP
/// connection pool:
/// - [`AttClient::sms`] for SMS v3,
/// - [`AttClient::mms`] for MMS v3,
/// - [`AttClient::device_capabilities`] for Device Capabilities v2.
pub struct AttClient {
    ctx: ServiceContext,
}

impl AttClient {
    /// Create a client against [`DEFAULT_BASE_URL`].
    ///
    /// For more customization, use [`AttClient::builder`].
    pub fn new(token: AccessToken) -> Self {
        Self::from_parts(
            DEFAULT_BASE_URL.to_owned(),
            token,
            Arc::new(ReqwestTransport::new(reqwest::Client::new())),
        )
    }

    /// Start building a client with custom settings.
    pub fn builder(token: AccessToken) -> AttClientBuilder {
        AttClientBuilder::new(token)
    }

    fn from_parts(base_url: String, token: AccessToken, http: Arc<dyn HttpTransport>) -> Self {
        Self {
            ctx: ServiceContext {
                config: Arc::new(ServiceConfig { base_url, token }),
                http,
            },
        }
    }

    /// Base URL every endpoint is resolved against.
    pub fn base_url(&self) -> &str {
        &self.ctx.config.base_url
    }

    pub fn sms(&self) -> SmsService {
        SmsService::new(self.ctx.clone())
    }

    pub fn mms(&self) -> MmsService {
        MmsService::new(self.ctx.clone())
    }

    pub fn device_capabilities(&self) -> DeviceCapabilitiesService {
        DeviceCapabilitiesService::new(self.ctx.clone())
    }
}

#[cfg(test)]
pub(crate) fn test_client(transport: &fake::FakeTransport) -> AttClient {
    AttClient::from_parts(
        "https://example.invalid".to_owned(),
        AccessToken::new("test_token").unwrap(),
        Arc::new(transport.clone()),
    )
}
