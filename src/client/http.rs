//! Authenticated request construction and the HTTP transport seam.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::time::Instant;

use reqwest::multipart::{Form, Part};
use serde_json::Value;
use url::Url;

use super::AttError;
use crate::domain::AccessToken;

pub(crate) type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub(crate) type TransportResult = Result<HttpResponse, Box<dyn StdError + Send + Sync>>;

const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FilePart {
    pub name: String,
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Name of the multipart part holding the JSON request document.
pub(crate) const ROOT_PART_NAME: &str = "root-fields";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MultipartBody {
    /// JSON request document, envelope included; always the first part.
    pub root: String,
    pub files: Vec<FilePart>,
}

impl MultipartBody {
    pub(crate) fn new(payload: &Value, files: Vec<FilePart>) -> Self {
        Self {
            root: payload.to_string(),
            files,
        }
    }

    fn into_form(self) -> Result<Form, reqwest::Error> {
        let mut form = Form::new().part(
            ROOT_PART_NAME,
            Part::text(self.root).mime_str(JSON_CONTENT_TYPE)?,
        );
        for file in self.files {
            let part = Part::bytes(file.data)
                .file_name(file.file_name)
                .mime_str(&file.content_type)?;
            form = form.part(file.name, part);
        }
        Ok(form)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RequestBody {
    Empty,
    Json(String),
    Multipart(MultipartBody),
}

#[derive(Debug, Clone)]
pub(crate) struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl HttpRequest {
    #[cfg(test)]
    pub(crate) fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub status: u16,
    pub body: String,
}

pub(crate) trait HttpTransport: Send + Sync {
    fn send<'a>(&'a self, request: HttpRequest) -> BoxFuture<'a, TransportResult>;
}

#[derive(Debug, Clone)]
pub(crate) struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub(crate) fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(&'a self, request: HttpRequest) -> BoxFuture<'a, TransportResult> {
        Box::pin(async move {
            let mut builder = match request.method {
                HttpMethod::Get => self.client.get(&request.url),
                HttpMethod::Post => self.client.post(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            builder = match request.body {
                RequestBody::Empty => builder,
                RequestBody::Json(text) => builder.body(text),
                RequestBody::Multipart(body) => builder.multipart(body.into_form()?),
            };

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

/// One API call before the bearer token is attached.
#[derive(Debug, Clone)]
pub(crate) struct ApiRequest {
    method: HttpMethod,
    url: Url,
    headers: Vec<(String, String)>,
    body: RequestBody,
}

impl ApiRequest {
    pub(crate) fn get(url: Url) -> Self {
        Self {
            method: HttpMethod::Get,
            url,
            headers: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    /// POST with the payload serialized as-is and `Content-Type: application/json`.
    pub(crate) fn post_json(url: Url, payload: &Value) -> Self {
        Self {
            method: HttpMethod::Post,
            url,
            headers: vec![("Content-Type".to_owned(), JSON_CONTENT_TYPE.to_owned())],
            body: RequestBody::Json(payload.to_string()),
        }
    }

    /// POST as `multipart/form-data`; the boundary header is left to the transport.
    pub(crate) fn post_multipart(url: Url, body: MultipartBody) -> Self {
        Self {
            method: HttpMethod::Post,
            url,
            headers: Vec::new(),
            body: RequestBody::Multipart(body),
        }
    }

    pub(crate) fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub(crate) fn accept_json(self) -> Self {
        self.header("Accept", JSON_CONTENT_TYPE)
    }

    fn authorize(mut self, token: &AccessToken) -> HttpRequest {
        self.headers.push(("Authorization".to_owned(), token.bearer()));
        HttpRequest {
            method: self.method,
            url: self.url.into(),
            headers: self.headers,
            body: self.body,
        }
    }
}

/// Send one authorized request and return the body of a 2xx response.
///
/// Non-2xx statuses become [`AttError::Request`] regardless of what the body contains.
pub(crate) async fn execute(
    http: &dyn HttpTransport,
    token: &AccessToken,
    request: ApiRequest,
) -> Result<String, AttError> {
    let method = request.method;
    let url = request.url.to_string();
    let started = Instant::now();
    tracing::debug!(%method, %url, "sending request");

    let response = match http.send(request.authorize(token)).await {
        Ok(response) => response,
        Err(err) => {
            tracing::debug!(%method, %url, error = %err, "transport failure");
            return Err(AttError::Transport(err));
        }
    };

    let elapsed_ms = started.elapsed().as_millis() as u64;
    tracing::debug!(%method, %url, status = response.status, elapsed_ms, "response received");

    if !(200..=299).contains(&response.status) {
        tracing::warn!(%method, %url, status = response.status, "request rejected");
        let fault = crate::transport::decode_api_fault(&response.body);
        let body = if response.body.trim().is_empty() {
            None
        } else {
            Some(response.body)
        };
        return Err(AttError::Request {
            status: response.status,
            body,
            fault,
        });
    }

    Ok(response.body)
}
