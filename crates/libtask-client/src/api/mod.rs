//! API Client
//!
//! Authenticated JSON requests against the LibTask backend, organized by
//! domain in the submodules.

mod auth;
mod reports;
mod staff;
mod status;
mod tags;
mod tasks;

use std::rc::Rc;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::token_store::TokenStore;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};

pub use reports::ReportBundle;

/// Characters left alone in path segments and query values
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Request body
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    /// Pre-encoded bytes; the transport picks the content type.
    Bytes(Vec<u8>),
}

/// Client for the backend REST surface
#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    transport: Rc<dyn Transport>,
    tokens: TokenStore,
}

impl ApiClient {
    pub fn new(config: ClientConfig, transport: Rc<dyn Transport>, tokens: TokenStore) -> Self {
        Self {
            config,
            transport,
            tokens,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Issue a request and return the parsed body.
    ///
    /// A 401 clears the token store before the error is returned, so the next
    /// guarded check sees an anonymous session.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        payload: Option<Payload>,
    ) -> ApiResult<Value> {
        let mut headers = Vec::new();
        if let Some(token) = self.tokens.get_token() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        let body = match payload {
            Some(Payload::Json(value)) if !value.is_null() => {
                headers.push(("Content-Type".to_string(), "application/json".to_string()));
                Some(value.to_string().into_bytes())
            }
            Some(Payload::Bytes(bytes)) if !bytes.is_empty() => Some(bytes),
            _ => None,
        };

        debug!(method = %method, path, "api request");
        let request = HttpRequest {
            method,
            url: self.config.url(path),
            headers,
            body,
        };
        let response = self.transport.send(request).await?;
        let parsed = parse_body(&response);

        if !response.is_success() {
            if response.status == 401 {
                warn!(path, "unauthenticated response, clearing session token");
                self.tokens.clear_token();
            }
            let message = error_message(response.status, &parsed);
            warn!(path, status = response.status, %message, "api request failed");
            return Err(ApiError::Http {
                status: response.status,
                message,
                body: parsed,
            });
        }

        Ok(parsed)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let value = self.request(Method::GET, path, None).await?;
        decode(value)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let value = self.request(Method::POST, path, Some(encode(body)?)).await?;
        decode(value)
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let value = self.request(Method::PATCH, path, Some(encode(body)?)).await?;
        decode(value)
    }

    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.request(Method::DELETE, path, None).await?;
        Ok(())
    }
}

/// JSON when declared as JSON, text otherwise; unparseable JSON becomes null.
fn parse_body(response: &HttpResponse) -> Value {
    if response.is_json() {
        serde_json::from_str(&response.body).unwrap_or(Value::Null)
    } else {
        Value::String(response.body.clone())
    }
}

fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Human message for a failed response.
///
/// Preference: plain-text body, `detail` string, `detail.error.message`,
/// then the whole body stringified.
pub(crate) fn error_message(status: u16, parsed: &Value) -> String {
    match parsed {
        Value::String(text) if !text.is_empty() => text.clone(),
        Value::Object(_) | Value::Array(_) => {
            let detail = parsed.get("detail");
            if let Some(text) = detail.and_then(Value::as_str) {
                return text.to_string();
            }
            detail
                .and_then(|d| d.pointer("/error/message"))
                .and_then(truthy_text)
                .unwrap_or_else(|| parsed.to_string())
        }
        _ => format!("Request failed: {}", status),
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> ApiResult<T> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<B: Serialize + ?Sized>(body: &B) -> ApiResult<Payload> {
    serde_json::to_value(body)
        .map(Payload::Json)
        .map_err(|e| ApiError::Validation(format!("Could not encode request: {}", e)))
}

pub(crate) fn path_segment(raw: &str) -> String {
    utf8_percent_encode(raw, UNRESERVED).to_string()
}

/// `?a=1&b=2` from the present parameters, or an empty string.
pub(crate) fn query_string(params: &[(&str, Option<String>)]) -> String {
    let pairs: Vec<String> = params
        .iter()
        .filter_map(|(key, value)| {
            value
                .as_ref()
                .map(|v| format!("{}={}", key, utf8_percent_encode(v, UNRESERVED)))
        })
        .collect();
    if pairs.is_empty() {
        String::new()
    } else {
        format!("?{}", pairs.join("&"))
    }
}
