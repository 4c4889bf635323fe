//! Request dispatch: auth header injection, body encoding, status mapping.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ApiError, FieldErrors, SESSION_EXPIRED};
use crate::session::{Session, UserType};

/// Environment variable holding the backend base URL.
pub const BASE_URL_ENV: &str = "MEDADMIN_API_URL";

/// Base URL used when [`BASE_URL_ENV`] is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

const JSON: &str = "application/json";

// ── Request options ─────────────────────────────────────────────────

/// Method, JSON body and query string of a plain API call.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    pub query: Vec<(String, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::get()
    }
}

impl RequestOptions {
    fn with_method(method: Method, body: Option<Value>) -> Self {
        Self {
            method,
            body,
            query: Vec::new(),
        }
    }

    pub fn get() -> Self {
        Self::with_method(Method::GET, None)
    }

    pub fn post(body: Value) -> Self {
        Self::with_method(Method::POST, Some(body))
    }

    pub fn put(body: Value) -> Self {
        Self::with_method(Method::PUT, Some(body))
    }

    pub fn patch(body: Value) -> Self {
        Self::with_method(Method::PATCH, Some(body))
    }

    pub fn delete() -> Self {
        Self::with_method(Method::DELETE, None)
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_query_pairs(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }
}

// ── Multipart form ──────────────────────────────────────────────────

/// Verb a multipart call stands for. The request itself is always a POST;
/// `Put` adds a `_method=PUT` field for the backend's method override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMethod {
    Post,
    Put,
}

#[derive(Debug, Clone)]
enum FormPart {
    Text(String),
    File {
        file_name: String,
        bytes: Vec<u8>,
        mime: Option<String>,
    },
}

/// Multipart body builder for create/update endpoints that accept uploads.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    parts: Vec<(String, FormPart)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten a JSON object into text fields. Nulls are skipped, booleans
    /// become `1`/`0`, arrays and objects are sent as JSON text.
    pub fn from_json(value: &Value) -> Self {
        let mut form = Self::new();
        if let Value::Object(map) = value {
            for (key, v) in map {
                let text = match v {
                    Value::Null => continue,
                    Value::String(s) => s.clone(),
                    Value::Bool(b) => (if *b { "1" } else { "0" }).to_string(),
                    Value::Number(n) => n.to_string(),
                    other => other.to_string(),
                };
                form = form.text(key.clone(), text);
            }
        }
        form
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push((name.into(), FormPart::Text(value.into())));
        self
    }

    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.parts.push((
            name.into(),
            FormPart::File {
                file_name: file_name.into(),
                bytes,
                mime: None,
            },
        ));
        self
    }

    pub fn file_with_mime(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
        mime: impl Into<String>,
    ) -> Self {
        self.parts.push((
            name.into(),
            FormPart::File {
                file_name: file_name.into(),
                bytes,
                mime: Some(mime.into()),
            },
        ));
        self
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn has_files(&self) -> bool {
        self.parts
            .iter()
            .any(|(_, p)| matches!(p, FormPart::File { .. }))
    }

    fn into_form(self) -> Result<Form, ApiError> {
        let mut form = Form::new();
        for (name, part) in self.parts {
            form = match part {
                FormPart::Text(text) => form.text(name, text),
                FormPart::File {
                    file_name,
                    bytes,
                    mime,
                } => {
                    let mut part = Part::bytes(bytes).file_name(file_name);
                    if let Some(mime) = mime {
                        part = part
                            .mime_str(&mime)
                            .map_err(|e| ApiError::Decode(format!("mime type {}: {}", mime, e)))?;
                    }
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}

// ── ApiClient ───────────────────────────────────────────────────────

/// Shared HTTP helper behind every domain API.
///
/// Cloning is cheap: the HTTP connection pool and the session store are
/// shared between clones.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        Self::with_http(reqwest::Client::new(), base_url, session)
    }

    /// Client for the base URL in `MEDADMIN_API_URL`, or the local default.
    pub fn from_env(session: Session) -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(base_url, session)
    }

    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>, session: Session) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Absolute URL for an endpoint path. Absolute URLs pass through.
    pub fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return endpoint.to_string();
        }
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Attach `Authorization: Bearer <token>` when auth is required and a
    /// token is stored. Without a token the header is left off entirely.
    fn authed(
        &self,
        builder: RequestBuilder,
        requires_auth: bool,
        user_type: UserType,
    ) -> Result<RequestBuilder, ApiError> {
        if !requires_auth {
            return Ok(builder);
        }
        match self.session.token(user_type)? {
            Some(token) => Ok(builder.bearer_auth(token)),
            None => Ok(builder),
        }
    }

    /// JSON API call.
    ///
    /// `user_type` selects whose token is sent and whose session is cleared
    /// on 401; `None` means [`Session::current_user_type`].
    pub async fn call<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
        requires_auth: bool,
        user_type: Option<UserType>,
    ) -> Result<R, ApiError> {
        let user_type = self.session.resolve(user_type)?;
        let url = self.url(endpoint);
        debug!("{} {} as {}", options.method, url, user_type);

        let mut req = self
            .http
            .request(options.method, &url)
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON);
        if !options.query.is_empty() {
            req = req.query(&options.query);
        }
        if let Some(body) = &options.body {
            req = req.json(body);
        }
        let req = self.authed(req, requires_auth, user_type)?;

        let resp = req.send().await?;
        self.parse(resp, user_type).await
    }

    /// Multipart API call. Always sent as POST; [`FormMethod::Put`] adds
    /// `_method=PUT`. `Content-Type` is left to the HTTP client so the
    /// multipart boundary is set correctly.
    pub async fn call_with_files<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        form: FormData,
        method: FormMethod,
        requires_auth: bool,
        user_type: Option<UserType>,
    ) -> Result<R, ApiError> {
        let user_type = self.session.resolve(user_type)?;
        let url = self.url(endpoint);
        debug!("POST {} (multipart, {:?}) as {}", url, method, user_type);

        let form = match method {
            FormMethod::Post => form,
            FormMethod::Put => form.text("_method", "PUT"),
        };

        let req = self
            .http
            .post(&url)
            .header(ACCEPT, JSON)
            .multipart(form.into_form()?);
        let req = self.authed(req, requires_auth, user_type)?;

        let resp = req.send().await?;
        self.parse(resp, user_type).await
    }

    /// Map a response to `R`, or to an `ApiError`. A 401 clears the session
    /// of `user_type` before returning.
    async fn parse<R: DeserializeOwned>(
        &self,
        resp: Response,
        user_type: UserType,
    ) -> Result<R, ApiError> {
        let status = resp.status();
        let bytes = resp.bytes().await?;
        let body: Option<Value> = if bytes.iter().all(u8::is_ascii_whitespace) {
            Some(Value::Null)
        } else {
            serde_json::from_slice(&bytes).ok()
        };

        if status.as_u16() == 401 {
            warn!("401 from server, clearing {} session", user_type);
            if let Err(e) = self.session.clear(user_type) {
                warn!("could not clear {} session: {}", user_type, e);
            }
            let message = body
                .as_ref()
                .and_then(server_message)
                .unwrap_or_else(|| SESSION_EXPIRED.to_string());
            return Err(ApiError::Unauthorized { message });
        }

        if !status.is_success() {
            let message = body
                .as_ref()
                .and_then(server_message)
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_else(|| "request failed".to_string());
            let errors = body.as_ref().map(field_errors).unwrap_or_default();
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
                errors,
            });
        }

        let body = body.ok_or_else(|| {
            ApiError::Decode(format!(
                "response body is not JSON: {}",
                String::from_utf8_lossy(&bytes)
            ))
        })?;
        serde_json::from_value(body).map_err(|e| ApiError::Decode(format!("response body: {}", e)))
    }
}

/// `message`, falling back to `error`, from an error body.
fn server_message(body: &Value) -> Option<String> {
    ["message", "error"]
        .iter()
        .find_map(|key| body.get(key).and_then(Value::as_str))
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

/// `errors` map of an error body. A bare string per field is accepted as a
/// one-element list.
fn field_errors(body: &Value) -> FieldErrors {
    let mut out = FieldErrors::new();
    let Some(Value::Object(errors)) = body.get("errors") else {
        return out;
    };
    for (field, messages) in errors {
        let list = match messages {
            Value::Array(items) => items
                .iter()
                .map(|m| m.as_str().map(str::to_string).unwrap_or_else(|| m.to_string()))
                .collect(),
            Value::String(s) => vec![s.clone()],
            other => vec![other.to_string()],
        };
        out.insert(field.clone(), list);
    }
    out
}
