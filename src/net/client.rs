//! Authenticated JSON request client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with cross-origin
//! credentials included. Server-side (SSR): a stub transport that fails,
//! since these endpoints are only meaningful in the browser.
//!
//! RETRY POLICY
//! ============
//! Exactly one recovery attempt per call: an authenticated request that
//! comes back 401 triggers a single unauthenticated `POST /v1/auth/refresh`
//! (cookies carry the refresh credential). A new token retries the original
//! request once and that outcome is final; a failed refresh clears the
//! session and surfaces the original 401. Concurrent callers may each run
//! their own refresh; duplicate refreshes are accepted inefficiency, not a
//! correctness problem.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::AccessTokenResponse;
use crate::state::session::SessionStore;

const STATUS_UNAUTHORIZED: u16 = 401;
const REFRESH_PATH: &str = "/v1/auth/refresh";

/// HTTP methods the API server accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A request as handed to the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A response as returned by the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .map_or(false, |ct| ct.contains("application/json"))
    }
}

/// Transport seam: sends one [`HttpRequest`] and resolves to a response or a
/// transport-level failure message. Tests substitute a scripted fake.
pub(crate) type SendFuture = Pin<Box<dyn Future<Output = Result<HttpResponse, String>>>>;
pub(crate) type Transport = Rc<dyn Fn(HttpRequest) -> SendFuture>;

/// JSON request client bound to a [`SessionStore`].
///
/// Cheap to clone; clones share the session handle and transport.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: SessionStore,
    transport: Transport,
}

impl ApiClient {
    /// Client against `base_url` (empty string means same-origin paths).
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        Self {
            base_url: base_url.into(),
            session,
            transport: default_transport(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_transport(
        base_url: impl Into<String>,
        session: SessionStore,
        transport: Transport,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            session,
            transport,
        }
    }

    /// The session store this client reads tokens from and writes refreshed
    /// tokens back into.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Perform a JSON request against the API server.
    ///
    /// Attaches `Authorization: Bearer <token>` when `auth` is set and a
    /// token is present, recovers once from a 401 as described in the module
    /// docs, and decodes a JSON body when the server declares one. Empty
    /// bodies (204, delete responses) resolve to `None`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Transport`] when the network fails, [`ApiError::Http`]
    /// for non-2xx responses (after retry handling), [`ApiError::Decode`]
    /// when a declared JSON body does not parse.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        auth: bool,
    ) -> Result<Option<serde_json::Value>, ApiError> {
        let token = if auth { self.session.access_token() } else { None };
        let first = self.build_request(method, path, body.as_ref(), token.as_deref());
        let mut response = (self.transport)(first).await.map_err(ApiError::Transport)?;

        if auth && response.status == STATUS_UNAUTHORIZED {
            match self.refresh_access_token().await {
                Some(new_token) => {
                    let retry = self.build_request(method, path, body.as_ref(), Some(&new_token));
                    response = (self.transport)(retry).await.map_err(ApiError::Transport)?;
                }
                None => {
                    self.session.clear();
                    return Err(ApiError::from_response(&response));
                }
            }
        }

        if !response.ok() {
            return Err(ApiError::from_response(&response));
        }
        if response.is_json() && !response.body.is_empty() {
            let value = serde_json::from_str(&response.body)
                .map_err(|error| ApiError::Decode(error.to_string()))?;
            return Ok(Some(value));
        }
        Ok(None)
    }

    /// One refresh attempt. Returns the new token after storing it in the
    /// session, or `None` when the refresh failed in any way.
    async fn refresh_access_token(&self) -> Option<String> {
        let request = self.build_request(Method::Post, REFRESH_PATH, None, None);
        let response = (self.transport)(request).await.ok()?;
        if !response.ok() {
            return None;
        }
        let body: AccessTokenResponse = serde_json::from_str(&response.body).ok()?;
        if body.access_token.is_empty() {
            return None;
        }
        self.session.set_access_token(Some(body.access_token.clone()));
        Some(body.access_token)
    }

    fn build_request(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
        token: Option<&str>,
    ) -> HttpRequest {
        let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
        if let Some(token) = token {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers,
            body: body.map(serde_json::Value::to_string),
        }
    }
}

/// Decode a response value that the endpoint contract requires to be present.
pub(crate) fn decode_required<T: DeserializeOwned>(
    value: Option<serde_json::Value>,
) -> Result<T, ApiError> {
    let value = value.ok_or_else(|| ApiError::Decode("empty response body".to_owned()))?;
    serde_json::from_value(value).map_err(|error| ApiError::Decode(error.to_string()))
}

impl ApiError {
    pub(crate) fn from_response(response: &HttpResponse) -> Self {
        let text = response.body.trim();
        let message = if text.is_empty() {
            format!("HTTP {}", response.status)
        } else {
            text.to_owned()
        };
        Self::Http {
            status: response.status,
            message,
        }
    }
}

fn default_transport() -> Transport {
    #[cfg(feature = "hydrate")]
    {
        Rc::new(|request| Box::pin(send_browser(request)))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Rc::new(|request| {
            let _ = request;
            Box::pin(async { Err("not available on server".to_owned()) })
        })
    }
}

/// Browser transport over `gloo-net`. Credentials are always included so
/// the refresh cookie travels alongside the bearer token.
#[cfg(feature = "hydrate")]
async fn send_browser(request: HttpRequest) -> Result<HttpResponse, String> {
    let mut builder = gloo_net::http::RequestBuilder::new(&request.url)
        .method(gloo_method(request.method))
        .credentials(web_sys::RequestCredentials::Include);
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    let ready = match request.body {
        Some(body) => builder.body(body).map_err(|e| e.to_string())?,
        None => builder.build().map_err(|e| e.to_string())?,
    };
    let response = ready.send().await.map_err(|e| e.to_string())?;
    let status = response.status();
    let content_type = response.headers().get("content-type");
    let body = response.text().await.unwrap_or_default();
    Ok(HttpResponse {
        status,
        content_type,
        body,
    })
}

#[cfg(feature = "hydrate")]
fn gloo_method(method: Method) -> gloo_net::http::Method {
    match method {
        Method::Get => gloo_net::http::Method::GET,
        Method::Post => gloo_net::http::Method::POST,
        Method::Put => gloo_net::http::Method::PUT,
        Method::Delete => gloo_net::http::Method::DELETE,
    }
}
