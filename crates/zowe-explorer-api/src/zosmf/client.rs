//! Shared HTTP plumbing for the z/OSMF backends.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::session::ZosmfSession;
use crate::config::ZosmfClientConfig;
use crate::error::ApiError;
use crate::profile::Profile;
use crate::types::ZosmfErrorBody;
use crate::Result;

/// Header z/OSMF requires on every state-changing request.
pub const CSRF_HEADER: &str = "X-CSRF-ZOSMF-HEADER";
/// Selects text or binary transfer of file and data set content.
pub const DATA_TYPE_HEADER: &str = "X-IBM-Data-Type";

/// HTTP client shared by all profiles of the `zosmf` type.
///
/// One pooled `reqwest::Client` is kept per certificate-verification mode,
/// since that is the only per-profile client setting.
#[derive(Debug)]
pub struct ZosmfClient {
    config: ZosmfClientConfig,
    clients: Mutex<HashMap<bool, reqwest::Client>>,
}

impl ZosmfClient {
    pub fn new(config: ZosmfClientConfig) -> Self {
        Self {
            config,
            clients: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &ZosmfClientConfig {
        &self.config
    }

    /// Connection details for a profile.
    pub fn session(&self, profile: &Profile) -> Result<ZosmfSession> {
        ZosmfSession::from_profile(profile)
    }

    fn http(&self, reject_unauthorized: bool) -> Result<reqwest::Client> {
        let mut clients = self.clients.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(client) = clients.get(&reject_unauthorized) {
            return Ok(client.clone());
        }
        let client = reqwest::Client::builder()
            .user_agent(self.config.user_agent.clone())
            .timeout(self.config.request_timeout())
            .connect_timeout(self.config.connect_timeout())
            .danger_accept_invalid_certs(!reject_unauthorized)
            .build()?;
        clients.insert(reject_unauthorized, client.clone());
        Ok(client)
    }

    /// Start a request against `path` with credentials and the CSRF header set.
    pub fn request(
        &self,
        profile: &Profile,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<RequestBuilder> {
        let session = self.session(profile)?;
        let mut url = session.endpoint(path)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter().copied());
        }

        debug!(method = %method, url = %url, profile = %profile.name, "z/OSMF request");

        let mut builder = self
            .http(session.reject_unauthorized)?
            .request(method, url)
            .header(CSRF_HEADER, "true");
        if let Some(user) = session.user {
            builder = builder.basic_auth(user, session.password);
        }
        Ok(builder)
    }

    /// Send and turn non-2xx statuses into [`ApiError::Zosmf`].
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                debug!(status = status.as_u16(), error = %e, "Failed to read z/OSMF error body");
                String::new()
            }
        };
        let err = error_from_body(status, &text);
        debug!(status = status.as_u16(), error = %err, "z/OSMF error response");
        Err(err)
    }

    pub async fn json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let bytes = self.send(builder).await?.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn bytes(&self, builder: RequestBuilder) -> Result<Vec<u8>> {
        Ok(self.send(builder).await?.bytes().await?.to_vec())
    }

    pub async fn text(&self, builder: RequestBuilder) -> Result<String> {
        Ok(self.send(builder).await?.text().await?)
    }

    /// Send, discarding any response body.
    pub async fn execute(&self, builder: RequestBuilder) -> Result<()> {
        self.send(builder).await?;
        Ok(())
    }
}

/// Map a non-2xx response body to [`ApiError::Zosmf`].
///
/// Prefers the z/OSMF error body, then the raw text, then the status reason.
fn error_from_body(status: StatusCode, text: &str) -> ApiError {
    let body = serde_json::from_str::<ZosmfErrorBody>(text).ok();
    let message = match &body {
        Some(body) if !body.message.is_empty() => body.full_message(),
        _ if !text.trim().is_empty() => text.trim().to_string(),
        _ => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    };
    ApiError::Zosmf {
        status: status.as_u16(),
        message,
        body,
    }
}

/// `X-IBM-Data-Type` value for a transfer mode.
pub fn data_type(binary: bool) -> &'static str {
    if binary {
        "binary"
    } else {
        "text"
    }
}

/// `Content-Type` for uploaded content.
pub fn content_type(binary: bool) -> &'static str {
    if binary {
        "application/octet-stream"
    } else {
        "text/plain"
    }
}
