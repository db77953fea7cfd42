use async_trait::async_trait;
use gloo_net::http::Request;

use crate::domain::Credentials;

pub const LOGIN_PATH: &str = "/api/login";

/// Errors from one login request. A rejected status is not a transport
/// problem; the two are mapped to different user-visible messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("login rejected with status {0}")]
    Rejected(u16),
    #[error("network error: {0}")]
    Transport(String),
}

/// The one network capability the login flow needs, behind a trait so the
/// submit logic can be exercised against a recording mock.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Issues exactly one `POST /api/login` with the credentials as JSON.
    /// `Ok(())` for any 2xx status; only the status is consulted.
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError>;
}

/// fetch-backed client. The base URL is empty for same-origin requests and is
/// only non-empty in development setups that front the API elsewhere.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HttpAuthApi {
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let res = Request::post(&self.url(LOGIN_PATH))
            .header("Content-Type", "application/json")
            .json(credentials)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if res.ok() {
            Ok(())
        } else {
            Err(ApiError::Rejected(res.status()))
        }
    }
}
