//! HTTP client for the external account server.
//!
//! The two endpoints it talks to live in an out-of-scope collaborator;
//! this module only owns the request/response plumbing and keeps
//! transport failures distinct from business rejections (a rejection is a
//! normal `Ok` response with `success = false`).

use log::{error, info};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use shared::{
    BalanceActionRequest, BalanceActionResponse, BalancePromptRequest, BalancePromptResponse,
};

const ACTION_ENDPOINT: &str = "/api/account/action";
const PROMPT_ENDPOINT: &str = "/api/account/prompt";

/// Transport-level failure reaching or reading the account server.
///
/// Never covers business rejections; those come back as successful
/// responses carrying a `BalanceActionError`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (unreachable host, connection reset).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status.
    #[error("server returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The body was not valid response JSON.
    #[error("failed to parse server response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// API client for communicating with the account server.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a new API client with the default base URL.
    pub fn new() -> Self {
        Self::with_base_url("http://localhost:3000".to_string())
    }

    /// Create a new API client with a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Apply a deposit or withdrawal against the account.
    ///
    /// Issues exactly one request per call, no retry. On `Ok` the caller
    /// decides what to do with `success`/`error`; an `Err` means the
    /// server was never meaningfully reached.
    pub async fn submit_balance_action(
        &self,
        request: &BalanceActionRequest,
    ) -> Result<BalanceActionResponse, ApiError> {
        info!("POST {} - request: {:?}", ACTION_ENDPOINT, request);
        self.post_json(ACTION_ENDPOINT, request).await
    }

    /// Send a free-text instruction for server-side interpretation.
    pub async fn submit_balance_prompt(
        &self,
        request: &BalancePromptRequest,
    ) -> Result<BalancePromptResponse, ApiError> {
        info!("POST {} - prompt: {:?}", PROMPT_ENDPOINT, request.prompt);
        self.post_json(PROMPT_ENDPOINT, request).await
    }

    async fn post_json<Req, Resp>(&self, path: &str, request: &Req) -> Result<Resp, ApiError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        let response = self.http.post(&url).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("POST {} failed with status {}", path, status);
            return Err(ApiError::Status { status, body });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
