//! # Order Service Client
//!
//! HTTP client for the remote Order Service, consumed as a black box:
//!
//! - `GET {base}/orders/today` — today's raw order rows.
//! - `PATCH {base}/orders/status/{id}` — advance one order's stage.
//!
//! Both calls are bearer-token authenticated. The token comes from an
//! injected [`TokenProvider`] rather than ambient storage, so the board is
//! decoupled from wherever credentials actually live; the board only reads
//! the token, it never refreshes or validates it.
//!
//! The [`OrderApi`] trait is the seam the synchronizer depends on; tests use
//! the scripted [`MockOrderApi`](crate::mock::MockOrderApi) instead of HTTP.

use crate::error::ServiceError;
use crate::model::Stage;
use crate::normalize::RawOrder;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tracing::debug;

/// Credential capability: a single accessor for the current bearer token.
pub trait TokenProvider: Send + Sync {
    /// The token to attach to the next request, or `None` when logged out.
    fn current_token(&self) -> Option<String>;
}

/// A fixed token, supplied once at startup.
#[derive(Debug, Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl TokenProvider for StaticToken {
    fn current_token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// The two Order Service operations the board needs.
#[async_trait]
pub trait OrderApi: Send + Sync {
    /// Fetches today's orders as raw rows.
    async fn fetch_today(&self) -> Result<Vec<RawOrder>, ServiceError>;

    /// Writes a new stage for one order.
    async fn set_stage(&self, id: &str, stage: Stage) -> Result<(), ServiceError>;
}

/// reqwest-backed [`OrderApi`] implementation.
pub struct HttpOrderApi {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl HttpOrderApi {
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tokens,
        }
    }

    fn token(&self) -> Result<String, ServiceError> {
        self.tokens.current_token().ok_or(ServiceError::NoToken)
    }
}

#[async_trait]
impl OrderApi for HttpOrderApi {
    async fn fetch_today(&self) -> Result<Vec<RawOrder>, ServiceError> {
        let token = self.token()?;
        let url = format!("{}/orders/today", self.base_url);
        debug!(%url, "Fetching today's orders");

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ServiceError::Status(response.status().as_u16()));
        }

        response
            .json::<Vec<RawOrder>>()
            .await
            .map_err(|e| ServiceError::Payload(e.to_string()))
    }

    async fn set_stage(&self, id: &str, stage: Stage) -> Result<(), ServiceError> {
        let token = self.token()?;
        let url = format!("{}/orders/status/{}", self.base_url, id);
        debug!(%url, %stage, "Advancing order stage");

        let response = self
            .client
            .patch(&url)
            .bearer_auth(token)
            .json(&serde_json::json!({ "status": stage.as_str() }))
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ServiceError::Status(response.status().as_u16()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_token_always_yields_its_token() {
        let tokens = StaticToken::new("t0k3n");
        assert_eq!(tokens.current_token().as_deref(), Some("t0k3n"));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let api = HttpOrderApi::new("http://kitchen:8080/", Arc::new(StaticToken::new("t")));
        assert_eq!(api.base_url, "http://kitchen:8080");
    }
}
