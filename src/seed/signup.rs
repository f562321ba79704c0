use reqwest::StatusCode;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::error::Result;

/// Credentials of the demo account created after seeding.
pub const DEMO_USERNAME: &str = "test";
pub const DEMO_PASSWORD: &str = "test";

/// Body of the helpdesk API's signup request.
#[derive(Debug, Serialize)]
pub struct SignupRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Client for the helpdesk API's signup endpoint.
#[derive(Clone, Debug)]
pub struct SignupClient {
    http: reqwest::Client,
    base_url: String,
}

impl SignupClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// `<base_url>/signup`, tolerating a trailing slash on the base URL.
    pub fn signup_url(&self) -> String {
        format!("{}/signup", self.base_url.trim_end_matches('/'))
    }

    /// Registers an account through the API.
    ///
    /// Only delivery failures are errors. The response body is ignored and a
    /// non-success status is logged but still returned as `Ok`.
    #[instrument(skip(self, password), fields(url = %self.signup_url()))]
    pub async fn create_account(&self, username: &str, password: &str) -> Result<StatusCode> {
        let response = self
            .http
            .post(self.signup_url())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&SignupRequest { username, password })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!(%status, "Signup request accepted");
        } else {
            warn!(%status, "Signup endpoint answered with a non-success status");
        }
        Ok(status)
    }

    /// Registers the demo account (`test` / `test`).
    pub async fn create_demo_account(&self) -> Result<StatusCode> {
        self.create_account(DEMO_USERNAME, DEMO_PASSWORD).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeedError;
    use crate::test_utils::test_utils::{spawn_signup_server, unreachable_api_url};

    #[test]
    fn test_signup_url_trims_trailing_slash() {
        assert_eq!(
            SignupClient::new("http://localhost:3000/").signup_url(),
            "http://localhost:3000/signup"
        );
        assert_eq!(
            SignupClient::new("http://localhost:3000/api").signup_url(),
            "http://localhost:3000/api/signup"
        );
    }

    #[tokio::test]
    async fn test_demo_account_request_shape() {
        let server = spawn_signup_server(axum::http::StatusCode::CREATED).await;

        let status = SignupClient::new(server.base_url.clone())
            .create_demo_account()
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.accept.as_deref(), Some("application/json"));
        assert_eq!(request.content_type.as_deref(), Some("application/json"));
        assert_eq!(
            request.body,
            serde_json::json!({ "username": "test", "password": "test" })
        );
    }

    #[tokio::test]
    async fn test_error_status_is_not_a_failure() {
        let server = spawn_signup_server(axum::http::StatusCode::CONFLICT).await;

        let status = SignupClient::new(server.base_url.clone())
            .create_demo_account()
            .await
            .unwrap();

        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_fails() {
        let result = SignupClient::new(unreachable_api_url())
            .create_demo_account()
            .await;

        assert!(matches!(result, Err(SeedError::Signup(_))));
    }
}
