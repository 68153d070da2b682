mod company_accounts;
mod transactions;
mod users;

pub use company_accounts::CompanyAccountInput;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::Config;
use crate::error::ApiError;
use crate::models::User;
use crate::session::AuthBackend;

/// HTTP client for the console backend.
///
/// Carries the session cookie across requests. All response handling funnels
/// through [`ApiClient::execute`] so every operation normalizes transport,
/// authorization and remote errors the same way.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// Error responses are expected to carry a human-readable `message`; anything
/// else falls back to the per-operation default.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .cookie_store(true)
            .build()
            .map_err(|err| ApiError::Transport(format!("Failed to build HTTP client: {err}")))?;

        Ok(ApiClient {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(self.url(path))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(self.url(path))
    }

    pub(crate) fn patch(&self, path: &str) -> RequestBuilder {
        self.client.patch(self.url(path))
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.client.delete(self.url(path))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends the request and decodes a JSON body, normalizing every failure
    /// mode to an [`ApiError`] whose message is safe to show inline.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let response = self.dispatch(request, fallback).await?;
        response.json::<T>().await.map_err(|err| {
            tracing::error!(error = %err, "malformed response body");
            ApiError::Transport(fallback.to_string())
        })
    }

    /// Like [`ApiClient::execute`] for endpoints whose body we discard.
    pub(crate) async fn execute_empty(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<(), ApiError> {
        self.dispatch(request, fallback).await?;
        Ok(())
    }

    async fn dispatch(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|err| {
            tracing::error!(error = %err, "request failed");
            ApiError::Transport(fallback.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| fallback.to_string());

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::warn!(%status, "request rejected as unauthorized");
            Err(ApiError::Unauthorized(message))
        } else {
            tracing::error!(%status, message, "backend reported an error");
            Err(ApiError::Remote(message))
        }
    }
}

#[async_trait]
impl AuthBackend for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        self.execute(
            self.post("/auth/login").json(&Credentials { email, password }),
            "Authentication failed",
        )
        .await
    }

    async fn register(&self, email: &str, password: &str) -> Result<User, ApiError> {
        self.execute(
            self.post("/auth/register").json(&Credentials { email, password }),
            "Registration failed",
        )
        .await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.execute_empty(self.post("/auth/logout"), "Logout failed")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(&Config::new(base_url)).expect("client builds")
    }

    #[test]
    fn base_url_is_normalized() {
        let api = client("http://localhost:5000/");
        assert_eq!(api.base_url(), "http://localhost:5000");
        assert_eq!(api.url("/transactions"), "http://localhost:5000/transactions");
    }

    #[tokio::test]
    async fn login_decodes_the_authenticated_user() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/auth/login")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "email": "f@x.com",
                "password": "secret1"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"_id":"u-1","username":"fatma","email":"f@x.com","role":"finance"}"#,
            )
            .create_async()
            .await;

        let user = client(&server.url()).login("f@x.com", "secret1").await.unwrap();
        assert_eq!(user.username, "fatma");
    }

    #[tokio::test]
    async fn server_message_is_surfaced_verbatim() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/auth/login")
            .with_status(400)
            .with_body(r#"{"message":"Wrong password"}"#)
            .create_async()
            .await;

        let err = client(&server.url())
            .login("f@x.com", "secret1")
            .await
            .expect_err("must fail");
        assert_eq!(err.to_string(), "Wrong password");
        assert!(!err.is_unauthorized());
    }

    #[tokio::test]
    async fn missing_message_falls_back_to_the_default() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/auth/login")
            .with_status(500)
            .with_body("oops")
            .create_async()
            .await;

        let err = client(&server.url())
            .login("f@x.com", "secret1")
            .await
            .expect_err("must fail");
        assert_eq!(err.to_string(), "Authentication failed");
    }

    #[tokio::test]
    async fn unauthorized_statuses_are_classified() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/auth/logout")
            .with_status(401)
            .with_body(r#"{"message":"Session expired"}"#)
            .create_async()
            .await;

        let err = client(&server.url()).logout().await.expect_err("must fail");
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Session expired");
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_error() {
        // Nothing listens on this port.
        let api = client("http://127.0.0.1:9");
        let err = api.login("f@x.com", "secret1").await.expect_err("must fail");
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(err.to_string(), "Authentication failed");
    }
}
