//! Credential resolution for the issue-filing step.
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::IssueFilerConfig;
use crate::errors::{IssueFilerError, IssueFilerErrorKind};
use crate::github::config::GithubConfig;
use crate::{config_password_wrap, config_value_wrap};

/// Message reported when the exchange service refuses the token id.
const TOKEN_REFUSED: &str = "Failed to access auth token";

/// Source of bearer tokens for the GitHub API.
pub trait TokenStore: Sync + Send {
    /// Resolve an opaque token id into a bearer token.
    fn resolve(
        &self,
        token_id: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String, IssueFilerError>> + Send + '_>>;
}

/// Wire request for the token exchange service.
#[derive(Serialize, Debug)]
struct ExchangeRequest {
    /// Opaque credential reference
    external_token_id: String,
}

/// Wire response from the token exchange service.
#[derive(Deserialize, Debug)]
struct ExchangeResponse {
    /// Whether the exchange succeeded
    ok: bool,

    /// Bearer token, present on success
    external_token: Option<String>,
}

/// Token store backed by an external token exchange service.
#[derive(Debug, Clone)]
pub struct ExchangeTokenStore {
    /// Exchange endpoint
    endpoint: Url,

    /// Reqwest client
    client: reqwest::Client,
}

impl ExchangeTokenStore {
    /// Create a store for the given exchange endpoint.
    /// # Errors
    /// Error if the endpoint is not a valid URL
    pub fn new(endpoint: &str) -> Result<Self, IssueFilerError> {
        let endpoint = Url::parse(endpoint).map_err(|e| {
            IssueFilerError::new_with_source(
                IssueFilerErrorKind::Config,
                "Invalid token exchange URL",
                e,
            )
        })?;
        Ok(Self {
            endpoint,
            client: reqwest::Client::new(),
        })
    }
}

impl TokenStore for ExchangeTokenStore {
    fn resolve(
        &self,
        token_id: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String, IssueFilerError>> + Send + '_>> {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let external_token_id = token_id.to_string();
        Box::pin(async move {
            let response = client
                .post(endpoint)
                .json(&ExchangeRequest { external_token_id })
                .send()
                .await?;
            let text = response.text().await?;
            let exchange: ExchangeResponse = serde_json::from_str(&text)?;
            if !exchange.ok {
                return Err(
                    IssueFilerError::new(IssueFilerErrorKind::Credential).with_message(TOKEN_REFUSED)
                );
            }
            match exchange.external_token {
                Some(token) if !token.is_empty() => Ok(token),
                _ => Err(IssueFilerError::new(IssueFilerErrorKind::Credential)
                    .with_message(TOKEN_REFUSED)),
            }
        })
    }
}

/// Token store returning a token held in configuration.
#[derive(Debug, Clone)]
pub struct StaticTokenStore {
    /// Bearer token
    token: String,
}

impl StaticTokenStore {
    /// Create a store around an already-resolved token.
    pub fn new(token: String) -> Self {
        Self { token }
    }
}

impl TokenStore for StaticTokenStore {
    fn resolve(
        &self,
        _token_id: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String, IssueFilerError>> + Send + '_>> {
        let token = self.token.clone();
        Box::pin(async move { Ok(token) })
    }
}

/// Token exchange service configuration
#[derive(Deserialize, Serialize, Default, Debug, Clone)]
pub struct TokenStoreConfig {
    /// Exchange endpoint URL
    pub url: Option<String>,
}

/// Pick the token store for this invocation: the exchange service when a
/// token id was supplied, otherwise the token held in configuration.
pub(crate) fn get_store(
    config: &mut IssueFilerConfig,
) -> Result<Box<dyn TokenStore>, IssueFilerError> {
    if config.cli_args.token_id.is_some() {
        let url = config_value_wrap!(
            config,
            token_store,
            TokenStoreConfig,
            url,
            "the token exchange endpoint URL"
        );
        Ok(Box::new(ExchangeTokenStore::new(&url)?))
    } else {
        let token = config_password_wrap!(
            config,
            github,
            GithubConfig,
            token,
            "your github token (https://github.com/settings/personal-access-tokens)"
        );
        Ok(Box::new(StaticTokenStore::new(token)))
    }
}

#[cfg(test)]
mod test {
    use mockito::Server;

    use super::*;

    #[tokio::test]
    async fn exchange_returns_token_when_ok() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/exchange")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "external_token_id": "tok-123",
            })))
            .with_status(200)
            .with_body(r#"{"ok": true, "external_token": "gh-bearer"}"#)
            .create_async()
            .await;

        let store = ExchangeTokenStore::new(&format!("{}/exchange", server.url())).unwrap();
        let token = store.resolve("tok-123").await.unwrap();

        assert_eq!(token, "gh-bearer");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn exchange_refusal_is_a_credential_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/exchange")
            .with_status(200)
            .with_body(r#"{"ok": false}"#)
            .create_async()
            .await;

        let store = ExchangeTokenStore::new(&format!("{}/exchange", server.url())).unwrap();
        let err = store.resolve("tok-123").await.unwrap_err();

        assert_eq!(err.kind(), &IssueFilerErrorKind::Credential);
        assert_eq!(err.to_string(), "Failed to access auth token");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn exchange_without_token_is_a_credential_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/exchange")
            .with_status(200)
            .with_body(r#"{"ok": true}"#)
            .create_async()
            .await;

        let store = ExchangeTokenStore::new(&format!("{}/exchange", server.url())).unwrap();
        let err = store.resolve("tok-123").await.unwrap_err();

        assert_eq!(err.kind(), &IssueFilerErrorKind::Credential);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn static_store_ignores_the_token_id() {
        let store = StaticTokenStore::new("gh-bearer".to_string());
        let token = store.resolve("ignored").await.unwrap();
        assert_eq!(token, "gh-bearer");
    }

    #[test]
    fn invalid_endpoint_is_rejected() {
        assert!(ExchangeTokenStore::new("not a url").is_err());
    }
}
