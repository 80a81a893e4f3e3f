//! The issue-creation step and its invocation output.
use serde::Serialize;

use crate::errors::IssueFilerError;
use crate::github::client::GithubClient;
use crate::github::issue::{CreatedIssue, IssueRequest};
use crate::token_store::TokenStore;

/// Prefix of every user-visible failure message.
const ERROR_PREFIX: &str = "An error was encountered during issue creation";

/// Output returned to the invoking platform, serialized as one JSON object.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum StepOutput {
    /// Issue created.
    Created {
        /// Issue number
        #[serde(rename = "GitHubIssueNumber")]
        issue_number: u64,

        /// Issue link
        #[serde(rename = "GitHubIssueLink")]
        issue_link: String,
    },

    /// Invocation failed.
    Failed {
        /// User-visible failure message
        error: String,
    },
}

/// Run the issue-creation step: resolve the credential, then file the issue.
///
/// The two suspending calls run sequentially. Every failure is caught here,
/// logged raw once, and folded into the output's error string; nothing
/// propagates past this boundary. Each invocation is independent: repeating
/// one files a duplicate issue.
pub async fn run_issue_step(
    store: &dyn TokenStore,
    client: &GithubClient,
    token_id: &str,
    request: &IssueRequest,
) -> StepOutput {
    match try_create(store, client, token_id, request).await {
        Ok(created) => StepOutput::Created {
            issue_number: created.number,
            issue_link: created.html_url,
        },
        Err(e) => {
            log::error!("{e}");
            StepOutput::Failed {
                error: format!("{ERROR_PREFIX}: {e}"),
            }
        }
    }
}

/// Required-field check, credential fetch, then one POST.
async fn try_create(
    store: &dyn TokenStore,
    client: &GithubClient,
    token_id: &str,
    request: &IssueRequest,
) -> Result<CreatedIssue, IssueFilerError> {
    request.ensure_required()?;
    let token = store.resolve(token_id).await?;
    client.create_issue(request, &token).await
}

#[cfg(test)]
mod test {
    use std::future::Future;
    use std::pin::Pin;

    use mockito::{Server, ServerGuard};

    use super::*;
    use crate::errors::IssueFilerErrorKind;
    use crate::token_store::StaticTokenStore;

    /// Store whose exchange always refuses.
    struct RefusingStore;

    impl TokenStore for RefusingStore {
        fn resolve(
            &self,
            _token_id: &str,
        ) -> Pin<Box<dyn Future<Output = Result<String, IssueFilerError>> + Send + '_>> {
            Box::pin(async {
                Err(IssueFilerError::new(IssueFilerErrorKind::Credential)
                    .with_message("Failed to access auth token"))
            })
        }
    }

    /// A request with every field populated.
    fn request() -> IssueRequest {
        IssueRequest {
            requestor: "Alice, Bob , Carol".to_string(),
            title: "New laptop".to_string(),
            description: "Current one is dying".to_string(),
            urgency: "ASAP".to_string(),
        }
    }

    /// Client pointed at the mock server.
    fn client(server: &ServerGuard) -> GithubClient {
        GithubClient::new("acme".to_string(), "helpdesk".to_string()).with_api_root(&server.url())
    }

    #[tokio::test]
    async fn created_issue_maps_to_the_output_contract() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/repos/acme/helpdesk/issues")
            .with_status(201)
            .with_body(
                r#"{"number": 42, "html_url": "https://github.com/acme/helpdesk/issues/42"}"#,
            )
            .create_async()
            .await;

        let store = StaticTokenStore::new("gh-bearer".to_string());
        let output = run_issue_step(&store, &client(&server), "", &request()).await;

        assert_eq!(
            output,
            StepOutput::Created {
                issue_number: 42,
                issue_link: "https://github.com/acme/helpdesk/issues/42".to_string(),
            }
        );
        assert_eq!(
            serde_json::to_string(&output).unwrap(),
            r#"{"GitHubIssueNumber":42,"GitHubIssueLink":"https://github.com/acme/helpdesk/issues/42"}"#
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn unprocessable_entity_maps_to_the_error_string() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/repos/acme/helpdesk/issues")
            .with_status(422)
            .with_body(r#"{"message": "Validation Failed"}"#)
            .create_async()
            .await;

        let store = StaticTokenStore::new("gh-bearer".to_string());
        let output = run_issue_step(&store, &client(&server), "", &request()).await;

        assert_eq!(
            output,
            StepOutput::Failed {
                error: "An error was encountered during issue creation: 422: Unprocessable Entity"
                    .to_string(),
            }
        );
        assert_eq!(
            serde_json::to_string(&output).unwrap(),
            r#"{"error":"An error was encountered during issue creation: 422: Unprocessable Entity"}"#
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn credential_failure_skips_the_issue_post() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/repos/acme/helpdesk/issues")
            .expect(0)
            .create_async()
            .await;

        let output = run_issue_step(&RefusingStore, &client(&server), "tok-123", &request()).await;

        assert_eq!(
            output,
            StepOutput::Failed {
                error:
                    "An error was encountered during issue creation: Failed to access auth token"
                        .to_string(),
            }
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn missing_title_fails_before_any_network_call() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/repos/acme/helpdesk/issues")
            .expect(0)
            .create_async()
            .await;

        let store = StaticTokenStore::new("gh-bearer".to_string());
        let incomplete = IssueRequest {
            title: String::new(),
            ..request()
        };
        let output = run_issue_step(&store, &client(&server), "", &incomplete).await;

        assert!(matches!(output, StepOutput::Failed { .. }));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn identical_invocations_file_two_issues() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/repos/acme/helpdesk/issues")
            .with_status(201)
            .with_body(
                r#"{"number": 7, "html_url": "https://github.com/acme/helpdesk/issues/7"}"#,
            )
            .expect(2)
            .create_async()
            .await;

        let store = StaticTokenStore::new("gh-bearer".to_string());
        let github = client(&server);
        let first = run_issue_step(&store, &github, "", &request()).await;
        let second = run_issue_step(&store, &github, "", &request()).await;

        assert!(matches!(first, StepOutput::Created { .. }));
        assert!(matches!(second, StepOutput::Created { .. }));
        mock.assert_async().await;
    }
}
