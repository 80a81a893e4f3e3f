//! Github configuration
use serde::{Deserialize, Serialize};

use super::client::GithubClient;
use crate::{config::IssueFilerConfig, config_value_wrap, errors::IssueFilerError};

/// Github configuration
#[derive(Deserialize, Serialize, Default, Debug, Clone)]
pub struct GithubConfig {
    /// Repository owner
    pub owner: Option<String>,

    /// Repository name
    pub repo: Option<String>,

    /// Github token, used when no token exchange service is involved
    pub token: Option<String>,
}

impl GithubConfig {
    /// Build the issues client for the target repository. CLI overrides win;
    /// values missing from the config file are prompted for and persisted.
    /// # Errors
    /// Error if a prompt or a config write fails
    pub fn get_client(config: &mut IssueFilerConfig) -> Result<GithubClient, IssueFilerError> {
        let owner = match config.cli_args.owner.clone() {
            Some(owner) => owner,
            None => config_value_wrap!(config, github, GithubConfig, owner, "the repository owner"),
        };
        let repo = match config.cli_args.repo.clone() {
            Some(repo) => repo,
            None => config_value_wrap!(config, github, GithubConfig, repo, "the repository name"),
        };
        Ok(GithubClient::new(owner, repo))
    }
}
