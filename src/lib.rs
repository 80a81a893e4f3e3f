//! # issue-filer
//!
//! File GitHub issues from workflow requests
//!
//! ## Usage
//!
//! ```txt
//! Usage: issue-filer [OPTIONS]
//!
//! Options:
//!  -r, --requestor <REQUESTOR>      Comma-separated requestor names
//!  -t, --title <TITLE>              Request title
//!  -d, --description <DESCRIPTION>  Request description
//!  -u, --urgency <URGENCY>          Urgency level
//!      --token-id <TOKEN_ID>        Opaque token id resolved through the token exchange service
//!      --owner <OWNER>              Repository owner (overrides the configured value)
//!      --repo <REPO>                Repository name (overrides the configured value)
//!  -c, --config <CONFIG>            Custom configuration file path
//!      --show-config-path           Show the current config path
//!  -v, --verbose...                 Verbose mode (-v, -vv, -vvv)
//!  -h, --help                       Print help
//! ```
//!
//! On success one JSON object is printed on stdout:
//! `{"GitHubIssueNumber": 42, "GitHubIssueLink": "https://github.com/..."}`.
//! When the step fails the object carries a single error field instead:
//! `{"error": "An error was encountered during issue creation: ..."}`.

#![warn(clippy::all, rust_2018_idioms)]
#![deny(
    missing_docs,
    clippy::all,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![warn(clippy::multiple_crate_versions)]

pub(crate) mod cli;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod macros;
pub(crate) mod step;
pub(crate) mod token_store;
pub(crate) mod utils;
pub(crate) use macros::config_password_wrap;
pub(crate) use macros::config_value_wrap;

mod github;

pub use cli::{issue_filer_main, IssueFilerCli};
pub use config::IssueFilerConfig;
pub use errors::IssueFilerError;
pub use github::client::GithubClient;
pub use github::config::GithubConfig;
pub use github::issue::{CreatedIssue, IssueRequest};
pub use step::{run_issue_step, StepOutput};
pub use token_store::{ExchangeTokenStore, StaticTokenStore, TokenStore, TokenStoreConfig};
