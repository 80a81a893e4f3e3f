//! Command line options for the issue-filer tool
use crate::config::IssueFilerConfig;
use crate::errors::IssueFilerError;
use crate::github::config::GithubConfig;
use crate::github::issue::IssueRequest;
use crate::step::run_issue_step;
use crate::token_store::get_store;
use crate::utils::init_logger;
use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

/// issue-filer - File GitHub issues from workflow requests
#[derive(Parser, Deserialize, Default, Clone, Debug)]
pub struct IssueFilerCli {
    /// Comma-separated requestor names
    #[arg(short, long)]
    pub requestor: Option<String>,

    /// Request title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Request description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Urgency level
    #[arg(short, long)]
    pub urgency: Option<String>,

    /// Opaque token id resolved through the token exchange service
    #[arg(long)]
    pub token_id: Option<String>,

    /// Repository owner (overrides the configured value)
    #[arg(long)]
    pub owner: Option<String>,

    /// Repository name (overrides the configured value)
    #[arg(long)]
    pub repo: Option<String>,

    /// Custom configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show the current config path
    #[arg(long)]
    pub show_config_path: bool,

    /// Verbose mode (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl IssueFilerCli {
    /// Assemble the issue request from the parsed arguments. Presence of the
    /// required fields is checked by the step, not here.
    fn issue_request(&self) -> IssueRequest {
        IssueRequest {
            requestor: self.requestor.clone().unwrap_or_default(),
            title: self.title.clone().unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
            urgency: self.urgency.clone().unwrap_or_default(),
        }
    }
}

/// Run the issue-filer tool with the provided command line options.
///
/// Prints one JSON object on stdout: the created issue's number and link, or
/// an error field when the step failed.
/// # Errors
/// Error if the configuration can't be loaded or an interactive prompt fails;
/// step-level failures are reported in the printed output instead.
pub async fn issue_filer_main() -> Result<(), IssueFilerError> {
    let args = IssueFilerCli::parse();
    init_logger(args.verbose);
    let mut config = IssueFilerConfig::try_new(args)?;
    if config.cli_args.show_config_path {
        println!("{}", config.config_path.display());
        return Ok(());
    }
    let client = GithubConfig::get_client(&mut config)?;
    let store = get_store(&mut config)?;
    let token_id = config.cli_args.token_id.clone().unwrap_or_default();
    let request = config.cli_args.issue_request();
    let output = run_issue_step(store.as_ref(), &client, &token_id, &request).await;
    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}
