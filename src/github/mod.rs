//! GitHub API module.
pub(crate) mod client;
pub(crate) mod config;
pub(crate) mod issue;

/// GitHub API root
const GITHUB_API_ROOT: &str = "https://api.github.com";

/// GitHub API Accept header value
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// GitHub API Header
const GITHUB_API_HEADER: &str = "X-GitHub-Api-Version";

/// GitHub API Version
const GITHUB_API_VERSION: &str = "2022-11-28";
