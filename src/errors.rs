//! Error handling for the issue-filer crate.
use std::{error::Error as StdError, fmt};

/// Error type for the issue-filer crate.
#[derive(Debug)]
pub struct IssueFilerError {
    /// Inner error.
    inner: Box<Inner>,
}

impl IssueFilerError {
    /// Create a new error.
    pub(crate) fn new(kind: IssueFilerErrorKind) -> Self {
        Self {
            inner: Box::new(Inner {
                kind,
                message: None,
                source: None,
            }),
        }
    }

    /// Create a new error with a message and an underlying source.
    pub(crate) fn new_with_source<E>(kind: IssueFilerErrorKind, message: &str, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self {
            inner: Box::new(Inner {
                kind,
                message: Some(message.to_string()),
                source: Some(source.into()),
            }),
        }
    }

    /// Attach a message to the error.
    pub(crate) fn with_message(mut self, message: &str) -> Self {
        self.inner.message = Some(message.to_string());
        self
    }

    /// Create an error for a non-201 response status.
    pub(crate) fn from_status(status: reqwest::StatusCode) -> Self {
        let message = match status.canonical_reason() {
            Some(reason) => format!("{}: {}", status.as_u16(), reason),
            None => status.as_u16().to_string(),
        };
        Self::new(IssueFilerErrorKind::Http).with_message(&message)
    }

    /// Error kind accessor.
    pub(crate) fn kind(&self) -> &IssueFilerErrorKind {
        &self.inner.kind
    }
}

/// Type alias for a boxed error.
pub(crate) type BoxError = Box<dyn StdError + Send + Sync>;

/// Inner error type for the issue-filer crate.
#[derive(Debug)]
struct Inner {
    /// Error kind.
    kind: IssueFilerErrorKind,

    /// Human-readable message, used verbatim in the invocation output.
    message: Option<String>,

    /// Source error.
    source: Option<BoxError>,
}

/// Failure categories for the single issue-creation operation.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum IssueFilerErrorKind {
    /// Error related to the configuration file.
    Config,

    /// Token exchange refused or returned no token.
    Credential,

    /// Non-201 response from the issues endpoint.
    Http,

    /// Missing required request field.
    Request,

    /// Transport failure in the reqwest crate.
    Network,

    /// Malformed JSON in a response body.
    Parse,

    /// Error related to terminal input.
    Input,
}

impl fmt::Display for IssueFilerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.inner.message, &self.inner.source) {
            (Some(message), _) => write!(f, "{message}"),
            (None, Some(source)) => write!(f, "{source}"),
            (None, None) => write!(f, "{:?}", self.inner.kind),
        }
    }
}

impl StdError for IssueFilerError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source.as_ref().map(|e| &**e as _)
    }
}

impl From<reqwest::Error> for IssueFilerError {
    fn from(e: reqwest::Error) -> Self {
        Self {
            inner: Box::new(Inner {
                kind: IssueFilerErrorKind::Network,
                message: None,
                source: Some(Box::new(e)),
            }),
        }
    }
}

impl From<serde_json::Error> for IssueFilerError {
    fn from(e: serde_json::Error) -> Self {
        Self {
            inner: Box::new(Inner {
                kind: IssueFilerErrorKind::Parse,
                message: None,
                source: Some(Box::new(e)),
            }),
        }
    }
}

impl From<toml::de::Error> for IssueFilerError {
    fn from(e: toml::de::Error) -> Self {
        Self {
            inner: Box::new(Inner {
                kind: IssueFilerErrorKind::Config,
                message: None,
                source: Some(Box::new(e)),
            }),
        }
    }
}

impl From<std::io::Error> for IssueFilerError {
    fn from(e: std::io::Error) -> Self {
        Self {
            inner: Box::new(Inner {
                kind: IssueFilerErrorKind::Input,
                message: None,
                source: Some(Box::new(e)),
            }),
        }
    }
}

impl From<&str> for IssueFilerError {
    fn from(message: &str) -> Self {
        Self::new(IssueFilerErrorKind::Config).with_message(message)
    }
}

impl From<String> for IssueFilerError {
    fn from(message: String) -> Self {
        Self::new(IssueFilerErrorKind::Config).with_message(&message)
    }
}
