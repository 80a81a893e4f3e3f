//! Issue request model and wire structs for the issues endpoint.
use serde::{Deserialize, Serialize};

use crate::errors::{IssueFilerError, IssueFilerErrorKind};

/// Fields supplied by the invoking platform for one issue.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct IssueRequest {
    /// Comma-separated requestor names.
    pub requestor: String,

    /// Issue title.
    pub title: String,

    /// Free-text request description.
    pub description: String,

    /// Urgency label.
    pub urgency: String,
}

impl IssueRequest {
    /// Split the requestor field on commas and trim each name.
    pub(crate) fn requestor_list(&self) -> Vec<String> {
        self.requestor
            .split(',')
            .map(|name| name.trim().to_string())
            .collect()
    }

    /// Render the free-text issue body embedding the description,
    /// requestor list, and urgency.
    pub(crate) fn compose_body(&self) -> String {
        format!(
            "Description: {}\n\nRequestor: {}\nUrgency: {}",
            self.description,
            self.requestor_list().join(", "),
            self.urgency
        )
    }

    /// Check required-field presence. Title and urgency must be non-empty;
    /// requestor and description may be empty strings.
    pub(crate) fn ensure_required(&self) -> Result<(), IssueFilerError> {
        if self.title.is_empty() {
            return Err(IssueFilerError::new(IssueFilerErrorKind::Request)
                .with_message("missing required field: title"));
        }
        if self.urgency.is_empty() {
            return Err(IssueFilerError::new(IssueFilerErrorKind::Request)
                .with_message("missing required field: urgency"));
        }
        Ok(())
    }
}

/// Payload POSTed to the issues endpoint.
#[derive(Serialize, Debug, Clone)]
pub(crate) struct NewIssue {
    /// Issue title.
    pub(crate) title: String,

    /// Composed issue body.
    pub(crate) body: String,
}

impl From<&IssueRequest> for NewIssue {
    fn from(request: &IssueRequest) -> Self {
        NewIssue {
            title: request.title.clone(),
            body: request.compose_body(),
        }
    }
}

/// Subset of the issues endpoint response read back on creation.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CreatedIssue {
    /// Issue number.
    pub number: u64,

    /// Issue link.
    pub html_url: String,
}
