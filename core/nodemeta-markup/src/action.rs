use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error for action names that are not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    #[error("unknown markup action: {0:?} (expected bold, h1, h2 or ul)")]
    UnknownAction(String),
}

/// A formatting toolbar action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkupAction {
    /// `**text**`
    #[serde(rename = "bold")]
    Bold,
    /// `# line`
    #[serde(rename = "h1")]
    Heading1,
    /// `## line`
    #[serde(rename = "h2")]
    Heading2,
    /// `- line`
    #[serde(rename = "ul")]
    UnorderedListItem,
}

impl MarkupAction {
    pub const ALL: [MarkupAction; 4] = [
        MarkupAction::Bold,
        MarkupAction::Heading1,
        MarkupAction::Heading2,
        MarkupAction::UnorderedListItem,
    ];

    /// Toolbar name of the action.
    pub fn as_str(self) -> &'static str {
        match self {
            MarkupAction::Bold => "bold",
            MarkupAction::Heading1 => "h1",
            MarkupAction::Heading2 => "h2",
            MarkupAction::UnorderedListItem => "ul",
        }
    }

    /// Prefix added to each selected line, for line-based actions.
    pub fn line_prefix(self) -> Option<&'static str> {
        match self {
            MarkupAction::Bold => None,
            MarkupAction::Heading1 => Some("# "),
            MarkupAction::Heading2 => Some("## "),
            MarkupAction::UnorderedListItem => Some("- "),
        }
    }

    /// A line starting with this marker is left alone.
    ///
    /// Any heading level counts as already formatted for both heading actions.
    pub(crate) fn skip_marker(self) -> Option<&'static str> {
        match self {
            MarkupAction::Bold => None,
            MarkupAction::Heading1 | MarkupAction::Heading2 => Some("#"),
            MarkupAction::UnorderedListItem => Some("- "),
        }
    }
}

impl fmt::Display for MarkupAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarkupAction {
    type Err = MarkupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MarkupAction::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| MarkupError::UnknownAction(s.to_string()))
    }
}
