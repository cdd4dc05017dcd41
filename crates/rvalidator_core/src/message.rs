//! Display messages produced from rule failures.

use crate::FieldPath;
use serde::Serialize;

/// Where a display message came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageSource {
    /// Custom message declared in the record schema
    Custom,
    /// Engine's default text
    Default,
    /// The failing field is not described by the schema
    UnknownField,
}

/// A rule failure resolved to the text shown to users.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedMessage {
    pub path: FieldPath,
    pub rule: String,
    pub message: String,
    pub source: MessageSource,
}

impl ResolvedMessage {
    pub fn new(
        path: FieldPath,
        rule: impl Into<String>,
        message: impl Into<String>,
        source: MessageSource,
    ) -> Self {
        Self {
            path,
            rule: rule.into(),
            message: message.into(),
            source,
        }
    }

    /// Drops everything but the display text.
    pub fn into_message(self) -> String {
        self.message
    }
}
