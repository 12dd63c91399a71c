//! Validation failure reporting.
//!
//! Downstream tooling matches on the rendered message text, so the
//! `Display` templates here are load-bearing and must not change.

use thiserror::Error;

/// Why a blacklist line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlacklistErrorKind {
    /// The first token on the line is not a canonical UUID.
    #[error("'{token}' is not a valid UUID")]
    InvalidUuid { token: String },

    /// The second token is not a recognized restriction keyword.
    ///
    /// The message lists `exclude` even though the validator rejects it;
    /// this is the historical wording consumers grep for.
    #[error("'{keyword}' should be 'exclude', 'exclude-reads', or 'exclude-writes'")]
    UnknownRestriction { keyword: String },

    /// The line splits into more than two space-delimited tokens.
    #[error("Too many tokens")]
    TooManyTokens,
}

/// A blacklist document failed validation.
///
/// Carries the 1-based number of the first offending line and the
/// structured reason. `Display` reproduces the legacy message format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct BlacklistError {
    line: usize,
    kind: BlacklistErrorKind,
}

impl BlacklistError {
    pub(crate) fn new(line: usize, kind: BlacklistErrorKind) -> Self {
        Self { line, kind }
    }

    /// 1-based number of the line that failed.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Structured reason the line was rejected.
    #[must_use]
    pub const fn kind(&self) -> &BlacklistErrorKind {
        &self.kind
    }
}
