//! Blacklist document validation.
//!
//! Validates the textual blacklist format consumed by the Web Bluetooth
//! access-control machinery: one UUID per line with an optional restriction
//! keyword, `#`-prefixed comments, lines separated by `\n`. Validation is
//! pure and synchronous; reading the document from disk and acting on its
//! entries are the caller's concern.

mod error;
mod validate;

pub use error::{BlacklistError, BlacklistErrorKind};
pub use validate::validate_blacklist;
