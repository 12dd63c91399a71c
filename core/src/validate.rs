//! Line-by-line document validation.

use gattlist_types::{Restriction, is_valid_uuid};

use crate::error::{BlacklistError, BlacklistErrorKind};

/// Check whether `document` is a well-formed blacklist file, per
/// <https://webbluetoothcg.github.io/web-bluetooth/#dfn-parsing-the-blacklist>.
///
/// Lines are delimited by `\n` only; a carriage return is ordinary line
/// content. A line that is empty or whose first character is `#` is
/// skipped. Every other line must read `<uuid>` or `<uuid> <restriction>`,
/// fields separated by exactly one ASCII space. No other whitespace acts
/// as a separator.
///
/// Validation stops at the first failing line; the returned error carries
/// its 1-based number.
pub fn validate_blacklist(document: &str) -> Result<(), BlacklistError> {
    let mut line_count = 0;

    for (index, line) in document.split('\n').enumerate() {
        let line_number = index + 1;
        line_count = line_number;

        if line.is_empty() || line.starts_with('#') {
            // Comment or blank line.
            continue;
        }

        let tokens: Vec<&str> = line.split(' ').collect();
        match tokens.as_slice() {
            [] => unreachable!("splitting a non-empty line on ' ' always yields a token"),
            [uuid, rest @ ..] if rest.len() <= 1 => {
                if !is_valid_uuid(uuid) {
                    return Err(BlacklistError::new(
                        line_number,
                        BlacklistErrorKind::InvalidUuid {
                            token: (*uuid).to_string(),
                        },
                    ));
                }
                if let [keyword] = rest
                    && Restriction::parse(keyword).is_none()
                {
                    return Err(BlacklistError::new(
                        line_number,
                        BlacklistErrorKind::UnknownRestriction {
                            keyword: (*keyword).to_string(),
                        },
                    ));
                }
            }
            _ => {
                return Err(BlacklistError::new(
                    line_number,
                    BlacklistErrorKind::TooManyTokens,
                ));
            }
        }
    }

    tracing::debug!(lines = line_count, "blacklist document validated");
    Ok(())
}
