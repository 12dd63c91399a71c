//! Canonical UUID grammar.
//!
//! The blacklist format only admits the canonical lowercase-hyphenated
//! rendering of a UUID, per
//! <https://webbluetoothcg.github.io/web-bluetooth/#dfn-valid-uuid>.

/// Code-point positions that must hold a hyphen.
const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// Total length of a canonical UUID, in code points.
const CANONICAL_LEN: usize = 36;

/// Check whether `candidate` is a canonical lowercase-hyphenated UUID.
///
/// The grammar is deliberately stricter than general-purpose UUID parsers:
/// exactly 36 characters, hyphens at positions 8, 13, 18 and 23, and a
/// lowercase hex digit at every other position. Uppercase digits are
/// rejected; the input is never case-folded.
///
/// # Examples
///
/// ```
/// use gattlist_types::is_valid_uuid;
///
/// assert!(is_valid_uuid("00001812-0000-1000-8000-00805f9b34fb"));
/// assert!(!is_valid_uuid("00001812-0000-1000-8000-00805F9B34FB"));
/// ```
#[must_use]
pub fn is_valid_uuid(candidate: &str) -> bool {
    // Length is measured in code points, the same unit the scan below
    // iterates. A multi-byte character fails the character classes anyway.
    if candidate.chars().count() != CANONICAL_LEN {
        return false;
    }

    candidate.chars().enumerate().all(|(position, c)| {
        if HYPHEN_POSITIONS.contains(&position) {
            c == '-'
        } else {
            is_lower_hex(c)
        }
    })
}

/// Check if character is a lowercase hexadecimal digit.
fn is_lower_hex(c: char) -> bool {
    matches!(c, '0'..='9' | 'a'..='f')
}
