//! Access-restriction keywords.

use serde::{Deserialize, Serialize};

/// Access restriction attached to a blacklisted UUID.
///
/// A bare entry blocks the attribute entirely; an entry qualified with one
/// of these keywords only blocks the named operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Restriction {
    ExcludeReads,
    ExcludeWrites,
}

impl Restriction {
    /// Parse a restriction keyword.
    ///
    /// Matching is byte-exact: no trimming, no case folding. Anything other
    /// than the two canonical keywords (including the bare literal
    /// `exclude`) is unrecognized.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "exclude-reads" => Some(Restriction::ExcludeReads),
            "exclude-writes" => Some(Restriction::ExcludeWrites),
            _ => None,
        }
    }

    /// The canonical keyword literal.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Restriction::ExcludeReads => "exclude-reads",
            Restriction::ExcludeWrites => "exclude-writes",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Restriction;

    #[test]
    fn parse_accepts_canonical_keywords() {
        assert_eq!(
            Restriction::parse("exclude-reads"),
            Some(Restriction::ExcludeReads)
        );
        assert_eq!(
            Restriction::parse("exclude-writes"),
            Some(Restriction::ExcludeWrites)
        );
    }

    #[test]
    fn parse_rejects_bare_exclude() {
        assert_eq!(Restriction::parse("exclude"), None);
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(Restriction::parse("Exclude-Reads"), None);
        assert_eq!(Restriction::parse("EXCLUDE-WRITES"), None);
    }

    #[test]
    fn parse_does_not_trim() {
        assert_eq!(Restriction::parse(" exclude-reads"), None);
        assert_eq!(Restriction::parse("exclude-writes "), None);
    }

    #[test]
    fn parse_rejects_empty_string() {
        assert_eq!(Restriction::parse(""), None);
    }

    #[test]
    fn as_str_round_trips_through_parse() {
        for restriction in [Restriction::ExcludeReads, Restriction::ExcludeWrites] {
            assert_eq!(Restriction::parse(restriction.as_str()), Some(restriction));
        }
    }

    #[test]
    fn serde_uses_keyword_literals() {
        let json = serde_json::to_string(&Restriction::ExcludeReads).unwrap();
        assert_eq!(json, "\"exclude-reads\"");

        let parsed: Restriction = serde_json::from_str("\"exclude-writes\"").unwrap();
        assert_eq!(parsed, Restriction::ExcludeWrites);
    }
}
