//! Availability query construction for the ISED lookup endpoint
//!
//! Builds the form payload for one (prefix, suffix length) combination.
//! Suffix characters are always wildcarded; only the prefix and the length
//! constraint vary between queries.

use serde::{Deserialize, Serialize};

/// Number of letters in the callsign suffix
///
/// The lookup service accepts two- or three-letter suffixes; the form value
/// doubles as the letter count in digest wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuffixLength {
    /// Two-letter suffix (e.g. "VE3AB")
    Two,
    /// Three-letter suffix (e.g. "VE3ABC")
    Three,
}

impl SuffixLength {
    /// Form value understood by the upstream endpoint ("2" or "3")
    pub fn as_form_value(self) -> &'static str {
        match self {
            SuffixLength::Two => "2",
            SuffixLength::Three => "3",
        }
    }
}

/// One availability query against the lookup service
///
/// Immutable; constructed fresh per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    /// Fixed leading letters identifying region and licence class (e.g. "VE3")
    pub prefix: String,

    /// Length constraint on the suffix
    pub suffix_length: SuffixLength,
}

impl AvailabilityQuery {
    /// Create a new query for the given prefix and suffix length
    pub fn new(prefix: impl Into<String>, suffix_length: SuffixLength) -> Self {
        Self {
            prefix: prefix.into(),
            suffix_length,
        }
    }

    /// Form payload for the upstream POST
    ///
    /// All three suffix character positions are fixed to the `"%"` wildcard;
    /// the endpoint filters on the length constraint alone.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("P_PREFIX_U", self.prefix.clone()),
            ("P_SUFFIX_CHAR_1_U", "%".to_string()),
            ("P_SUFFIX_CHAR_2_U", "%".to_string()),
            ("P_SUFFIX_CHAR_3_U", "%".to_string()),
            (
                "P_SUFFIX_TYPE_U",
                self.suffix_length.as_form_value().to_string(),
            ),
            ("Z_ACTION", "QUERY".to_string()),
            ("Z_CHK", "0".to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_length_form_values() {
        assert_eq!(SuffixLength::Two.as_form_value(), "2");
        assert_eq!(SuffixLength::Three.as_form_value(), "3");
    }

    #[test]
    fn test_form_fields_two_letter() {
        let query = AvailabilityQuery::new("VE3", SuffixLength::Two);
        let fields = query.form_fields();

        assert_eq!(fields[0], ("P_PREFIX_U", "VE3".to_string()));
        assert_eq!(fields[1], ("P_SUFFIX_CHAR_1_U", "%".to_string()));
        assert_eq!(fields[2], ("P_SUFFIX_CHAR_2_U", "%".to_string()));
        assert_eq!(fields[3], ("P_SUFFIX_CHAR_3_U", "%".to_string()));
        assert_eq!(fields[4], ("P_SUFFIX_TYPE_U", "2".to_string()));
        assert_eq!(fields[5], ("Z_ACTION", "QUERY".to_string()));
        assert_eq!(fields[6], ("Z_CHK", "0".to_string()));
    }

    #[test]
    fn test_form_fields_three_letter() {
        let query = AvailabilityQuery::new("VA3", SuffixLength::Three);
        let fields = query.form_fields();

        assert_eq!(fields[0], ("P_PREFIX_U", "VA3".to_string()));
        assert_eq!(fields[4], ("P_SUFFIX_TYPE_U", "3".to_string()));
    }

    #[test]
    fn test_query_serialization_round_trip() {
        let query = AvailabilityQuery::new("VE3", SuffixLength::Two);

        let json = serde_json::to_string(&query).expect("Serialization should succeed");
        let deserialized: AvailabilityQuery =
            serde_json::from_str(&json).expect("Deserialization should succeed");

        assert_eq!(query, deserialized);
    }
}
