//! Mapping free-text queries to procedure codes.
//!
//! Classification is a fixed, ordered keyword table, not a learned model.
//! Table order is significant: the first matching entry wins when a query
//! could satisfy several keyword sets.

use isoproc_types::ProcedureCode;

/// Ordered (keyword alternatives, code) pairs. Earlier entries take
/// precedence.
const KEYWORD_RULES: &[(&[&str], &str)] = &[
    (&["invalid", "not supported"], "MEXIP01"),
    (&["not detected", "missing"], "MEXIP02"),
    (&["power problem", "power issue"], "MEXIP03"),
];

/// Resolves `query` to a procedure code.
///
/// Keyword rules are evaluated first, in table order, as case-insensitive
/// substring matches. When none match, a query that is itself a well-formed
/// procedure code (letters then digits) is returned upper-cased. Anything
/// else resolves to `None`.
pub fn classify(query: &str) -> Option<ProcedureCode> {
    let lowered = query.to_lowercase();

    for (keywords, code) in KEYWORD_RULES {
        if keywords.iter().any(|k| lowered.contains(k)) {
            tracing::debug!(code = %code, "query matched keyword rule");
            return ProcedureCode::new(code).ok();
        }
    }

    ProcedureCode::new(query).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classified(query: &str) -> Option<String> {
        classify(query).map(|c| c.as_str().to_string())
    }

    #[test]
    fn test_keyword_rules_resolve_codes() {
        assert_eq!(classified("the module is invalid"), Some("MEXIP01".into()));
        assert_eq!(
            classified("configuration not supported here"),
            Some("MEXIP01".into())
        );
        assert_eq!(classified("module not detected"), Some("MEXIP02".into()));
        assert_eq!(classified("the ESM is missing"), Some("MEXIP02".into()));
        assert_eq!(classified("we have a power problem"), Some("MEXIP03".into()));
        assert_eq!(classified("power issue on PSU 2"), Some("MEXIP03".into()));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(classified("Module NOT Detected"), Some("MEXIP02".into()));
    }

    #[test]
    fn test_table_order_breaks_ties() {
        // Matches both the MEXIP01 and MEXIP02 keyword sets; the earlier
        // table entry wins.
        assert_eq!(
            classified("invalid module is missing"),
            Some("MEXIP01".into())
        );
    }

    #[test]
    fn test_literal_code_fallback() {
        assert_eq!(classified("MEXIP03"), Some("MEXIP03".into()));
        assert_eq!(classified("mexip03"), Some("MEXIP03".into()));
        assert_eq!(classified("  mexip11  "), Some("MEXIP11".into()));
    }

    #[test]
    fn test_unrelated_text_is_none() {
        assert_eq!(classified("unrelated text"), None);
        assert_eq!(classified(""), None);
        assert_eq!(classified("MEXIP03 please"), None);
    }
}
