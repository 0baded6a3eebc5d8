//! Search orchestration: query → classification → parsed procedure → answer.

use api_shared::schema::{ProcedureDetail, SearchRes};
use isoproc_types::ProcedureCode;

use crate::{classify, derive_title, locate_block, normalize, parse_steps, segment, suggest};

/// Returned when the query resolves but nothing useful can be recommended.
const FALLBACK_SUGGESTION: &str = "Could not find a relevant procedure for the given query.";

/// Pure search operations over a single document - no API concerns.
///
/// Holds no state: every call re-parses from the raw text, so concurrent
/// requests share nothing.
#[derive(Default, Clone)]
pub struct SearchService;

impl SearchService {
    /// Creates a new instance of SearchService.
    pub fn new() -> Self {
        Self
    }

    /// Answers a query against the full text of a procedure document.
    ///
    /// Every "not found" outcome is a normal response carried in the
    /// `message`/`suggested_action` fields; this method cannot fail.
    pub fn search(&self, text: &str, query: Option<&str>) -> SearchRes {
        let query = query.unwrap_or("").trim();

        if query.is_empty() {
            return SearchRes {
                original_query: Some(query.to_string()),
                message:
                    "Please provide a procedure code or a description of the error to search."
                        .to_string(),
                found_procedure_code: None,
                procedure_details: None,
                suggested_action: Some("No query provided.".to_string()),
            };
        }

        let Some(code) = classify(query) else {
            tracing::debug!(query, "query did not resolve to a procedure code");
            return Self::not_inferred(query);
        };

        let normalized = normalize(text);
        let Some(block) = locate_block(&normalized, &code) else {
            tracing::debug!(code = %code, "no procedure block located in document");
            return Self::not_found(query, &code);
        };

        let details = Self::parse_block(&block, &code);
        tracing::debug!(code = %code, steps = details.steps.len(), "procedure parsed");
        let suggested = suggest(query, &details);

        SearchRes {
            original_query: Some(query.to_string()),
            message: format!("Procedure '{}' found and parsed.", code),
            found_procedure_code: Some(code.as_str().to_string()),
            procedure_details: Some(details),
            suggested_action: Some(suggested),
        }
    }

    /// Parses a located raw block into a structured procedure.
    pub fn parse_block(block: &str, code: &ProcedureCode) -> ProcedureDetail {
        let segmented = segment(block, code);
        let title = derive_title(&segmented.description, code);
        let steps = parse_steps(&segmented.steps_raw);

        ProcedureDetail {
            code: code.as_str().to_string(),
            title: Some(title),
            description: (!segmented.description.is_empty()).then(|| segmented.description),
            steps,
        }
    }

    fn not_inferred(query: &str) -> SearchRes {
        SearchRes {
            original_query: Some(query.to_string()),
            message: format!(
                "Procedure for query '{}' could not be inferred. Please try a specific procedure code (e.g., MEXIP01) or a more detailed error description.",
                query
            ),
            found_procedure_code: None,
            procedure_details: None,
            suggested_action: Some(FALLBACK_SUGGESTION.to_string()),
        }
    }

    fn not_found(query: &str, code: &ProcedureCode) -> SearchRes {
        SearchRes {
            original_query: Some(query.to_string()),
            message: format!("Procedure '{}' was not found in the supplied document.", code),
            found_procedure_code: None,
            procedure_details: None,
            suggested_action: Some(FALLBACK_SUGGESTION.to_string()),
        }
    }
}
