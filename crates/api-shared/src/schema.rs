//! Request and response schema for the search endpoint.
//!
//! These types form the JSON contract of `/search-isolation-procedure`. They
//! carry no behaviour: the `isoproc-core` crate builds them and the server
//! binary serialises them. Optional fields are omitted from the JSON output
//! when absent so "not found" responses stay compact.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for the search endpoint.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SearchReq {
    /// Full text of the isolation procedure document
    pub text: String,
    /// A procedure code (e.g. MEXIP01) or a free-text error description
    #[serde(default)]
    pub query: Option<String>,
}

/// A single structured step within a parsed procedure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct StepDetail {
    /// The step numeral as it appeared in the source text
    pub step_number: String,
    /// Instruction text preceding any branch marker
    pub instruction: String,
    /// Action to take when the step's question is answered "Yes"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yes_action: Option<String>,
    /// Action to take when the step's question is answered "No"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_action: Option<String>,
    /// Step number referenced by a "continue with step N" phrase
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continue_to_step: Option<String>,
    /// Procedure code referenced by a "use procedure X" phrase
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continue_to_procedure: Option<String>,
    /// True when the step text contains "This ends the procedure."
    #[serde(default)]
    pub ends_procedure: bool,
}

impl StepDetail {
    /// Creates a step with the given number and instruction and no flow
    /// control. Useful as a starting point for the parser and in tests.
    pub fn new(step_number: impl Into<String>, instruction: impl Into<String>) -> Self {
        Self {
            step_number: step_number.into(),
            instruction: instruction.into(),
            yes_action: None,
            no_action: None,
            continue_to_step: None,
            continue_to_procedure: None,
            ends_procedure: false,
        }
    }
}

/// A fully parsed isolation procedure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct ProcedureDetail {
    /// Normalized procedure code
    pub code: String,
    /// First line of the description, or a synthesized default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Free text between the code heading and the "Procedure" section
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered steps in document order
    #[serde(default)]
    pub steps: Vec<StepDetail>,
}

/// Response body for the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct SearchRes {
    /// The query as received, echoed back
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_query: Option<String>,
    /// Human-readable outcome of the search
    pub message: String,
    /// The procedure code that was resolved from the query, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found_procedure_code: Option<String>,
    /// Full parsed procedure, present only when the block was found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procedure_details: Option<ProcedureDetail>,
    /// Rendered recommendation for the next action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_action: Option<String>,
}

/// Health check response shared by monitoring endpoints.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}
