//! Rule-based next-action suggestions.
//!
//! A small fixed table keyed by procedure code, query keywords, instruction
//! keywords, and optionally a specific step number. Steps are walked in
//! document order and the table in declaration order; the first rule that
//! matches renders the recommendation. This is a keyword heuristic, not
//! natural-language understanding.

use api_shared::schema::{ProcedureDetail, StepDetail};

/// Returned when the procedure has no steps to recommend.
const NO_SUGGESTION: &str = "No specific action could be suggested from the query.";

/// One entry in the suggestion rule table.
struct SuggestionRule {
    /// Procedure this rule applies to.
    code: &'static str,
    /// Any of these must occur in the lower-cased query.
    query_keywords: &'static [&'static str],
    /// This phrase must occur in the lower-cased instruction.
    instruction_keyword: &'static str,
    /// When set, the rule only fires on this exact step number.
    step_number: Option<&'static str>,
    /// Renders the recommendation for the matched step.
    render: fn(&StepDetail) -> String,
}

const RULES: &[SuggestionRule] = &[
    // Problems with I/O module validity
    SuggestionRule {
        code: "MEXIP01",
        query_keywords: &["invalid", "not supported"],
        instruction_keyword: "location code",
        step_number: Some("1"),
        render: |step| match &step.no_action {
            Some(no) => format!(
                "Based on the issue, start with step {}: '{}'. If a location code is not available, the recommended action is: '{}'.",
                step.step_number, step.instruction, no
            ),
            None => format!(
                "Based on the issue, start with step {}: '{}'.",
                step.step_number, step.instruction
            ),
        },
    },
    // Missing or undetected I/O modules
    SuggestionRule {
        code: "MEXIP02",
        query_keywords: &["not detected", "missing"],
        instruction_keyword: "required i/o module or enclosure services manager",
        step_number: Some("1"),
        render: |step| match &step.no_action {
            Some(no) => format!(
                "Based on the issue, start with step {}: '{}'. If the module is not detected, follow the instructions for the 'No' case: '{}'.",
                step.step_number, step.instruction, no
            ),
            None => format!(
                "Based on the issue, start with step {}: '{}'.",
                step.step_number, step.instruction
            ),
        },
    },
    SuggestionRule {
        code: "MEXIP02",
        query_keywords: &["not detected", "missing"],
        instruction_keyword: "present and properly seated",
        step_number: None,
        render: |step| match &step.no_action {
            Some(no) => format!(
                "Based on the issue, check step {}: '{}'. If the module is not present or properly seated, the recommended action is: '{}'.",
                step.step_number, step.instruction, no
            ),
            None => format!(
                "Based on the issue, check step {}: '{}'.",
                step.step_number, step.instruction
            ),
        },
    },
    // Power-related issues
    SuggestionRule {
        code: "MEXIP03",
        query_keywords: &["power problem"],
        instruction_keyword: "verify the following led states",
        step_number: Some("4"),
        render: |step| format!(
            "Based on the issue, check step {}: '{}'. You need to verify the LED states on the power supplies.",
            step.step_number, step.instruction
        ),
    },
];

/// Picks the most relevant step for `query` and renders a recommendation.
///
/// Falls back to recommending the first step verbatim when no rule matches,
/// and to a fixed no-action message when the procedure has no steps.
pub fn suggest(query: &str, procedure: &ProcedureDetail) -> String {
    let lower_query = query.to_lowercase();

    for step in &procedure.steps {
        let lower_instruction = step.instruction.to_lowercase();
        for rule in RULES {
            if rule.matches(&procedure.code, &lower_query, &lower_instruction, step) {
                return (rule.render)(step);
            }
        }
    }

    match procedure.steps.first() {
        Some(first) => format!(
            "Please review the full procedure starting with step 1: '{}'.",
            first.instruction
        ),
        None => NO_SUGGESTION.to_string(),
    }
}

impl SuggestionRule {
    fn matches(
        &self,
        code: &str,
        lower_query: &str,
        lower_instruction: &str,
        step: &StepDetail,
    ) -> bool {
        self.code == code
            && self
                .query_keywords
                .iter()
                .any(|k| lower_query.contains(k))
            && lower_instruction.contains(self.instruction_keyword)
            && self
                .step_number
                .map(|n| n == step.step_number)
                .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn procedure(code: &str, steps: Vec<StepDetail>) -> ProcedureDetail {
        ProcedureDetail {
            code: code.to_string(),
            title: None,
            description: None,
            steps,
        }
    }

    #[test]
    fn test_mexip01_invalid_module_recommends_no_action() {
        let mut step = StepDetail::new("1", "Is a location code shown with the error?");
        step.no_action = Some("Replace the I/O module.".to_string());
        let proc_ = procedure("MEXIP01", vec![step]);

        let s = suggest("module invalid", &proc_);
        assert!(s.contains("start with step 1"));
        assert!(s.contains("Replace the I/O module."));
    }

    #[test]
    fn test_mexip01_without_no_action_still_recommends_step() {
        let step = StepDetail::new("1", "Check the location code on the panel.");
        let proc_ = procedure("MEXIP01", vec![step]);

        let s = suggest("configuration not supported", &proc_);
        assert_eq!(
            s,
            "Based on the issue, start with step 1: 'Check the location code on the panel.'."
        );
    }

    #[test]
    fn test_mexip02_undetected_rule_recommends_no_case() {
        let mut step = StepDetail::new(
            "1",
            "Is the required I/O module or Enclosure Services Manager detected?",
        );
        step.no_action = Some("Check the cabling and power to the enclosure.".to_string());
        let proc_ = procedure("MEXIP02", vec![step]);

        let s = suggest("module not detected", &proc_);
        assert!(s.contains("start with step 1"));
        assert!(s.contains("follow the instructions for the 'No' case"));
        assert!(s.contains("Check the cabling and power to the enclosure."));
    }

    #[test]
    fn test_mexip02_undetected_rule_without_no_action() {
        let step = StepDetail::new(
            "1",
            "Verify the required I/O module or enclosure services manager is detected.",
        );
        let proc_ = procedure("MEXIP02", vec![step]);

        let s = suggest("the ESM is missing", &proc_);
        assert_eq!(
            s,
            "Based on the issue, start with step 1: 'Verify the required I/O module or enclosure services manager is detected.'."
        );
    }

    #[test]
    fn test_mexip02_undetected_rule_pinned_to_step_one() {
        let mut late = StepDetail::new(
            "2",
            "Is the required I/O module or enclosure services manager detected?",
        );
        late.no_action = Some("Replace it.".to_string());
        let proc_ = procedure("MEXIP02", vec![StepDetail::new("1", "Power on."), late]);

        // The rule only fires on step 1, so the generic fallback applies.
        let s = suggest("module not detected", &proc_);
        assert_eq!(
            s,
            "Please review the full procedure starting with step 1: 'Power on.'."
        );
    }

    #[test]
    fn test_mexip02_seated_rule_matches_any_step() {
        let first = StepDetail::new("1", "Power on the enclosure.");
        let mut third = StepDetail::new("3", "Verify the module is present and properly seated.");
        third.no_action = Some("Reseat the module.".to_string());
        let proc_ = procedure("MEXIP02", vec![first, third]);

        let s = suggest("module missing", &proc_);
        assert!(s.contains("check step 3"));
        assert!(s.contains("Reseat the module."));
    }

    #[test]
    fn test_mexip03_led_rule_requires_step_four() {
        let mut steps = Vec::new();
        steps.push(StepDetail::new("1", "Verify the following LED states early."));
        steps.push(StepDetail::new("4", "Verify the following LED states on both power supplies."));
        // Step 1 carries the keyword but the rule is pinned to step 4.
        let proc_ = procedure("MEXIP03", steps);

        let s = suggest("power problem reported", &proc_);
        assert!(s.contains("check step 4"));
        assert!(s.contains("LED states"));
    }

    #[test]
    fn test_generic_fallback_quotes_first_step() {
        let proc_ = procedure(
            "MEXIP01",
            vec![StepDetail::new("1", "Check the indicator panel.")],
        );
        let s = suggest("something unrelated", &proc_);
        assert_eq!(
            s,
            "Please review the full procedure starting with step 1: 'Check the indicator panel.'."
        );
    }

    #[test]
    fn test_no_steps_message() {
        let proc_ = procedure("MEXIP01", vec![]);
        assert_eq!(suggest("module invalid", &proc_), NO_SUGGESTION);
    }
}
