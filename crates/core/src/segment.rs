//! Splitting a located block into description and raw steps.
//!
//! The usual block shape is the code on its own line, free-text description,
//! a line consisting solely of the word `Procedure`, then the numbered steps.
//! Blocks missing the `Procedure` heading fall back to a positional split.

use isoproc_types::ProcedureCode;

/// Result of segmenting a procedure block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmented {
    /// Free text between the code's line and the `Procedure` heading.
    /// May be empty.
    pub description: String,
    /// The raw steps region, starting at the first step-marker line.
    /// May be empty when the block holds no numbered steps.
    pub steps_raw: String,
}

/// Splits `block` into description and raw steps text.
///
/// When the block opens with the code on its own line and contains a line
/// consisting solely of `Procedure`, the description is everything between
/// the two, and the steps region is everything after the heading, advanced to
/// the first line that looks like a step start (digits then a period) so any
/// stray heading remnants are discarded.
///
/// Without the heading the split is positional: description is the second
/// physical line (the first being the code itself) and the steps region runs
/// from the third line onward. Blocks of fewer than two lines yield both
/// parts empty.
pub fn segment(block: &str, code: &ProcedureCode) -> Segmented {
    let lines: Vec<&str> = block.lines().collect();

    if lines.first().map(|l| l.trim()) == Some(code.as_str()) {
        if let Some(heading) = lines
            .iter()
            .position(|l| l.trim() == "Procedure")
            .filter(|&p| p > 0)
        {
            let description = lines[1..heading].join("\n").trim().to_string();
            let after = &lines[heading + 1..];
            let steps_raw = match after.iter().position(|l| is_step_start(l)) {
                Some(first_step) => after[first_step..].join("\n"),
                None => String::new(),
            };
            return Segmented {
                description,
                steps_raw,
            };
        }
    }

    if lines.len() < 2 {
        return Segmented {
            description: String::new(),
            steps_raw: String::new(),
        };
    }

    Segmented {
        description: lines[1].trim().to_string(),
        steps_raw: lines.get(2..).map(|ls| ls.join("\n")).unwrap_or_default(),
    }
}

/// Derives a display title: the first line of the description, or a
/// synthesized default when the description is empty.
pub fn derive_title(description: &str, code: &ProcedureCode) -> String {
    match description.lines().next().map(str::trim) {
        Some(first) if !first.is_empty() => first.to_string(),
        _ => format!("Isolation Procedure {}", code),
    }
}

/// True when a line begins (after optional whitespace) with one or more
/// digits followed by a period.
pub(crate) fn is_step_start(line: &str) -> bool {
    let s = line.trim_start();
    let digits = s.chars().take_while(|c| c.is_ascii_digit()).count();
    digits > 0 && s[digits..].starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> ProcedureCode {
        ProcedureCode::new(s).unwrap()
    }

    #[test]
    fn test_segment_with_procedure_heading() {
        let block = "MEXIP01\nI/O Module Issues\nApplies to all models.\nProcedure\n1. Check the module.\n2. Replace it.";
        let seg = segment(block, &code("MEXIP01"));
        assert_eq!(seg.description, "I/O Module Issues\nApplies to all models.");
        assert_eq!(seg.steps_raw, "1. Check the module.\n2. Replace it.");
    }

    #[test]
    fn test_segment_skips_remnants_before_first_step() {
        let block = "MEXIP01\nDescription\nProcedure\n(continued)\n1. First step.";
        let seg = segment(block, &code("MEXIP01"));
        assert_eq!(seg.steps_raw, "1. First step.");
    }

    #[test]
    fn test_segment_heading_but_no_steps() {
        let block = "MEXIP01\nDescription\nProcedure\nnothing numbered here";
        let seg = segment(block, &code("MEXIP01"));
        assert_eq!(seg.description, "Description");
        assert_eq!(seg.steps_raw, "");
    }

    #[test]
    fn test_segment_fallback_without_heading() {
        let block = "MEXIP02\nEnclosure Issues\n1. Check the enclosure.\n2. Done.";
        let seg = segment(block, &code("MEXIP02"));
        assert_eq!(seg.description, "Enclosure Issues");
        assert_eq!(seg.steps_raw, "1. Check the enclosure.\n2. Done.");
    }

    #[test]
    fn test_segment_tiny_block() {
        let seg = segment("MEXIP03", &code("MEXIP03"));
        assert_eq!(seg.description, "");
        assert_eq!(seg.steps_raw, "");
    }

    #[test]
    fn test_segment_two_line_block() {
        let seg = segment("MEXIP03\nPower Issues", &code("MEXIP03"));
        assert_eq!(seg.description, "Power Issues");
        assert_eq!(seg.steps_raw, "");
    }

    #[test]
    fn test_title_from_description_first_line() {
        let title = derive_title("I/O Module Issues\nmore text", &code("MEXIP01"));
        assert_eq!(title, "I/O Module Issues");
    }

    #[test]
    fn test_title_synthesized_when_description_empty() {
        let title = derive_title("", &code("MEXIP01"));
        assert_eq!(title, "Isolation Procedure MEXIP01");
    }

    #[test]
    fn test_step_start_detection() {
        assert!(is_step_start("1. Check"));
        assert!(is_step_start("  12. Check"));
        assert!(!is_step_start("Procedure"));
        assert!(!is_step_start("1 Check"));
        assert!(!is_step_start(".5 Check"));
    }
}
