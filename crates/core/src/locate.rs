//! Locating one procedure's text block within a full document.
//!
//! A block runs from the first occurrence of the requested code to the start
//! of the next procedure heading, detected by the lexical signature shared by
//! every procedure code (upper-case letters then digits at the start of a
//! line). Two heuristics are deliberately preserved from the source material:
//! the first occurrence of a code wins even when it is a prose mention rather
//! than a heading, and the boundary signature requires literal upper-case
//! letters because the manuals always print headings upper-case.

use isoproc_types::ProcedureCode;

/// Extracts the raw text block for `code` from `document`.
///
/// The span starts at the first occurrence of the code anywhere in the
/// document and ends just before the next line that looks like a procedure
/// heading, or at the end of the document. The result is trimmed.
///
/// Returns `None` when the code does not occur at all.
pub fn locate_block(document: &str, code: &ProcedureCode) -> Option<String> {
    let start = document.find(code.as_str())?;
    let tail = &document[start..];

    // The occurrence's own line never counts as a boundary, so scanning
    // starts with the following line.
    let mut end = tail.len();
    let mut offset = match tail.find('\n') {
        Some(i) => i + 1,
        None => tail.len(),
    };

    while offset < tail.len() {
        let line_end = tail[offset..]
            .find('\n')
            .map(|i| offset + i)
            .unwrap_or(tail.len());
        if is_heading_boundary(&tail[offset..line_end]) {
            end = offset;
            break;
        }
        offset = line_end + 1;
    }

    Some(tail[..end].trim().to_string())
}

/// True when a line starts (after optional whitespace) with the heading
/// signature: 3+ upper-case ASCII letters followed by 2+ ASCII digits. The
/// rest of the line is unconstrained.
fn is_heading_boundary(line: &str) -> bool {
    let s = line.trim_start();
    let letters = s.chars().take_while(|c| c.is_ascii_uppercase()).count();
    if letters < ProcedureCode::MIN_LETTERS {
        return false;
    }
    let digits = s[letters..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .count();
    digits >= ProcedureCode::MIN_DIGITS
}
