//! Whitespace and unicode normalisation for raw document text.
//!
//! Documents arrive as plain text extracted from other formats and carry
//! artifacts: no-break spaces, zero-width spaces, em/thin spaces, runs of
//! ordinary spaces, and stacked blank lines. Normalisation flattens all of
//! that while keeping the line and paragraph structure the locator relies on.

/// Zero-width space. Not classified as whitespace by `char::is_whitespace`,
/// but common in text extracted from PDFs and treated as a gap here.
const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// Cleans whitespace artifacts from raw input while preserving structure.
///
/// Per line: runs of whitespace (including unicode space variants) collapse to
/// a single ordinary space and the line is trimmed. Lines that become empty
/// mark a paragraph break; any run of them collapses to exactly one blank
/// line. The whole result is trimmed.
///
/// Pure and idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_break = false;

    for line in raw.lines() {
        let collapsed = collapse_line(line);
        if collapsed.is_empty() {
            pending_break = true;
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
            if pending_break {
                out.push('\n');
            }
        }
        pending_break = false;
        out.push_str(&collapsed);
    }

    out
}

/// Collapses every run of gap characters in one line to a single space and
/// trims the ends.
fn collapse_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut in_gap = false;

    for c in line.chars() {
        if is_gap(c) {
            in_gap = true;
        } else {
            if in_gap && !out.is_empty() {
                out.push(' ');
            }
            in_gap = false;
            out.push(c);
        }
    }

    out
}

fn is_gap(c: char) -> bool {
    c.is_whitespace() || c == ZERO_WIDTH_SPACE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_unicode_spaces() {
        // no-break, em, thin, zero-width
        let raw = "Check\u{00A0}the\u{2003}module\u{2009}now\u{200B}.";
        assert_eq!(normalize(raw), "Check the module now.");
    }

    #[test]
    fn test_collapses_runs_and_trims_lines() {
        let raw = "   1.   Check the    location code.   \n\t2.\tReplace   it.";
        assert_eq!(normalize(raw), "1. Check the location code.\n2. Replace it.");
    }

    #[test]
    fn test_blank_line_runs_become_one_paragraph_break() {
        let raw = "MEXIP01\n\n\n\nI/O Module Issues\n   \n\u{00A0}\nProcedure";
        assert_eq!(normalize(raw), "MEXIP01\n\nI/O Module Issues\n\nProcedure");
    }

    #[test]
    fn test_leading_and_trailing_blank_lines_dropped() {
        let raw = "\n\n  \nMEXIP01\nProcedure\n\n\n";
        assert_eq!(normalize(raw), "MEXIP01\nProcedure");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  \n \u{2003} \n"), "");
    }

    #[test]
    fn test_idempotent() {
        let raw = "MEXIP01\u{00A0}\u{00A0}heading\n\n\n1.   Do  a thing.\n\nYes:  go\n";
        let once = normalize(raw);
        assert_eq!(normalize(&once), once);
    }
}
