//! Parsing a raw steps region into structured steps.
//!
//! The region is chunked on step-marker lines (optional whitespace, digits,
//! a period). Each chunk is then scanned for branch markers (`Yes:`/`No:` at
//! the start of a line), continuation phrases, and the end-of-procedure
//! phrase. Scanning is explicit line/substring work so the invariant that an
//! instruction excludes its branch markers is held by construction rather
//! than by capture-group positions.

use api_shared::schema::StepDetail;

use crate::segment::is_step_start;

/// Curly and straight quote characters that may wrap a continuation target.
const QUOTES: &[char] = &['\u{201C}', '\u{201D}', '"'];

/// Parses `steps_raw` into ordered steps.
///
/// Step numbers are kept as the digit strings found in the source, in
/// document order. A region with no step markers at all yields an empty
/// vector; that is valid output, not an error.
pub fn parse_steps(steps_raw: &str) -> Vec<StepDetail> {
    let markers = find_step_markers(steps_raw);

    markers
        .iter()
        .enumerate()
        .map(|(i, marker)| {
            let chunk_end = markers
                .get(i + 1)
                .map(|next| next.line_start)
                .unwrap_or(steps_raw.len());
            let chunk = steps_raw[marker.content_start..chunk_end].trim();
            parse_chunk(&marker.number, chunk)
        })
        .collect()
}

/// Byte positions of one step marker within the steps region.
struct StepMarker {
    /// The captured digit string.
    number: String,
    /// Offset of the marker's line start.
    line_start: usize,
    /// Offset just after the period, where the chunk content begins.
    content_start: usize,
}

fn find_step_markers(text: &str) -> Vec<StepMarker> {
    let mut markers = Vec::new();
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        if let Some((number, after_period)) = match_step_marker(line) {
            markers.push(StepMarker {
                number,
                line_start: offset,
                content_start: offset + after_period,
            });
        }
        offset += line.len();
    }

    markers
}

/// Matches optional whitespace, 1+ digits, and a period at the start of a
/// line. Returns the digit string and the byte offset just after the period.
fn match_step_marker(line: &str) -> Option<(String, usize)> {
    if !is_step_start(line) {
        return None;
    }
    let indent = line.len() - line.trim_start().len();
    let s = &line[indent..];
    let digits = s.chars().take_while(|c| c.is_ascii_digit()).count();
    Some((s[..digits].to_string(), indent + digits + 1))
}

fn parse_chunk(number: &str, chunk: &str) -> StepDetail {
    let branches = scan_branches(chunk);

    let mut step = StepDetail::new(number, branches.instruction);
    step.yes_action = branches.yes_action;
    step.no_action = branches.no_action;
    step.continue_to_step = find_phrase_target(chunk, "continue with step", char::is_ascii_digit);
    step.continue_to_procedure =
        find_phrase_target(chunk, "use procedure", char::is_ascii_alphanumeric);
    step.ends_procedure = find_ci(chunk, "this ends the procedure.").is_some();
    step
}

/// Result of the branch-marker scan over one chunk.
struct BranchScan {
    instruction: String,
    yes_action: Option<String>,
    no_action: Option<String>,
}

#[derive(Clone, Copy, PartialEq)]
enum BranchKind {
    Yes,
    No,
}

/// Splits a chunk at line-start `Yes:`/`No:` markers.
///
/// The instruction is everything before the first marker. Each marker's
/// content runs to the next marker or the chunk end. When a marker kind
/// repeats, the first occurrence stays authoritative and later spans of the
/// same kind are dropped; this heuristic is carried from the source material,
/// which expects at most one of each.
fn scan_branches(chunk: &str) -> BranchScan {
    let mut boundaries: Vec<(usize, usize, BranchKind)> = Vec::new();
    let mut offset = 0;

    for line in chunk.split_inclusive('\n') {
        if let Some(rest_start) = starts_with_ci(line, "yes:") {
            boundaries.push((offset, offset + rest_start, BranchKind::Yes));
        } else if let Some(rest_start) = starts_with_ci(line, "no:") {
            boundaries.push((offset, offset + rest_start, BranchKind::No));
        }
        offset += line.len();
    }

    let instruction_end = boundaries.first().map(|b| b.0).unwrap_or(chunk.len());
    let mut scan = BranchScan {
        instruction: chunk[..instruction_end].trim().to_string(),
        yes_action: None,
        no_action: None,
    };

    for (i, &(_, content_start, kind)) in boundaries.iter().enumerate() {
        let content_end = boundaries
            .get(i + 1)
            .map(|next| next.0)
            .unwrap_or(chunk.len());
        let content = chunk[content_start..content_end].trim().to_string();
        match kind {
            BranchKind::Yes => {
                if scan.yes_action.is_none() {
                    scan.yes_action = Some(content);
                }
            }
            BranchKind::No => {
                if scan.no_action.is_none() {
                    scan.no_action = Some(content);
                }
            }
        }
    }

    scan
}

/// If `line` begins with `marker` (case-insensitive, no leading whitespace),
/// returns the byte offset just after the marker.
fn starts_with_ci(line: &str, marker: &str) -> Option<usize> {
    let head = line.get(..marker.len())?;
    head.eq_ignore_ascii_case(marker).then_some(marker.len())
}

/// Searches `text` for `phrase` (case-insensitive) and captures the run of
/// target characters that follows, skipping whitespace and an optional
/// opening quote. Returns `None` when the phrase is absent or nothing
/// capturable follows it.
fn find_phrase_target(
    text: &str,
    phrase: &str,
    is_target: impl Fn(&char) -> bool,
) -> Option<String> {
    let at = find_ci(text, phrase)?;
    let mut rest = text[at + phrase.len()..].trim_start();
    if let Some(stripped) = rest.strip_prefix(QUOTES) {
        rest = stripped;
    }
    let captured: String = rest.chars().take_while(|c| is_target(c)).collect();
    (!captured.is_empty()).then_some(captured)
}

/// Case-insensitive substring search. ASCII lowercasing keeps byte offsets
/// stable between the haystack and its lowered copy.
fn find_ci(haystack: &str, needle: &str) -> Option<usize> {
    haystack.to_ascii_lowercase().find(needle)
}
