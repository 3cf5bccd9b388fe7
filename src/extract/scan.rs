//! Assignment scanning for animation scripts.
//!
//! Gallery pages embed their frames as indexed string assignments inside an
//! inline script (`frames[0] = "..."`). This module finds those candidates;
//! deciding which of them are actual frames happens later in the pipeline.

use std::sync::OnceLock;

use regex::Regex;

/// A candidate frame assignment found in raw source text.
///
/// The literal body is borrowed from the source with escape sequences still
/// encoded; decoding happens in a later stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawAssignment<'a> {
    /// Array index on the left-hand side of the assignment
    pub index: u32,
    /// String literal body between the quotes, escapes intact
    pub literal: &'a str,
}

static ASSIGNMENT_RE: OnceLock<Regex> = OnceLock::new();

/// Pattern for `ident[123] = "..."` / `ident[123] = '...'` assignments.
///
/// The literal alternates escaped pairs with non-quote characters so that
/// embedded `\"` / `\'` do not terminate the match.
fn assignment_re() -> &'static Regex {
    ASSIGNMENT_RE.get_or_init(|| {
        Regex::new(
            r#"(?x)
            [A-Za-z_$][A-Za-z0-9_$]*           # identifier
            \s*\[\s*(\d+)\s*\]                 # [index]
            \s*=\s*
            (?:
                "((?:\\.|[^"\\])*)"            # double-quoted literal
              | '((?:\\.|[^'\\])*)'            # single-quoted literal
            )
            "#,
        )
        .expect("valid assignment regex")
    })
}

/// Scan source text for assignment candidates, in textual order.
///
/// Indices too large for `u32` are skipped; everything else is handed to the
/// rest of the pipeline undecoded and unjudged.
pub fn assignments(source: &str) -> Vec<RawAssignment<'_>> {
    assignment_re()
        .captures_iter(source)
        .filter_map(|caps| {
            let index: u32 = caps.get(1)?.as_str().parse().ok()?;
            let literal = caps.get(2).or_else(|| caps.get(3))?.as_str();
            Some(RawAssignment { index, literal })
        })
        .collect()
}
