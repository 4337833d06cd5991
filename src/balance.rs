//! Parenthesis-balance checking for passage content.
//!
//! Works on raw characters; string literals get no special
//! treatment. After an unmatched close the depth resets to zero so a
//! single stray `)` does not cascade into further reports.

use crate::diagnostic::{Diagnostic, DiagnosticKind};

/// Check that parenthesis nesting is well-formed within one passage.
///
/// Emits `UnmatchedClose` at each closing parenthesis that drops the
/// depth below zero, and one `UnclosedMacro` per opening parenthesis
/// still unmatched at the end of the content, in the order the
/// openers appeared. `start_line` is the 1-based document line on
/// which `content` begins.
#[must_use]
pub fn check_balance(content: &str, passage: &str, start_line: usize) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut depth: isize = 0;
    // Line/column of each open paren still awaiting its close.
    let mut open: Vec<(usize, usize)> = Vec::new();
    let mut line = start_line;
    let mut line_start = 0;

    for (i, &b) in content.as_bytes().iter().enumerate() {
        match b {
            b'\n' => {
                line += 1;
                line_start = i + 1;
            }
            b'(' => {
                depth += 1;
                open.push((line, i - line_start + 1));
            }
            b')' => {
                depth -= 1;
                open.pop();
                if depth < 0 {
                    diagnostics.push(Diagnostic {
                        kind: DiagnosticKind::UnmatchedClose,
                        passage: passage.to_string(),
                        line,
                        column: i - line_start + 1,
                        suggestion: None,
                    });
                    // Reset so scanning continues undisturbed.
                    depth = 0;
                }
            }
            _ => {}
        }
    }

    for (line, column) in open {
        diagnostics.push(Diagnostic {
            kind: DiagnosticKind::UnclosedMacro,
            passage: passage.to_string(),
            line,
            column,
            suggestion: None,
        });
    }

    diagnostics
}
