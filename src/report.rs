//! Renders a lint report as human-readable text.

use std::fmt::Write as _;

use crate::diagnostic::LintReport;

/// Format a report as a textual summary: source label, passage
/// count, then either a success line or the diagnostic listing.
#[must_use]
pub fn format_report(report: &LintReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Linting: {}", report.source);
    let _ = writeln!(out, "Passages checked: {}", report.passage_count);
    out.push('\n');

    if report.diagnostics.is_empty() {
        out.push_str("\u{2713} No errors found!\n");
        return out;
    }

    let _ = writeln!(out, "Errors ({}):", report.diagnostics.len());
    for diagnostic in &report.diagnostics {
        let _ = writeln!(
            out,
            "  {} (line {}): {}",
            diagnostic.passage,
            diagnostic.line,
            diagnostic.message()
        );
        if let Some(suggestion) = &diagnostic.suggestion {
            let _ = writeln!(out, "    Did you mean: {suggestion}?");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::lint_str;
    use crate::vocabulary::Vocabulary;

    fn vocab() -> Vocabulary {
        ["set", "print"].into_iter().map(str::to_string).collect()
    }

    #[test]
    fn clean_report_text() {
        let report = lint_str(":: Start\n(set: $x to 1)\n", "story.twee", &vocab());
        let text = format_report(&report);
        assert!(text.starts_with("Linting: story.twee\n"));
        assert!(text.contains("Passages checked: 1\n"));
        assert!(text.contains("No errors found!"));
        assert!(!text.contains("Errors"));
    }

    #[test]
    fn error_listing_with_suggestion() {
        let report = lint_str(":: Start\n(sett: $x to 1)\n", "story.twee", &vocab());
        let text = format_report(&report);
        assert!(text.contains("Errors (1):"));
        assert!(text.contains("  Start (line 2): unknown macro name: 'sett'\n"));
        assert!(text.contains("    Did you mean: set?\n"));
    }

    #[test]
    fn diagnostic_without_suggestion_has_no_hint_line() {
        let report = lint_str(":: Start\n(zzzzzz: 1)\n", "story.twee", &vocab());
        let text = format_report(&report);
        assert!(text.contains("unknown macro name: 'zzzzzz'"));
        assert!(!text.contains("Did you mean"));
    }

    #[test]
    fn rendering_is_a_pure_function_of_the_report() {
        let report = lint_str(":: Start\n(sett: 1\n", "story.twee", &vocab());
        assert_eq!(format_report(&report), format_report(&report));
    }
}
