//! Ties the pieces together: split, extract, validate, aggregate.

use crate::balance::check_balance;
use crate::diagnostic::{Diagnostic, DiagnosticKind, LintReport};
use crate::extract::{MacroToken, extract_macros};
use crate::passage::{Passage, split_passages};
use crate::suggest::find_similar;
use crate::vocabulary::Vocabulary;

/// Lint a Twee document against a vocabulary of macro names.
///
/// `source` is a label used only to identify the document in the
/// report; it is never parsed. The same document and vocabulary
/// always produce an identical report.
#[must_use]
pub fn lint_str(content: &str, source: &str, vocabulary: &Vocabulary) -> LintReport {
    let passages = split_passages(content);
    let mut diagnostics = Vec::new();

    for passage in &passages {
        let tokens = extract_macros(&passage.content, passage.content_line);
        diagnostics.extend(validate_names(passage, &tokens, vocabulary));
        diagnostics.extend(check_balance(
            &passage.content,
            &passage.name,
            passage.content_line,
        ));
    }

    LintReport {
        source: source.to_string(),
        passage_count: passages.len(),
        is_valid: diagnostics.is_empty(),
        diagnostics,
    }
}

/// Flag every token whose name is not in the vocabulary, attaching
/// the nearest entry as a suggestion when one is close enough.
fn validate_names(
    passage: &Passage,
    tokens: &[MacroToken],
    vocabulary: &Vocabulary,
) -> Vec<Diagnostic> {
    tokens
        .iter()
        .filter(|token| !vocabulary.contains(&token.name))
        .map(|token| Diagnostic {
            kind: DiagnosticKind::InvalidMacro {
                name: token.name.clone(),
            },
            passage: passage.name.clone(),
            line: token.line,
            column: token.column,
            suggestion: find_similar(&token.name, vocabulary),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Vocabulary {
        ["set", "if", "print", "go-to", "link"]
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn clean_document() {
        let report = lint_str(
            ":: Start\n(set: $x to 1)\n(print: $x)\n",
            "story.twee",
            &vocab(),
        );
        assert_eq!(report.source, "story.twee");
        assert_eq!(report.passage_count, 1);
        assert!(report.is_valid);
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn unknown_macro_is_flagged_with_location() {
        let report = lint_str(":: Start\ntext\n(sett: $x to 1)\n", "story.twee", &vocab());
        assert!(!report.is_valid);
        assert_eq!(report.diagnostics.len(), 1);
        let diag = &report.diagnostics[0];
        assert_eq!(
            diag.kind,
            DiagnosticKind::InvalidMacro {
                name: "sett".to_string()
            }
        );
        assert_eq!(diag.passage, "Start");
        assert_eq!(diag.line, 3);
        assert_eq!(diag.column, 1);
        assert_eq!(diag.suggestion.as_deref(), Some("set"));
    }

    #[test]
    fn name_diagnostics_precede_balance_diagnostics_per_passage() {
        let doc = ":: A\n(bogus: 1) extra)\n\n:: B\n(wrong: 2)\n";
        let report = lint_str(doc, "t", &vocab());
        let kinds: Vec<_> = report.diagnostics.iter().map(|d| &d.kind).collect();
        assert!(matches!(kinds[0], DiagnosticKind::InvalidMacro { .. }));
        assert_eq!(kinds[1], &DiagnosticKind::UnmatchedClose);
        assert!(matches!(kinds[2], DiagnosticKind::InvalidMacro { .. }));
        assert_eq!(report.diagnostics[0].passage, "A");
        assert_eq!(report.diagnostics[2].passage, "B");
    }

    #[test]
    fn empty_vocabulary_flags_every_macro() {
        let report = lint_str(
            ":: Start\n(set: $x to 1)\n(print: $x)\n",
            "t",
            &Vocabulary::default(),
        );
        assert_eq!(report.diagnostics.len(), 2);
        assert!(
            report
                .diagnostics
                .iter()
                .all(|d| matches!(d.kind, DiagnosticKind::InvalidMacro { .. }))
        );
        assert!(report.diagnostics.iter().all(|d| d.suggestion.is_none()));
    }

    #[test]
    fn document_without_headers_is_trivially_valid() {
        let report = lint_str("(bogus: but no passage)\n", "t", &vocab());
        assert_eq!(report.passage_count, 0);
        assert!(report.is_valid);
    }

    #[test]
    fn unclosed_macro_in_passage() {
        let report = lint_str(":: Start\n(set: $x to 1\n", "t", &vocab());
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].kind, DiagnosticKind::UnclosedMacro);
        assert_eq!(report.diagnostics[0].line, 2);
        assert_eq!(report.diagnostics[0].column, 1);
    }
}
