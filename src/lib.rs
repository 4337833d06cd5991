//! Linter for Harlowe macro calls in Twee story files.
//!
//! Splits a Twee document into passages, scans each passage for
//! `(macro: ...)` calls, checks the names against a vocabulary of
//! recognised macros, verifies parenthesis balance, and collects
//! everything into one [`LintReport`] per document. Unknown names
//! come with a nearest-match suggestion when one is close enough.
//!
//! # Quick start
//!
//! ```
//! use harlowe_lint::{Vocabulary, lint_str};
//!
//! let vocab = Vocabulary::builtin();
//! let report = lint_str(":: Start\n(set: $name to \"Player\")\n", "story.twee", &vocab);
//! assert!(report.is_valid);
//! ```
//!
//! # Custom vocabularies
//!
//! ```
//! use harlowe_lint::{Vocabulary, lint_str};
//!
//! let vocab: Vocabulary = ["set", "print"].into_iter().map(str::to_string).collect();
//! let report = lint_str(":: Start\n(sett: $x to 1)\n", "story.twee", &vocab);
//! assert!(!report.is_valid);
//! assert_eq!(report.diagnostics[0].suggestion.as_deref(), Some("set"));
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod balance;
pub mod diagnostic;
pub mod extract;
pub mod linter;
pub mod passage;
pub mod report;
pub mod suggest;
pub mod vocabulary;

pub use balance::check_balance;
pub use diagnostic::{Diagnostic, DiagnosticKind, LintReport};
pub use extract::{MacroToken, extract_macros};
pub use linter::lint_str;
pub use passage::{Passage, split_passages};
pub use report::format_report;
pub use suggest::find_similar;
pub use vocabulary::{VocabError, Vocabulary};
