use std::fmt;

/// Classifies a single lint finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Macro name not present in the vocabulary.
    InvalidMacro { name: String },
    /// Opening parenthesis never closed within its passage.
    UnclosedMacro,
    /// Closing parenthesis with no matching opener.
    UnmatchedClose,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMacro { name } => {
                write!(f, "unknown macro name: '{name}'")
            }
            Self::UnclosedMacro => {
                write!(f, "unclosed macro or parenthesis")
            }
            Self::UnmatchedClose => {
                write!(f, "unexpected closing parenthesis")
            }
        }
    }
}

/// One reported problem, tied to a passage and a document location.
///
/// `line` is 1-based from the start of the whole document; `column`
/// is the 1-based distance from the preceding newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Name of the passage the problem was found in.
    pub passage: String,
    pub line: usize,
    pub column: usize,
    /// Closest vocabulary entry, when one is near enough.
    pub suggestion: Option<String>,
}

impl Diagnostic {
    /// Human-readable message for this diagnostic.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Result of linting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintReport {
    /// Label identifying the document (file path or caller-chosen name).
    pub source: String,
    /// Number of passages found in the document.
    pub passage_count: usize,
    /// All findings, in passage order then within-passage scan order.
    pub diagnostics: Vec<Diagnostic>,
    /// True exactly when `diagnostics` is empty.
    pub is_valid: bool,
}
