//! The set of macro names considered valid for a linting run.
//!
//! A `Vocabulary` is constructed once by the caller and passed by
//! reference into every linting call; there is no process-wide
//! cache. Names are kept sorted so iteration order, and with it the
//! suggestion tie-break, is deterministic.

use std::sync::LazyLock;

use regex::Regex;

/// Macro definitions in the documentation's list section:
/// `*   [(name: params)](#anchor) Type`.
static MAIN_MACRO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\*\s+\[\(([a-z0-9-]+):").expect("macro pattern compiles"));

/// Alias entries written as indented plain text: `(name:)`.
static ALIAS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^\s+\(([a-z0-9-]+):\)").expect("alias pattern compiles"));

const LIST_HEADING: &str = "##### List of macros";
const KEYWORDS_HEADING: &str = "##### Special keywords";

/// Error scraping a vocabulary from a documentation artifact.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VocabError {
    /// The documentation lacks the macro list section markers.
    #[error("could not find macro list section in documentation")]
    MissingMacroList,
}

/// The recognised macro names, sorted and deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Vocabulary {
    names: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary from arbitrary names. Duplicates are
    /// dropped and the names are sorted.
    pub fn new<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut names: Vec<String> = names.into_iter().collect();
        names.sort();
        names.dedup();
        Self { names }
    }

    /// The macro names shipped with the crate, scraped from the
    /// Harlowe documentation at packaging time.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(
            include_str!("builtin_macros.txt")
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_string),
        )
    }

    /// Scrape macro names from a Harlowe-documentation markdown
    /// document: everything between the "List of macros" and
    /// "Special keywords" headings.
    ///
    /// A section with no recognisable entries yields an empty
    /// vocabulary, which is valid input for the linter (every macro
    /// will simply be flagged).
    pub fn from_docs(markdown: &str) -> Result<Self, VocabError> {
        let section = match (markdown.find(LIST_HEADING), markdown.find(KEYWORDS_HEADING)) {
            (Some(start), Some(end)) if start < end => &markdown[start..end],
            _ => return Err(VocabError::MissingMacroList),
        };

        let main = MAIN_MACRO_RE
            .captures_iter(section)
            .map(|caps| caps[1].to_string());
        let aliases = ALIAS_RE
            .captures_iter(section)
            .map(|caps| caps[1].to_string());

        Ok(Self::new(main.chain(aliases)))
    }

    /// Exact, case-sensitive membership test.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.binary_search_by(|n| n.as_str().cmp(name)).is_ok()
    }

    /// Names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<String> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter)
    }
}
