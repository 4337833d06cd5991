//! Splits a Twee document into its passages.
//!
//! A passage starts at a header line of the form `:: Name [tags]` and
//! runs until the next header or the end of the document.

use std::sync::LazyLock;

use regex::Regex;

/// Header line: `::`, a name, an optional bracketed tag list.
/// Anchored to line start; a `::` in the middle of a line is content.
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^::\s*(.+?)(?:\s+\[([^\]]*)\])?\s*$").expect("header pattern compiles")
});

/// A named section of a Twee document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    pub name: String,
    /// Tags from the header's bracketed list, in source order.
    pub tags: Vec<String>,
    /// Passage text with leading/trailing whitespace trimmed.
    pub content: String,
    /// 1-based document line of the header.
    pub start_line: usize,
    /// 1-based document line where the trimmed `content` begins.
    /// Line/column arithmetic on `content` offsets is based here,
    /// not on `start_line`, so diagnostics keep addressing real
    /// document positions after trimming.
    pub content_line: usize,
}

/// Split a document into its ordered sequence of passages.
///
/// A document with no header lines yields no passages; the caller
/// decides whether that is meaningful.
#[must_use]
pub fn split_passages(document: &str) -> Vec<Passage> {
    struct Header<'a> {
        start: usize,
        end: usize,
        name: &'a str,
        tags: Option<&'a str>,
    }

    let headers: Vec<Header<'_>> = HEADER_RE
        .captures_iter(document)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?;
            Some(Header {
                start: whole.start(),
                end: whole.end(),
                name: name.as_str(),
                tags: caps.get(2).map(|m| m.as_str()),
            })
        })
        .collect();

    let mut passages = Vec::with_capacity(headers.len());
    for (i, header) in headers.iter().enumerate() {
        // Content begins after the header line's newline.
        let content_start = if header.end < document.len() {
            header.end + 1
        } else {
            document.len()
        };
        let content_end = headers.get(i + 1).map_or(document.len(), |next| next.start);
        let raw = &document[content_start..content_end];
        let leading = &raw[..raw.len() - raw.trim_start().len()];

        passages.push(Passage {
            name: header.name.trim().to_string(),
            tags: header.tags.map_or_else(Vec::new, |t| {
                t.split_whitespace().map(str::to_string).collect()
            }),
            content: raw.trim().to_string(),
            start_line: line_at(document, header.start),
            content_line: line_at(document, content_start) + count_newlines(leading),
        });
    }

    passages
}

/// 1-based line number of the byte at `offset`.
fn line_at(document: &str, offset: usize) -> usize {
    count_newlines(&document[..offset]) + 1
}

fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}
