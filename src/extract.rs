//! Scans passage content for Harlowe macro calls.
//!
//! A macro call opens with `(name:`, where the name is ASCII
//! letters, digits, and hyphens, optionally followed by whitespace
//! before the colon. Argument bodies are not parsed; a colon inside
//! a string literal that happens to fit the pattern is an accepted
//! false positive.

/// One macro-call occurrence inside a passage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroToken {
    pub name: String,
    /// 1-based document line of the opening parenthesis.
    pub line: usize,
    /// 1-based column of the opening parenthesis within its line.
    pub column: usize,
    /// Byte offset of the opening parenthesis within the passage content.
    pub offset: usize,
}

/// Extract all macro-call tokens from passage content, left to right.
///
/// `start_line` is the 1-based document line on which `content` begins;
/// token lines are measured from it.
#[must_use]
pub fn extract_macros(content: &str, start_line: usize) -> Vec<MacroToken> {
    let bytes = content.as_bytes();
    let mut tokens = Vec::new();
    let mut line = start_line;
    let mut line_start = 0;

    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'\n' => {
                line += 1;
                line_start = i + 1;
            }
            b'(' => {
                if let Some(name) = match_call(bytes, i) {
                    tokens.push(MacroToken {
                        name,
                        line,
                        column: i - line_start + 1,
                        offset: i,
                    });
                }
            }
            _ => {}
        }
    }

    tokens
}

/// Match `name`, optional whitespace, `:` starting just after the
/// opening parenthesis at `open`.
fn match_call(bytes: &[u8], open: usize) -> Option<String> {
    let name_start = open + 1;
    let mut i = name_start;

    while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'-') {
        i += 1;
    }
    if i == name_start {
        return None;
    }
    let name_end = i;

    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    if bytes.get(i) != Some(&b':') {
        return None;
    }

    Some(String::from_utf8_lossy(&bytes[name_start..name_end]).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_macro() {
        let tokens = extract_macros("(set: $x to 1)", 1);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].name, "set");
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[0].column, 1);
        assert_eq!(tokens[0].offset, 0);
    }

    #[test]
    fn multiple_macros_on_one_line() {
        let tokens = extract_macros("(a: 1)(b: 2)", 1);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].name, "a");
        assert_eq!(tokens[1].name, "b");
        assert_eq!(tokens[1].column, 7);
    }

    #[test]
    fn hyphens_and_digits_in_names() {
        let tokens = extract_macros("(go-to: \"End\") (t8n: \"dissolve\")", 1);
        assert_eq!(tokens[0].name, "go-to");
        assert_eq!(tokens[1].name, "t8n");
    }

    #[test]
    fn lines_count_from_start_line() {
        let tokens = extract_macros("some text\n(print: $x)", 5);
        assert_eq!(tokens[0].line, 6);
        assert_eq!(tokens[0].column, 1);
    }

    #[test]
    fn column_is_relative_to_the_line() {
        let tokens = extract_macros("ab (if: true)\ncd  (else:)", 1);
        assert_eq!(tokens[0].column, 4);
        assert_eq!(tokens[1].line, 2);
        assert_eq!(tokens[1].column, 5);
    }

    #[test]
    fn whitespace_allowed_before_colon() {
        let tokens = extract_macros("(set : $x to 1)", 1);
        assert_eq!(tokens[0].name, "set");
    }

    #[test]
    fn newline_allowed_before_colon() {
        let tokens = extract_macros("(set\n: $x to 1)", 1);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].line, 1);
    }

    #[test]
    fn plain_parentheses_are_not_macros() {
        assert!(extract_macros("(just an aside)", 1).is_empty());
        assert!(extract_macros("() (:)", 1).is_empty());
    }

    #[test]
    fn macro_after_non_macro_paren() {
        let tokens = extract_macros("((set: 1))", 1);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].column, 2);
        assert_eq!(tokens[0].offset, 1);
    }

    #[test]
    fn nested_macros_are_all_found() {
        let tokens = extract_macros("(if: (either: true, false))", 1);
        let names: Vec<_> = tokens.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["if", "either"]);
    }

    #[test]
    fn empty_content() {
        assert!(extract_macros("", 1).is_empty());
    }

    #[test]
    fn offsets_are_byte_positions() {
        let tokens = extract_macros("xx(set: 1)", 1);
        assert_eq!(tokens[0].offset, 2);
    }
}
