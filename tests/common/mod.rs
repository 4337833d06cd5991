#![allow(dead_code)]

use harlowe_lint::Vocabulary;

/// Small fixture vocabulary shared by the integration suites.
pub fn sample_vocab() -> Vocabulary {
    ["set", "if", "print", "go-to", "link"]
        .into_iter()
        .map(str::to_string)
        .collect()
}
