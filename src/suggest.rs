//! Nearest-vocabulary-entry suggestions for rejected macro names.

use crate::vocabulary::Vocabulary;

/// Suggestions further than this edit distance are not offered.
const MAX_DISTANCE: usize = 2;

/// Find the vocabulary entry closest to a rejected name.
///
/// Two phases, first hit wins. A case-insensitive exact match is
/// returned immediately, since the vocabulary is case-sensitive by
/// convention but case typos are common. Otherwise the entry with
/// the smallest Levenshtein distance to the lower-cased name is
/// returned, provided that distance is at most [`MAX_DISTANCE`]; on
/// ties the first entry in the vocabulary's sorted order wins.
#[must_use]
pub fn find_similar(name: &str, vocabulary: &Vocabulary) -> Option<String> {
    let lower = name.to_lowercase();

    for entry in vocabulary.iter() {
        if entry.to_lowercase() == lower {
            return Some(entry.to_string());
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for entry in vocabulary.iter() {
        let distance = strsim::levenshtein(&lower, &entry.to_lowercase());
        if distance <= MAX_DISTANCE && best.is_none_or(|(_, d)| distance < d) {
            best = Some((entry, distance));
        }
    }

    best.map(|(entry, _)| entry.to_string())
}
