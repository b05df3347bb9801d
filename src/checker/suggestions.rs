use crate::checker::dictionary::Dictionary;
use fst::Streamer;

pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Find dictionary words exactly one edit away from `word`.
///
/// The input is lowercased first; a word already in the dictionary gets no
/// suggestions. Candidates come out in dictionary (sorted) order and the
/// scan stops once `max_suggestions` are found.
pub fn generate(word: &str, dictionary: &Dictionary, max_suggestions: usize) -> Vec<String> {
    let word = word.to_lowercase();
    let mut suggestions = Vec::new();

    if max_suggestions == 0 || dictionary.contains(&word) {
        return suggestions;
    }

    let word_len = word.chars().count();
    let mut stream = dictionary.stream();

    while let Some(key) = stream.next() {
        let Ok(candidate) = std::str::from_utf8(key) else {
            continue;
        };

        // Pre-filter by length: more than one apart can never be distance 1
        if candidate.chars().count().abs_diff(word_len) > 1 {
            continue;
        }

        if edit_distance(&word, candidate) == 1 {
            suggestions.push(candidate.to_string());
            if suggestions.len() >= max_suggestions {
                break;
            }
        }
    }

    suggestions
}

/// Calculate Levenshtein distance between two strings
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    // Two rows of the DP matrix are enough
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, a_char) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != b_char);

            curr[j + 1] = std::cmp::min(
                std::cmp::min(
                    prev[j + 1] + 1, // deletion
                    curr[j] + 1,     // insertion
                ),
                prev[j] + cost, // substitution
            );
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}
