// Spacing rules for punctuation runs, evaluated against neighbouring tokens.

const SENTENCE_PUNCTUATION: &[char] = &['.', '!', '?', ';', ':', ','];
const OPENING_BRACKETS: &[char] = &['(', '[', '{'];
const CLOSING_BRACKETS: &[char] = &[')', ']', '}'];
const CLOSERS: &[char] = &[')', ']', '}', '\'', '"'];

fn is_run_of(token: &str, set: &[char]) -> bool {
    !token.is_empty() && token.chars().all(|c| set.contains(&c))
}

fn starts_with_whitespace(token: &str) -> bool {
    token.chars().next().is_some_and(char::is_whitespace)
}

fn ends_with_whitespace(token: &str) -> bool {
    token.chars().next_back().is_some_and(char::is_whitespace)
}

/// Check whether the punctuation token at `index` is spaced correctly.
///
/// Sentence punctuation must be followed by whitespace, a closing
/// bracket/quote, or the end of input. Opening brackets need whitespace (or
/// the start of input) before them, closing brackets need whitespace (or the
/// end of input) after them. Quote runs and any other run are accepted.
pub fn has_correct_spacing<T: AsRef<str>>(tokens: &[T], index: usize) -> bool {
    let Some(token) = tokens.get(index).map(AsRef::as_ref) else {
        return true;
    };

    let is_first = index == 0;
    let is_last = index + 1 == tokens.len();
    let prev = if is_first { "" } else { tokens[index - 1].as_ref() };
    let next = if is_last { "" } else { tokens[index + 1].as_ref() };

    let space_before = is_first || ends_with_whitespace(prev);
    let space_after = is_last || starts_with_whitespace(next);

    if is_run_of(token, SENTENCE_PUNCTUATION) {
        return space_after || next.starts_with(CLOSERS);
    }

    if is_run_of(token, OPENING_BRACKETS) {
        return space_before;
    }

    if is_run_of(token, CLOSING_BRACKETS) {
        return space_after;
    }

    true
}
