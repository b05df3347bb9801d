use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    // One alternative per token class, in priority order. The last class is
    // the complement of all others, so every character lands in some run.
    static ref TOKEN_RE: Regex = Regex::new(
        r#"([a-zA-Z]+)|([.!?;:,]+)|([()\[\]{}]+)|(['"]+)|(\s+)|([^a-zA-Z\s.!?;:,()\[\]{}'"]+)"#
    )
    .unwrap();
}

/// Character class of a run produced by [`tokenize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Word,
    SentencePunctuation,
    Bracket,
    Quote,
    Whitespace,
    Symbol,
}

impl TokenKind {
    fn from_group(group: usize) -> Self {
        match group {
            1 => TokenKind::Word,
            2 => TokenKind::SentencePunctuation,
            3 => TokenKind::Bracket,
            4 => TokenKind::Quote,
            5 => TokenKind::Whitespace,
            _ => TokenKind::Symbol,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    pub start: usize, // Byte offset where the token starts
    pub end: usize,   // Byte offset where the token ends
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Split text into maximal runs of words, punctuation, whitespace and symbols.
///
/// Concatenating the returned tokens in order yields `input` exactly.
pub fn tokenize(input: &str) -> Vec<Token> {
    TOKEN_RE
        .captures_iter(input)
        .filter_map(|caps| {
            let group = (1..caps.len()).find(|&i| caps.get(i).is_some())?;
            let m = caps.get(group)?;
            Some(Token {
                text: m.as_str().to_string(),
                kind: TokenKind::from_group(group),
                start: m.start(),
                end: m.end(),
            })
        })
        .collect()
}

/// Rejoin tokens into the text they were cut from.
pub fn join<T: AsRef<str>>(tokens: &[T]) -> String {
    tokens.iter().map(AsRef::as_ref).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        tokenize(input).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_simple_words() {
        assert_eq!(texts("hello world"), vec!["hello", " ", "world"]);
    }

    #[test]
    fn test_words_with_punctuation() {
        assert_eq!(texts("Hello, world!"), vec!["Hello", ",", " ", "world", "!"]);
    }

    #[test]
    fn test_runs_are_maximal() {
        assert_eq!(texts("hello   world!!"), vec!["hello", "   ", "world", "!!"]);
        assert_eq!(texts("(["), vec!["(["]);
    }

    #[test]
    fn test_quotes_and_brackets() {
        assert_eq!(
            texts(r#"He said "Hello" (quietly)"#),
            vec!["He", " ", "said", " ", "\"", "Hello", "\"", " ", "(", "quietly", ")"]
        );
    }

    #[test]
    fn test_mixed_sentence() {
        assert_eq!(
            texts("Hi! This is a test? Yes."),
            vec![
                "Hi", "!", " ", "This", " ", "is", " ", "a", " ", "test", "?", " ", "Yes", "."
            ]
        );
    }

    #[test]
    fn test_symbols_and_digits() {
        assert_eq!(texts("test@email.com"), vec!["test", "@", "email", ".", "com"]);

        let tokens = tokenize("abc123_x");
        assert_eq!(tokens[0].kind, TokenKind::Word);
        assert_eq!(tokens[1].text, "123_");
        assert_eq!(tokens[1].kind, TokenKind::Symbol);
        assert_eq!(tokens[2].text, "x");
    }

    #[test]
    fn test_kinds_and_spans() {
        let tokens = tokenize("Hi, (you)\t'ok'");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Word,
                TokenKind::SentencePunctuation,
                TokenKind::Whitespace,
                TokenKind::Bracket,
                TokenKind::Word,
                TokenKind::Bracket,
                TokenKind::Whitespace,
                TokenKind::Quote,
                TokenKind::Word,
                TokenKind::Quote,
            ]
        );
        assert_eq!((tokens[3].start, tokens[3].end), (4, 5));
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_reconstruction() {
        let inputs = [
            "",
            "plain",
            "Hello, world!",
            "He(quietly)said!",
            "  leading and trailing  ",
            "tabs\tand\nnewlines\r\n",
            "numbers 123, under_scores and @handles",
            "naïve café — “curly” quotes…",
            "!!!???...",
            "a{b}c[d]e'f\"g",
        ];
        for input in inputs {
            let tokens = tokenize(input);
            assert!(tokens.iter().all(|t| !t.text.is_empty()), "{input:?}");
            assert_eq!(join(&tokens), input);
            for pair in tokens.windows(2) {
                assert_eq!(pair[0].end, pair[1].start);
            }
        }
    }

    #[test]
    fn test_adjacent_classes_do_not_merge() {
        let tokens = tokenize("word,(\"x  ");
        for pair in tokens.windows(2) {
            let glued = format!("{}{}", pair[0].text, pair[1].text);
            let again = texts(&glued);
            assert_eq!(again, vec![pair[0].text.clone(), pair[1].text.clone()]);
        }
    }
}
