pub mod dictionary;
pub mod grammar;
pub mod suggestions;
pub mod tokenizer;

use crate::{CheckResult, CheckedToken, Config, TokenType, ValidationResult};
use anyhow::{Context, Result};
use dictionary::Dictionary;
use log::{debug, info};
use std::sync::Arc;
use tokenizer::TokenKind;

pub struct Validator {
    dictionary: Arc<Dictionary>,
    max_suggestions: usize,
}

/// Load the dictionary named by `config`, falling back to the embedded word list.
pub fn load_dictionary(config: &Config) -> Result<Arc<Dictionary>> {
    let dictionary = match &config.wordlist {
        Some(path) => Dictionary::load_from_path(path)
            .with_context(|| format!("Failed to load dictionary: {}", path.display()))?,
        None => Dictionary::embedded().context("Failed to load embedded dictionary")?,
    };
    info!("Dictionary ready ({} words)", dictionary.len());
    Ok(Arc::new(dictionary))
}

impl Validator {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self {
            dictionary,
            max_suggestions: suggestions::DEFAULT_MAX_SUGGESTIONS,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let dictionary = load_dictionary(config)?;
        Ok(Self::new(dictionary).with_max_suggestions(config.max_suggestions))
    }

    pub fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions;
        self
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Suggestions for a single word, empty if the word is known.
    pub fn suggest(&self, word: &str) -> Vec<String> {
        suggestions::generate(word, &self.dictionary, self.max_suggestions)
    }

    /// Validate every token in `tokens`; the output is aligned with the input.
    pub fn validate<T: AsRef<str>>(&self, tokens: &[T]) -> Vec<ValidationResult> {
        (0..tokens.len())
            .map(|index| self.validate_token(tokens, index))
            .collect()
    }

    /// Validate the token at `index`, using its neighbours for spacing checks.
    pub fn validate_token<T: AsRef<str>>(&self, tokens: &[T], index: usize) -> ValidationResult {
        let Some(token) = tokens.get(index).map(AsRef::as_ref) else {
            return ValidationResult::valid(TokenType::Other);
        };

        match classify(token) {
            TokenType::Word => {
                let word = sanitize_word(token);
                if self.dictionary.contains(&word) {
                    return ValidationResult::valid(TokenType::Word);
                }
                let suggestions = self.suggest(&word);
                debug!("Unknown word '{}' ({} suggestions)", token, suggestions.len());
                ValidationResult {
                    is_valid: false,
                    token_type: TokenType::Word,
                    suggestions,
                }
            }
            TokenType::Punctuation => ValidationResult {
                is_valid: grammar::has_correct_spacing(tokens, index),
                token_type: TokenType::Punctuation,
                suggestions: Vec::new(),
            },
            other => ValidationResult::valid(other),
        }
    }

    /// Tokenize and validate `input`, recording each token's position.
    pub fn check_text(&self, input: &str) -> CheckResult {
        let tokens = tokenizer::tokenize(input);
        let results: Vec<ValidationResult> = tokens
            .iter()
            .enumerate()
            .map(|(index, token)| match token.kind {
                // whitespace runs carry no verdict of their own
                TokenKind::Whitespace => ValidationResult::valid(TokenType::Whitespace),
                _ => self.validate_token(&tokens, index),
            })
            .collect();

        let mut result = CheckResult::default();
        let (mut line, mut column) = (1, 1);

        for (token, verdict) in tokens.into_iter().zip(results) {
            let checked = CheckedToken {
                line,
                column,
                start: token.start,
                end: token.end,
                result: verdict,
                text: token.text,
            };

            for ch in checked.text.chars() {
                if ch == '\n' {
                    line += 1;
                    column = 1;
                } else {
                    column += 1;
                }
            }

            if checked.is_misspelling() {
                result.misspelled_count += 1;
            } else if checked.is_spacing_error() {
                result.spacing_count += 1;
            }
            result.tokens.push(checked);
        }

        result
    }

    /// Replace every misspelled word with its first suggestion.
    pub fn fix_text(&self, input: &str) -> (String, usize) {
        self.fix_with(input, |token| token.result.suggestions.first().cloned())
    }

    /// Replace misspelled words with whatever `choose` returns for them;
    /// `None` leaves the word as written.
    pub fn fix_with<F>(&self, input: &str, mut choose: F) -> (String, usize)
    where
        F: FnMut(&CheckedToken) -> Option<String>,
    {
        let checked = self.check_text(input);
        let mut fixed = 0;

        let texts: Vec<String> = checked
            .tokens
            .iter()
            .map(|token| {
                if token.is_misspelling() {
                    if let Some(replacement) = choose(token) {
                        fixed += 1;
                        return replacement;
                    }
                }
                token.text.clone()
            })
            .collect();

        (tokenizer::join(&texts), fixed)
    }
}

/// Classify a token by its text: whitespace, then punctuation, then word.
pub fn classify(token: &str) -> TokenType {
    if token.is_empty() {
        TokenType::Other
    } else if token.chars().all(char::is_whitespace) {
        TokenType::Whitespace
    } else if token
        .chars()
        .all(|c| !is_word_char(c) && !c.is_whitespace())
    {
        TokenType::Punctuation
    } else if token.chars().all(|c| c.is_ascii_alphabetic()) {
        TokenType::Word
    } else {
        TokenType::Other
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Drop non-word characters and lowercase what remains.
pub fn sanitize_word(word: &str) -> String {
    word.chars()
        .filter(|&c| is_word_char(c))
        .collect::<String>()
        .to_lowercase()
}

/// Substitute the token at `index` and rejoin the sequence into text.
///
/// An out-of-range index leaves the text unchanged.
pub fn replace_token<T: AsRef<str>>(tokens: &[T], index: usize, replacement: &str) -> String {
    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| if i == index { replacement } else { token.as_ref() })
        .collect()
}
