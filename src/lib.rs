pub mod checker;
pub mod cli;
pub mod config;
pub mod dict;

pub use checker::dictionary::{Dictionary, DictionaryError};
pub use checker::tokenizer::{tokenize, Token, TokenKind};
pub use checker::{replace_token, Validator};
pub use config::Config;

use serde::Serialize;

/// How the validator classified a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Word,
    Punctuation,
    Whitespace,
    Other,
}

/// Verdict for a single token. `suggestions` is only filled for misspelled words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub token_type: TokenType,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ValidationResult {
    pub fn valid(token_type: TokenType) -> Self {
        Self {
            is_valid: true,
            token_type,
            suggestions: Vec::new(),
        }
    }
}

/// A token of checked text together with its position and verdict.
#[derive(Debug, Clone, Serialize)]
pub struct CheckedToken {
    pub text: String,
    pub line: usize,
    pub column: usize,
    pub start: usize,
    pub end: usize,
    #[serde(flatten)]
    pub result: ValidationResult,
}

impl CheckedToken {
    pub fn is_misspelling(&self) -> bool {
        !self.result.is_valid && self.result.token_type == TokenType::Word
    }

    pub fn is_spacing_error(&self) -> bool {
        !self.result.is_valid && self.result.token_type == TokenType::Punctuation
    }
}

#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    pub misspelled_count: usize,
    pub spacing_count: usize,
    pub tokens: Vec<CheckedToken>,
}

impl CheckResult {
    pub fn error_count(&self) -> usize {
        self.misspelled_count + self.spacing_count
    }

    pub fn errors(&self) -> impl Iterator<Item = &CheckedToken> {
        self.tokens.iter().filter(|t| !t.result.is_valid)
    }
}
