//! Token types and utilities for text analysis.
//!
//! A [`Token`] is a slice of the analyzed text together with its position in
//! the token stream and its byte offsets in the original input. Offsets always
//! refer to the text handed to the tokenizer, so callers can go back to the
//! source to build context windows.
//!
//! # Examples
//!
//! ```
//! use infographic::analysis::token::Token;
//!
//! let token = Token::with_offsets("рост", 1, 6, 14);
//! assert_eq!(token.text, "рост");
//! assert_eq!(token.start_offset, 6);
//! assert!(!token.is_stopped());
//! ```

use serde::{Deserialize, Serialize};

/// A single unit of text produced by a tokenizer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Whether this token has been marked as stopped (removed) by a filter
    pub stopped: bool,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        let end_offset = text.len();
        Token {
            text,
            position,
            start_offset: 0,
            end_offset,
            stopped: false,
        }
    }

    /// Create a new token with explicit byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            stopped: false,
        }
    }

    /// Length of the token text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Mark this token as stopped.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    /// Check if this token is stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Create a copy of this token with different text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        Token {
            text: text.into(),
            ..self.clone()
        }
    }
}

/// A stream of tokens flowing through the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("данные", 3);
        assert_eq!(token.text, "данные");
        assert_eq!(token.position, 3);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, "данные".len());
        assert_eq!(token.char_len(), 6);
    }

    #[test]
    fn test_token_stop_and_with_text() {
        let token = Token::with_offsets("Рост,", 0, 10, 19).stop();
        assert!(token.is_stopped());

        let replaced = token.with_text("рост");
        assert_eq!(replaced.text, "рост");
        assert_eq!(replaced.start_offset, 10);
        assert!(replaced.is_stopped());
    }
}
