//! Minimum length filter implementation.

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A filter that marks tokens shorter than a minimum character count as stopped.
///
/// Length is measured in characters, not bytes, so Cyrillic words are treated
/// the same as Latin ones.
#[derive(Clone, Debug)]
pub struct MinLengthFilter {
    min_chars: usize,
}

impl MinLengthFilter {
    /// Create a filter keeping tokens with at least `min_chars` characters.
    pub fn new(min_chars: usize) -> Self {
        MinLengthFilter { min_chars }
    }

    /// The minimum number of characters a token needs to survive.
    pub fn min_chars(&self) -> usize {
        self.min_chars
    }
}

impl Filter for MinLengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let min_chars = self.min_chars;
        let filtered_tokens = tokens
            .map(|token| {
                if !token.is_stopped() && token.char_len() < min_chars {
                    token.stop()
                } else {
                    token
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "min_length"
    }
}
