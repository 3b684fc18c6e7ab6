//! Strip filter implementation.

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A filter that removes every non-alphanumeric character from tokens.
///
/// Punctuation glued to a word (`"рост,"`, `"«данные»"`) is dropped so that
/// inflections of the same surface word count together. Tokens that end up
/// empty are marked as stopped.
#[derive(Clone, Debug, Default)]
pub struct StripFilter;

impl StripFilter {
    /// Create a new strip filter.
    pub fn new() -> Self {
        StripFilter
    }
}

impl Filter for StripFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    token
                } else {
                    let cleaned: String =
                        token.text.chars().filter(|c| c.is_alphanumeric()).collect();
                    if cleaned.is_empty() {
                        token.stop()
                    } else {
                        token.with_text(cleaned)
                    }
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "strip"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_strip_filter() {
        let filter = StripFilter::new();
        let tokens = vec![
            Token::new("«рост»,", 0),
            Token::new("2023", 1),
            Token::new("—", 2),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "рост");
        assert_eq!(result[1].text, "2023");
        assert_eq!(result[2].text, "—");
        assert!(result[2].is_stopped());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StripFilter::new().name(), "strip");
    }
}
