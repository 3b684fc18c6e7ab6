//! Text analysis building blocks.
//!
//! Tokenizers split raw text into tokens, filters transform token streams and
//! analyzers chain the two. The extraction engine uses these to segment
//! sentences, count words and rank themes.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
