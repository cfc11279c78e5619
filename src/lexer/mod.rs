//! Lexical analysis for lisptree
//!
//! Converts source text into a flat sequence of token [`Node`]s.

mod sexpr_scanner;
mod token;

pub use sexpr_scanner::SExprScanner;

use crate::error::Result;
use crate::node::Node;

/// Tokenizes `source` in one pass
pub fn tokenize(source: &str) -> Result<Vec<Node>> {
    SExprScanner::new(source).scan_tokens()
}
