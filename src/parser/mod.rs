//! lisptree parser module
//!
//! Builds a `Program` tree from the scanner's token sequence.

mod options;
mod sexpr_parser;

pub use options::{ParseOptions, SeqShape, DEFAULT_MAX_DEPTH};
pub use sexpr_parser::SExprParser;

use crate::error::Result;
use crate::node::Node;

/// Parses `tokens` with the default options
pub fn parse(tokens: Vec<Node>) -> Result<Node> {
    SExprParser::new(tokens).parse()
}
