//! # Lisptree - S-expression syntax trees
//!
//! Turns Lisp-like source text into a verified syntax tree in two passes:
//!
//! ```text
//! Source Code → Scanner → Tokens → Parser → Program tree
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use lisptree::{Category, Parser, Scanner};
//!
//! # fn main() -> lisptree::Result<()> {
//! let mut scanner = Scanner::new("(+ 3.14 (* 4 7))");
//! let tokens = scanner.scan_tokens()?;
//! assert_eq!(tokens.len(), 9);
//!
//! let mut parser = Parser::new(tokens);
//! let program = parser.parse()?;
//! assert_eq!(program.category(), Category::Program);
//! assert_eq!(program.children().len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Tokens
//!
//! Token rules are tried in a fixed order at the scan position and the first
//! match wins:
//!
//! 1. whitespace (dropped)
//! 2. `Real` - `[+-]?[0-9]*\.[0-9]+`
//! 3. `Integer` - `[+-]?[0-9]+`
//! 4. `String` - double-quoted, escapes kept verbatim
//! 5. `Identifier` - any run without whitespace, `"`, `(` or `)`
//! 6. `Literal` - one of `(`, `)`, `+`, `-`
//!
//! A lone `+` is therefore an `Identifier`.
//!
//! ## Trees
//!
//! Tokens are reused as the leaves of the tree. A list body is a
//! right-leaning chain of nested `Seq` nodes by default; see [`SeqShape`] for
//! the flat alternative.
//!
//! ## Error Handling
//!
//! ```rust
//! use lisptree::{parse_source, tokenize, Error};
//!
//! assert!(tokenize("\"abc").unwrap_err().is_lex());
//! assert_eq!(parse_source("(+ 1 2"), Err(Error::UnexpectedEof));
//! ```

pub mod error;
pub mod lexer;
pub mod node;
pub mod parser;
pub mod printer;

// Re-export main types
pub use error::{Error, Result};
pub use lexer::{tokenize, SExprScanner};
pub use node::{Category, Node};
pub use parser::{parse, ParseOptions, SExprParser, SeqShape, DEFAULT_MAX_DEPTH};
pub use printer::{to_json_string, to_tree_string};

/// Type alias for the S-expression scanner (lexer).
pub type Scanner<'a> = SExprScanner<'a>;

/// Type alias for the S-expression parser.
pub type Parser = SExprParser;

/// Tokenizes and parses `source` with the default options
pub fn parse_source(source: &str) -> Result<Node> {
    parse_source_with(source, ParseOptions::default())
}

/// Tokenizes and parses `source` with explicit options
pub fn parse_source_with(source: &str, options: ParseOptions) -> Result<Node> {
    let tokens = tokenize(source)?;
    SExprParser::with_options(tokens, options).parse()
}
