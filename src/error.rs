//! Error types for lisptree

use thiserror::Error;

/// Tokenize and parse errors
///
/// Every variant is fatal to the call that produced it; nothing is recovered
/// and no partial output accompanies an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Lex errors
    /// No token pattern matches at the scan position
    ///
    /// **Triggered by:** an unterminated string literal
    /// **Example:** `"abc`
    #[error("Lex error: no token matches input starting with {found:?}")]
    LexError {
        /// First character of the unmatched input
        found: char,
    },

    // Parse errors
    /// The cursor read past the end of the token sequence
    ///
    /// **Triggered by:** unbalanced open parentheses
    /// **Example:** `(+ 1 2`
    #[error("Unexpected end of input")]
    UnexpectedEof,

    /// Unexpected token encountered during parsing
    #[error("Unexpected token: expected {expected}, got {got}")]
    UnexpectedToken {
        /// Expected token description
        expected: String,
        /// Actual token received
        got: String,
    },

    /// General parse error
    ///
    /// **Triggered by:** nesting deeper than `ParseOptions::max_depth`
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A tree could not be serialized
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl Error {
    /// Returns true if the error came from the scanner
    pub fn is_lex(&self) -> bool {
        matches!(self, Error::LexError { .. })
    }

    /// Returns true if the error came from the parser
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            Error::UnexpectedEof | Error::UnexpectedToken { .. } | Error::ParseError(_)
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}

/// Result type for lisptree operations
pub type Result<T> = std::result::Result<T, Error>;
