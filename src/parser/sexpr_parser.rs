use super::options::{ParseOptions, SeqShape};
use crate::error::{Error, Result};
use crate::node::{Category, Node};
use tracing::{debug, trace};

/// Recursive-descent parser for the S-expression grammar
///
/// ```text
/// Program ::= { SExpr }
/// SExpr   ::= Atom | List
/// List    ::= "(" ")" | "(" Seq ")"
/// Seq     ::= SExpr Seq | SExpr
/// Atom    ::= Identifier | Integer | Real | String
/// ```
///
/// Tokens are read through a single forward cursor with one token of
/// lookahead. Reading past the last token is an [`Error::UnexpectedEof`].
/// Recursion deeper than [`ParseOptions::max_depth`] is an
/// [`Error::ParseError`].
pub struct SExprParser {
    tokens: Vec<Node>,
    current: usize,
    depth: usize,
    options: ParseOptions,
}

impl SExprParser {
    /// Creates a new S-expression parser
    pub fn new(tokens: Vec<Node>) -> Self {
        Self::with_options(tokens, ParseOptions::default())
    }

    /// Creates a parser with explicit options
    pub fn with_options(tokens: Vec<Node>, options: ParseOptions) -> Self {
        SExprParser {
            tokens,
            current: 0,
            depth: 0,
            options,
        }
    }

    /// Parses the tokens into a `Program` tree
    pub fn parse(&mut self) -> Result<Node> {
        let mut children = Vec::new();

        while !self.is_at_end() {
            children.push(self.parse_sexpr()?);
        }

        debug!(exprs = children.len(), "parse complete");
        Ok(Node::branch(Category::Program, children))
    }

    fn parse_sexpr(&mut self) -> Result<Node> {
        trace!(cursor = self.current, "sexpr");
        let inner = if self.peek()?.is_literal("(") {
            self.parse_list()?
        } else {
            self.parse_atom()?
        };
        Ok(Node::branch(Category::SExpr, vec![inner]))
    }

    fn parse_list(&mut self) -> Result<Node> {
        self.nested(Self::parse_list_body)
    }

    fn parse_list_body(&mut self) -> Result<Node> {
        trace!(cursor = self.current, "list");
        let open = self.consume_literal("(")?;
        let mut children = vec![open];

        match self.options.seq_shape {
            SeqShape::Nested => children.push(self.parse_seq_nested()?),
            SeqShape::Flat => {
                if !self.peek()?.is_literal(")") {
                    children.push(self.parse_seq_flat()?);
                }
            }
        }

        children.push(self.consume_close()?);
        Ok(Node::branch(Category::List, children))
    }

    /// Right-leaning list body.
    ///
    /// Each further element nests one `Seq` deeper. The loop stops only on a
    /// literal `)`, so an exhausted token sequence falls through into another
    /// `Seq` and fails there. The open-paren follow-up is kept even though the
    /// nested call always returns positioned on a `)`.
    fn parse_seq_nested(&mut self) -> Result<Node> {
        self.nested(Self::parse_seq_chain)
    }

    fn parse_seq_chain(&mut self) -> Result<Node> {
        trace!(cursor = self.current, "seq");
        let mut children = vec![self.parse_sexpr()?];

        while !self.check_literal(")") {
            children.push(self.parse_seq_nested()?);
            if self.check_literal("(") {
                children.push(self.parse_seq_nested()?);
            }
        }

        Ok(Node::branch(Category::Seq, children))
    }

    fn parse_seq_flat(&mut self) -> Result<Node> {
        trace!(cursor = self.current, "seq");
        let mut children = vec![self.parse_sexpr()?];

        while !self.check_literal(")") {
            children.push(self.parse_sexpr()?);
        }

        Ok(Node::branch(Category::Seq, children))
    }

    fn parse_atom(&mut self) -> Result<Node> {
        let token = self.peek()?;

        if token.category().is_atomic() {
            let token = self.advance()?;
            Ok(Node::branch(Category::Atom, vec![token]))
        } else if token.is_literal(")") {
            // A stray `)` in atom position is returned as-is
            self.advance()
        } else {
            Err(self.unexpected("identifier, integer, real or string"))
        }
    }

    /// Runs `rule` one recursion level deeper
    fn nested(&mut self, rule: fn(&mut Self) -> Result<Node>) -> Result<Node> {
        if self.depth >= self.options.max_depth {
            debug!(cursor = self.current, limit = self.options.max_depth, "nesting too deep");
            return Err(Error::ParseError(format!(
                "nesting exceeds {} levels",
                self.options.max_depth
            )));
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    fn consume_close(&mut self) -> Result<Node> {
        if self.options.strict_close {
            self.consume_literal(")")
        } else {
            self.advance()
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    fn peek(&self) -> Result<&Node> {
        self.tokens.get(self.current).ok_or(Error::UnexpectedEof)
    }

    fn advance(&mut self) -> Result<Node> {
        let token = self.peek()?.clone();
        self.current += 1;
        Ok(token)
    }

    fn check_literal(&self, text: &str) -> bool {
        self.tokens
            .get(self.current)
            .is_some_and(|token| token.is_literal(text))
    }

    fn consume_literal(&mut self, text: &str) -> Result<Node> {
        if self.peek()?.is_literal(text) {
            self.advance()
        } else {
            Err(self.unexpected(&format!("`{}`", text)))
        }
    }

    fn unexpected(&self, expected: &str) -> Error {
        let got = match self.tokens.get(self.current) {
            Some(token) => Self::token_name(token),
            None => "end of input".to_string(),
        };
        debug!(cursor = self.current, expected, got = %got, "parse failed");
        Error::UnexpectedToken {
            expected: expected.to_string(),
            got,
        }
    }

    /// Get a human-readable name for a token
    fn token_name(token: &Node) -> String {
        match token.category() {
            Category::Literal => format!("`{}`", token.text()),
            Category::Integer => format!("integer `{}`", token.text()),
            Category::Real => format!("real `{}`", token.text()),
            Category::String => format!("string {}", token.text()),
            Category::Identifier => format!("identifier `{}`", token.text()),
            other => other.name().to_string(),
        }
    }
}
