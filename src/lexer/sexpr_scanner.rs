use super::token::TOKEN_RULES;
use crate::error::{Error, Result};
use crate::node::Node;
use tracing::{debug, trace};

/// Scanner for S-expression source text
///
/// Tries each token rule at the current position in fixed priority order and
/// takes the first that matches. There is no longest-match arbitration
/// between rules and no backtracking.
pub struct SExprScanner<'a> {
    /// Source code
    source: &'a str,
    /// Accumulated tokens
    tokens: Vec<Node>,
    /// Current byte offset in source
    current: usize,
}

impl<'a> SExprScanner<'a> {
    /// Creates a new S-expression scanner from source code
    pub fn new(source: &'a str) -> Self {
        SExprScanner {
            source,
            tokens: Vec::new(),
            current: 0,
        }
    }

    /// Scans all tokens from source code and returns them as a vector
    pub fn scan_tokens(&mut self) -> Result<Vec<Node>> {
        while !self.is_at_end() {
            self.scan_token()?;
        }

        debug!(tokens = self.tokens.len(), "scan complete");
        Ok(std::mem::take(&mut self.tokens))
    }

    fn scan_token(&mut self) -> Result<()> {
        let rest = &self.source[self.current..];

        for rule in TOKEN_RULES.iter() {
            if let Some(len) = rule.match_len(rest) {
                if let Some(category) = rule.category {
                    let text = &rest[..len];
                    trace!(%category, text, "token");
                    self.tokens.push(Node::leaf(category, text));
                }
                self.current += len;
                return Ok(());
            }
        }

        let found = rest.chars().next().unwrap_or('\0');
        debug!(?found, "no token rule matches");
        Err(Error::LexError { found })
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Category;

    fn scan(source: &str) -> Result<Vec<Node>> {
        SExprScanner::new(source).scan_tokens()
    }

    fn categories(tokens: &[Node]) -> Vec<Category> {
        tokens.iter().map(Node::category).collect()
    }

    #[test]
    fn test_simple_sexpr() {
        let tokens = scan("(+ 1 2)").unwrap();

        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0], Node::leaf(Category::Literal, "("));
        assert_eq!(tokens[1], Node::leaf(Category::Identifier, "+"));
        assert_eq!(tokens[2], Node::leaf(Category::Integer, "1"));
        assert_eq!(tokens[3], Node::leaf(Category::Integer, "2"));
        assert_eq!(tokens[4], Node::leaf(Category::Literal, ")"));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(scan("3.14").unwrap(), vec![Node::leaf(Category::Real, "3.14")]);
        assert_eq!(scan("42").unwrap(), vec![Node::leaf(Category::Integer, "42")]);
        assert_eq!(scan("-.5").unwrap(), vec![Node::leaf(Category::Real, "-.5")]);
        assert_eq!(scan("+7").unwrap(), vec![Node::leaf(Category::Integer, "+7")]);
    }

    #[test]
    fn test_signs_are_identifiers() {
        assert_eq!(scan("+").unwrap(), vec![Node::leaf(Category::Identifier, "+")]);
        assert_eq!(
            categories(&scan("(- x)").unwrap()),
            vec![
                Category::Literal,
                Category::Identifier,
                Category::Identifier,
                Category::Literal
            ]
        );
    }

    #[test]
    fn test_number_then_symbol() {
        // Integer wins at the first digit, then the rest is a new token
        let tokens = scan("12abc").unwrap();
        assert_eq!(tokens[0], Node::leaf(Category::Integer, "12"));
        assert_eq!(tokens[1], Node::leaf(Category::Identifier, "abc"));

        let tokens = scan("1.").unwrap();
        assert_eq!(tokens[0], Node::leaf(Category::Integer, "1"));
        assert_eq!(tokens[1], Node::leaf(Category::Identifier, "."));
    }

    #[test]
    fn test_string_kept_verbatim() {
        let tokens = scan(r#"(print "a \"b\" c")"#).unwrap();
        assert_eq!(tokens[2], Node::leaf(Category::String, r#""a \"b\" c""#));
    }

    #[test]
    fn test_whitespace_only() {
        assert!(scan("  \n\t ").unwrap().is_empty());
        assert!(scan("").unwrap().is_empty());
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(scan("\"abc"), Err(Error::LexError { found: '"' }));
        assert!(scan("(a \"b").unwrap_err().is_lex());
    }

    #[test]
    fn test_multibyte_identifiers() {
        let tokens = scan("(λ ü)").unwrap();
        assert_eq!(tokens[1], Node::leaf(Category::Identifier, "λ"));
        assert_eq!(tokens[2], Node::leaf(Category::Identifier, "ü"));
    }
}
