//! Token patterns, in match priority order

use crate::node::Category;
use regex::Regex;

/// One entry of the scanner's ordered pattern table
pub(crate) struct TokenRule {
    /// Category to emit, or `None` for input that is matched and dropped
    pub category: Option<Category>,
    /// Pattern anchored at the scan position
    pub pattern: Regex,
}

impl TokenRule {
    fn new(category: Option<Category>, pattern: &str) -> Self {
        TokenRule {
            category,
            pattern: Regex::new(pattern).expect("token pattern must compile"),
        }
    }

    /// Length in bytes of the match at the start of `input`, if any
    pub fn match_len(&self, input: &str) -> Option<usize> {
        self.pattern
            .find(input)
            .map(|m| m.end())
            .filter(|&len| len > 0)
    }
}

lazy_static::lazy_static! {
    /// First match wins. The identifier class swallows `+` and `-`, which
    /// leaves the literal rule reachable only for parentheses.
    pub(crate) static ref TOKEN_RULES: Vec<TokenRule> = vec![
        TokenRule::new(None, r"^\s"),
        TokenRule::new(Some(Category::Real), r"^[+-]?[0-9]*\.[0-9]+"),
        TokenRule::new(Some(Category::Integer), r"^[+-]?[0-9]+"),
        TokenRule::new(Some(Category::String), r#"^"(?:\\.|[^\\"])*""#),
        TokenRule::new(Some(Category::Identifier), r#"^[^\s"()]+"#),
        TokenRule::new(Some(Category::Literal), r"^[()+\-]"),
    ];
}
