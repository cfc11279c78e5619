//! Unified token / syntax-tree node
//!
//! The scanner emits [`Node::Leaf`] values as tokens and the parser reuses
//! them untouched as terminals of the tree it builds, so there is no separate
//! AST type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of node tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    // Token categories (scanner only)
    /// Decimal number with a mandatory fractional part: `3.14`, `-.5`
    Real,
    /// Catch-all symbol: `define`, `+`, `set!`
    Identifier,
    /// Whole number: `42`, `-7`
    Integer,
    /// Double-quoted string, escapes kept verbatim
    String,
    /// Single delimiter character: `(`, `)`, `+`, `-`
    Literal,

    // Grammar categories (parser only)
    /// Root of every tree
    Program,
    /// Expression unit: one Atom or List
    SExpr,
    /// Parenthesized list
    List,
    /// List body
    Seq,
    /// Single-token expression
    Atom,
}

impl Category {
    /// Returns true for the categories the scanner produces
    pub fn is_token(self) -> bool {
        matches!(
            self,
            Category::Real
                | Category::Identifier
                | Category::Integer
                | Category::String
                | Category::Literal
        )
    }

    /// Returns true for the categories the parser produces
    pub fn is_grammar(self) -> bool {
        !self.is_token()
    }

    /// Returns true for the token categories an Atom may wrap
    pub fn is_atomic(self) -> bool {
        matches!(
            self,
            Category::Identifier | Category::Integer | Category::Real | Category::String
        )
    }

    /// Category name as printed in tree traces
    pub fn name(self) -> &'static str {
        match self {
            Category::Real => "Real",
            Category::Identifier => "Identifier",
            Category::Integer => "Integer",
            Category::String => "String",
            Category::Literal => "Literal",
            Category::Program => "Program",
            Category::SExpr => "SExpr",
            Category::List => "List",
            Category::Seq => "Seq",
            Category::Atom => "Atom",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token or a syntax-tree node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// Terminal carrying the exact source text it was scanned from
    Leaf {
        /// Lexical category
        category: Category,
        /// Matched source text
        text: String,
    },
    /// Nonterminal owning its children in source order
    Branch {
        /// Grammar category
        category: Category,
        /// Child nodes, left to right
        children: Vec<Node>,
    },
}

impl Node {
    /// Creates a terminal node
    ///
    /// Leaves carry token categories only. A stray `)` in atom position stays
    /// a `Literal` leaf, so it needs no exception here.
    pub fn leaf(category: Category, text: impl Into<String>) -> Self {
        debug_assert!(category.is_token(), "{} is not a token category", category);
        Node::Leaf {
            category,
            text: text.into(),
        }
    }

    /// Creates a nonterminal node
    pub fn branch(category: Category, children: Vec<Node>) -> Self {
        debug_assert!(category.is_grammar(), "{} is not a grammar category", category);
        Node::Branch { category, children }
    }

    /// The node's tag
    pub fn category(&self) -> Category {
        match self {
            Node::Leaf { category, .. } | Node::Branch { category, .. } => *category,
        }
    }

    /// Source text of a leaf; empty for branches
    pub fn text(&self) -> &str {
        match self {
            Node::Leaf { text, .. } => text,
            Node::Branch { .. } => "",
        }
    }

    /// Children of a branch; empty for leaves
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf { .. } => &[],
            Node::Branch { children, .. } => children,
        }
    }

    /// Returns true for terminal nodes
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Returns true if this is a Literal leaf with exactly `text`
    pub fn is_literal(&self, text: &str) -> bool {
        match self {
            Node::Leaf {
                category: Category::Literal,
                text: t,
            } => t == text,
            _ => false,
        }
    }

    /// Iterates the terminals of this subtree, left to right
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves { stack: vec![self] }
    }
}

/// Depth-first iterator over the terminals of a tree
pub struct Leaves<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                Node::Leaf { .. } => return Some(node),
                Node::Branch { children, .. } => self.stack.extend(children.iter().rev()),
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_groups() {
        assert!(Category::Literal.is_token());
        assert!(Category::Seq.is_grammar());
        assert!(Category::String.is_atomic());
        assert!(!Category::Literal.is_atomic());
    }

    #[test]
    fn test_accessors() {
        let tok = Node::leaf(Category::Integer, "42");
        assert_eq!(tok.category(), Category::Integer);
        assert_eq!(tok.text(), "42");
        assert!(tok.children().is_empty());

        let atom = Node::branch(Category::Atom, vec![tok.clone()]);
        assert_eq!(atom.text(), "");
        assert_eq!(atom.children(), &[tok]);
        assert!(!atom.is_leaf());
    }

    #[test]
    fn test_is_literal() {
        assert!(Node::leaf(Category::Literal, ")").is_literal(")"));
        assert!(!Node::leaf(Category::Identifier, ")").is_literal(")"));
        assert!(!Node::leaf(Category::Literal, "(").is_literal(")"));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Program is not a token category")]
    fn test_leaf_rejects_grammar_category() {
        Node::leaf(Category::Program, "x");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Integer is not a grammar category")]
    fn test_branch_rejects_token_category() {
        Node::branch(Category::Integer, vec![]);
    }

    #[test]
    fn test_leaves_order() {
        let tree = Node::branch(
            Category::List,
            vec![
                Node::leaf(Category::Literal, "("),
                Node::branch(
                    Category::Seq,
                    vec![
                        Node::leaf(Category::Identifier, "a"),
                        Node::leaf(Category::Identifier, "b"),
                    ],
                ),
                Node::leaf(Category::Literal, ")"),
            ],
        );
        let texts: Vec<&str> = tree.leaves().map(Node::text).collect();
        assert_eq!(texts, vec!["(", "a", "b", ")"]);
    }
}
