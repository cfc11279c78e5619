//! Tree printing
//!
//! One line per node, children indented two spaces per level:
//!
//! ```text
//!    Program
//!        SExpr
//!           List
//!          Literal (
//!              Seq
//! ```
//!
//! The category name is right-aligned in a fixed-width column, followed by the
//! node text (empty for grammar nodes).

use crate::error::Result;
use crate::node::Node;
use std::fmt::{self, Write};

const NAME_WIDTH: usize = 10;

/// Renders `node` and its descendants as an indented trace
pub fn to_tree_string(node: &Node) -> String {
    node.to_string()
}

/// Renders `node` as pretty-printed JSON
pub fn to_json_string(node: &Node) -> Result<String> {
    Ok(serde_json::to_string_pretty(node)?)
}

fn write_tree<W: Write>(out: &mut W, node: &Node, depth: usize) -> fmt::Result {
    let indent = "  ".repeat(depth);
    let name = node.category().name();
    if node.text().is_empty() {
        writeln!(out, "{}{:>width$}", indent, name, width = NAME_WIDTH)?;
    } else {
        writeln!(
            out,
            "{}{:>width$} {}",
            indent,
            name,
            node.text(),
            width = NAME_WIDTH
        )?;
    }
    for child in node.children() {
        write_tree(out, child, depth + 1)?;
    }
    Ok(())
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_tree(f, self, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Category;

    #[test]
    fn test_tree_string() {
        let tree = Node::branch(
            Category::SExpr,
            vec![Node::branch(
                Category::Atom,
                vec![Node::leaf(Category::Integer, "42")],
            )],
        );
        let expected = "     SExpr\n        Atom\n       Integer 42\n";
        assert_eq!(to_tree_string(&tree), expected);
        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn test_json_round_trip() {
        let tree = Node::branch(
            Category::Program,
            vec![Node::leaf(Category::Literal, ")")],
        );
        let json = to_json_string(&tree).unwrap();
        let back: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tree);
    }
}
