//! Parser configuration

use serde::{Deserialize, Serialize};

/// How list bodies are shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SeqShape {
    /// Right-leaning chain: every further element of a list body opens a new
    /// nested `Seq` child. `()` is rejected in this mode.
    #[default]
    Nested,
    /// One `Seq` per list body holding the sibling `SExpr`s directly; `()` is
    /// an empty `List` with no `Seq` child.
    Flat,
}

/// Default bound on parser recursion depth
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options for [`SExprParser`](super::SExprParser)
///
/// The default reproduces the reference tree shapes exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Require the token closing a list to be a literal `)`
    ///
    /// Both list body layouts already stop only on a literal `)`, so this
    /// never changes which inputs are accepted. It guards the close against
    /// future body rules.
    pub strict_close: bool,
    /// List body layout
    pub seq_shape: SeqShape,
    /// Maximum parser recursion depth before the parse fails
    ///
    /// Every `List` counts one level, and under [`SeqShape::Nested`] every
    /// `Seq` in a list body's chain counts one more, so the default also caps
    /// nested-mode lists at roughly this many elements.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            strict_close: false,
            seq_shape: SeqShape::Nested,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Options with closing-delimiter validation and flat list bodies
    pub fn strict() -> Self {
        ParseOptions {
            strict_close: true,
            seq_shape: SeqShape::Flat,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
