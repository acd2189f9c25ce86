//! Parse-tree nodes and unevaluated sub-expressions captured as values.

use std::fmt;
use std::sync::Arc;

/// A parse-tree node. Leaves carry a token; interior nodes carry children,
/// the first of which is the head (operator or callee).
#[derive(Debug, PartialEq)]
pub struct Node {
    pub token: String,
    pub children: Vec<Arc<Node>>,
}

impl Node {
    pub fn leaf<S: Into<String>>(token: S) -> Arc<Node> {
        Arc::new(Node {
            token: token.into(),
            children: Vec::new(),
        })
    }

    pub fn branch(children: Vec<Arc<Node>>) -> Arc<Node> {
        Arc::new(Node {
            token: String::new(),
            children,
        })
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Pretty-prints the tree as an s-expression: `(+ 1 (* 2 x))`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_leaf() {
            return f.write_str(&self.token);
        }
        f.write_str("(")?;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", child)?;
        }
        f.write_str(")")
    }
}

/// The arguments of a parse node, kept unevaluated.
///
/// Holds shared handles into the parse tree, so the tree outlives every
/// `AstValue` taken from it.
#[derive(Debug, Clone)]
pub struct AstValue {
    parent: Arc<Node>,
    args: Vec<Arc<Node>>,
}

impl AstValue {
    pub fn parent(&self) -> &Arc<Node> {
        &self.parent
    }

    /// Every child of the parent except the head.
    pub fn args(&self) -> &[Arc<Node>] {
        &self.args
    }
}

/// Two captures are equal when they refer to the same parse node.
impl PartialEq for AstValue {
    fn eq(&self, other: &AstValue) -> bool {
        Arc::ptr_eq(&self.parent, &other.parent)
    }
}

impl fmt::Display for AstValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.parent)
    }
}

/// Captures `parent`'s arguments as an `AstValue`. A leaf yields no arguments.
pub fn wrap_subtree(parent: &Arc<Node>) -> AstValue {
    AstValue {
        parent: parent.clone(),
        args: parent.children.iter().skip(1).cloned().collect(),
    }
}
