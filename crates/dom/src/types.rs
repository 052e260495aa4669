use std::fmt;

/// Handle into a [`Document`](crate::Document)'s node arena.
///
/// A `NodeId` is only meaningful together with the document that produced it;
/// handles from one document must not be used with another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

/// A value accepted by `append` and `replace_children`: either an existing
/// node, or data to be wrapped as a new text node.
#[derive(Clone, Debug)]
pub enum Content {
    Node(NodeId),
    Text(String),
}

impl Content {
    /// Coerce any displayable value into text content.
    pub fn text(value: impl fmt::Display) -> Self {
        Content::Text(value.to_string())
    }
}

impl From<NodeId> for Content {
    fn from(id: NodeId) -> Self {
        Content::Node(id)
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Content::Text(value.to_string())
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Content::Text(value)
    }
}
