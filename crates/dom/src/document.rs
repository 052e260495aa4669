use crate::types::{Content, NodeId};
use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum DomError {
    NotAnElement(NodeId),
    NotAContainer(NodeId),
    CycleDetected { parent: NodeId, child: NodeId },
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomError::NotAnElement(id) => write!(f, "node {id:?} is not an element"),
            DomError::NotAContainer(id) => write!(f, "node {id:?} cannot have children"),
            DomError::CycleDetected { parent, child } => {
                write!(f, "inserting {child:?} under {parent:?} would create a cycle")
            }
        }
    }
}

impl std::error::Error for DomError {}

pub(crate) struct NodeRecord {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl NodeRecord {
    fn allows_children(&self) -> bool {
        matches!(self.kind, NodeKind::Element { .. })
    }
}

pub(crate) enum NodeKind {
    Element {
        name: String,
        attributes: Vec<(String, String)>,
    },
    Text {
        text: String,
    },
}

/// Arena-backed document tree.
///
/// Node records are never freed; removal only unlinks them from their
/// parent, so every [`NodeId`] stays valid for the document's lifetime.
pub struct Document {
    nodes: Vec<NodeRecord>,
}

impl Document {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Number of node records allocated so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Create a detached element node. Tag names are normalized to
    /// lowercase at creation.
    pub fn create_element(&mut self, tag_name: &str) -> NodeId {
        self.insert(NodeKind::Element {
            name: tag_name.to_ascii_lowercase(),
            attributes: Vec::new(),
        })
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, content: impl Into<String>) -> NodeId {
        self.insert(NodeKind::Text {
            text: content.into(),
        })
    }

    fn insert(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeRecord {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    pub(crate) fn record(&self, id: NodeId) -> &NodeRecord {
        &self.nodes[id.0 as usize]
    }

    fn record_mut(&mut self, id: NodeId) -> &mut NodeRecord {
        &mut self.nodes[id.0 as usize]
    }

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        match &self.record(id).kind {
            NodeKind::Element { name, .. } => Some(name),
            NodeKind::Text { .. } => None,
        }
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        match &self.record(id).kind {
            NodeKind::Text { text } => Some(text),
            NodeKind::Element { .. } => None,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.record(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.record(id).children
    }

    /// Append values to the end of `target`'s child sequence, in call order.
    ///
    /// Node values are moved: a node that already has a parent is detached
    /// from it first. Non-node values become new text nodes. Rejects before
    /// the first structural write, so a failed call leaves the tree
    /// untouched.
    pub fn append<I>(&mut self, target: NodeId, values: I) -> Result<(), DomError>
    where
        I: IntoIterator,
        I::Item: Into<Content>,
    {
        let values: Vec<Content> = values.into_iter().map(Into::into).collect();
        self.ensure_container(target)?;
        for value in &values {
            if let Content::Node(node) = value {
                self.ensure_attachable(target, *node)?;
            }
        }
        for value in values {
            let child = match value {
                Content::Node(node) => node,
                Content::Text(text) => self.create_text(text),
            };
            self.attach(target, child);
        }
        Ok(())
    }

    /// Replace `target`'s entry in its parent's child sequence with
    /// `replacement`, keeping the position. Silent no-op when `target` has
    /// no parent (the replacement is dropped with no effect). `target`'s
    /// own parent reference is left as-is.
    pub fn replace_with(&mut self, target: NodeId, replacement: NodeId) -> Result<(), DomError> {
        if target == replacement {
            return Ok(());
        }
        let Some(parent) = self.record(target).parent else {
            return Ok(());
        };
        self.ensure_attachable(parent, replacement)?;
        // A stale parent link (left behind by an earlier replacement) has
        // no entry to swap; nothing to do then.
        if !self.record(parent).children.contains(&target) {
            return Ok(());
        }
        // Detach first: the replacement may be a sibling, and pulling it
        // out shifts positions.
        self.detach(replacement);
        if let Some(pos) = self
            .record(parent)
            .children
            .iter()
            .position(|c| *c == target)
        {
            self.record_mut(parent).children[pos] = replacement;
            self.record_mut(replacement).parent = Some(parent);
        }
        Ok(())
    }

    /// Detach all current children of `target`, then append `values` as in
    /// [`append`](Self::append).
    pub fn replace_children<I>(&mut self, target: NodeId, values: I) -> Result<(), DomError>
    where
        I: IntoIterator,
        I::Item: Into<Content>,
    {
        let values: Vec<Content> = values.into_iter().map(Into::into).collect();
        self.ensure_container(target)?;
        for value in &values {
            if let Content::Node(node) = value {
                self.ensure_attachable(target, *node)?;
            }
        }
        let old = std::mem::take(&mut self.record_mut(target).children);
        for child in old {
            self.record_mut(child).parent = None;
        }
        for value in values {
            let child = match value {
                Content::Node(node) => node,
                Content::Text(text) => self.create_text(text),
            };
            self.attach(target, child);
        }
        Ok(())
    }

    /// Unlink `target` from its parent. No-op when already parentless.
    pub fn remove(&mut self, target: NodeId) {
        self.detach(target);
    }

    pub fn set_attribute(&mut self, target: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        match &mut self.record_mut(target).kind {
            NodeKind::Element { attributes, .. } => {
                if let Some((_, existing)) = attributes.iter_mut().find(|(k, _)| k == name) {
                    *existing = value.to_string();
                } else {
                    attributes.push((name.to_string(), value.to_string()));
                }
                Ok(())
            }
            NodeKind::Text { .. } => {
                debug_assert!(false, "attribute access on a text node");
                Err(DomError::NotAnElement(target))
            }
        }
    }

    pub fn get_attribute(&self, target: NodeId, name: &str) -> Result<Option<&str>, DomError> {
        match &self.record(target).kind {
            NodeKind::Element { .. } => Ok(self.attr(target, name)),
            NodeKind::Text { .. } => {
                debug_assert!(false, "attribute access on a text node");
                Err(DomError::NotAnElement(target))
            }
        }
    }

    /// Removing a name that is not present is a no-op.
    pub fn remove_attribute(&mut self, target: NodeId, name: &str) -> Result<(), DomError> {
        match &mut self.record_mut(target).kind {
            NodeKind::Element { attributes, .. } => {
                attributes.retain(|(k, _)| k != name);
                Ok(())
            }
            NodeKind::Text { .. } => {
                debug_assert!(false, "attribute access on a text node");
                Err(DomError::NotAnElement(target))
            }
        }
    }

    pub(crate) fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.record(id).kind {
            NodeKind::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str()),
            NodeKind::Text { .. } => None,
        }
    }

    fn ensure_container(&self, target: NodeId) -> Result<(), DomError> {
        if !self.record(target).allows_children() {
            debug_assert!(false, "parent node cannot have children");
            return Err(DomError::NotAContainer(target));
        }
        Ok(())
    }

    fn ensure_attachable(&self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if parent == child || self.is_descendant(child, parent) {
            debug_assert!(false, "cannot create cycle");
            return Err(DomError::CycleDetected { parent, child });
        }
        Ok(())
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        #[cfg(any(test, feature = "debug-stats"))]
        log::trace!(target: "dom.mutate", "attach {child:?} under {parent:?}");
        self.record_mut(parent).children.push(child);
        self.record_mut(child).parent = Some(parent);
    }

    fn detach(&mut self, node: NodeId) {
        // A replaced node keeps its old parent link, so the entry may
        // already be gone; retain tolerates that.
        if let Some(parent) = self.record_mut(node).parent.take() {
            self.record_mut(parent).children.retain(|c| *c != node);
        }
    }

    fn is_descendant(&self, ancestor: NodeId, maybe_descendant: NodeId) -> bool {
        let mut stack = Vec::new();
        stack.extend(self.record(ancestor).children.iter().copied());
        while let Some(current) = stack.pop() {
            if current == maybe_descendant {
                return true;
            }
            stack.extend(self.record(current).children.iter().copied());
        }
        false
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
