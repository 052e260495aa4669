use crate::document::{Document, NodeKind};
use crate::types::NodeId;

/// Tags that never get a closing tag; their children are not serialized.
fn is_void_tag(name: &str) -> bool {
    matches!(
        name,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}

impl Document {
    /// Serialize the node itself: open tag, attributes in insertion order,
    /// children, closing tag unless the tag is void. Text nodes serialize
    /// as their raw content; nothing is escaped.
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_outer(id, &mut out);
        out
    }

    /// Serialize the node's children only, in sequence order.
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_inner(id, &mut out);
        out
    }

    fn write_outer(&self, id: NodeId, out: &mut String) {
        match &self.record(id).kind {
            NodeKind::Element { name, attributes } => {
                out.push('<');
                out.push_str(name);
                for (attr, value) in attributes {
                    out.push(' ');
                    out.push_str(attr);
                    out.push_str("=\"");
                    out.push_str(value);
                    out.push('"');
                }
                out.push('>');
                if !is_void_tag(name) {
                    self.write_inner(id, out);
                    out.push_str("</");
                    out.push_str(name);
                    out.push('>');
                }
            }
            NodeKind::Text { text } => out.push_str(text),
        }
    }

    fn write_inner(&self, id: NodeId, out: &mut String) {
        for child in &self.record(id).children {
            self.write_outer(*child, out);
        }
    }
}
