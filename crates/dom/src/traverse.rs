use crate::document::Document;
use crate::types::NodeId;

/// Depth-first search of the subtree rooted at `root` (inclusive) for the
/// first node whose `id` attribute equals `ident`. Stack-based, so siblings
/// are visited last-first; any match is returned as soon as it is popped.
/// An absent root is not found, never an error.
pub fn find(doc: &Document, root: Option<NodeId>, ident: &str) -> Option<NodeId> {
    let mut stack = vec![root?];
    while let Some(current) = stack.pop() {
        if doc.attr(current, "id") == Some(ident) {
            #[cfg(any(test, feature = "debug-stats"))]
            log::trace!(target: "dom.find", "matched {current:?} for #{ident}");
            return Some(current);
        }
        stack.extend(doc.children(current).iter().copied());
    }
    None
}

/// Concatenated content of every text node in the subtree, document order.
pub fn text_content(doc: &Document, root: NodeId) -> String {
    let mut out = String::new();
    collect_text(doc, root, &mut out);
    out
}

fn collect_text(doc: &Document, node: NodeId, out: &mut String) {
    if let Some(text) = doc.text(node) {
        out.push_str(text);
        return;
    }
    for child in doc.children(node) {
        collect_text(doc, *child, out);
    }
}
