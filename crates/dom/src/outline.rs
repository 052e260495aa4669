//! Indented one-line-per-node preview of a subtree, for tests and
//! diagnostics. Not a stable format.

use crate::document::Document;
use crate::types::NodeId;

const PREVIEW_CHARS: usize = 40;

pub fn outline(doc: &Document, root: NodeId, cap: usize) -> Vec<String> {
    fn walk(doc: &Document, node: NodeId, depth: usize, out: &mut Vec<String>, left: &mut usize) {
        if *left == 0 {
            return;
        }
        *left -= 1;
        let indent = "  ".repeat(depth);
        if let Some(name) = doc.tag_name(node) {
            let mut line = format!("{indent}<{name}");
            if let Some(id) = doc.attr(node, "id") {
                line.push_str(&format!(r#" id="{id}""#));
            }
            line.push('>');
            out.push(line);
            for child in doc.children(node) {
                walk(doc, *child, depth + 1, out, left);
            }
        } else if let Some(text) = doc.text(node) {
            let mut preview = String::new();
            push_preview(&mut preview, text, PREVIEW_CHARS);
            out.push(format!("{indent}\"{preview}\""));
        }
    }

    let mut out = Vec::new();
    let mut left = cap;
    walk(doc, root, 0, &mut out, &mut left);
    out
}

fn push_preview(out: &mut String, s: &str, max_chars: usize) {
    let mut truncated = false;
    for (i, ch) in s.chars().enumerate() {
        if i == max_chars {
            truncated = true;
            break;
        }
        out.push(if ch == '\n' { ' ' } else { ch });
    }
    if truncated {
        out.push('…');
    }
}

#[cfg(test)]
mod tests {
    use super::outline;
    use crate::Document;

    #[test]
    fn renders_an_indented_tree() {
        let mut doc = Document::new();
        let root = doc.create_element("div");
        doc.set_attribute(root, "id", "app").expect("set");
        let p = doc.create_element("p");
        doc.append(p, ["hello"]).expect("append");
        doc.append(root, [p]).expect("append");
        let lines = outline(&doc, root, 10);
        assert_eq!(lines, ["<div id=\"app\">", "  <p>", "    \"hello\""]);
    }

    #[test]
    fn caps_the_line_count_and_truncates_previews() {
        let mut doc = Document::new();
        let root = doc.create_element("ul");
        for _ in 0..5 {
            let li = doc.create_element("li");
            doc.append(li, ["x".repeat(60)]).expect("append");
            doc.append(root, [li]).expect("append");
        }
        let lines = outline(&doc, root, 4);
        assert_eq!(lines.len(), 4);
        assert!(lines[2].ends_with("…\""));
    }
}
