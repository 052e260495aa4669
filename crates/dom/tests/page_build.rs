//! Drives the tree the way a markup builder does: construct, mutate by
//! handle, look nodes up by identifier, and read the serialized page back.

use dom::{Content, Document, NodeId, find, text_content};

fn build_page(doc: &mut Document) -> NodeId {
    let app = doc.create_element("div");
    doc.set_attribute(app, "id", "app").expect("set id");

    let header = doc.create_element("header");
    let title = doc.create_element("h1");
    doc.append(title, ["Welcome"]).expect("title text");
    doc.append(header, [title]).expect("header children");

    let content = doc.create_element("main");
    doc.set_attribute(content, "id", "content").expect("set id");
    let intro = doc.create_element("p");
    doc.append(intro, ["Nothing here yet."]).expect("intro text");
    doc.append(content, [intro]).expect("main children");

    doc.append(app, [header, content]).expect("page children");
    app
}

#[test]
fn builds_and_serializes_a_page() {
    let mut doc = Document::new();
    let app = build_page(&mut doc);
    assert_eq!(
        doc.outer_html(app),
        "<div id=\"app\"><header><h1>Welcome</h1></header>\
         <main id=\"content\"><p>Nothing here yet.</p></main></div>"
    );
}

#[test]
fn rerender_replaces_a_section_found_by_id() {
    let mut doc = Document::new();
    let app = build_page(&mut doc);

    let content = find(&doc, Some(app), "content").expect("content section");
    let list = doc.create_element("ul");
    for label in ["alpha", "beta"] {
        let li = doc.create_element("li");
        doc.append(li, [label]).expect("item text");
        doc.append(list, [li]).expect("list item");
    }
    doc.replace_children(content, [list]).expect("rerender");

    assert_eq!(
        doc.inner_html(content),
        "<ul><li>alpha</li><li>beta</li></ul>"
    );
    assert_eq!(text_content(&doc, content), "alphabeta");
    assert!(!doc.outer_html(app).contains("Nothing here yet."));
}

#[test]
fn moving_a_node_between_sections_keeps_one_parent() {
    let mut doc = Document::new();
    let app = build_page(&mut doc);
    let content = find(&doc, Some(app), "content").expect("content section");

    let badge = doc.create_element("span");
    doc.set_attribute(badge, "id", "badge").expect("set id");
    doc.append(badge, ["new"]).expect("badge text");
    doc.append(content, [badge]).expect("first home");
    // move it: append to another element detaches it from the first
    let header = doc.children(app)[0];
    doc.append(header, [badge]).expect("second home");

    assert_eq!(doc.parent(badge), Some(header));
    assert_eq!(find(&doc, Some(content), "badge"), None);
    assert_eq!(find(&doc, Some(app), "badge"), Some(badge));
    let html = doc.outer_html(app);
    assert_eq!(html.matches("<span id=\"badge\">").count(), 1);
}

#[test]
fn void_elements_close_nothing_in_a_full_page() {
    let mut doc = Document::new();
    let figure = doc.create_element("figure");
    let img = doc.create_element("img");
    doc.set_attribute(img, "src", "cat.png").expect("set src");
    let caption = doc.create_element("figcaption");
    doc.append(caption, [Content::text("A cat")]).expect("caption");
    doc.append(figure, [img, caption]).expect("figure children");
    assert_eq!(
        doc.outer_html(figure),
        "<figure><img src=\"cat.png\"><figcaption>A cat</figcaption></figure>"
    );
}
