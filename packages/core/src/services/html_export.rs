//! HTML Export
//!
//! Converts the component tree into an HTML string with Tailwind classes.
//! Pure and deterministic: the same tree always produces the same markup.
//!
//! The type-to-markup mapping is fixed. Types without a mapping (icon,
//! input, textarea, label) render as empty strings and are silently
//! dropped from the output.

use serde_json::Value;

use crate::models::{Node, NodeType};

/// Generate HTML for a sequence of nodes, one fragment per node joined
/// with newlines.
///
/// # Examples
///
/// ```rust
/// # use pagespace_core::models::Node;
/// # use pagespace_core::services::generate_html;
/// let html = generate_html(&[Node::text("Hi")]);
/// assert_eq!(html, r#"<p class="">Hi</p>"#);
/// ```
pub fn generate_html(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(render_node)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Space-joined style classes for a node
///
/// Uses the values of `props.tw` in key insertion order; falls back to a
/// raw `props.class` string when `tw` is absent.
fn class_string(node: &Node) -> String {
    if let Some(tw) = node.tw() {
        tw.values()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        node.props
            .get("class")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }
}

fn render_node(node: &Node) -> String {
    let classes = class_string(node);

    match node.node_type {
        NodeType::Text => {
            format!(
                r#"<p class="{}">{}</p>"#,
                classes,
                node.text_content().unwrap_or_default()
            )
        }
        NodeType::Button => {
            format!(
                r#"<button class="{}">{}</button>"#,
                classes,
                node.text_content().unwrap_or_default()
            )
        }
        NodeType::Image => {
            let src = node
                .props
                .get("src")
                .and_then(Value::as_str)
                .unwrap_or_default();
            format!(r#"<img src="{}" class="{}" alt="Image" />"#, src, classes)
        }
        NodeType::Divider => {
            format!(r#"<hr class="{}" />"#, classes)
        }
        NodeType::Video => {
            let video_id = node
                .props
                .get("videoId")
                .and_then(Value::as_str)
                .unwrap_or_default();
            format!(
                r#"<div class="{}"><iframe src="https://www.youtube.com/embed/{}" frameborder="0" allowfullscreen class="w-full h-full"></iframe></div>"#,
                classes, video_id
            )
        }
        NodeType::Container => {
            format!(
                r#"<div class="{}">{}</div>"#,
                classes,
                generate_html(&node.children)
            )
        }
        NodeType::Icon | NodeType::Input | NodeType::Textarea | NodeType::Label => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Node;
    use serde_json::json;

    #[test]
    fn test_text_node_markup() {
        let node = Node::new(
            NodeType::Text,
            json!({ "text": "Hello", "tw": { "size": "text-lg", "color": "text-white" } }),
        );
        assert_eq!(
            generate_html(&[node]),
            r#"<p class="text-lg text-white">Hello</p>"#
        );
    }

    #[test]
    fn test_container_recurses_with_class_order() {
        let child = Node::new(
            NodeType::Text,
            json!({ "text": "Hi", "tw": { "c": "text-lg" } }),
        );
        let tree = Node::with_children(
            NodeType::Container,
            json!({ "tw": { "a": "flex", "b": "gap-4" } }),
            vec![child],
        );

        assert_eq!(
            generate_html(&[tree]),
            r#"<div class="flex gap-4"><p class="text-lg">Hi</p></div>"#
        );
    }

    #[test]
    fn test_image_and_divider_markup() {
        let image = Node::new(
            NodeType::Image,
            json!({ "src": "/hero.png", "tw": { "width": "w-full" } }),
        );
        let divider = Node::new(NodeType::Divider, json!({ "tw": { "border": "border-t" } }));

        assert_eq!(
            generate_html(&[image, divider]),
            "<img src=\"/hero.png\" class=\"w-full\" alt=\"Image\" />\n<hr class=\"border-t\" />"
        );
    }

    #[test]
    fn test_video_embeds_player() {
        let video = Node::new(
            NodeType::Video,
            json!({ "videoId": "dQw4w9WgXcQ", "tw": { "height": "h-64" } }),
        );
        let html = generate_html(&[video]);
        assert!(html.starts_with(r#"<div class="h-64">"#));
        assert!(html.contains("https://www.youtube.com/embed/dQw4w9WgXcQ"));
        assert!(html.contains("allowfullscreen"));
    }

    #[test]
    fn test_unmapped_types_render_empty() {
        let icon = Node::new(NodeType::Icon, json!({ "tw": {} }));
        let input = Node::new(NodeType::Input, json!({ "tw": {} }));
        assert_eq!(generate_html(&[icon]), "");
        // Dropped nodes still occupy a joined line, matching list rendering
        assert_eq!(
            generate_html(&[Node::text("a"), input]),
            "<p class=\"\">a</p>\n"
        );
    }

    #[test]
    fn test_class_falls_back_to_raw_class_prop() {
        let node = Node::new(NodeType::Text, json!({ "text": "x", "class": "legacy-style" }));
        assert_eq!(generate_html(&[node]), r#"<p class="legacy-style">x</p>"#);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let tree = vec![Node::with_children(
            NodeType::Container,
            json!({ "tw": { "padding": "p-4", "bg": "bg-white", "flex": "flex" } }),
            vec![Node::button("Go")],
        )];
        assert_eq!(generate_html(&tree), generate_html(&tree));
    }
}
