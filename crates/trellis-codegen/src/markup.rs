//! Recursive markup rendering.

use trellis_core::{DesignNode, NodeKind};

use crate::sanitize;

/// Render one node (and its subtree) as nested Angular template markup.
///
/// Dispatches on node kind: FRAME and GROUP become containers that
/// recurse into their children one level deeper, RECTANGLE and TEXT
/// become leaves that carry a `(click)` binding whenever the node has
/// any interaction attached, VECTOR and LINE become styling-only
/// leaves, and every other kind falls back to a generic leaf `<div>`.
///
/// Indentation is two spaces per depth level. It is cosmetic only, but
/// the output is byte-stable for identical input.
pub fn render_markup(node: &DesignNode, depth: usize) -> String {
    let indent = "  ".repeat(depth);
    let class = sanitize::class_name(&node.name);

    match node.kind {
        NodeKind::Frame | NodeKind::Group => {
            let mut out = format!("{indent}<div class=\"{class}\">\n");
            for child in &node.children {
                out.push_str(&render_markup(child, depth + 1));
            }
            out.push_str(&format!("{indent}</div>\n"));
            out
        }
        NodeKind::Rectangle => {
            format!(
                "{indent}<div class=\"{class}\"{}></div>\n",
                click_binding(node)
            )
        }
        NodeKind::Text => {
            let text = node.characters.as_deref().unwrap_or("");
            format!(
                "{indent}<p class=\"{class}\"{}>{text}</p>\n",
                click_binding(node)
            )
        }
        NodeKind::Vector | NodeKind::Line => {
            format!("{indent}<div class=\"{class}\"></div>\n")
        }
        _ => format!("{indent}<div class=\"{class}\"></div>\n"),
    }
}

/// The binding is attached whenever interactions exist, independent of
/// whether method synthesis ultimately produced a stub for it.
fn click_binding(node: &DesignNode) -> String {
    if node.has_interactions() {
        format!(
            " (click)=\"on{}Click()\"",
            sanitize::component_name(&node.name)
        )
    } else {
        String::new()
    }
}
