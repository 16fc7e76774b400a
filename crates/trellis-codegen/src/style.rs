//! Recursive stylesheet rendering.
//!
//! One rule block is emitted per named node with a bounding box. All
//! coordinates are translated from the document's absolute canvas space
//! into offsets relative to the nearest bounded ancestor, which is what
//! `position: absolute` needs inside the generated container.

use trellis_core::{BoundingBox, DesignNode, NodeKind};

use crate::sanitize;

/// Render the full SCSS artifact for one frame subtree.
///
/// The output opens with a fixed `.frame-container` root rule pinning
/// the component to the frame's own size, followed by one rule per
/// qualifying node in pre-order. The frame node itself also gets a
/// per-node rule; its reference bounds are its own, so it lands at
/// `left: 0; top: 0`.
pub fn render_stylesheet(frame: &DesignNode) -> String {
    let mut out = root_rule(frame);
    out.push('\n');

    let reference = frame.absolute_bounding_box.unwrap_or_default();
    render_node(frame, &reference, &mut out);
    out
}

/// The container rule. Unlike per-node rules this one always carries a
/// `background-color`, falling back to the literal `transparent`.
fn root_rule(frame: &DesignNode) -> String {
    let background = frame
        .first_solid_fill()
        .map(|color| color.to_css())
        .unwrap_or_else(|| "transparent".to_string());

    let mut rule = String::from(".frame-container {\n  position: relative;\n");
    if let Some(bounds) = &frame.absolute_bounding_box {
        rule.push_str(&format!("  width: {}px;\n", bounds.width));
        rule.push_str(&format!("  height: {}px;\n", bounds.height));
    }
    rule.push_str("  overflow: hidden;\n");
    rule.push_str(&format!("  background-color: {background};\n}}\n"));
    rule
}

fn render_node(node: &DesignNode, reference: &BoundingBox, out: &mut String) {
    let skipped = node.kind == NodeKind::Document || node.kind == NodeKind::Canvas;
    if !skipped && !node.name.is_empty() {
        if let Some(bounds) = &node.absolute_bounding_box {
            push_rule(node, bounds, reference, out);
        }
    }

    // A node without bounds contributes no rule, but its children still
    // position themselves against the last-known ancestor bounds.
    let next = node.absolute_bounding_box.as_ref().unwrap_or(reference);
    for child in &node.children {
        render_node(child, next, out);
    }
}

fn push_rule(node: &DesignNode, bounds: &BoundingBox, reference: &BoundingBox, out: &mut String) {
    let class = sanitize::class_name(&node.name);

    out.push_str(&format!(".{class} {{\n"));
    out.push_str("  position: absolute;\n");
    out.push_str(&format!("  left: {}px;\n", bounds.x - reference.x));
    out.push_str(&format!("  top: {}px;\n", bounds.y - reference.y));
    out.push_str(&format!("  width: {}px;\n", bounds.width));
    out.push_str(&format!("  height: {}px;\n", bounds.height));

    if let Some(fill) = node.first_solid_fill() {
        out.push_str(&format!("  background-color: {};\n", fill.to_css()));
    }

    if let Some(stroke) = node.first_solid_stroke() {
        let weight = node.stroke_weight.unwrap_or(1.0);
        out.push_str(&format!(
            "  border: {}px solid {};\n",
            weight,
            stroke.to_css()
        ));
    }

    if let Some(radius) = node.corner_radius {
        if radius != 0.0 {
            out.push_str(&format!("  border-radius: {radius}px;\n"));
        }
    }

    if node.kind == NodeKind::Text {
        if let Some(style) = &node.style {
            push_typography(node, style, out);
        }
    }

    out.push_str("}\n\n");
}

fn push_typography(
    node: &DesignNode,
    style: &trellis_core::TextStyle,
    out: &mut String,
) {
    let family = style.font_family.as_deref().unwrap_or("inherit");
    out.push_str(&format!("  font-family: {family};\n"));
    out.push_str(&format!(
        "  font-size: {}px;\n",
        style.font_size.unwrap_or(16.0)
    ));
    match style.font_weight {
        Some(weight) => out.push_str(&format!("  font-weight: {weight};\n")),
        None => out.push_str("  font-weight: normal;\n"),
    }
    match style.line_height_px {
        Some(px) => out.push_str(&format!("  line-height: {px}px;\n")),
        None => out.push_str("  line-height: normal;\n"),
    }
    let align = style
        .text_align_horizontal
        .map_or("left", |align| align.to_css());
    out.push_str(&format!("  text-align: {align};\n"));

    if let Some(color) = node.first_solid_fill() {
        out.push_str(&format!("  color: {};\n", color.to_css()));
    }
}
