//! Top-level frame discovery.

use trellis_core::{DesignNode, NodeKind};

/// Reference to a frame eligible for generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRef {
    pub id: String,
    pub name: String,
}

/// Collect every FRAME that sits directly under a CANVAS page of the
/// document root, in document order.
///
/// Nodes of any other kind at those two levels are skipped silently.
/// An empty result means the document has nothing to generate from; the
/// caller treats that as a no-op, not an error.
pub fn extract_frames(root: &DesignNode) -> Vec<FrameRef> {
    let mut frames = Vec::new();
    for page in &root.children {
        if page.kind != NodeKind::Canvas {
            continue;
        }
        for child in &page.children {
            if child.kind == NodeKind::Frame {
                frames.push(FrameRef {
                    id: child.id.clone(),
                    name: child.name.clone(),
                });
            }
        }
    }
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: serde_json::Value) -> DesignNode {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_extracts_frames_under_canvases() {
        let root = document(json!({
            "id": "0:0",
            "name": "Document",
            "type": "DOCUMENT",
            "children": [
                {
                    "id": "0:1",
                    "name": "Page 1",
                    "type": "CANVAS",
                    "children": [
                        { "id": "1:1", "name": "Home", "type": "FRAME" },
                        { "id": "1:2", "name": "Sticky Note", "type": "STICKY" },
                        { "id": "1:3", "name": "Settings", "type": "FRAME" }
                    ]
                },
                {
                    "id": "0:2",
                    "name": "Page 2",
                    "type": "CANVAS",
                    "children": [
                        { "id": "2:1", "name": "Login", "type": "FRAME" }
                    ]
                }
            ]
        }));

        let frames = extract_frames(&root);
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].id, "1:1");
        assert_eq!(frames[1].name, "Settings");
        assert_eq!(frames[2].id, "2:1");
    }

    #[test]
    fn test_non_canvas_pages_are_skipped() {
        let root = document(json!({
            "id": "0:0",
            "name": "Document",
            "type": "DOCUMENT",
            "children": [
                {
                    "id": "0:1",
                    "name": "Not a page",
                    "type": "SECTION",
                    "children": [
                        { "id": "1:1", "name": "Orphan", "type": "FRAME" }
                    ]
                }
            ]
        }));

        assert!(extract_frames(&root).is_empty());
    }

    #[test]
    fn test_nested_frames_are_not_top_level() {
        let root = document(json!({
            "id": "0:0",
            "name": "Document",
            "type": "DOCUMENT",
            "children": [
                {
                    "id": "0:1",
                    "name": "Page 1",
                    "type": "CANVAS",
                    "children": [
                        {
                            "id": "1:1",
                            "name": "Home",
                            "type": "FRAME",
                            "children": [
                                { "id": "1:2", "name": "Inner", "type": "FRAME" }
                            ]
                        }
                    ]
                }
            ]
        }));

        let frames = extract_frames(&root);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].id, "1:1");
    }

    #[test]
    fn test_empty_document_yields_no_frames() {
        let root = document(json!({ "id": "0:0", "name": "Document", "type": "DOCUMENT" }));
        assert!(extract_frames(&root).is_empty());
    }
}
