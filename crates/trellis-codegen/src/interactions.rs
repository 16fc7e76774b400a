//! Interactive-node collection and behavior method synthesis.

use indexmap::IndexMap;
use trellis_core::DesignNode;

use crate::sanitize;

/// Collect every node in the subtree carrying at least one interaction.
///
/// Depth-first pre-order; children are visited in document order, so the
/// result is deterministic for a given tree.
pub fn collect_interactive(node: &DesignNode) -> Vec<&DesignNode> {
    let mut found = Vec::new();
    collect_into(node, &mut found);
    found
}

fn collect_into<'tree>(node: &'tree DesignNode, found: &mut Vec<&'tree DesignNode>) {
    if node.has_interactions() {
        found.push(node);
    }
    for child in &node.children {
        collect_into(child, found);
    }
}

/// One synthesized click-handler stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BehaviorMethod {
    /// Method name, `on<ComponentName>Click`.
    pub name: String,
    /// Id of the node the handler should navigate to. Empty when the
    /// document omitted the destination.
    pub destination_id: String,
}

impl BehaviorMethod {
    /// TypeScript source of the stub. Navigation itself is left to the
    /// developer; the stub only records intent.
    pub fn to_source(&self) -> String {
        format!(
            "  {}(): void {{\n    // Navigate to destination: {}\n    console.log('Navigating to {}');\n  }}\n",
            self.name, self.destination_id, self.destination_id
        )
    }
}

/// Synthesize the click-handler stubs for one frame subtree.
///
/// For every collected interactive node, every interaction with a
/// click-equivalent trigger whose actions include a node-navigation
/// action yields one method named `on<ComponentName>Click`. When several
/// qualifying actions exist in one interaction the last destination
/// wins. Methods are deduplicated by name across the whole frame; the
/// first synthesized definition is kept even if a later interaction with
/// the same name carries a different destination.
pub fn synthesize_methods(frame: &DesignNode) -> Vec<BehaviorMethod> {
    let mut methods: IndexMap<String, BehaviorMethod> = IndexMap::new();

    for node in collect_interactive(frame) {
        for interaction in &node.interactions {
            if !interaction.is_click() {
                continue;
            }

            let mut destination = None;
            for action in &interaction.actions {
                if action.is_node_navigation() {
                    destination = Some(action.destination_id.clone().unwrap_or_default());
                }
            }

            let Some(destination_id) = destination else {
                continue;
            };

            let name = format!("on{}Click", sanitize::component_name(&node.name));
            if !methods.contains_key(&name) {
                methods.insert(
                    name.clone(),
                    BehaviorMethod {
                        name,
                        destination_id,
                    },
                );
            }
        }
    }

    methods.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(value: serde_json::Value) -> DesignNode {
        serde_json::from_value(value).unwrap()
    }

    fn click_to(destination: &str) -> serde_json::Value {
        json!({
            "trigger": { "type": "ON_CLICK" },
            "actions": [
                { "type": "NODE", "navigation": "NAVIGATE", "destinationId": destination }
            ]
        })
    }

    #[test]
    fn test_collects_in_preorder() {
        let frame = node(json!({
            "id": "1:0", "name": "Frame", "type": "FRAME",
            "interactions": [click_to("9:0")],
            "children": [
                {
                    "id": "1:1", "name": "A", "type": "GROUP",
                    "children": [
                        { "id": "1:2", "name": "B", "type": "RECTANGLE", "interactions": [click_to("9:1")] }
                    ]
                },
                { "id": "1:3", "name": "C", "type": "TEXT", "interactions": [click_to("9:2")] }
            ]
        }));

        let collected = collect_interactive(&frame);
        let ids: Vec<&str> = collected.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["1:0", "1:2", "1:3"]);
    }

    #[test]
    fn test_synthesizes_one_method_per_navigation() {
        let frame = node(json!({
            "id": "1:0", "name": "Home", "type": "FRAME",
            "children": [
                { "id": "1:1", "name": "Submit Button", "type": "RECTANGLE", "interactions": [click_to("42")] }
            ]
        }));

        let methods = synthesize_methods(&frame);
        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].name, "onSubmitButtonClick");
        assert_eq!(methods[0].destination_id, "42");

        let source = methods[0].to_source();
        assert!(source.contains("onSubmitButtonClick(): void"));
        assert!(source.contains("destination: 42"));
    }

    #[test]
    fn test_deduplicates_by_method_name() {
        // Two differently placed nodes with the same name collide; the
        // first definition wins, the second is dropped silently.
        let frame = node(json!({
            "id": "1:0", "name": "Home", "type": "FRAME",
            "children": [
                { "id": "1:1", "name": "Next", "type": "RECTANGLE", "interactions": [click_to("10")] },
                { "id": "1:2", "name": "Next", "type": "TEXT", "interactions": [click_to("20")] }
            ]
        }));

        let methods = synthesize_methods(&frame);
        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].destination_id, "10");
    }

    #[test]
    fn test_non_click_triggers_are_ignored() {
        let frame = node(json!({
            "id": "1:0", "name": "Home", "type": "FRAME",
            "children": [
                {
                    "id": "1:1", "name": "Card", "type": "RECTANGLE",
                    "interactions": [{
                        "trigger": { "type": "ON_HOVER" },
                        "actions": [
                            { "type": "NODE", "navigation": "NAVIGATE", "destinationId": "10" }
                        ]
                    }]
                }
            ]
        }));

        assert!(synthesize_methods(&frame).is_empty());
    }

    #[test]
    fn test_non_navigation_actions_contribute_nothing() {
        let frame = node(json!({
            "id": "1:0", "name": "Home", "type": "FRAME",
            "children": [
                {
                    "id": "1:1", "name": "Link", "type": "TEXT",
                    "interactions": [{
                        "trigger": { "type": "ON_CLICK" },
                        "actions": [
                            { "type": "URL" },
                            { "type": "NODE", "navigation": "SWAP", "destinationId": "10" }
                        ]
                    }]
                }
            ]
        }));

        assert!(synthesize_methods(&frame).is_empty());
    }

    #[test]
    fn test_last_qualifying_action_wins_destination() {
        let frame = node(json!({
            "id": "1:0", "name": "Home", "type": "FRAME",
            "children": [
                {
                    "id": "1:1", "name": "Go", "type": "RECTANGLE",
                    "interactions": [{
                        "trigger": { "type": "ON_CLICK" },
                        "actions": [
                            { "type": "NODE", "navigation": "NAVIGATE", "destinationId": "10" },
                            { "type": "NODE", "navigation": "NAVIGATE", "destinationId": "20" }
                        ]
                    }]
                }
            ]
        }));

        let methods = synthesize_methods(&frame);
        assert_eq!(methods[0].destination_id, "20");
    }
}
