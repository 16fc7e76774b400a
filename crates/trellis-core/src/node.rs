//! The design-document node tree.
//!
//! Mirrors the subset of the Figma file format the generator consumes.
//! Every field the API may omit is optional or defaulted so that a
//! partially populated node deserializes rather than failing the run.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// A single node in the design tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignNode {
    /// Node id, unique within the document.
    #[serde(default)]
    pub id: String,
    /// Human-readable layer name. Free text, may be empty.
    #[serde(default)]
    pub name: String,
    /// Node kind tag. Unrecognized kinds map to [`NodeKind::Other`].
    #[serde(rename = "type", default)]
    pub kind: NodeKind,
    /// Child nodes in document order.
    #[serde(default)]
    pub children: Vec<DesignNode>,
    /// Placement in the absolute canvas coordinate space.
    /// Absent for non-visual nodes.
    #[serde(default)]
    pub absolute_bounding_box: Option<BoundingBox>,
    /// Fill paints, topmost last.
    #[serde(default)]
    pub fills: Vec<Paint>,
    /// Stroke paints.
    #[serde(default)]
    pub strokes: Vec<Paint>,
    /// Stroke thickness in pixels.
    #[serde(default)]
    pub stroke_weight: Option<f64>,
    /// Corner radius in pixels.
    #[serde(default)]
    pub corner_radius: Option<f64>,
    /// Typography, present on TEXT nodes only.
    #[serde(default)]
    pub style: Option<TextStyle>,
    /// Literal text content, present on TEXT nodes only.
    #[serde(default)]
    pub characters: Option<String>,
    /// Prototype interactions attached to this node.
    #[serde(default)]
    pub interactions: Vec<Interaction>,
}

impl DesignNode {
    /// First visible solid fill color, if any.
    pub fn first_solid_fill(&self) -> Option<&Rgba> {
        first_solid(&self.fills)
    }

    /// First visible solid stroke color, if any.
    pub fn first_solid_stroke(&self) -> Option<&Rgba> {
        first_solid(&self.strokes)
    }

    /// Whether any interaction is attached, regardless of trigger kind.
    pub fn has_interactions(&self) -> bool {
        !self.interactions.is_empty()
    }
}

fn first_solid(paints: &[Paint]) -> Option<&Rgba> {
    paints
        .iter()
        .find(|paint| paint.visible && paint.kind == PaintKind::Solid)
        .and_then(|paint| paint.color.as_ref())
}

/// Node kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Document,
    Canvas,
    Frame,
    Group,
    Rectangle,
    Text,
    Vector,
    Line,
    /// Any kind this generator does not handle specially.
    #[default]
    #[serde(other)]
    Other,
}

/// Absolute-coordinate placement rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A fill or stroke paint descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    /// Paints default to visible when the flag is omitted.
    #[serde(default = "visible_default")]
    pub visible: bool,
    #[serde(rename = "type", default)]
    pub kind: PaintKind,
    /// Flat color, present for solid paints.
    #[serde(default)]
    pub color: Option<Rgba>,
}

fn visible_default() -> bool {
    true
}

/// Paint kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintKind {
    Solid,
    #[default]
    #[serde(other)]
    Other,
}

/// Typography attributes of a TEXT node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default)]
    pub font_family: Option<String>,
    #[serde(default)]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub font_weight: Option<f64>,
    /// Line height in pixels, when the document specifies one.
    #[serde(default)]
    pub line_height_px: Option<f64>,
    #[serde(default)]
    pub text_align_horizontal: Option<TextAlign>,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justified,
    #[serde(other)]
    Other,
}

impl TextAlign {
    /// Map to the CSS `text-align` keyword. Unknown values fall back to left.
    pub fn to_css(self) -> &'static str {
        match self {
            Self::Left | Self::Other => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justified => "justify",
        }
    }
}

/// A prototype interaction: one trigger plus its actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    #[serde(default)]
    pub trigger: Option<Trigger>,
    #[serde(default)]
    pub actions: Vec<Action>,
}

impl Interaction {
    /// Whether the trigger is a click-equivalent kind.
    pub fn is_click(&self) -> bool {
        self.trigger
            .as_ref()
            .is_some_and(|trigger| trigger.kind.is_click())
    }
}

/// Interaction trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    #[serde(rename = "type", default)]
    pub kind: TriggerKind,
}

/// Trigger kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriggerKind {
    OnClick,
    OnPress,
    OnHover,
    OnDrag,
    #[default]
    #[serde(other)]
    Other,
}

impl TriggerKind {
    /// ON_PRESS is the touch analog of ON_CLICK; both count as clicks.
    pub fn is_click(self) -> bool {
        matches!(self, Self::OnClick | Self::OnPress)
    }
}

/// A single interaction action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    #[serde(rename = "type", default)]
    pub kind: ActionKind,
    #[serde(default)]
    pub navigation: Option<Navigation>,
    /// Target node id for node-navigation actions.
    #[serde(default)]
    pub destination_id: Option<String>,
}

impl Action {
    /// Whether this action navigates to another node.
    pub fn is_node_navigation(&self) -> bool {
        self.kind == ActionKind::Node && self.navigation == Some(Navigation::Navigate)
    }
}

/// Action kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    Node,
    Url,
    Back,
    #[default]
    #[serde(other)]
    Other,
}

/// Navigation kind of a node action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Navigation {
    Navigate,
    Swap,
    Overlay,
    #[serde(other)]
    Other,
}
