//! Core types for the Trellis generator.
//!
//! This crate provides the read-only data model of a design document as
//! returned by the Figma REST API: the node tree, bounding boxes, paints,
//! text styles, and prototype interactions. All downstream crates consume
//! this model; none of them mutate it.

pub mod color;
pub mod node;

pub use color::Rgba;
pub use node::{
    Action, ActionKind, BoundingBox, DesignNode, Interaction, Navigation, NodeKind, Paint,
    PaintKind, TextAlign, TextStyle, Trigger, TriggerKind,
};
