//! Code generation from design frames to Angular component bundles.
//!
//! This crate is the pure core of Trellis: it walks an immutable
//! [`DesignNode`](trellis_core::DesignNode) tree and assembles the four
//! text artifacts of one component (behavior, markup, stylesheet,
//! module manifest). Nothing here touches the network or the file
//! system; retrieval and persistence are collaborators of the caller.
//!
//! # Example
//!
//! ```ignore
//! use trellis_codegen::{extract_frames, emit_component};
//!
//! let frames = extract_frames(&file.document);
//! for frame in &frames {
//!     let bundle = emit_component(&detail(frame.id).document);
//!     persist(bundle)?;
//! }
//! ```

pub mod component;
pub mod frames;
pub mod interactions;
pub mod markup;
pub mod sanitize;
pub mod style;

pub use component::{emit_component, ComponentBundle};
pub use frames::{extract_frames, FrameRef};
pub use interactions::{collect_interactive, synthesize_methods, BehaviorMethod};
pub use markup::render_markup;
pub use style::render_stylesheet;
