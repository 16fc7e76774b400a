//! Figma REST API retrieval for the Trellis generator.
//!
//! Two endpoints are consumed: the file endpoint for the document tree
//! and the nodes endpoint for the full subtrees of the frames selected
//! for generation. Any non-success response aborts the run; the error
//! carries the HTTP status text so the caller can surface it.

pub mod client;
pub mod error;

pub use client::{FigmaClient, FileResponse, NodeDetail, NodesResponse};
pub use error::ApiError;
