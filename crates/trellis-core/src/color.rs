//! Color values as the design API reports them.

use serde::{Deserialize, Serialize};

/// An RGBA color with all four channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    #[serde(default)]
    pub r: f64,
    #[serde(default)]
    pub g: f64,
    #[serde(default)]
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Rgba {
    /// Create a color from unit-interval channels.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Format as a CSS `rgba()` functional color.
    ///
    /// Color channels are scaled to 0-255 and rounded to the nearest
    /// integer; the alpha channel is passed through unchanged.
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            channel(self.r),
            channel(self.g),
            channel(self.b),
            self.a
        )
    }
}

fn channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
