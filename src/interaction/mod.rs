use serde::{Deserialize, Serialize};

/// Horizontal pixel extent of the plotted area, as reported by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotBounds {
    pub left: f64,
    pub width: f64,
}

impl PlotBounds {
    #[must_use]
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.left.is_finite() && self.width.is_finite() && self.width > 0.0
    }

    /// Fractional horizontal pointer position inside the plot, clamped to `[0, 1]`.
    ///
    /// Returns `None` for degenerate bounds or a non-finite pointer.
    #[must_use]
    pub fn pointer_ratio(self, pointer_x: f64) -> Option<f64> {
        if !self.is_valid() || !pointer_x.is_finite() {
            return None;
        }
        Some(((pointer_x - self.left).abs() / self.width).clamp(0.0, 1.0))
    }
}

/// `clamp01(|pointer_x - left| / width)`, or `None` when it is undefined.
#[must_use]
pub fn pointer_ratio(pointer_x: f64, left: f64, width: f64) -> Option<f64> {
    PlotBounds::new(left, width).pointer_ratio(pointer_x)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomDirection {
    /// Narrow the visible window.
    In,
    /// Widen the visible window.
    Out,
}

impl ZoomDirection {
    /// Decodes a vertical wheel delta: positive scrolls zoom out, negative
    /// scrolls zoom in, zero or NaN carries no direction.
    #[must_use]
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if delta_y > 0.0 {
            Some(Self::Out)
        } else if delta_y < 0.0 {
            Some(Self::In)
        } else {
            None
        }
    }
}
