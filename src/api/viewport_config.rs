use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Tuning for pointer-driven zoom over a reduced series.
///
/// Serializable so host applications can keep it alongside their own
/// chart setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Window length multiplier per zoom-in step; zoom-out divides by it.
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f64,
    /// Minimum `end - start` distance, in indices.
    #[serde(default = "default_min_window")]
    pub min_window: usize,
    /// Upper bound, in indices per side, of the stalled zoom-out fallback.
    #[serde(default = "default_fallback_expansion_max")]
    pub fallback_expansion_max: usize,
    /// Fallback expansion per side as a share of the series length.
    #[serde(default = "default_fallback_expansion_ratio")]
    pub fallback_expansion_ratio: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            scale_factor: default_scale_factor(),
            min_window: default_min_window(),
            fallback_expansion_max: default_fallback_expansion_max(),
            fallback_expansion_ratio: default_fallback_expansion_ratio(),
        }
    }
}

impl ViewportConfig {
    #[must_use]
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    #[must_use]
    pub fn with_min_window(mut self, min_window: usize) -> Self {
        self.min_window = min_window;
        self
    }

    /// Sets the stalled zoom-out fallback as `min(max, floor(len * ratio))` per side.
    #[must_use]
    pub fn with_fallback_expansion(mut self, max: usize, ratio: f64) -> Self {
        self.fallback_expansion_max = max;
        self.fallback_expansion_ratio = ratio;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 || self.scale_factor >= 1.0
        {
            return Err(ChartError::InvalidData(
                "viewport scale factor must be finite and in (0, 1)".to_owned(),
            ));
        }

        if self.min_window == 0 {
            return Err(ChartError::InvalidData(
                "viewport min window must be >= 1".to_owned(),
            ));
        }

        if self.fallback_expansion_max == 0
            || !self.fallback_expansion_ratio.is_finite()
            || self.fallback_expansion_ratio < 0.0
        {
            return Err(ChartError::InvalidData(
                "viewport fallback expansion must be >= 1 index with a finite ratio >= 0"
                    .to_owned(),
            ));
        }

        Ok(self)
    }

    /// Indices added to each side when zoom-out rounding leaves the window unchanged.
    ///
    /// Never less than one, so the fallback always makes progress.
    #[must_use]
    pub fn fallback_expansion(self, series_len: usize) -> usize {
        let proportional = (series_len as f64 * self.fallback_expansion_ratio).floor() as usize;
        proportional.min(self.fallback_expansion_max).max(1)
    }
}

fn default_scale_factor() -> f64 {
    0.95
}

fn default_min_window() -> usize {
    1
}

fn default_fallback_expansion_max() -> usize {
    10
}

fn default_fallback_expansion_ratio() -> f64 {
    0.1
}
