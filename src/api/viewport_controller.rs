use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    DownsampleStrategy, ReducedSample, Sample, downsample, samples_in_index_window,
    validate_series,
};
use crate::error::{ChartError, ChartResult};

use super::ViewportConfig;

/// Visible index window and its time domain over the reduced series.
///
/// `visible_domain` is always the timestamps of the samples at
/// `start_index` and `end_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportState {
    pub start_index: usize,
    pub end_index: usize,
    pub visible_domain: (i64, i64),
}

/// Pointer-driven zoom controller over a fixed, already reduced series.
///
/// Downsampling happens once, before the controller exists. Zooming only
/// narrows or widens the index window, so each step costs O(1) regardless of
/// the raw series size. The trade-off is fidelity: zooming deep into a region
/// never reveals detail the initial reduction dropped.
///
/// The controller is single-writer; callers sharing it across threads must
/// serialize zoom operations themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportController {
    pub(super) series: Vec<ReducedSample>,
    pub(super) config: ViewportConfig,
    pub(super) state: ViewportState,
}

impl ViewportController {
    /// Opens a viewport covering the whole reduced series.
    pub fn new(series: Vec<ReducedSample>, config: ViewportConfig) -> ChartResult<Self> {
        let config = config.validate()?;

        if series.len() <= config.min_window {
            return Err(ChartError::InvalidData(format!(
                "viewport needs more than {} samples, got {}",
                config.min_window,
                series.len()
            )));
        }

        if series.windows(2).any(|pair| pair[1].timestamp < pair[0].timestamp) {
            return Err(ChartError::InvalidData(
                "reduced series timestamps must be non-decreasing".to_owned(),
            ));
        }

        let last = series.len() - 1;
        let state = ViewportState {
            start_index: 0,
            end_index: last,
            visible_domain: (series[0].timestamp, series[last].timestamp),
        };
        debug!(
            series_len = series.len(),
            scale_factor = config.scale_factor,
            "viewport created"
        );

        Ok(Self {
            series,
            config,
            state,
        })
    }

    /// Validates and reduces a raw series once, then opens a full-range viewport.
    pub fn from_raw(
        samples: &[Sample],
        threshold: usize,
        strategy: DownsampleStrategy,
        config: ViewportConfig,
    ) -> ChartResult<Self> {
        validate_series(samples)?;
        let reduced = downsample(samples, threshold, strategy)?;
        Self::new(reduced, config)
    }

    #[must_use]
    pub fn series(&self) -> &[ReducedSample] {
        &self.series
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Always `false`: a viewport needs at least two samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    #[must_use]
    pub fn config(&self) -> ViewportConfig {
        self.config
    }

    /// Replaces zoom tuning. The current window is kept when it still honors
    /// the new minimum size, otherwise it is widened to it.
    pub fn set_config(&mut self, config: ViewportConfig) -> ChartResult<()> {
        let config = config.validate()?;
        if self.series.len() <= config.min_window {
            return Err(ChartError::InvalidData(format!(
                "min window {} does not fit a series of {} samples",
                config.min_window,
                self.series.len()
            )));
        }
        self.config = config;
        let (start, end) = self.fit_min_window(self.state.start_index, self.state.end_index);
        self.apply_range(start, end);
        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    #[must_use]
    pub fn visible_range(&self) -> (usize, usize) {
        (self.state.start_index, self.state.end_index)
    }

    #[must_use]
    pub fn visible_domain(&self) -> (i64, i64) {
        self.state.visible_domain
    }

    /// Reduced samples inside the visible window, both ends included.
    #[must_use]
    pub fn visible_samples(&self) -> &[ReducedSample] {
        samples_in_index_window(&self.series, self.state.start_index, self.state.end_index)
    }

    pub(super) fn last_index(&self) -> usize {
        self.series.len() - 1
    }

    /// Writes a window and re-derives its domain; the only state mutation path.
    pub(super) fn apply_range(&mut self, start_index: usize, end_index: usize) {
        self.state = ViewportState {
            start_index,
            end_index,
            visible_domain: (
                self.series[start_index].timestamp,
                self.series[end_index].timestamp,
            ),
        };
    }

    /// Widens `[start, end]` to `min_window`, growing right first, then left.
    pub(super) fn fit_min_window(&self, start: usize, end: usize) -> (usize, usize) {
        let last = self.last_index();
        let min_window = self.config.min_window;
        if end - start >= min_window {
            return (start, end);
        }
        let end = (start + min_window).min(last);
        let start = end.saturating_sub(min_window).min(start);
        (start, end)
    }
}
