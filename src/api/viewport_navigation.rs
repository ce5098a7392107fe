use tracing::debug;

use crate::core::index_window_for_time_window;
use crate::error::{ChartError, ChartResult};

use super::ViewportController;

impl ViewportController {
    /// Restores the full-series window.
    pub fn reset(&mut self) {
        let last = self.last_index();
        self.apply_range(0, last);
        debug!(end_index = last, "viewport reset");
    }

    /// Sets an explicit inclusive index window.
    pub fn set_visible_range(&mut self, start_index: usize, end_index: usize) -> ChartResult<()> {
        let last = self.last_index();
        if start_index >= end_index || end_index > last {
            return Err(ChartError::InvalidData(format!(
                "visible range [{start_index}, {end_index}] must satisfy start < end <= {last}"
            )));
        }
        if end_index - start_index < self.config.min_window {
            return Err(ChartError::InvalidData(format!(
                "visible range [{start_index}, {end_index}] is narrower than the minimum window {}",
                self.config.min_window
            )));
        }

        self.apply_range(start_index, end_index);
        Ok(())
    }

    /// Selects the smallest window covering the time domain `[start_ms, end_ms]`.
    ///
    /// Windows narrower than the minimum size are widened around the match.
    pub fn set_visible_domain(&mut self, start_ms: i64, end_ms: i64) -> ChartResult<()> {
        let (start, end) = index_window_for_time_window(&self.series, start_ms, end_ms)
            .ok_or_else(|| ChartError::InvalidData("viewport series is empty".to_owned()))?;
        let (start, end) = self.fit_min_window(start, end);
        self.apply_range(start, end);
        debug!(
            start_ms,
            end_ms,
            start_index = start,
            end_index = end,
            "viewport domain selected"
        );
        Ok(())
    }
}
