use serde::{Deserialize, Serialize};

use super::{ViewportConfig, ViewportController, ViewportState};

/// Serializable view of a controller, for render bridges and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSnapshot {
    pub state: ViewportState,
    pub series_len: usize,
    pub full_domain: (i64, i64),
    pub config: ViewportConfig,
}

impl ViewportController {
    #[must_use]
    pub fn snapshot(&self) -> ViewportSnapshot {
        let last = self.last_index();
        ViewportSnapshot {
            state: self.state,
            series_len: self.series.len(),
            full_domain: (self.series[0].timestamp, self.series[last].timestamp),
            config: self.config,
        }
    }
}
