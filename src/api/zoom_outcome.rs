use serde::{Deserialize, Serialize};

/// Why a zoom gesture left the viewport untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomRejection {
    /// No pointer position was supplied with the gesture.
    MissingPointer,
    /// Plot bounds were missing, zero-width or non-finite.
    InvalidBounds,
    /// Wheel delta was zero or NaN.
    NoDirection,
    /// Zooming in would collapse the window below the configured minimum.
    BelowMinimumWindow,
    /// Zooming out cannot widen a window that already spans the whole series.
    AtDataBounds,
}

/// Result of a zoom gesture.
///
/// Rejections are not errors: invalid gestures simply have no visible effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomOutcome {
    Applied { start_index: usize, end_index: usize },
    Rejected(ZoomRejection),
}

impl ZoomOutcome {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    #[must_use]
    pub fn rejection(self) -> Option<ZoomRejection> {
        match self {
            Self::Applied { .. } => None,
            Self::Rejected(reason) => Some(reason),
        }
    }
}
