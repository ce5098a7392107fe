use tracing::{debug, trace};

use crate::interaction::{PlotBounds, ZoomDirection};

use super::zoom_target_resolver::{ZoomTargetInput, resolve_zoom_target};
use super::{ViewportController, ZoomOutcome, ZoomRejection};

impl ViewportController {
    /// Narrows the window by `scale_factor`, keeping the index under the pointer fixed.
    pub fn zoom_in(&mut self, pointer_x: f64, bounds: PlotBounds) -> ZoomOutcome {
        self.zoom(ZoomDirection::In, pointer_x, bounds)
    }

    /// Widens the window by `1 / scale_factor`, keeping the index under the pointer fixed.
    pub fn zoom_out(&mut self, pointer_x: f64, bounds: PlotBounds) -> ZoomOutcome {
        self.zoom(ZoomDirection::Out, pointer_x, bounds)
    }

    /// Applies one zoom step in `direction`. Rejected steps leave the state untouched.
    pub fn zoom(
        &mut self,
        direction: ZoomDirection,
        pointer_x: f64,
        bounds: PlotBounds,
    ) -> ZoomOutcome {
        let Some(pointer_ratio) = bounds.pointer_ratio(pointer_x) else {
            return self.reject(direction, ZoomRejection::InvalidBounds);
        };

        let (start_index, end_index) = self.visible_range();
        let target = resolve_zoom_target(ZoomTargetInput {
            start_index,
            end_index,
            series_len: self.series.len(),
            pointer_ratio,
            direction,
            config: self.config,
        });

        match target {
            Ok((new_start, new_end)) => {
                self.apply_range(new_start, new_end);
                trace!(
                    ?direction,
                    pointer_ratio,
                    from_start = start_index,
                    from_end = end_index,
                    to_start = new_start,
                    to_end = new_end,
                    "viewport zoom applied"
                );
                ZoomOutcome::Applied {
                    start_index: new_start,
                    end_index: new_end,
                }
            }
            Err(reason) => self.reject(direction, reason),
        }
    }

    /// Routes a wheel gesture: positive `delta_y` zooms out, negative zooms in.
    ///
    /// Missing pointer or bounds make the gesture a no-op.
    pub fn on_wheel(
        &mut self,
        delta_y: f64,
        pointer_x: Option<f64>,
        bounds: Option<PlotBounds>,
    ) -> ZoomOutcome {
        let Some(direction) = ZoomDirection::from_wheel_delta(delta_y) else {
            return ZoomOutcome::Rejected(ZoomRejection::NoDirection);
        };
        let Some(pointer_x) = pointer_x else {
            return self.reject(direction, ZoomRejection::MissingPointer);
        };
        let Some(bounds) = bounds else {
            return self.reject(direction, ZoomRejection::InvalidBounds);
        };
        self.zoom(direction, pointer_x, bounds)
    }

    fn reject(&self, direction: ZoomDirection, reason: ZoomRejection) -> ZoomOutcome {
        debug!(
            ?direction,
            ?reason,
            start_index = self.state.start_index,
            end_index = self.state.end_index,
            "viewport zoom rejected"
        );
        ZoomOutcome::Rejected(reason)
    }
}
