use crate::interaction::ZoomDirection;

use super::{ViewportConfig, ZoomRejection};

pub(super) struct ZoomTargetInput {
    pub(super) start_index: usize,
    pub(super) end_index: usize,
    pub(super) series_len: usize,
    pub(super) pointer_ratio: f64,
    pub(super) direction: ZoomDirection,
    pub(super) config: ViewportConfig,
}

/// Resolves the index window a zoom step lands on, keeping the index under
/// the pointer at the same fractional position.
///
/// Requires `start_index < end_index < series_len` and `pointer_ratio` in `[0, 1]`.
pub(super) fn resolve_zoom_target(
    input: ZoomTargetInput,
) -> Result<(usize, usize), ZoomRejection> {
    let ZoomTargetInput {
        start_index,
        end_index,
        series_len,
        pointer_ratio,
        direction,
        config,
    } = input;

    let last = series_len - 1;
    if direction == ZoomDirection::Out && start_index == 0 && end_index == last {
        return Err(ZoomRejection::AtDataBounds);
    }

    let current_length = end_index - start_index;
    let scaled_length = match direction {
        ZoomDirection::In => current_length as f64 * config.scale_factor,
        ZoomDirection::Out => current_length as f64 / config.scale_factor,
    };
    let new_length = scaled_length.floor() as usize;
    let (new_start, new_end) =
        position_window(start_index, current_length, new_length, pointer_ratio, last);

    match direction {
        ZoomDirection::In => {
            if new_end - new_start < config.min_window {
                return Err(ZoomRejection::BelowMinimumWindow);
            }
            Ok((new_start, new_end))
        }
        ZoomDirection::Out => {
            if (new_start, new_end) != (start_index, end_index) {
                return Ok((new_start, new_end));
            }
            // Rounding stalled the step; widen symmetrically instead.
            let step = config.fallback_expansion(series_len);
            Ok((
                start_index.saturating_sub(step),
                end_index.saturating_add(step).min(last),
            ))
        }
    }
}

fn position_window(
    start_index: usize,
    current_length: usize,
    new_length: usize,
    pointer_ratio: f64,
    last: usize,
) -> (usize, usize) {
    let cursor_index = (current_length as f64 * pointer_ratio).floor() as usize + start_index;
    let new_cursor_offset = (new_length as f64 * pointer_ratio).floor() as usize;
    let new_start = cursor_index.saturating_sub(new_cursor_offset);
    let new_end = new_start.saturating_add(new_length).min(last);
    (new_start, new_end)
}
