use chart_downsample::api::{ViewportConfig, ViewportController, ZoomOutcome};
use chart_downsample::core::{ReducedSample, Sample};
use chart_downsample::interaction::PlotBounds;
use proptest::prelude::*;

fn reduced_series(len: usize) -> Vec<ReducedSample> {
    (0..len)
        .map(|i| {
            Sample::from_epoch_millis(i as i64 * 1_000, (i % 17) as f64)
                .expect("valid sample")
                .into()
        })
        .collect()
}

fn window(len: usize, start_seed: usize, span_seed: usize) -> (usize, usize) {
    let last = len - 1;
    let start = start_seed % last;
    let span = 1 + span_seed % (last - start);
    (start, start + span)
}

proptest! {
    #[test]
    fn zoom_in_strictly_shrinks_or_is_rejected(
        len in 2usize..2_000,
        start_seed in 0usize..10_000,
        span_seed in 0usize..10_000,
        pointer_x in -500.0f64..1_500.0,
        scale_factor in 0.05f64..0.99
    ) {
        let config = ViewportConfig::default().with_scale_factor(scale_factor);
        let mut viewport = ViewportController::new(reduced_series(len), config).expect("controller");
        let (start, end) = window(len, start_seed, span_seed);
        viewport.set_visible_range(start, end).expect("range");
        let before = viewport.state();

        match viewport.zoom_in(pointer_x, PlotBounds::new(100.0, 800.0)) {
            ZoomOutcome::Applied { start_index, end_index } => {
                prop_assert!(end_index - start_index < end - start);
                prop_assert!(end_index - start_index >= 1);
                prop_assert!(end_index <= len - 1);
            }
            ZoomOutcome::Rejected(_) => prop_assert_eq!(viewport.state(), before),
        }
    }

    #[test]
    fn zoom_out_strictly_grows_or_is_rejected(
        len in 2usize..2_000,
        start_seed in 0usize..10_000,
        span_seed in 0usize..10_000,
        pointer_x in -500.0f64..1_500.0,
        scale_factor in 0.05f64..0.99
    ) {
        let config = ViewportConfig::default().with_scale_factor(scale_factor);
        let mut viewport = ViewportController::new(reduced_series(len), config).expect("controller");
        let (start, end) = window(len, start_seed, span_seed);
        viewport.set_visible_range(start, end).expect("range");
        let before = viewport.state();

        match viewport.zoom_out(pointer_x, PlotBounds::new(100.0, 800.0)) {
            ZoomOutcome::Applied { start_index, end_index } => {
                prop_assert!(end_index - start_index > end - start);
                prop_assert!(end_index <= len - 1);
            }
            ZoomOutcome::Rejected(_) => {
                prop_assert_eq!((start, end), (0, len - 1));
                prop_assert_eq!(viewport.state(), before);
            }
        }
    }

    #[test]
    fn random_gesture_sequences_keep_state_consistent(
        len in 2usize..500,
        gestures in prop::collection::vec((-1.0f64..1.0, 0.0f64..1_000.0), 0..120)
    ) {
        let mut viewport =
            ViewportController::new(reduced_series(len), ViewportConfig::default()).expect("controller");
        let bounds = PlotBounds::new(0.0, 1_000.0);

        for (delta_y, pointer_x) in gestures {
            viewport.on_wheel(delta_y, Some(pointer_x), Some(bounds));

            let state = viewport.state();
            prop_assert!(state.start_index < state.end_index);
            prop_assert!(state.end_index <= len - 1);
            prop_assert_eq!(
                state.visible_domain,
                (
                    viewport.series()[state.start_index].timestamp,
                    viewport.series()[state.end_index].timestamp
                )
            );
        }
    }
}
