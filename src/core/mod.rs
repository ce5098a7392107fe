pub mod average;
pub mod downsample;
pub mod lttb;
pub mod min_max;
pub mod primitives;
pub mod types;
pub mod windowing;

pub use average::{average, fixed_bucket_size};
pub use downsample::{
    DEFAULT_THRESHOLD, DownsampleStrategy, downsample, downsample_samples, reduce_series,
};
pub use lttb::lttb;
pub use min_max::{min_max, min_max_bucket_ranges};
pub use types::{ReducedSample, Sample, validate_series};
pub use windowing::{index_window_for_time_window, samples_in_index_window};
