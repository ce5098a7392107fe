//! chart-downsample: bounded-size time-series reduction plus a pointer-driven
//! zoom viewport over the reduced series.
//!
//! A raw series is reduced once with [`downsample`] (LTTB, min-max or
//! average). [`ViewportController`] then keeps the visible index window and
//! its time domain in sync as wheel gestures arrive; rendering is left to the
//! host.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use crate::api::{ViewportConfig, ViewportController, ViewportState, ZoomOutcome, ZoomRejection};
pub use crate::core::{DownsampleStrategy, ReducedSample, Sample, downsample};
pub use crate::error::{ChartError, ChartResult};
pub use crate::interaction::{PlotBounds, ZoomDirection};
