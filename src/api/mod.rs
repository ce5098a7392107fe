mod json_contract;
mod viewport_config;
mod viewport_controller;
mod viewport_navigation;
mod viewport_snapshot;
mod viewport_zoom;
mod zoom_outcome;
mod zoom_target_resolver;

pub use json_contract::{VIEWPORT_SNAPSHOT_JSON_SCHEMA_V1, ViewportSnapshotJsonContractV1};
pub use viewport_config::ViewportConfig;
pub use viewport_controller::{ViewportController, ViewportState};
pub use viewport_snapshot::ViewportSnapshot;
pub use zoom_outcome::{ZoomOutcome, ZoomRejection};
