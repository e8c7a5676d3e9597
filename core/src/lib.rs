//! Core data-synthesis and report interface for the Rust coastal monitoring
//! platform.
//!
//! The modules fabricate the daily series behind the monitoring dashboard
//! (water quality, current velocity by depth) from explicit random sources,
//! with typed records and validated configuration for the rendering layer.

pub mod math;
pub mod prelude;
pub mod report_interface;
pub mod synthesis;
pub mod telemetry;

pub use prelude::{DateSpan, SeriesError, SeriesResult};
