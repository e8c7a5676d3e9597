//! Typed records exchanged between the synthesis core and the dashboard
//! rendering layer.

pub mod site;
pub mod summary;
pub mod velocity;
pub mod water_quality;

pub use site::MonitoringSite;
pub use summary::ReportSummary;
pub use velocity::{default_depth_profiles, DepthProfile, VelocityProfileSample, VelocityReading};
pub use water_quality::WaterQualitySample;
