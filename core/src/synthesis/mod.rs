//! Synthetic series generation: daily water-quality draws, trailing-mean
//! smoothing, and current-velocity profiles by depth.
//!
//! Every generator takes the random source as an argument and holds no state
//! of its own, so callers decide between seeded and entropy-backed runs.

pub mod smoothing;
pub mod velocity;
pub mod water_quality;

pub use smoothing::{smooth, DEFAULT_SMOOTHING_WINDOW_DAYS};
pub use velocity::generate_velocity_profile;
pub use water_quality::{
    generate_water_quality, generate_water_quality_with_model, WaterQualityModel,
};
