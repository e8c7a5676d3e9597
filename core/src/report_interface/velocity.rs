use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Configured current-velocity distribution at one fixed depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthProfile {
    pub label: String,
    pub mean_velocity_m_s: f64,
    pub std_dev_m_s: f64,
}

impl DepthProfile {
    pub fn new(label: impl Into<String>, mean_velocity_m_s: f64, std_dev_m_s: f64) -> Self {
        Self {
            label: label.into(),
            mean_velocity_m_s,
            std_dev_m_s,
        }
    }
}

/// The five shelf profiles the reference station reports: currents strongest
/// near the surface and decaying with depth.
pub fn default_depth_profiles() -> Vec<DepthProfile> {
    vec![
        DepthProfile::new("1m", 2.5, 0.5),
        DepthProfile::new("5m", 1.8, 0.4),
        DepthProfile::new("10m", 1.2, 0.3),
        DepthProfile::new("20m", 0.8, 0.2),
        DepthProfile::new("50m", 0.3, 0.1),
    ]
}

/// One depth entry of a daily velocity sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VelocityReading {
    pub depth_label: String,
    pub velocity_m_s: f64,
}

/// Daily current-velocity sample carrying every configured depth in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VelocityProfileSample {
    pub date: NaiveDate,
    pub readings: Vec<VelocityReading>,
}

impl VelocityProfileSample {
    pub fn velocity_at(&self, depth_label: &str) -> Option<f64> {
        self.readings
            .iter()
            .find(|reading| reading.depth_label == depth_label)
            .map(|reading| reading.velocity_m_s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profiles_run_shallow_to_deep() {
        let profiles = default_depth_profiles();
        let labels: Vec<_> = profiles.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["1m", "5m", "10m", "20m", "50m"]);
        for pair in profiles.windows(2) {
            assert!(pair[0].mean_velocity_m_s > pair[1].mean_velocity_m_s);
            assert!(pair[0].std_dev_m_s > pair[1].std_dev_m_s);
        }
    }

    #[test]
    fn velocity_lookup_by_label() {
        let sample = VelocityProfileSample {
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            readings: vec![VelocityReading {
                depth_label: "1m".into(),
                velocity_m_s: 2.31,
            }],
        };
        assert_eq!(sample.velocity_at("1m"), Some(2.31));
        assert_eq!(sample.velocity_at("5m"), None);
    }
}
