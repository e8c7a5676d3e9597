use anyhow::Context;
use chrono::NaiveDate;
use coastcore::report_interface::{default_depth_profiles, DepthProfile, MonitoringSite};
use coastcore::synthesis::{WaterQualityModel, DEFAULT_SMOOTHING_WINDOW_DAYS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Full description of one report generation run. Every field has a
/// reference-station default, so partial YAML files are enough.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub seed: u64,
    pub smoothing_window_days: usize,
    pub water_quality: WaterQualityModel,
    pub depth_profiles: Vec<DepthProfile>,
    pub site: MonitoringSite,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            seed: 0,
            smoothing_window_days: DEFAULT_SMOOTHING_WINDOW_DAYS,
            water_quality: WaterQualityModel::default(),
            depth_profiles: default_depth_profiles(),
            site: MonitoringSite::new("Vitória, ES", -20.315, -40.262)
                .with_description("Coastal sampling station"),
        }
    }
}

impl ReportConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading report config {}", path_ref.display()))?;
        let config: ReportConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing report config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(start_date: NaiveDate, end_date: NaiveDate, seed: u64) -> Self {
        Self {
            start_date,
            end_date,
            seed,
            ..Self::default()
        }
    }

    /// Ordered depth labels, shallow first.
    pub fn depth_labels(&self) -> Vec<String> {
        self.depth_profiles
            .iter()
            .map(|profile| profile.label.clone())
            .collect()
    }
}
