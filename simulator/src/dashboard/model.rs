use anyhow::Result;
use chrono::NaiveDate;
use coastcore::math::MatrixHelper;
use coastcore::report_interface::{MonitoringSite, ReportSummary, WaterQualitySample};
use serde::{Deserialize, Serialize};

use crate::workflow::config::ReportConfig;
use crate::workflow::runner::ReportResult;

/// Payload the dashboard collaborators fetch: the smoothed series for the
/// line and box charts, the depth-major grid for the contour surface, and
/// the site for the map marker.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReportModel {
    pub site: MonitoringSite,
    pub dates: Vec<NaiveDate>,
    pub water_quality: Vec<WaterQualitySample>,
    pub depth_labels: Vec<String>,
    /// One row per depth, shallow first; columns follow `dates`.
    pub velocity_grid: Vec<Vec<f64>>,
    pub summary: ReportSummary,
    pub notes: Vec<String>,
}

impl ReportModel {
    pub fn from_result(config: &ReportConfig, result: &ReportResult) -> Result<Self> {
        let grid = MatrixHelper::depth_major(&result.velocity)?;
        let velocity_grid = grid.rows().into_iter().map(|row| row.to_vec()).collect();

        Ok(Self {
            site: config.site.clone(),
            dates: result
                .smoothed_water_quality
                .iter()
                .map(|sample| sample.date)
                .collect(),
            water_quality: result.smoothed_water_quality.clone(),
            depth_labels: config.depth_labels(),
            velocity_grid,
            summary: result.summary.clone(),
            notes: result.notes.clone(),
        })
    }
}
