use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::math::{MatrixHelper, StatsHelper};
use crate::prelude::SeriesResult;
use crate::report_interface::{VelocityProfileSample, WaterQualitySample};

/// Headline statistics narrated by the report's conclusions panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub mean_dissolved_oxygen_mg_l: f64,
    pub mean_chlorophyll_ug_l: f64,
    pub peak_chlorophyll_ug_l: f64,
    pub peak_chlorophyll_date: Option<NaiveDate>,
    pub mean_surface_velocity_m_s: f64,
    pub mean_bottom_velocity_m_s: f64,
}

impl ReportSummary {
    /// Derives the summary from the displayed water-quality series and the
    /// velocity series. Empty inputs yield a zeroed summary.
    pub fn from_series(
        water_quality: &[WaterQualitySample],
        velocity: &[VelocityProfileSample],
    ) -> SeriesResult<Self> {
        let oxygen: Vec<f64> = water_quality
            .iter()
            .map(|sample| sample.dissolved_oxygen_mg_l)
            .collect();
        let chlorophyll: Vec<f64> = water_quality
            .iter()
            .map(|sample| sample.chlorophyll_ug_l)
            .collect();

        let mut peak: Option<&WaterQualitySample> = None;
        for sample in water_quality {
            if peak.map_or(true, |current| sample.chlorophyll_ug_l > current.chlorophyll_ug_l) {
                peak = Some(sample);
            }
        }

        let matrix = MatrixHelper::velocity_matrix(velocity)?;
        let (mean_surface, mean_bottom) = if matrix.ncols() == 0 {
            (0.0, 0.0)
        } else {
            (
                matrix.column(0).mean().unwrap_or(0.0),
                matrix.column(matrix.ncols() - 1).mean().unwrap_or(0.0),
            )
        };

        Ok(Self {
            mean_dissolved_oxygen_mg_l: StatsHelper::mean(&oxygen),
            mean_chlorophyll_ug_l: StatsHelper::mean(&chlorophyll),
            peak_chlorophyll_ug_l: peak.map_or(0.0, |sample| sample.chlorophyll_ug_l),
            peak_chlorophyll_date: peak.map(|sample| sample.date),
            mean_surface_velocity_m_s: mean_surface,
            mean_bottom_velocity_m_s: mean_bottom,
        })
    }
}
