use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily water-quality record consumed by the charting layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterQualitySample {
    pub date: NaiveDate,
    pub dissolved_oxygen_mg_l: f64,
    pub chlorophyll_ug_l: f64,
}

impl WaterQualitySample {
    pub fn new(date: NaiveDate, dissolved_oxygen_mg_l: f64, chlorophyll_ug_l: f64) -> Self {
        Self {
            date,
            dissolved_oxygen_mg_l,
            chlorophyll_ug_l,
        }
    }
}
