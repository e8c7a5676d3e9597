use ndarray::Array2;

use crate::prelude::{SeriesError, SeriesResult};
use crate::report_interface::VelocityProfileSample;

pub struct MatrixHelper;

impl MatrixHelper {
    /// Packs velocity samples into a day-major matrix: one row per day, one
    /// column per configured depth. Every sample must carry the same depth
    /// count.
    pub fn velocity_matrix(samples: &[VelocityProfileSample]) -> SeriesResult<Array2<f64>> {
        if samples.is_empty() {
            return Ok(Array2::zeros((0, 0)));
        }
        let width = samples[0].readings.len();
        let mut flat = Vec::with_capacity(samples.len() * width);
        for sample in samples {
            if sample.readings.len() != width {
                return Err(SeriesError::InvalidConfiguration(format!(
                    "velocity sample {} carries {} depth readings, expected {}",
                    sample.date,
                    sample.readings.len(),
                    width
                )));
            }
            flat.extend(sample.readings.iter().map(|reading| reading.velocity_m_s));
        }
        Array2::from_shape_vec((samples.len(), width), flat)
            .map_err(|err| SeriesError::InvalidConfiguration(err.to_string()))
    }

    /// Depth-major transpose for the contour surface: one row per depth,
    /// shallow first.
    pub fn depth_major(samples: &[VelocityProfileSample]) -> SeriesResult<Array2<f64>> {
        Ok(Self::velocity_matrix(samples)?.reversed_axes())
    }
}
