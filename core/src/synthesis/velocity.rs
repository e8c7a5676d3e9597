use chrono::NaiveDate;
use log::debug;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::prelude::{DateSpan, SeriesError, SeriesResult};
use crate::report_interface::{DepthProfile, VelocityProfileSample, VelocityReading};

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn profile_distributions(profiles: &[DepthProfile]) -> SeriesResult<Vec<Normal<f64>>> {
    if profiles.is_empty() {
        return Err(SeriesError::InvalidConfiguration(
            "no depth profiles configured".to_string(),
        ));
    }
    let mut distributions = Vec::with_capacity(profiles.len());
    for (index, profile) in profiles.iter().enumerate() {
        if profile.label.trim().is_empty() {
            return Err(SeriesError::InvalidConfiguration(format!(
                "depth profile {} has an empty label",
                index
            )));
        }
        if profiles[..index]
            .iter()
            .any(|other| other.label == profile.label)
        {
            return Err(SeriesError::InvalidConfiguration(format!(
                "duplicate depth label {}",
                profile.label
            )));
        }
        if !profile.mean_velocity_m_s.is_finite() {
            return Err(SeriesError::InvalidConfiguration(format!(
                "depth {} mean velocity {} is not finite",
                profile.label, profile.mean_velocity_m_s
            )));
        }
        // Normal::new only screens non-finite deviations.
        if profile.std_dev_m_s.is_nan() || profile.std_dev_m_s < 0.0 {
            return Err(SeriesError::InvalidConfiguration(format!(
                "depth {} deviation {} must be a non-negative number",
                profile.label, profile.std_dev_m_s
            )));
        }
        let normal = Normal::new(profile.mean_velocity_m_s, profile.std_dev_m_s).map_err(|err| {
            SeriesError::InvalidConfiguration(format!(
                "depth {} deviation {}: {}",
                profile.label, profile.std_dev_m_s, err
            ))
        })?;
        distributions.push(normal);
    }
    Ok(distributions)
}

/// Draws one velocity sample per day of the inclusive range. Each sample
/// carries every configured depth in input order, rounded to two decimals.
/// The profile list is validated before the first draw.
pub fn generate_velocity_profile<R: Rng + ?Sized>(
    start: NaiveDate,
    end: NaiveDate,
    profiles: &[DepthProfile],
    rng: &mut R,
) -> SeriesResult<Vec<VelocityProfileSample>> {
    let span = DateSpan::new(start, end)?;
    let distributions = profile_distributions(profiles)?;

    let mut samples = Vec::with_capacity(span.num_days());
    for date in span.days() {
        let mut readings = Vec::with_capacity(profiles.len());
        for (profile, normal) in profiles.iter().zip(&distributions) {
            readings.push(VelocityReading {
                depth_label: profile.label.clone(),
                velocity_m_s: round2(normal.sample(rng)),
            });
        }
        samples.push(VelocityProfileSample { date, readings });
    }

    debug!(
        "synthesized {} velocity samples across {} depths",
        samples.len(),
        profiles.len()
    );
    Ok(samples)
}
