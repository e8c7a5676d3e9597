use chrono::NaiveDate;
use log::debug;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::prelude::{DateSpan, SeriesError, SeriesResult};
use crate::report_interface::WaterQualitySample;

/// Distribution parameters for the synthetic water-quality series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterQualityModel {
    pub oxygen_mean_mg_l: f64,
    pub oxygen_std_dev_mg_l: f64,
    pub chlorophyll_mean_ug_l: f64,
    pub chlorophyll_std_dev_ug_l: f64,
}

impl Default for WaterQualityModel {
    fn default() -> Self {
        Self {
            oxygen_mean_mg_l: 7.0,
            oxygen_std_dev_mg_l: 1.5,
            chlorophyll_mean_ug_l: 5.0,
            chlorophyll_std_dev_ug_l: 2.0,
        }
    }
}

fn field_distribution(field: &str, mean: f64, std_dev: f64) -> SeriesResult<Normal<f64>> {
    if !mean.is_finite() {
        return Err(SeriesError::InvalidConfiguration(format!(
            "{} mean {} is not finite",
            field, mean
        )));
    }
    // Normal::new only screens non-finite deviations.
    if std_dev.is_nan() || std_dev < 0.0 {
        return Err(SeriesError::InvalidConfiguration(format!(
            "{} deviation {} must be a non-negative number",
            field, std_dev
        )));
    }
    Normal::new(mean, std_dev).map_err(|err| {
        SeriesError::InvalidConfiguration(format!("{} deviation {}: {}", field, std_dev, err))
    })
}

/// Draws one water-quality sample per day of the inclusive range, each field
/// from its own normal distribution. The distributions are validated before
/// the first draw, so the series is produced whole or not at all.
pub fn generate_water_quality_with_model<R: Rng + ?Sized>(
    start: NaiveDate,
    end: NaiveDate,
    model: &WaterQualityModel,
    rng: &mut R,
) -> SeriesResult<Vec<WaterQualitySample>> {
    let span = DateSpan::new(start, end)?;
    let oxygen = field_distribution(
        "dissolved oxygen",
        model.oxygen_mean_mg_l,
        model.oxygen_std_dev_mg_l,
    )?;
    let chlorophyll = field_distribution(
        "chlorophyll",
        model.chlorophyll_mean_ug_l,
        model.chlorophyll_std_dev_ug_l,
    )?;

    let mut samples = Vec::with_capacity(span.num_days());
    for date in span.days() {
        samples.push(WaterQualitySample::new(
            date,
            oxygen.sample(rng),
            chlorophyll.sample(rng),
        ));
    }

    debug!(
        "synthesized {} water-quality samples for {}..{}",
        samples.len(),
        start,
        end
    );
    Ok(samples)
}

/// Convenience wrapper over the reference station model.
pub fn generate_water_quality<R: Rng + ?Sized>(
    start: NaiveDate,
    end: NaiveDate,
    rng: &mut R,
) -> SeriesResult<Vec<WaterQualitySample>> {
    generate_water_quality_with_model(start, end, &WaterQualityModel::default(), rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn generator_covers_every_day_in_order() {
        let mut rng = StdRng::seed_from_u64(11);
        let samples = generate_water_quality(day(2025, 1, 1), day(2025, 1, 3), &mut rng).unwrap();
        assert_eq!(samples.len(), 3);
        let dates: Vec<_> = samples.iter().map(|s| s.date).collect();
        assert_eq!(dates, vec![day(2025, 1, 1), day(2025, 1, 2), day(2025, 1, 3)]);
        assert!(samples.iter().all(|s| s.dissolved_oxygen_mg_l.is_finite()));
        assert!(samples.iter().all(|s| s.chlorophyll_ug_l.is_finite()));
    }

    #[test]
    fn generator_emits_full_reference_year() {
        let mut rng = StdRng::seed_from_u64(0);
        let samples = generate_water_quality(day(2025, 1, 1), day(2025, 12, 31), &mut rng).unwrap();
        assert_eq!(samples.len(), 365);
        for pair in samples.windows(2) {
            assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
        }
    }

    #[test]
    fn generator_rejects_reversed_range() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = generate_water_quality(day(2025, 1, 2), day(2025, 1, 1), &mut rng).unwrap_err();
        assert!(matches!(err, SeriesError::InvalidRange { .. }));
    }

    #[test]
    fn equal_seeds_reproduce_the_series() {
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            generate_water_quality(day(2025, 1, 1), day(2025, 2, 28), &mut rng).unwrap()
        };
        assert_eq!(run(42), run(42));
        assert_ne!(run(42), run(43));
    }

    #[test]
    fn different_seeds_keep_the_date_shape() {
        let dates = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            generate_water_quality(day(2025, 5, 1), day(2025, 5, 10), &mut rng)
                .unwrap()
                .iter()
                .map(|s| s.date)
                .collect::<Vec<_>>()
        };
        assert_eq!(dates(1), dates(2));
    }

    #[test]
    fn zero_deviation_model_reproduces_means() {
        let model = WaterQualityModel {
            oxygen_std_dev_mg_l: 0.0,
            chlorophyll_std_dev_ug_l: 0.0,
            ..WaterQualityModel::default()
        };
        let mut rng = StdRng::seed_from_u64(5);
        let samples =
            generate_water_quality_with_model(day(2025, 4, 1), day(2025, 4, 5), &model, &mut rng)
                .unwrap();
        assert!(samples.iter().all(|s| s.dissolved_oxygen_mg_l == 7.0));
        assert!(samples.iter().all(|s| s.chlorophyll_ug_l == 5.0));
    }

    #[test]
    fn negative_deviation_is_rejected() {
        let model = WaterQualityModel {
            oxygen_std_dev_mg_l: -1.0,
            ..WaterQualityModel::default()
        };
        let mut rng = StdRng::seed_from_u64(5);
        let err =
            generate_water_quality_with_model(day(2025, 1, 1), day(2025, 1, 2), &model, &mut rng)
                .unwrap_err();
        assert!(matches!(err, SeriesError::InvalidConfiguration(_)));
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn non_finite_mean_is_rejected() {
        let model = WaterQualityModel {
            chlorophyll_mean_ug_l: f64::NAN,
            ..WaterQualityModel::default()
        };
        let mut rng = StdRng::seed_from_u64(5);
        let err =
            generate_water_quality_with_model(day(2025, 1, 1), day(2025, 1, 2), &model, &mut rng)
                .unwrap_err();
        assert!(matches!(err, SeriesError::InvalidConfiguration(_)));
        assert!(err.to_string().contains("not finite"));
    }
}
