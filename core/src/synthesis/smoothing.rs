use chrono::Duration;
use log::debug;

use crate::math::StatsHelper;
use crate::prelude::{SeriesError, SeriesResult};
use crate::report_interface::WaterQualitySample;

/// Trailing window applied by the reference report.
pub const DEFAULT_SMOOTHING_WINDOW_DAYS: usize = 7;

/// Replaces every sample with the mean of the samples dated inside the
/// trailing calendar window `[date - (window_days - 1), date]`. The window is
/// clipped at the start of the series and never looks ahead, so output dates
/// and length equal the input. Expects samples in ascending date order.
pub fn smooth(
    samples: &[WaterQualitySample],
    window_days: usize,
) -> SeriesResult<Vec<WaterQualitySample>> {
    if window_days == 0 {
        return Err(SeriesError::InvalidConfiguration(
            "smoothing window must cover at least one day".to_string(),
        ));
    }

    // Windows too large for chrono arithmetic behave like any window that
    // reaches past the series start: they cover the whole prefix.
    let window_delta = i64::try_from(window_days - 1)
        .ok()
        .and_then(Duration::try_days);

    let mut smoothed = Vec::with_capacity(samples.len());
    let mut window_start = 0;
    for (index, sample) in samples.iter().enumerate() {
        let cutoff = window_delta.and_then(|delta| sample.date.checked_sub_signed(delta));
        if let Some(cutoff) = cutoff {
            while samples[window_start].date < cutoff {
                window_start += 1;
            }
        }
        let window = &samples[window_start..=index];
        let oxygen: Vec<f64> = window.iter().map(|s| s.dissolved_oxygen_mg_l).collect();
        let chlorophyll: Vec<f64> = window.iter().map(|s| s.chlorophyll_ug_l).collect();
        smoothed.push(WaterQualitySample::new(
            sample.date,
            StatsHelper::mean(&oxygen),
            StatsHelper::mean(&chlorophyll),
        ));
    }

    debug!(
        "smoothed {} samples over a {}-day trailing window",
        smoothed.len(),
        window_days
    );
    Ok(smoothed)
}
