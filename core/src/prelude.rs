use chrono::NaiveDate;

/// Inclusive calendar-day range shared by every synthesis call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateSpan {
    /// Builds a span, rejecting ranges whose end precedes their start.
    pub fn new(start: NaiveDate, end: NaiveDate) -> SeriesResult<Self> {
        if end < start {
            return Err(SeriesError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days covered, both endpoints included.
    pub fn num_days(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    /// Ascending iterator over every day in the span.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

/// Common error type for series synthesis.
#[derive(thiserror::Error, Debug)]
pub enum SeriesError {
    #[error("invalid date range: end {end} precedes start {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type SeriesResult<T> = Result<T, SeriesError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn span_counts_inclusive_days() {
        let span = DateSpan::new(day(2025, 1, 1), day(2025, 1, 3)).unwrap();
        assert_eq!(span.num_days(), 3);
        let days: Vec<_> = span.days().collect();
        assert_eq!(days, vec![day(2025, 1, 1), day(2025, 1, 2), day(2025, 1, 3)]);
    }

    #[test]
    fn span_allows_single_day() {
        let span = DateSpan::new(day(2025, 6, 15), day(2025, 6, 15)).unwrap();
        assert_eq!(span.num_days(), 1);
        assert_eq!(span.days().count(), 1);
    }

    #[test]
    fn span_rejects_reversed_range() {
        let err = DateSpan::new(day(2025, 2, 1), day(2025, 1, 1)).unwrap_err();
        assert!(matches!(err, SeriesError::InvalidRange { .. }));
        assert!(err.to_string().contains("precedes"));
    }

    #[test]
    fn span_covers_reference_year() {
        let span = DateSpan::new(day(2025, 1, 1), day(2025, 12, 31)).unwrap();
        assert_eq!(span.num_days(), 365);
        assert_eq!(span.days().last(), Some(day(2025, 12, 31)));
    }
}
