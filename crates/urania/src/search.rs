//! Scanning date ranges for horoscopes that match a filter.

use crate::constellations::StarCatalog;
use crate::ephemeris::provider::{Ephemeris, EphemerisError};
use crate::ephemeris::types::EphemerisSettings;
use crate::horoscope::Horoscope;
use crate::matching::{merge_filters, MatchError, Matchable};
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error(transparent)]
    Match(#[from] MatchError),
    #[error("Search step must be positive, got {0}")]
    InvalidStep(Duration),
}

/// Consecutive sampled moments that all matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRange {
    pub start: DateTime<Utc>,
    /// Last matching sample (inclusive)
    pub end: DateTime<Utc>,
    pub step: Duration,
}

/// Sequential scanner over a fixed ephemeris, catalog and settings
pub struct HoroscopeSearch<'a, E> {
    ephemeris: &'a E,
    catalog: &'a StarCatalog,
    settings: EphemerisSettings,
}

impl<'a, E: Ephemeris> HoroscopeSearch<'a, E> {
    pub fn new(ephemeris: &'a E, catalog: &'a StarCatalog, settings: EphemerisSettings) -> Self {
        Self {
            ephemeris,
            catalog,
            settings,
        }
    }

    fn horoscope(&self, when: DateTime<Utc>) -> Result<Horoscope, EphemerisError> {
        Horoscope::compute(self.ephemeris, when, &self.settings, self.catalog)
    }

    /// Horoscopes from `start` to `end` inclusive, every `step`.
    pub fn all_horoscopes(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        step: Duration,
    ) -> Result<Vec<(DateTime<Utc>, Horoscope)>, SearchError> {
        check_step(step)?;
        let mut out = Vec::new();
        let mut when = start;
        while when <= end {
            out.push((when, self.horoscope(when)?));
            when += step;
        }
        Ok(out)
    }

    /// Runs of consecutive samples matching `filter`.
    pub fn find_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        step: Duration,
        filter: &Value,
    ) -> Result<Vec<MatchRange>, SearchError> {
        check_step(step)?;
        let mut ranges: Vec<MatchRange> = Vec::new();
        let mut matched_last = false;
        let mut when = start;
        while when <= end {
            let matched = self.horoscope(when)?.matches(filter)?;
            if matched {
                match ranges.last_mut() {
                    Some(range) if matched_last => range.end = when,
                    _ => ranges.push(MatchRange {
                        start: when,
                        end: when,
                        step,
                    }),
                }
            }
            matched_last = matched;
            when += step;
        }
        log::debug!(
            "Scanned {} to {} every {}s: {} ranges",
            start,
            end,
            step.num_seconds(),
            ranges.len()
        );
        Ok(ranges)
    }

    /// Daily scan with `day_filter`, then a 15 minute scan around each daily
    /// hit with `time_filter` merged over `day_filter`.
    pub fn find_datetime_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        day_filter: &Value,
        time_filter: &Value,
    ) -> Result<Vec<MatchRange>, SearchError> {
        let day_ranges = self.find_range(start, end, Duration::days(1), day_filter)?;
        let filter = merge_filters(day_filter, time_filter);

        let mut time_ranges = Vec::new();
        for day in &day_ranges {
            time_ranges.extend(self.find_range(
                day.start - Duration::days(1),
                day.end + Duration::days(1),
                Duration::minutes(15),
                &filter,
            )?);
        }
        log::info!(
            "Found {} time ranges in {} matching days",
            time_ranges.len(),
            day_ranges.len()
        );
        Ok(time_ranges)
    }
}

fn check_step(step: Duration) -> Result<(), SearchError> {
    if step <= Duration::zero() {
        return Err(SearchError::InvalidStep(step));
    }
    Ok(())
}
