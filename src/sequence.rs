use chrono::{DateTime, TimeDelta, Utc};
use log::debug;

use crate::angles;
use crate::error::{Result, SundirError};
use crate::types::{GeoLocation, Sample};

/// Instant of sample `index`: `start + index * interval_seconds`.
pub fn sample_instant(
    start: &DateTime<Utc>,
    interval_seconds: i64,
    index: usize,
) -> Result<DateTime<Utc>> {
    let offset_seconds = i128::from(interval_seconds) * index as i128;
    let out_of_range = || SundirError::InstantOutOfRange { offset_seconds };
    let offset = i64::try_from(offset_seconds)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .ok_or_else(out_of_range)?;
    start.checked_add_signed(offset).ok_or_else(out_of_range)
}

pub fn validate_repeat(repeat: i64) -> Result<usize> {
    if repeat < 1 {
        return Err(SundirError::InvalidRepeat { count: repeat });
    }
    usize::try_from(repeat).map_err(|_| SundirError::InvalidRepeat { count: repeat })
}

/// Lazy, chronologically ordered samples. Each item runs the engine once.
#[derive(Debug, Clone)]
pub struct Samples {
    start: DateTime<Utc>,
    location: GeoLocation,
    interval_seconds: i64,
    count: usize,
    index: usize,
}

impl Samples {
    pub fn new(
        start: DateTime<Utc>,
        location: GeoLocation,
        interval_seconds: i64,
        repeat: i64,
    ) -> Result<Self> {
        let count = validate_repeat(repeat)?;
        Ok(Self {
            start,
            location,
            interval_seconds,
            count,
            index: 0,
        })
    }
}

impl Iterator for Samples {
    type Item = Result<Sample>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }
        let index = self.index;
        self.index += 1;
        let sample = sample_instant(&self.start, self.interval_seconds, index).and_then(|instant| {
            let position = angles::solar_position(&instant, &self.location)?;
            Ok(Sample { instant, position })
        });
        // one failure ends the sequence
        if sample.is_err() {
            self.index = self.count;
        }
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Samples {}

/// Eagerly computes `repeat` samples. The first failure aborts the whole run.
pub fn generate(
    start: DateTime<Utc>,
    location: &GeoLocation,
    interval_seconds: i64,
    repeat: i64,
) -> Result<Vec<Sample>> {
    let samples = Samples::new(start, *location, interval_seconds, repeat)?;
    debug!(
        "generating {} samples from {start} every {interval_seconds}s",
        samples.len()
    );
    samples.collect()
}
