use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate};
use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

pub const CLOCK_EPOCH_ENV: &str = "COUNTER_CLOCK_EPOCH";

/// One reading of the wall clock, taken exactly once per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSample {
    pub epoch_secs: i64,
    pub today: NaiveDate,
}

impl ClockSample {
    /// Build a sample from a fixed epoch value. The calendar date is derived
    /// in UTC so a pinned epoch behaves identically on every host timezone.
    pub fn from_epoch_secs(epoch_secs: i64) -> Result<Self> {
        let instant = DateTime::from_timestamp(epoch_secs, 0)
            .with_context(|| format!("epoch value out of range: {epoch_secs}"))?;
        Ok(Self {
            epoch_secs,
            today: instant.date_naive(),
        })
    }
}

/// Sample the clock, honoring the COUNTER_CLOCK_EPOCH override so tests can
/// pin the instant without touching the system clock.
pub fn sample_clock() -> Result<ClockSample> {
    if let Ok(raw) = env::var(CLOCK_EPOCH_ENV) {
        let epoch_secs: i64 = raw
            .trim()
            .parse()
            .with_context(|| format!("invalid {CLOCK_EPOCH_ENV} value: {raw:?}"))?;
        return ClockSample::from_epoch_secs(epoch_secs);
    }

    let epoch_secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock reads before the Unix epoch")?
        .as_secs() as i64;
    Ok(ClockSample {
        epoch_secs,
        today: Local::now().date_naive(),
    })
}
