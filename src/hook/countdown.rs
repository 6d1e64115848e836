use chrono::NaiveDate;

/// Past-due targets never produce a negative counter.
pub const COUNTER_FLOOR: i64 = 0;
/// Guard against absurdly large day counts from a misconfigured clock.
pub const COUNTER_CEILING: i64 = 9999;
/// Value emitted as INIT_MAX_COUNTER unless the config overrides it.
pub const DEFAULT_MAX_COUNTER: i64 = 60;

/// Ship target the firmware counts down toward.
pub fn default_target_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 4, 3).expect("valid built-in target date")
}

/// Whole-day countdown from `today` to `target`, clamped to
/// [COUNTER_FLOOR, COUNTER_CEILING].
///
/// The difference is taken between calendar dates only; time of day is
/// ignored, so the value is stable across a day and decreases by exactly one
/// per elapsed calendar day.
pub fn days_remaining(target: NaiveDate, today: NaiveDate) -> i64 {
    target
        .signed_duration_since(today)
        .num_days()
        .clamp(COUNTER_FLOOR, COUNTER_CEILING)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn two_days_before_target() {
        assert_eq!(days_remaining(default_target_date(), date(2026, 4, 1)), 2);
    }

    #[test]
    fn on_target_day() {
        assert_eq!(days_remaining(default_target_date(), date(2026, 4, 3)), 0);
    }

    #[test]
    fn past_target_clamps_to_floor() {
        assert_eq!(days_remaining(default_target_date(), date(2026, 4, 10)), 0);
        assert_eq!(days_remaining(default_target_date(), date(2030, 1, 1)), 0);
    }

    #[test]
    fn distant_past_date_stays_below_ceiling() {
        // ~26 years out is still well under the ceiling.
        let days = days_remaining(default_target_date(), date(2000, 1, 1));
        assert!(days > 0 && days < COUNTER_CEILING);
        assert_eq!(days, 9589);
    }

    #[test]
    fn ancient_clock_clamps_to_ceiling() {
        assert_eq!(
            days_remaining(default_target_date(), date(1990, 1, 1)),
            COUNTER_CEILING
        );
    }

    #[test]
    fn counter_is_total_over_extreme_inputs() {
        for today in [date(1, 1, 1), date(1970, 1, 1), date(9999, 12, 31)] {
            let days = days_remaining(default_target_date(), today);
            assert!((COUNTER_FLOOR..=COUNTER_CEILING).contains(&days));
        }
    }

    #[test]
    fn decreases_by_one_per_calendar_day() {
        let target = default_target_date();
        for offset in 0..10 {
            let today = date(2026, 3, 24) + chrono::Days::new(offset);
            assert_eq!(days_remaining(target, today), 10 - offset as i64);
        }
    }
}
