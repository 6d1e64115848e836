use anyhow::Result;
use std::env;

use crate::commands::CommandReport;
use crate::hook::clock::{CLOCK_EPOCH_ENV, sample_clock};
use crate::hook::config::{load_config, resolve_config_path};
use crate::hook::countdown::days_remaining;

pub fn run() -> Result<CommandReport> {
    let cfg = load_config()?;
    let mut report = CommandReport::new("status");

    report.detail(format!("hook_build={}", env!("BUILD_UUID")));

    let config_path = resolve_config_path();
    if config_path.exists() {
        report.detail(format!("config={}", config_path.display()));
    } else {
        report.detail(format!(
            "config=defaults (missing {})",
            config_path.display()
        ));
    }

    report.detail(format!("target_date={}", cfg.target_date));
    report.detail(format!("max_counter={}", cfg.max_counter));
    report.detail(format!("header_path={}", cfg.header_path.display()));
    report.detail(format!("flags_path={}", cfg.flags_path.display()));
    report.detail(format!(
        "clock_override={}",
        env::var(CLOCK_EPOCH_ENV).is_ok()
    ));

    let sample = sample_clock()?;
    report.detail(format!("today={}", sample.today));
    report.detail(format!(
        "days_remaining={}",
        days_remaining(cfg.target_date, sample.today)
    ));

    if sample.today > cfg.target_date {
        report.issue(format!(
            "target date {} has already passed; counter will inject as 0",
            cfg.target_date
        ));
    }

    Ok(report)
}
