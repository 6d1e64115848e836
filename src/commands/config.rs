use anyhow::Result;

use crate::commands::CommandReport;
use crate::hook::config::{load_config, resolve_config_path};

#[derive(Debug, Clone, Default)]
pub struct ConfigOptions {
    pub show: bool,
}

pub fn run(opts: &ConfigOptions) -> Result<CommandReport> {
    let mut report = CommandReport::new("config");
    let cfg = load_config()?;

    if !opts.show {
        report.detail("config resolved ok (use --show for effective values)");
        return Ok(report);
    }

    report.detail(
        "resolution.order=defaults -> counter.toml overrides -> environment overrides",
    );
    let config_path = resolve_config_path();
    if config_path.exists() {
        report.detail(format!("resolution.counter_toml={}", config_path.display()));
    } else {
        report.detail(format!(
            "resolution.counter_toml=missing ({})",
            config_path.display()
        ));
    }

    report.detail(format!("target_date={}", cfg.target_date));
    report.detail(format!("max_counter={}", cfg.max_counter));
    report.detail(format!("header_path={}", cfg.header_path.display()));
    report.detail(format!("flags_path={}", cfg.flags_path.display()));

    Ok(report)
}
