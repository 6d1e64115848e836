use anyhow::Result;
use std::path::PathBuf;

use crate::commands::CommandReport;
use crate::hook::clock::sample_clock;
use crate::hook::config::load_config;
use crate::hook::countdown::days_remaining;
use crate::hook::defines::{Define, DefineSink, FlagSink, HeaderSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectFormat {
    Header,
    Flags,
}

#[derive(Debug, Clone)]
pub struct InjectOptions {
    pub format: InjectFormat,
    pub out: Option<PathBuf>,
    pub dry_run: bool,
}

pub fn run(opts: &InjectOptions) -> Result<CommandReport> {
    let cfg = load_config()?;
    let mut report = CommandReport::new("inject");

    // Sampled exactly once; the counter and the build id come from the same
    // instant.
    let sample = sample_clock()?;
    let days = days_remaining(cfg.target_date, sample.today);
    let build_id = sample.epoch_secs;

    let defines = [
        Define::new("INIT_COUNTER", days),
        Define::new("INIT_MAX_COUNTER", cfg.max_counter),
        Define::new("BUILD_ID", build_id),
    ];

    report.detail(format!("counter will be initialized to: {days} days"));
    report.detail(format!(
        "max counter will be initialized to: {} days",
        cfg.max_counter
    ));
    report.detail(format!("build id: {build_id}"));

    let out = opts.out.clone().unwrap_or_else(|| match opts.format {
        InjectFormat::Header => cfg.header_path.clone(),
        InjectFormat::Flags => cfg.flags_path.clone(),
    });
    report.detail(format!("out={}", out.display()));

    if opts.dry_run {
        report.detail("dry-run: definitions computed but not written");
        return Ok(report);
    }

    match opts.format {
        InjectFormat::Header => HeaderSink::new(&out).append(&defines)?,
        InjectFormat::Flags => FlagSink::new(&out).append(&defines)?,
    }

    Ok(report)
}
