use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::error::CounterInjectError;
use crate::hook::countdown::{DEFAULT_MAX_COUNTER, default_target_date};

pub const CONFIG_PATH_ENV: &str = "COUNTER_CONFIG";
pub const TARGET_DATE_ENV: &str = "COUNTER_TARGET_DATE";
pub const MAX_COUNTER_ENV: &str = "COUNTER_MAX";

const DEFAULT_CONFIG_FILE: &str = "counter.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub target_date: NaiveDate,
    pub max_counter: i64,
    pub header_path: PathBuf,
    pub flags_path: PathBuf,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            target_date: default_target_date(),
            max_counter: DEFAULT_MAX_COUNTER,
            header_path: PathBuf::from("include/build_counter.h"),
            flags_path: PathBuf::from("build_counter.flags"),
        }
    }
}

pub fn resolve_config_path() -> PathBuf {
    match env::var(CONFIG_PATH_ENV) {
        Ok(v) if !v.trim().is_empty() => PathBuf::from(v.trim()),
        _ => PathBuf::from(DEFAULT_CONFIG_FILE),
    }
}

/// Resolution order: defaults -> counter.toml overrides -> environment
/// overrides. A missing file means defaults; a malformed file is fatal.
pub fn load_config() -> Result<CounterConfig> {
    let path = resolve_config_path();
    let mut cfg = if path.exists() {
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config {}", path.display()))?
    } else {
        CounterConfig::default()
    };

    apply_env_overrides(&mut cfg)?;
    validate(&cfg)?;
    Ok(cfg)
}

fn apply_env_overrides(cfg: &mut CounterConfig) -> Result<()> {
    if let Ok(raw) = env::var(TARGET_DATE_ENV) {
        cfg.target_date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .with_context(|| format!("invalid {TARGET_DATE_ENV} value: {raw:?}"))?;
    }
    if let Ok(raw) = env::var(MAX_COUNTER_ENV) {
        cfg.max_counter = raw
            .trim()
            .parse()
            .with_context(|| format!("invalid {MAX_COUNTER_ENV} value: {raw:?}"))?;
    }
    Ok(())
}

fn validate(cfg: &CounterConfig) -> Result<()> {
    if cfg.max_counter <= 0 {
        return Err(CounterInjectError::InvalidConfig(format!(
            "max_counter must be positive, got {}",
            cfg.max_counter
        ))
        .into());
    }
    Ok(())
}
