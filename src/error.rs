#![allow(dead_code)]

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CounterInjectError {
    #[error("config file invalid or unreadable: {0}")]
    InvalidConfig(String),
    #[error("system clock unavailable: {0}")]
    ClockUnavailable(String),
    #[error("definition sink write failed: {0}")]
    SinkWrite(String),
}
