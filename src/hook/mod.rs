pub mod clock;
pub mod config;
pub mod countdown;
pub mod defines;
