pub mod calculator;
pub mod config;
pub mod constants;
pub mod format;
pub mod logging;
pub mod tracker;
