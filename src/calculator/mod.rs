pub mod calculator_errors;
pub mod catalog;
pub mod report;
pub mod travel;
pub mod units;
