//! SetCalc-rs library: application logic for the concurrent report runner.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
