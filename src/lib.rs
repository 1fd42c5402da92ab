//! Simulated repository trust assessment: parse a target, run a timed scan
//! simulation, synthesize an analysis and classify its risk.
//!
//! No repository is ever fetched. Every metric and finding is drawn from a
//! seedable pseudorandom source, so scans are reproducible on demand.

pub mod config;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod logger;
pub mod services;
pub mod structs;
pub mod workers;
