use std::time::Duration;

pub const DEFAULT_SCAN_TICK_INTERVAL_MS: u64 = 200;

pub const PROGRESS_COMPLETE: f64 = 100.0;
pub const PROGRESS_STEP_MIN: f64 = 5.0;
pub const PROGRESS_STEP_MAX: f64 = 20.0;
/// Implied by the minimum step: no scan takes more ticks than this.
pub const MAX_TICKS_PER_SCAN: u32 = 20;

pub const MIN_FINDINGS_PER_SCAN: usize = 3;
pub const MAX_FINDINGS_PER_SCAN: usize = 7;
pub const RISK_SCORE_MIN: u8 = 20;
pub const RISK_SCORE_MAX: u8 = 79;

pub const PROGRESS_BAR_FALLBACK_WIDTH: usize = 40;

pub fn tick_duration(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
