//! Per-tick performance metrics for animation sessions.
//!
//! [`TickMetrics`] captures timing data for the most recent tick plus
//! cumulative counters, readable from a session at any point between
//! ticks.

/// Timing and counter metrics collected during ticks.
///
/// All durations are in microseconds and describe the most recent
/// tick; the remaining fields are cumulative since construction or
/// the last reset.
#[derive(Clone, Debug, Default)]
pub struct TickMetrics {
    /// Wall-clock time for the entire tick, in microseconds.
    pub total_us: u64,
    /// Time spent draining and applying queued commands, in
    /// microseconds. Populated by the realtime driver; stays zero in
    /// lockstep use.
    pub command_processing_us: u64,
    /// Time spent in the solver step, in microseconds.
    pub step_us: u64,
    /// Time spent rendering the frame, in microseconds.
    pub render_us: u64,
    /// Cumulative number of ticks executed.
    pub ticks: u64,
    /// Cumulative number of commands applied.
    pub commands_applied: u64,
    /// Cumulative number of realtime submissions rejected because the
    /// command queue was full.
    pub queue_full_rejections: u64,
}
