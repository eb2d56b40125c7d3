//! Scheduling context for dispatching rule evaluation.

/// Runtime scheduling state passed to dispatching rules.
///
/// All times are relative to the simulation epoch (t=0).
///
/// The built-in [`Fifo`](super::rules::Fifo) and [`Spt`](super::rules::Spt)
/// rules do not read it: they rank on arrival and burst alone, and the
/// schedulers only pass them processes that are already ready at
/// `current_time`. It is available to clock-dependent rules such as aging.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchedulingContext {
    /// Current simulation time.
    pub current_time: i64,
}

impl SchedulingContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time: i64) -> Self {
        Self { current_time }
    }
}
