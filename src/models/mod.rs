//! Process scheduling domain models.
//!
//! Provides the data types for describing a single-CPU workload and the
//! schedule a discipline produces for it.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Input record: id, arrival, burst |
//! | `ScheduledProcess` | Process plus start, completion and derived times |
//! | `Schedule` | Scheduled processes in execution order |
//! | `Interval` | One busy or idle span of the CPU timeline |

mod process;
mod schedule;

pub use process::{Process, ProcessTimes, ScheduledProcess, MAX_TIME};
pub use schedule::{Interval, Schedule};
