//! Process (job) model.
//!
//! A process is the unit of CPU work in the simulation: it becomes ready at
//! its arrival time and needs one uninterrupted burst of CPU time.
//!
//! # Time Representation
//! All times are integer time units relative to the simulation epoch (t=0).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// Largest accepted arrival or burst time.
///
/// Input times are 32-bit; simulation arithmetic is 64-bit, so sums over any
/// `u32`-indexed set of bounded processes cannot overflow.
pub const MAX_TIME: i64 = i32::MAX as i64;

/// A process awaiting scheduling.
///
/// Carries identity and workload only. Schedulers never mutate a `Process`;
/// they produce [`ScheduledProcess`] values instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier (1-based, assigned in input order).
    pub id: u32,
    /// Time at which the process becomes schedulable.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
}

/// Times derived from a process's completion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessTimes {
    /// Completion minus arrival.
    pub turnaround_time: i64,
    /// Turnaround minus burst.
    pub waiting_time: i64,
    /// Arrival to first execution.
    pub response_time: i64,
}

/// A process after a scheduler has run it to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledProcess {
    /// The input record.
    #[serde(flatten)]
    pub process: Process,
    /// Time the process first (and only) got the CPU.
    pub start_time: i64,
    /// Time the process finished.
    pub completion_time: i64,
    /// Completion minus arrival.
    pub turnaround_time: i64,
    /// Time spent ready but not running.
    pub waiting_time: i64,
    /// Time from arrival to first execution.
    pub response_time: i64,
}

impl Process {
    /// Creates a new process.
    pub fn new(id: u32, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
        }
    }

    /// Earliest possible completion time (arrival + burst).
    #[inline]
    pub fn earliest_completion(&self) -> i64 {
        self.arrival_time.saturating_add(self.burst_time)
    }

    /// Derives turnaround, waiting and response times from a completion time.
    ///
    /// Response time equals waiting time, which holds only for disciplines
    /// where a process runs to completion once started.
    ///
    /// # Panics
    /// If `completion_time < arrival_time + burst_time`. A scheduler that
    /// produces such a value is broken; the schedule must not reach metrics.
    pub fn derive_times(&self, completion_time: i64) -> ProcessTimes {
        assert!(
            completion_time >= self.earliest_completion(),
            "process {} completes at {} before arrival {} + burst {}",
            self.id,
            completion_time,
            self.arrival_time,
            self.burst_time
        );
        let turnaround_time = completion_time - self.arrival_time;
        let waiting_time = turnaround_time - self.burst_time;
        ProcessTimes {
            turnaround_time,
            waiting_time,
            response_time: waiting_time,
        }
    }

    /// Runs this process to completion starting at `start_time`.
    ///
    /// # Panics
    /// If `start_time` precedes the arrival time, or the completion time does
    /// not fit in an `i64`. Validated input (times within [`MAX_TIME`]) never
    /// reaches the second case.
    pub fn run(&self, start_time: i64) -> ScheduledProcess {
        assert!(
            start_time >= self.arrival_time,
            "process {} started at {} before its arrival at {}",
            self.id,
            start_time,
            self.arrival_time
        );
        let Some(completion_time) = start_time.checked_add(self.burst_time) else {
            panic!(
                "process {} completion overflows: start {} + burst {}",
                self.id, start_time, self.burst_time
            );
        };
        let times = self.derive_times(completion_time);
        ScheduledProcess {
            process: *self,
            start_time,
            completion_time,
            turnaround_time: times.turnaround_time,
            waiting_time: times.waiting_time,
            response_time: start_time - self.arrival_time,
        }
    }
}

impl ScheduledProcess {
    /// Process identifier.
    #[inline]
    pub fn id(&self) -> u32 {
        self.process.id
    }

    /// Arrival time of the underlying process.
    #[inline]
    pub fn arrival_time(&self) -> i64 {
        self.process.arrival_time
    }

    /// Burst time of the underlying process.
    #[inline]
    pub fn burst_time(&self) -> i64 {
        self.process.burst_time
    }
}
