//! Single-CPU schedulers and metrics evaluation.
//!
//! Every discipline implements [`CpuScheduler`]: it takes an unordered slice
//! of processes and returns a new [`Schedule`] in execution order. Input
//! records are never mutated, so one workload can be fed to several
//! disciplines for comparison.
//!
//! # Disciplines
//!
//! - [`FifoScheduler`]: first come, first served.
//! - [`SjfScheduler`]: non-preemptive shortest job first.
//!
//! # Metrics
//!
//! [`Metrics`] summarizes a finished schedule: average waiting, turnaround
//! and response times, elapsed time, throughput and CPU utilization.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4

mod fifo;
mod metrics;
mod sjf;

pub use fifo::FifoScheduler;
pub use metrics::Metrics;
pub use sjf::SjfScheduler;

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

use crate::models::{Process, Schedule};

/// A non-preemptive single-CPU scheduling discipline.
///
/// # Contract
/// Given an unordered slice of processes, return a schedule containing every
/// process exactly once, in execution order, with no overlapping execution
/// intervals and no process starting before its arrival.
pub trait CpuScheduler: Send + Sync + Debug {
    /// Short discipline name (e.g., "FIFO").
    fn name(&self) -> &'static str;

    /// Schedules the processes.
    fn schedule(&self, processes: &[Process]) -> Schedule;

    /// Discipline description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Selectable scheduling disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First come, first served.
    Fifo,
    /// Non-preemptive shortest job first.
    Sjf,
}

impl Algorithm {
    /// All built-in disciplines.
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Fifo, Algorithm::Sjf]
    }

    /// Creates the scheduler implementing this discipline.
    pub fn scheduler(self) -> Box<dyn CpuScheduler> {
        match self {
            Algorithm::Fifo => Box::new(FifoScheduler::new()),
            Algorithm::Sjf => Box::new(SjfScheduler::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Fifo => f.write_str("FIFO"),
            Algorithm::Sjf => f.write_str("SJF"),
        }
    }
}

/// Result of running one discipline over a workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRun {
    /// The produced schedule.
    pub schedule: Schedule,
    /// Metrics computed from the schedule.
    pub metrics: Metrics,
}

/// Schedules `processes` with `scheduler` and aggregates the result.
///
/// # Panics
/// In debug builds, if the scheduler breaks the [`CpuScheduler`] contract.
pub fn simulate(scheduler: &dyn CpuScheduler, processes: &[Process]) -> SimulationRun {
    let schedule = scheduler.schedule(processes);

    if cfg!(debug_assertions) {
        if let Err(errors) = crate::validation::validate_schedule(&schedule, processes) {
            panic!(
                "{} produced an invalid schedule: {:?}",
                scheduler.name(),
                errors
            );
        }
    }

    let metrics = Metrics::calculate(&schedule);
    tracing::debug!(
        algorithm = scheduler.name(),
        processes = schedule.len(),
        makespan = schedule.makespan(),
        avg_waiting = metrics.avg_waiting_time,
        "Simulation finished"
    );

    SimulationRun { schedule, metrics }
}

/// Runs each discipline over the same workload.
pub fn compare(algorithms: &[Algorithm], processes: &[Process]) -> Vec<SimulationRun> {
    algorithms
        .iter()
        .map(|algorithm| simulate(algorithm.scheduler().as_ref(), processes))
        .collect()
}

/// Runs sorted processes to completion on one CPU, idling until each arrives.
pub(crate) fn run_in_order<'a>(
    name: &str,
    ordered: impl IntoIterator<Item = &'a Process>,
) -> Schedule {
    let mut schedule = Schedule::new(name);
    let mut clock: i64 = 0;

    for process in ordered {
        if clock < process.arrival_time {
            tracing::trace!(from = clock, to = process.arrival_time, "CPU idle");
            clock = process.arrival_time;
        }
        let entry = process.run(clock);
        clock = entry.completion_time;
        schedule.push(entry);
    }

    schedule
}
