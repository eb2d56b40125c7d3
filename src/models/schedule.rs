//! Schedule (solution) model.
//!
//! A schedule is the ordered sequence of processes a discipline ran on the
//! single CPU, each with its execution interval and derived times.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

use super::ScheduledProcess;

/// A complete single-CPU schedule.
///
/// Entries are kept in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Name of the discipline that produced this schedule.
    pub algorithm: String,
    /// Completed processes in execution order.
    pub entries: Vec<ScheduledProcess>,
}

/// A half-open execution interval `[start, end)` on the CPU timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// Process that ran, or `None` for an idle gap.
    pub process_id: Option<u32>,
    /// Start time.
    pub start: i64,
    /// End time.
    pub end: i64,
}

impl Interval {
    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether the CPU was idle during this interval.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.process_id.is_none()
    }
}

impl Schedule {
    /// Creates an empty schedule for the named discipline.
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            entries: Vec::new(),
        }
    }

    /// Appends the next executed process.
    pub fn push(&mut self, entry: ScheduledProcess) {
        self.entries.push(entry);
    }

    /// Number of scheduled processes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Makespan: latest completion time, 0 for an empty schedule.
    pub fn makespan(&self) -> i64 {
        self.entries
            .iter()
            .map(|e| e.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Total time the CPU spent executing processes.
    pub fn busy_time(&self) -> i64 {
        self.entries.iter().map(|e| e.burst_time()).sum()
    }

    /// Time between t=0 and the makespan during which the CPU was idle.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// Finds the entry for a process.
    pub fn entry_for(&self, process_id: u32) -> Option<&ScheduledProcess> {
        self.entries.iter().find(|e| e.id() == process_id)
    }

    /// Process ids in execution order.
    pub fn execution_order(&self) -> Vec<u32> {
        self.entries.iter().map(|e| e.id()).collect()
    }

    /// Entries ordered by process id.
    pub fn by_id(&self) -> Vec<&ScheduledProcess> {
        let mut entries: Vec<&ScheduledProcess> = self.entries.iter().collect();
        entries.sort_by_key(|e| e.id());
        entries
    }

    /// CPU timeline from t=0 to the makespan, including idle gaps.
    pub fn timeline(&self) -> Vec<Interval> {
        let mut intervals = Vec::with_capacity(self.entries.len() * 2);
        let mut clock = 0;
        for e in &self.entries {
            if e.start_time > clock {
                intervals.push(Interval {
                    process_id: None,
                    start: clock,
                    end: e.start_time,
                });
            }
            intervals.push(Interval {
                process_id: Some(e.id()),
                start: e.start_time,
                end: e.completion_time,
            });
            clock = clock.max(e.completion_time);
        }
        intervals
    }
}
