//! First come, first served.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival time; equal arrivals keep input order
//!    (id ascending).
//! 2. Walk the sorted list with a clock starting at 0. If the clock is behind
//!    the next arrival, the CPU idles until it.
//! 3. Each process runs its full burst: `completion = clock + burst`.
//!
//! Idle gaps never count toward any process's waiting time.
//!
//! # Complexity
//! O(n log n).

use super::{run_in_order, CpuScheduler};
use crate::dispatching::{rules, RuleEngine, SchedulingContext, TieBreaker};
use crate::models::{Process, Schedule};

/// First come, first served scheduler.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::{CpuScheduler, FifoScheduler};
///
/// let processes = vec![Process::new(1, 5, 10), Process::new(2, 5, 3)];
/// let schedule = FifoScheduler::new().schedule(&processes);
/// assert_eq!(schedule.execution_order(), vec![1, 2]);
/// assert_eq!(schedule.entry_for(2).unwrap().completion_time, 18);
/// ```
#[derive(Debug, Clone)]
pub struct FifoScheduler {
    rule_engine: RuleEngine,
}

impl FifoScheduler {
    /// Creates a FIFO scheduler.
    pub fn new() -> Self {
        Self {
            rule_engine: RuleEngine::new()
                .with_rule(rules::Fifo)
                .with_final_tie_breaker(TieBreaker::ById),
        }
    }
}

impl Default for FifoScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuScheduler for FifoScheduler {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let order = self
            .rule_engine
            .sort_indices(processes, &SchedulingContext::at_time(0));
        run_in_order(self.name(), order.iter().map(|&idx| &processes[idx]))
    }

    fn description(&self) -> &'static str {
        "First Come, First Served"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completions(schedule: &Schedule) -> Vec<(u32, i64)> {
        schedule
            .entries
            .iter()
            .map(|e| (e.id(), e.completion_time))
            .collect()
    }

    #[test]
    fn test_fifo_spaced_arrivals() {
        let processes = vec![
            Process::new(1, 10, 22),
            Process::new(2, 68, 12),
            Process::new(3, 98, 34),
        ];
        let schedule = FifoScheduler::new().schedule(&processes);

        assert_eq!(completions(&schedule), vec![(1, 32), (2, 80), (3, 132)]);
        for e in &schedule.entries {
            assert_eq!(e.waiting_time, 0);
        }
    }

    #[test]
    fn test_fifo_simultaneous_arrival_keeps_input_order() {
        let processes = vec![Process::new(1, 5, 10), Process::new(2, 5, 3)];
        let schedule = FifoScheduler::new().schedule(&processes);

        assert_eq!(completions(&schedule), vec![(1, 15), (2, 18)]);
        assert_eq!(schedule.entry_for(2).unwrap().waiting_time, 10);
    }

    #[test]
    fn test_fifo_unsorted_input() {
        let processes = vec![
            Process::new(1, 6, 2),
            Process::new(2, 0, 4),
            Process::new(3, 3, 5),
        ];
        let schedule = FifoScheduler::new().schedule(&processes);

        // 2: [0,4), 3: [4,9), 1: [9,11)
        assert_eq!(completions(&schedule), vec![(2, 4), (3, 9), (1, 11)]);
        assert_eq!(schedule.entry_for(3).unwrap().waiting_time, 1);
        assert_eq!(schedule.entry_for(1).unwrap().waiting_time, 3);
    }

    #[test]
    fn test_fifo_idle_gap_not_counted_as_waiting() {
        let processes = vec![Process::new(1, 0, 2), Process::new(2, 10, 3)];
        let schedule = FifoScheduler::new().schedule(&processes);

        let second = schedule.entry_for(2).unwrap();
        assert_eq!(second.start_time, 10);
        assert_eq!(second.waiting_time, 0);
        assert_eq!(schedule.idle_time(), 8);
    }

    #[test]
    fn test_fifo_single_process() {
        let schedule = FifoScheduler::new().schedule(&[Process::new(1, 7, 4)]);
        assert_eq!(completions(&schedule), vec![(1, 11)]);
    }

    #[test]
    fn test_fifo_orders_adjacent_large_arrivals() {
        let base: i64 = 1 << 53;
        let processes = vec![Process::new(1, base + 1, 1), Process::new(2, base, 1)];
        let schedule = FifoScheduler::new().schedule(&processes);
        assert_eq!(schedule.execution_order(), vec![2, 1]);
    }

    #[test]
    fn test_fifo_empty_input() {
        let schedule = FifoScheduler::new().schedule(&[]);
        assert!(schedule.is_empty());
        assert_eq!(schedule.algorithm, "FIFO");
    }
}
