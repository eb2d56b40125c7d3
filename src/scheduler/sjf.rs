//! Non-preemptive shortest job first.
//!
//! # Algorithm
//!
//! 1. The ready set holds unscheduled processes with `arrival <= clock`.
//! 2. If it is empty, advance the clock to the earliest pending arrival.
//! 3. Otherwise run the ready process with the smallest burst to completion.
//!    Ties go to the earlier arrival, then to the smaller id.
//!
//! # Complexity
//! O(n²) for n processes.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use super::CpuScheduler;
use crate::dispatching::{rules, RuleEngine, SchedulingContext, TieBreaker};
use crate::models::{Process, Schedule};

/// Non-preemptive shortest job first scheduler.
#[derive(Debug, Clone)]
pub struct SjfScheduler {
    rule_engine: RuleEngine,
}

impl SjfScheduler {
    /// Creates an SJF scheduler.
    pub fn new() -> Self {
        Self {
            rule_engine: RuleEngine::new()
                .with_rule(rules::Spt)
                .with_tie_breaker(rules::Fifo)
                .with_final_tie_breaker(TieBreaker::ById),
        }
    }
}

impl Default for SjfScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuScheduler for SjfScheduler {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let mut schedule = Schedule::new(self.name());
        let mut pending: Vec<Process> = processes.to_vec();
        let mut clock: i64 = 0;

        while !pending.is_empty() {
            let ready: Vec<usize> = pending
                .iter()
                .enumerate()
                .filter(|(_, p)| p.arrival_time <= clock)
                .map(|(idx, _)| idx)
                .collect();

            if ready.is_empty() {
                let next_arrival = pending
                    .iter()
                    .map(|p| p.arrival_time)
                    .min()
                    .unwrap_or(clock);
                tracing::trace!(from = clock, to = next_arrival, "CPU idle");
                clock = next_arrival;
                continue;
            }

            let candidates: Vec<Process> = ready.iter().map(|&idx| pending[idx]).collect();
            let context = SchedulingContext::at_time(clock);
            let best = self
                .rule_engine
                .select_best(&candidates, &context)
                .expect("ready set is non-empty");

            let process = pending.remove(ready[best]);
            let entry = process.run(clock);
            clock = entry.completion_time;
            schedule.push(entry);
        }

        schedule
    }

    fn description(&self) -> &'static str {
        "Shortest Job First (non-preemptive)"
    }
}
