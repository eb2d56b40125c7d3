//! Built-in dispatching rules.
//!
//! - **FIFO**: earliest arrival first
//! - **SPT**: shortest burst first (the selection rule behind SJF)
//!
//! # Score Convention
//! All rules return lower scores for higher priority processes.
//!
//! Both rules rank on static process attributes and ignore the
//! [`SchedulingContext`]; the ready-set filtering that depends on the clock
//! happens in the scheduler before the engine is consulted.
//!
//! # References
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Process;

/// Shortest Processing Time.
///
/// Prioritizes processes with shorter bursts. Minimizes average waiting
/// time among processes that are ready together.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

/// First In First Out.
///
/// Prioritizes processes by arrival time.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}
