//! Dispatching rules and rule engine for process selection.
//!
//! Provides priority-based dispatching rules (FIFO, SPT) and a sequential
//! rule engine that orders processes with deterministic tie-breaking.
//!
//! # Usage
//!
//! ```
//! use cpu_sched::dispatching::{rules, RuleEngine, SchedulingContext, TieBreaker};
//! use cpu_sched::models::Process;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Spt)
//!     .with_tie_breaker(rules::Fifo)
//!     .with_final_tie_breaker(TieBreaker::ById);
//!
//! let ready = vec![Process::new(1, 0, 10), Process::new(2, 0, 3)];
//! let context = SchedulingContext::at_time(0);
//! assert_eq!(engine.select_best(&ready, &context), Some(1));
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::{RuleEngine, TieBreaker};

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first). Scores are integer
/// time values and compare exactly.
pub type RuleScore = i64;

/// A dispatching rule that evaluates process priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for processes that should run first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "FIFO").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a process given the current scheduling context.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, process: &Process, context: &SchedulingContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
