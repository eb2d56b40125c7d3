//! Rule engine for multi-criteria dispatching.
//!
//! Applies dispatching rules in sequence, consulting the next rule only on
//! ties, and falls back to a final tie-breaking strategy.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Process;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep input order (the sort is stable).
    #[default]
    InputOrder,
    /// Deterministic by process id (ascending).
    ById,
}

/// A composable rule engine for process prioritization.
///
/// # Example
/// ```
/// use cpu_sched::dispatching::{rules, RuleEngine, SchedulingContext, TieBreaker};
/// use cpu_sched::models::Process;
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::Fifo)
///     .with_final_tie_breaker(TieBreaker::ById);
///
/// let processes = vec![Process::new(1, 7, 2), Process::new(2, 3, 9)];
/// let order = engine.sort_indices(&processes, &SchedulingContext::at_time(0));
/// assert_eq!(order, vec![1, 0]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::InputOrder,
        }
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted only when earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts processes by priority (highest priority first).
    ///
    /// Returns indices into the original slice. The sort is stable, so fully
    /// tied processes keep their input order under [`TieBreaker::InputOrder`].
    pub fn sort_indices(&self, processes: &[Process], context: &SchedulingContext) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b], context));
        indices
    }

    /// Returns the index of the highest-priority process.
    ///
    /// On a full tie the earliest index wins, matching [`Self::sort_indices`].
    pub fn select_best(&self, processes: &[Process], context: &SchedulingContext) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (idx, process) in processes.iter().enumerate() {
            match best {
                Some(b) if self.compare(process, &processes[b], context) != Ordering::Less => {}
                _ => best = Some(idx),
            }
        }
        best
    }

    /// Evaluates a single process and returns scores from each rule.
    pub fn evaluate(&self, process: &Process, context: &SchedulingContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(process, context))
            .collect()
    }

    /// Compares two processes: `Less` means `a` runs before `b`.
    pub fn compare(&self, a: &Process, b: &Process, context: &SchedulingContext) -> Ordering {
        for rule in &self.rules {
            match rule.evaluate(a, context).cmp(&rule.evaluate(b, context)) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }

        // All rules tied → use final tie-breaker
        match self.tie_breaker {
            TieBreaker::InputOrder => Ordering::Equal,
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
