//! Input and schedule validation.
//!
//! [`validate_input`] checks a workload before scheduling:
//! - Zero or duplicate process IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Times beyond [`MAX_TIME`]
//!
//! [`validate_schedule`] checks a discipline's output against its input:
//! - Every input process scheduled exactly once
//! - No process starts before it arrives
//! - Each process runs exactly its burst
//! - No two execution intervals overlap

use crate::models::{Process, Schedule, MAX_TIME};
use std::collections::{HashMap, HashSet};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// Process ID is zero.
    InvalidId,
    /// Arrival time is negative.
    NegativeArrival,
    /// Burst time is zero or negative.
    NonPositiveBurst,
    /// Arrival or burst time exceeds [`MAX_TIME`].
    TimeOutOfRange,
    /// An input process is absent from the schedule.
    MissingProcess,
    /// The schedule contains a process that was not in the input, or one twice.
    UnexpectedProcess,
    /// A process started before its arrival.
    StartBeforeArrival,
    /// Completion differs from start + burst.
    BurstMismatch,
    /// Two execution intervals overlap.
    Overlap,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a workload before scheduling.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if p.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidId,
                "Process ID must be positive",
            ));
        } else if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process {} has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process {} has non-positive burst time {}",
                    p.id, p.burst_time
                ),
            ));
        }

        if p.arrival_time > MAX_TIME || p.burst_time > MAX_TIME {
            errors.push(ValidationError::new(
                ValidationErrorKind::TimeOutOfRange,
                format!(
                    "Process {} times ({}, {}) exceed {}",
                    p.id, p.arrival_time, p.burst_time, MAX_TIME
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates that `schedule` is a legal single-CPU schedule of `processes`.
pub fn validate_schedule(schedule: &Schedule, processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut expected: HashMap<u32, &Process> = processes.iter().map(|p| (p.id, p)).collect();

    for e in &schedule.entries {
        match expected.remove(&e.id()) {
            Some(p) if *p == e.process => {}
            _ => errors.push(ValidationError::new(
                ValidationErrorKind::UnexpectedProcess,
                format!("Process {} is not a pending input process", e.id()),
            )),
        }

        if e.start_time < e.arrival_time() {
            errors.push(ValidationError::new(
                ValidationErrorKind::StartBeforeArrival,
                format!(
                    "Process {} starts at {} before arriving at {}",
                    e.id(),
                    e.start_time,
                    e.arrival_time()
                ),
            ));
        }

        if e.start_time.checked_add(e.burst_time()) != Some(e.completion_time) {
            errors.push(ValidationError::new(
                ValidationErrorKind::BurstMismatch,
                format!(
                    "Process {} runs [{}, {}) but needs {}",
                    e.id(),
                    e.start_time,
                    e.completion_time,
                    e.burst_time()
                ),
            ));
        }
    }

    let mut missing: Vec<u32> = expected.into_keys().collect();
    missing.sort_unstable();
    for id in missing {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingProcess,
            format!("Process {id} was never scheduled"),
        ));
    }

    let mut intervals: Vec<(i64, i64, u32)> = schedule
        .entries
        .iter()
        .map(|e| (e.start_time, e.completion_time, e.id()))
        .collect();
    intervals.sort_unstable();
    for pair in intervals.windows(2) {
        let (_, prev_end, prev_id) = pair[0];
        let (next_start, _, next_id) = pair[1];
        if next_start < prev_end {
            errors.push(ValidationError::new(
                ValidationErrorKind::Overlap,
                format!("Processes {prev_id} and {next_id} overlap on the CPU"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
