//! Schedule quality metrics.
//!
//! Computes system-wide performance indicators from a completed schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | Mean of (turnaround - burst) |
//! | Avg Turnaround | Mean of (completion - arrival) |
//! | Avg Response | Mean of (first start - arrival) |
//! | Total Elapsed | Latest completion time (clock starts at 0) |
//! | Throughput | Processes completed per time unit |
//! | CPU Utilization | 100 * sum(burst) / total elapsed |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{Schedule, ScheduledProcess};

/// System-wide scheduling metrics.
///
/// All-zero for an empty schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Number of processes in the schedule.
    pub process_count: usize,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Latest completion time.
    pub total_elapsed_time: i64,
    /// Time the CPU sat idle before the last completion.
    pub idle_time: i64,
    /// Processes per time unit.
    pub throughput: f64,
    /// Percentage of elapsed time the CPU was busy (0.0..=100.0).
    pub cpu_utilization: f64,
}

impl Metrics {
    /// Computes metrics from a schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        Self::from_records(&schedule.entries)
    }

    /// Computes metrics from scheduled records in any order.
    ///
    /// Sums saturate at `i64::MAX`, which bounded input never reaches.
    pub fn from_records(records: &[ScheduledProcess]) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let mut total_waiting: i64 = 0;
        let mut total_turnaround: i64 = 0;
        let mut total_response: i64 = 0;
        let mut total_burst: i64 = 0;
        let mut max_completion: i64 = 0;

        for r in records {
            total_waiting = total_waiting.saturating_add(r.waiting_time);
            total_turnaround = total_turnaround.saturating_add(r.turnaround_time);
            total_response = total_response.saturating_add(r.response_time);
            total_burst = total_burst.saturating_add(r.burst_time());
            max_completion = max_completion.max(r.completion_time);
        }

        let n = records.len() as f64;

        // Only reachable with zero-length bursts, which validation rejects.
        let (throughput, cpu_utilization) = if max_completion <= 0 {
            (0.0, 0.0)
        } else {
            let elapsed = max_completion as f64;
            (n / elapsed, total_burst as f64 / elapsed * 100.0)
        };

        Self {
            process_count: records.len(),
            avg_waiting_time: total_waiting as f64 / n,
            avg_turnaround_time: total_turnaround as f64 / n,
            avg_response_time: total_response as f64 / n,
            total_elapsed_time: max_completion,
            idle_time: max_completion.saturating_sub(total_burst),
            throughput,
            cpu_utilization,
        }
    }

    /// Whether the CPU never idled between t=0 and the last completion.
    pub fn fully_utilized(&self) -> bool {
        self.process_count > 0 && self.idle_time == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    fn fifo_schedule(runs: &[(u32, i64, i64, i64)]) -> Schedule {
        let mut s = Schedule::new("FIFO");
        for &(id, arrival, burst, start) in runs {
            s.push(Process::new(id, arrival, burst).run(start));
        }
        s
    }

    #[test]
    fn test_metrics_sums_saturate() {
        let record = ScheduledProcess {
            process: Process::new(1, 0, i64::MAX / 2 + 1),
            start_time: i64::MAX / 2,
            completion_time: i64::MAX,
            turnaround_time: i64::MAX,
            waiting_time: i64::MAX / 2,
            response_time: i64::MAX / 2,
        };
        let m = Metrics::from_records(&[record, record]);

        assert_eq!(m.process_count, 2);
        assert!((m.avg_turnaround_time - i64::MAX as f64 / 2.0).abs() < 1.0e3);
        assert_eq!(m.total_elapsed_time, i64::MAX);
        assert_eq!(m.idle_time, 0);
    }

    #[test]
    fn test_metrics_basic() {
        // 1: [0,10), 2: [10,13) waits 8, 3: [13,15) waits 9
        let s = fifo_schedule(&[(1, 0, 10, 0), (2, 2, 3, 10), (3, 4, 2, 13)]);
        let m = Metrics::calculate(&s);

        assert_eq!(m.process_count, 3);
        assert!((m.avg_waiting_time - 17.0 / 3.0).abs() < 1e-10);
        // turnarounds 10, 11, 11
        assert!((m.avg_turnaround_time - 32.0 / 3.0).abs() < 1e-10);
        assert!((m.avg_response_time - m.avg_waiting_time).abs() < 1e-10);
        assert_eq!(m.total_elapsed_time, 15);
        assert!((m.throughput - 0.2).abs() < 1e-10);
        assert!((m.cpu_utilization - 100.0).abs() < 1e-10);
        assert!(m.fully_utilized());
    }

    #[test]
    fn test_metrics_with_idle_gaps() {
        let s = fifo_schedule(&[(1, 10, 22, 10), (2, 68, 12, 68), (3, 98, 34, 98)]);
        let m = Metrics::calculate(&s);

        assert_eq!(m.total_elapsed_time, 132);
        assert_eq!(m.idle_time, 64);
        assert!((m.avg_waiting_time - 0.0).abs() < 1e-10);
        assert!((m.avg_turnaround_time - 68.0 / 3.0).abs() < 1e-10);
        assert!((m.throughput - 3.0 / 132.0).abs() < 1e-10);
        assert!((m.cpu_utilization - 6800.0 / 132.0).abs() < 1e-10);
        assert!(m.cpu_utilization < 100.0);
        assert!(!m.fully_utilized());
    }

    #[test]
    fn test_metrics_order_independent() {
        let s = fifo_schedule(&[(1, 0, 4, 0), (2, 1, 6, 4)]);
        let mut reversed = s.entries.clone();
        reversed.reverse();
        assert_eq!(Metrics::calculate(&s), Metrics::from_records(&reversed));
    }

    #[test]
    fn test_metrics_idempotent() {
        let s = fifo_schedule(&[(1, 3, 4, 3), (2, 3, 1, 7)]);
        assert_eq!(Metrics::calculate(&s), Metrics::calculate(&s));
    }

    #[test]
    fn test_metrics_empty() {
        let m = Metrics::calculate(&Schedule::new("FIFO"));
        assert_eq!(m, Metrics::default());
        assert_eq!(m.total_elapsed_time, 0);
        assert!((m.throughput - 0.0).abs() < 1e-10);
        assert!((m.cpu_utilization - 0.0).abs() < 1e-10);
        assert!(!m.fully_utilized());
    }

    #[test]
    fn test_metrics_zero_elapsed_guard() {
        // Zero bursts are rejected on input; build the record directly.
        let record = ScheduledProcess {
            process: Process::new(1, 0, 0),
            start_time: 0,
            completion_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
            response_time: 0,
        };
        let m = Metrics::from_records(&[record]);
        assert_eq!(m.process_count, 1);
        assert_eq!(m.total_elapsed_time, 0);
        assert!((m.throughput - 0.0).abs() < 1e-10);
        assert!((m.cpu_utilization - 0.0).abs() < 1e-10);
    }
}
