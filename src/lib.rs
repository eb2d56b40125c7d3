//! Single-CPU process scheduling simulator.
//!
//! Given processes with arrival and burst times, computes per-process
//! completion, turnaround, waiting and response times for a scheduling
//! discipline, plus system metrics (average times, throughput, CPU
//! utilization). All arrivals are known up front; the simulation is offline.
//!
//! # Modules
//!
//! - **`models`**: `Process`, `ScheduledProcess`, `Schedule`
//! - **`dispatching`**: Dispatching rules (FIFO, SPT) and the rule engine
//! - **`scheduler`**: `CpuScheduler` disciplines (FIFO, SJF) and `Metrics`
//! - **`validation`**: Workload and schedule integrity checks
//! - **`ingest`**: Tab-separated workload reader
//! - **`report`**: Table and JSON rendering
//! - **`runner`**: The ingest → schedule → report pipeline used by the CLI
//!
//! # Example
//!
//! ```
//! use cpu_sched::models::Process;
//! use cpu_sched::scheduler::{simulate, FifoScheduler};
//!
//! let processes = vec![
//!     Process::new(1, 10, 22),
//!     Process::new(2, 68, 12),
//!     Process::new(3, 98, 34),
//! ];
//! let run = simulate(&FifoScheduler::new(), &processes);
//! assert_eq!(run.schedule.makespan(), 132);
//! assert_eq!(run.metrics.avg_waiting_time, 0.0);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod dispatching;
pub mod error;
pub mod ingest;
pub mod models;
pub mod report;
pub mod runner;
pub mod scheduler;
pub mod validation;

pub use error::{Error, Result};
