//! Workload ingestion from tab-separated files.
//!
//! # Format
//!
//! ```text
//! ArrivalTime	CPUBurstLength
//! 10	22
//! 68	12
//! ```
//!
//! The first line is a header and is skipped. Every other non-blank line holds
//! exactly two whitespace-separated integers: arrival time, then burst time.
//! Process IDs are assigned from 1 in file order; blank lines do not consume
//! an ID. Both values must lie within [`MAX_TIME`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::{Process, MAX_TIME};

/// Reads and parses a workload file.
///
/// # Errors
/// [`Error::Open`] if the file cannot be opened, [`Error::Read`] on I/O
/// failure, [`Error::Format`] on the first malformed line. No processes are
/// returned on error.
pub fn read_process_file(path: impl AsRef<Path>) -> Result<Vec<Process>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let processes = parse_processes(BufReader::new(file))?;
    tracing::info!(path = %path.display(), processes = processes.len(), "Workload loaded");
    Ok(processes)
}

/// Parses a workload from any buffered reader.
pub fn parse_processes<R: BufRead>(reader: R) -> Result<Vec<Process>> {
    let mut processes = Vec::new();
    let mut next_id: u32 = 1;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if idx == 0 {
            tracing::trace!(header = %line, "Skipping header");
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        let (arrival_time, burst_time) = parse_line(&line).map_err(|reason| Error::Format {
            line_number: idx + 1,
            line: line.clone(),
            reason,
        })?;
        processes.push(Process::new(next_id, arrival_time, burst_time));
        next_id += 1;
    }

    Ok(processes)
}

fn parse_line(line: &str) -> std::result::Result<(i64, i64), String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [arrival, burst] = fields.as_slice() else {
        return Err(format!("expected 2 fields, found {}", fields.len()));
    };

    let arrival_time: i64 = arrival
        .parse()
        .map_err(|_| format!("arrival time {arrival:?} is not an integer"))?;
    let burst_time: i64 = burst
        .parse()
        .map_err(|_| format!("burst time {burst:?} is not an integer"))?;

    if arrival_time < 0 {
        return Err("arrival time must not be negative".to_string());
    }
    if burst_time <= 0 {
        return Err("burst time must be positive".to_string());
    }
    if arrival_time > MAX_TIME {
        return Err(format!("arrival time exceeds {MAX_TIME}"));
    }
    if burst_time > MAX_TIME {
        return Err(format!("burst time exceeds {MAX_TIME}"));
    }

    Ok((arrival_time, burst_time))
}
