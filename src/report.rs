//! Human-readable and JSON rendering of simulation results.

use std::fmt::Write;

use crate::error::Result;
use crate::models::Schedule;
use crate::scheduler::{Metrics, SimulationRun};

const COLUMNS: [&str; 8] = [
    "PID",
    "Arrival",
    "Burst",
    "Start",
    "Completion",
    "Turnaround",
    "Waiting",
    "Response",
];

/// Renders one run as a per-process table followed by its metrics.
///
/// Rows are ordered by process id.
pub fn render_table(run: &SimulationRun) -> String {
    let mut out = String::new();
    let title = format!("{} Scheduling", run.schedule.algorithm);
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "=".repeat(title.len()));

    let header: Vec<String> = COLUMNS.iter().map(|c| format!("{c:>10}")).collect();
    let _ = writeln!(out, "{}", header.join(" "));

    for e in run.schedule.by_id() {
        let _ = writeln!(
            out,
            "{:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
            e.id(),
            e.arrival_time(),
            e.burst_time(),
            e.start_time,
            e.completion_time,
            e.turnaround_time,
            e.waiting_time,
            e.response_time,
        );
    }

    if !run.schedule.is_empty() {
        let _ = writeln!(out, "\nTimeline: {}", render_timeline(&run.schedule));
    }

    out.push('\n');
    out.push_str(&render_metrics(&run.metrics));
    out
}

/// Renders the CPU timeline, e.g. `[0-10 idle] [10-32 P1]`.
pub fn render_timeline(schedule: &Schedule) -> String {
    schedule
        .timeline()
        .iter()
        .map(|i| match i.process_id {
            Some(id) => format!("[{}-{} P{}]", i.start, i.end, id),
            None => format!("[{}-{} idle]", i.start, i.end),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders the metrics block.
pub fn render_metrics(m: &Metrics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Processes:               {}", m.process_count);
    let _ = writeln!(out, "Average waiting time:    {:.2}", m.avg_waiting_time);
    let _ = writeln!(out, "Average turnaround time: {:.2}", m.avg_turnaround_time);
    let _ = writeln!(out, "Average response time:   {:.2}", m.avg_response_time);
    let _ = writeln!(out, "Total elapsed time:      {}", m.total_elapsed_time);
    let _ = writeln!(out, "CPU idle time:           {}", m.idle_time);
    let _ = writeln!(out, "Throughput:              {:.4} processes/unit", m.throughput);
    let _ = writeln!(out, "CPU utilization:         {:.2}%", m.cpu_utilization);
    out
}

/// Renders a side-by-side metrics summary of several runs.
pub fn render_comparison(runs: &[SimulationRun]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10} {:>12} {:>12} {:>12} {:>10} {:>12} {:>10}",
        "Algorithm", "Avg Wait", "Avg TAT", "Avg Resp", "Elapsed", "Throughput", "CPU %"
    );
    for run in runs {
        let m = &run.metrics;
        let _ = writeln!(
            out,
            "{:<10} {:>12.2} {:>12.2} {:>12.2} {:>10} {:>12.4} {:>10.2}",
            run.schedule.algorithm,
            m.avg_waiting_time,
            m.avg_turnaround_time,
            m.avg_response_time,
            m.total_elapsed_time,
            m.throughput,
            m.cpu_utilization,
        );
    }
    out
}

/// Renders runs as pretty-printed JSON.
pub fn render_json(runs: &[SimulationRun]) -> Result<String> {
    Ok(serde_json::to_string_pretty(runs)?)
}
