//! End-to-end pipeline: ingest, validate, schedule, aggregate, render.

use crate::config::{OutputFormat, RunConfig};
use crate::error::{Error, Result};
use crate::ingest::read_process_file;
use crate::models::Process;
use crate::report;
use crate::scheduler::{compare, SimulationRun};
use crate::validation::validate_input;

/// Loads the configured workload and runs every configured discipline on it.
///
/// Fails before any scheduling happens if the workload cannot be read or
/// is invalid.
pub fn simulate_file(config: &RunConfig) -> Result<Vec<SimulationRun>> {
    let processes = read_process_file(&config.input_path)?;
    simulate_processes(config, &processes)
}

/// Runs every configured discipline on an in-memory workload.
pub fn simulate_processes(config: &RunConfig, processes: &[Process]) -> Result<Vec<SimulationRun>> {
    validate_input(processes).map_err(Error::InvalidInput)?;
    tracing::info!(
        processes = processes.len(),
        algorithms = ?config.algorithms,
        "Running simulation"
    );
    Ok(compare(&config.algorithms, processes))
}

/// Renders runs in the configured output format.
pub fn render(config: &RunConfig, runs: &[SimulationRun]) -> Result<String> {
    match config.output {
        OutputFormat::Json => report::render_json(runs),
        OutputFormat::Table => {
            let mut sections: Vec<String> = runs.iter().map(report::render_table).collect();
            if config.is_comparison() {
                sections.push(format!("Comparison\n==========\n{}", report::render_comparison(runs)));
            }
            Ok(sections.join("\n"))
        }
    }
}

/// Runs the full pipeline and returns the rendered report.
pub fn execute(config: &RunConfig) -> Result<String> {
    let runs = simulate_file(config)?;
    render(config, &runs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::Algorithm;
    use crate::validation::ValidationErrorKind;
    use std::io::Write;

    fn workload_file(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "ArrivalTime\tCPUBurstLength\n{body}").unwrap();
        file
    }

    #[test]
    fn test_execute_table() {
        let file = workload_file("10\t22\n68\t12\n98\t34\n");
        let config = RunConfig::default().with_input_path(file.path());

        let out = execute(&config).unwrap();
        assert!(out.starts_with("FIFO Scheduling"));
        assert!(out.contains("Total elapsed time:      132"));
        assert!(!out.contains("Comparison"));
    }

    #[test]
    fn test_execute_comparison() {
        let file = workload_file("0\t8\n1\t4\n2\t1\n");
        let config = RunConfig::default()
            .with_input_path(file.path())
            .with_algorithms(Algorithm::all());

        let out = execute(&config).unwrap();
        assert!(out.contains("FIFO Scheduling"));
        assert!(out.contains("SJF Scheduling"));
        assert!(out.contains("Comparison"));
    }

    #[test]
    fn test_execute_json() {
        let file = workload_file("5\t10\n5\t3\n");
        let config = RunConfig::default()
            .with_input_path(file.path())
            .with_output(OutputFormat::Json);

        let out = execute(&config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["schedule"]["algorithm"], "FIFO");
        assert_eq!(value[0]["schedule"]["entries"][0]["completion_time"], 15);
        assert_eq!(value[0]["schedule"]["entries"][1]["completion_time"], 18);
    }

    #[test]
    fn test_format_error_produces_no_runs() {
        let file = workload_file("10\t22\nnot_a_number\t50\n");
        let config = RunConfig::default().with_input_path(file.path());
        assert!(matches!(simulate_file(&config), Err(Error::Format { .. })));
    }

    #[test]
    fn test_invalid_processes_rejected() {
        let processes = vec![Process::new(1, 0, 4), Process::new(1, 2, 2)];
        let err = simulate_processes(&RunConfig::default(), &processes).unwrap_err();
        match err {
            Error::InvalidInput(errors) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId)
            }
            other => panic!("expected invalid input, got {other:?}"),
        }
    }

    #[test]
    fn test_oversized_times_rejected_before_scheduling() {
        let processes = vec![Process::new(1, i64::MAX, 1), Process::new(2, 0, 1)];
        let config = RunConfig::default().with_algorithms(Algorithm::all());
        match simulate_processes(&config, &processes).unwrap_err() {
            Error::InvalidInput(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].kind, ValidationErrorKind::TimeOutOfRange);
            }
            other => panic!("expected invalid input, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_workload() {
        let file = workload_file("");
        let config = RunConfig::default().with_input_path(file.path());
        let runs = simulate_file(&config).unwrap();
        assert!(runs[0].schedule.is_empty());
        assert_eq!(runs[0].metrics.total_elapsed_time, 0);
    }
}
