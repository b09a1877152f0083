//! Application entry point and dispatch.

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, warn};

use setcalc_cli::ui::print_warning;
use setcalc_cli::{ConsoleSink, FileSink};
use setcalc_core::{DefaultTaskFactory, Task, TaskFactory};
use setcalc_orchestration::observer::{LoggingObserver, PipelineObserver};
use setcalc_orchestration::task_selection::select_tasks;
use setcalc_orchestration::{run_pipeline_with_observer, Report, ReportSink};

use crate::config::{AppConfig, ReportOrder};
use crate::errors::AppError;
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        setcalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    if config.list {
        list_tasks();
        return Ok(());
    }

    run_cli(config)
}

fn list_tasks() {
    let factory = DefaultTaskFactory::default();
    for key in factory.available() {
        if let Ok(task) = factory.get(key) {
            println!("{key:<22} {} ({})", task.name(), task.kind());
        }
    }
}

fn run_cli(config: &AppConfig) -> Result<()> {
    debug!(version = %full_version(), "Starting");

    let factory = DefaultTaskFactory::new(config.batch_inputs()?);
    let tasks = select_tasks(&config.tasks, &factory)?;
    let opts = config.pipeline_options();

    let observer: Arc<dyn PipelineObserver> = Arc::new(LoggingObserver::new());
    let report = run_pipeline_with_observer(&tasks, &opts, observer)?;

    if report.len() != tasks.len() {
        warn!(expected = tasks.len(), actual = report.len(), "Incomplete report");
        print_warning(&format!(
            "report has {} of {} entries",
            report.len(),
            tasks.len()
        ));
    }

    let report = arrange(report, config.order, &tasks);

    ConsoleSink::new(config.format, config.quiet).present(&report)?;

    if let Some(ref path) = config.output {
        FileSink::new(path, config.format)
            .present(&report)
            .map_err(|source| AppError::Output {
                path: path.clone(),
                source,
            })?;
    }

    Ok(())
}

fn arrange(report: Report, order: ReportOrder, tasks: &[Arc<dyn Task>]) -> Report {
    match order {
        ReportOrder::Arrival => report,
        ReportOrder::Name => report.sorted_by_name(),
        ReportOrder::Declared => {
            let names: Vec<&str> = tasks.iter().map(|t| t.name()).collect();
            report.ordered_by(&names)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("setcalc").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn run_default_batch() {
        assert!(run(&config(&["-q"])).is_ok());
    }

    #[test]
    fn run_unknown_task_fails() {
        let err = run(&config(&["--tasks", "kurtosis"])).unwrap_err();
        assert_eq!(crate::errors::exit_code_for(&err), 4);
    }

    #[test]
    fn run_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let path_str = path.to_str().unwrap();
        run(&config(&["-q", "--order", "declared", "-o", path_str])).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let first = contents.lines().next().unwrap();
        assert_eq!(first, "Intersection: 2 3");
        assert_eq!(contents.lines().count(), 10);
    }

    #[test]
    fn arrange_declared_order() {
        let factory = DefaultTaskFactory::default();
        let tasks = select_tasks("mean,union", &factory).unwrap();
        let report = setcalc_orchestration::run_pipeline(
            &tasks,
            &setcalc_orchestration::PipelineOptions::default(),
        )
        .unwrap();
        let arranged = arrange(report, ReportOrder::Declared, &tasks);
        assert_eq!(arranged.names(), vec!["Mean", "Union"]);
    }

    #[test]
    fn arrange_by_name() {
        let factory = DefaultTaskFactory::default();
        let tasks = select_tasks("variance,mean,union", &factory).unwrap();
        let report = setcalc_orchestration::run_pipeline(
            &tasks,
            &setcalc_orchestration::PipelineOptions::default(),
        )
        .unwrap();
        let arranged = arrange(report, ReportOrder::Name, &tasks);
        assert_eq!(arranged.names(), vec!["Mean", "Union", "Variance"]);
    }

    #[test]
    fn list_does_not_fail() {
        assert!(run(&config(&["--list"])).is_ok());
    }
}
