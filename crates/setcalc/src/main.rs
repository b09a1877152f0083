//! SetCalc-rs: concurrent set-algebra and statistics report.

use setcalc_cli::ui::print_error;
use setcalc_lib::{app, config, errors};

fn main() {
    let config = config::AppConfig::parse();

    // Initialize tracing
    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(err) = app::run(&config) {
        print_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code_for(&err));
    }
}
