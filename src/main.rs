use std::process::ExitCode;

use clap::Parser;
use rasify::{Args, Reporter, Walker};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "RASIFY_LOG";

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> miette::Result<ExitCode> {
    let args = Args::parse();
    init_tracing(args.log_level());

    let reporter = Reporter::for_stdout(args.no_color);
    let config = args.into_config()?;
    tracing::debug!(?config, "starting run");

    let summary = Walker::new(config).run(|outcome| {
        if let Some(line) = reporter.line(outcome) {
            println!("{line}");
        }
    })?;
    println!("{}", reporter.summary(&summary));

    Ok(ExitCode::from(summary.exit_code()))
}
