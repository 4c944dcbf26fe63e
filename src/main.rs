//! depreport - Dependency catalogue report CLI tool
//!
//! Prints which libraries, SBT plugins and other dependencies of the
//! current repository have newer versions in the dependency catalogue.

use clap::Parser;
use depreport::catalogue::HttpCatalogue;
use depreport::cli::CliArgs;
use depreport::config::process_env;
use depreport::output::{create_highlighter, TextFormatter};
use depreport::remote::SystemGit;
use depreport::report::run_report;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize env_logger; `RUST_LOG` takes precedence over `--verbose`
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "depreport=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<()> {
    // Pick colored or plain output
    let color = args.use_color(process_env("NO_COLOR").as_deref());
    let formatter = TextFormatter::new(create_highlighter(color));

    // Only draw the spinner on an interactive stderr
    let show_progress = !args.no_progress && !args.verbose && io::stderr().is_terminal();
    let source = HttpCatalogue::new()?;

    // Resolve configuration and write the report
    let mut stdout = io::stdout().lock();
    let result = run_report(
        process_env,
        &SystemGit::new(),
        &args.repository_source(),
        Box::new(source),
        formatter,
        show_progress,
        &mut stdout,
    )
    .await;

    match result {
        Ok(reports) => {
            // Summary for verbose mode
            let outdated: usize = reports.iter().map(|r| r.outdated_count()).sum();
            log::debug!("{} dependencies to upgrade", outdated);
        }
        // Missing URL is reported, not treated as a failure
        Err(e) if e.is_url_not_set() => writeln!(stdout, "{}", e)?,
        Err(e) => return Err(e.into()),
    }

    // Output results
    stdout.flush()?;
    Ok(())
}
