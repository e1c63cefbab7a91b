use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser};
use html_grader::infrastructure::init_logging_with_config;
use html_grader::{write_report, AppConfig, Grader, GraderError, HtmlSource, DEFAULT_CHECKS_FILE};
use tracing::debug;

/// Grade an HTML page for the presence of the elements listed in a checks file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to checks file (JSON array of CSS selectors)
    #[arg(short, long, value_name = "CHECK_FILE", default_value = DEFAULT_CHECKS_FILE)]
    checks: PathBuf,

    /// Path to html file
    #[arg(short, long, value_name = "HTML_FILE")]
    file: Option<PathBuf>,

    /// Link to html file
    #[arg(short, long, value_name = "HTML_URL")]
    url: Option<String>,

    /// Optional config file (toml, json or yaml)
    #[arg(long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // GraderError messages already embed their source
            match err.downcast_ref::<GraderError>() {
                Some(grader_err) => {
                    eprintln!("Error: {grader_err}. Exiting.");
                    ExitCode::from(grader_err.exit_code())
                }
                None => {
                    eprintln!("Error: {err:#}. Exiting.");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load(cli.config.as_deref())?.with_verbosity(cli.verbose);
    let log_guard = init_logging_with_config(&config.logging)?;

    let outcome = grade(cli, &config).await;
    if let Err(err) = &outcome {
        debug!("Run failed: {:?}", err);
    }

    // Flushes the log file before the process exits
    drop(log_guard);
    outcome
}

async fn grade(cli: Cli, config: &AppConfig) -> Result<()> {
    let source = HtmlSource::from_options(cli.file, cli.url)?;
    let grader = Grader::new(config)?;
    let report = grader.run(&source, &cli.checks).await?;

    write_report(&report, std::io::stdout().lock())?;
    Ok(())
}
