use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, warn};

use salary_core::FormInput;
use salary_ui::app::{self, OutputFormat};
use salary_ui::config::AppConfig;
use salary_ui::{logging, prompt};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Estimates monthly in-hand salary for a job offer in India.
///
/// Sends the offer details to the salary research service and prints the
/// breakdown it returns. Fields left out are asked for interactively when
/// stdin is a terminal.
#[derive(Debug, Parser)]
struct Cli {
    /// Company name, e.g. "Google" or "TCS".
    #[arg(long)]
    company: Option<String>,

    /// Job role or position, e.g. "SDE 1".
    #[arg(long)]
    position: Option<String>,

    /// Annual CTC as free text, e.g. "15,00,000" or "15 LPA".
    #[arg(long)]
    ctc: Option<String>,

    /// Work location, e.g. "Bangalore".
    #[arg(long)]
    location: Option<String>,

    /// Base URL of the salary service. Overrides SALARY_API_URL.
    #[arg(long)]
    api_base: Option<String>,

    /// TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the raw result as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Hide log output on stderr.
    #[arg(long, short)]
    quiet: bool,
}

impl Cli {
    fn form(&self) -> FormInput {
        FormInput {
            company: self.company.clone().unwrap_or_default(),
            position: self.position.clone().unwrap_or_default(),
            ctc: self.ctc.clone().unwrap_or_default(),
            location: self.location.clone().unwrap_or_default(),
        }
    }

    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    logging::init_logging("warn");

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_env(|key| std::env::var(key).ok());
    config.apply_api_base(cli.api_base.clone());

    // RUST_LOG wins over the config file.
    if std::env::var_os("RUST_LOG").is_none() {
        if let Some(level) = config.log_level.as_deref() {
            logging::set_log_level(level)?;
        }
    }
    if let Some(path) = cli.log_file.as_deref() {
        logging::enable_file_logging(path)?;
    }
    if cli.quiet {
        logging::set_console_enabled(false)?;
    }

    let mut form = cli.form();
    if prompt::has_missing(&form) && io::stdin().is_terminal() {
        let mut stderr = io::stderr();
        prompt::prompt_missing(&mut form, &mut io::stdin().lock(), &mut stderr)?;
    }

    debug!(api_base = %config.api_base, "submitting");
    let state = app::calculate(&config, form).await?;
    let outcome = state.request_state();

    let output = app::render_output(outcome, cli.output_format())?;
    io::stdout().write_all(output.as_bytes())?;

    if outcome.error_message().is_some() {
        warn!(state = outcome.name(), "calculation failed");
        Ok(ExitCode::FAILURE)
    } else {
        info!("calculation finished");
        Ok(ExitCode::SUCCESS)
    }
}
