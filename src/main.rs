//! Quieten CLI entrypoint for bulk notification triage.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use ortho_config::OrthoConfig;
use quieten::{
    InboxError, NoopTelemetrySink, OctocrabNotificationGateway, PersonalAccessToken,
    QuietenConfig, StderrJsonlTelemetrySink, TelemetrySink,
};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::console::Console;
use cli::session::{Session, SessionEnd};
use cli::signal::{self, EXIT_INTERRUPTED, InterruptState};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(SessionEnd::Exit) => ExitCode::SUCCESS,
        Ok(SessionEnd::Interrupted) => {
            let _ignored = writeln!(io::stderr().lock(), "Exited");
            ExitCode::from(EXIT_INTERRUPTED)
        }
        Err(error) => {
            let _ignored = writeln!(io::stderr().lock(), "{error}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<SessionEnd, InboxError> {
    let config = load_config()?;
    init_tracing(&config);

    let interrupt = Arc::new(InterruptState::default());
    signal::install(Arc::clone(&interrupt));

    let mut console = Console::new(io::stdin().lock(), io::stdout());
    let token = match QuietenConfig::resolve_token() {
        Some(value) => PersonalAccessToken::new(value)?,
        None => PersonalAccessToken::new(console.ask("GitHub token: ")?.unwrap_or_default())?,
    };

    let api_base = config.api_base()?;
    let gateway = OctocrabNotificationGateway::for_token(&token, &api_base)?;
    let telemetry: Box<dyn TelemetrySink> = if config.telemetry {
        Box::new(StderrJsonlTelemetrySink)
    } else {
        Box::new(NoopTelemetrySink)
    };

    tracing::debug!(api_base = api_base.as_str(), "session starting");
    Session::new(&gateway, config.include_read(), telemetry.as_ref(), interrupt)
        .run(&mut console)
        .await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`InboxError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<QuietenConfig, InboxError> {
    QuietenConfig::load().map_err(|error| InboxError::Configuration {
        message: error.to_string(),
    })
}

fn init_tracing(config: &QuietenConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    let _ignored = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
