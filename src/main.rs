use std::io;
use std::path::Path;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use hash402_setup::SetupError;
use hash402_setup::config::Config;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("failed to load configuration: {e}");
            return ExitCode::from(1);
        }
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false)
                // Keep stdout reserved for the status lines.
                .with_writer(io::stderr),
        )
        .init();

    let mut stdout = io::stdout().lock();
    match hash402_setup::setup::run(&cfg, Path::new("."), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        // The runner already printed the error line for this case.
        Err(SetupError::MissingDatabaseUrl) => ExitCode::from(1),
        Err(e) => {
            error!(error = %e, "database setup failed");
            ExitCode::from(1)
        }
    }
}
