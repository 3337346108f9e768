//! Terminal front end over standard input and output.

use std::process::ExitCode;

use parley::{ParleyConfig, ParleyError, build_session, run_repl};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(error) = parley::telemetry::init_tracing() {
        eprintln!("parley: {error}");
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(error = %error, "parley exited with an error");
            eprintln!("parley: {error}");
            ExitCode::from(1)
        }
    }
}

async fn run() -> Result<(), ParleyError> {
    let config = ParleyConfig::from_env()?;
    let session = build_session(&config);
    tracing::info!(session_id = %session.id(), "parley {} ready", env!("CARGO_PKG_VERSION"));

    run_repl(
        &session,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await
}
