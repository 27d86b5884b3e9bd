use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Delegate to the server framework entry point.
    match player_server::run_with_config().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "player server exited with error");
            ExitCode::FAILURE
        }
    }
}
