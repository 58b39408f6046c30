//! Command routing and execution

use anyhow::Result;
use tokio_util::sync::CancellationToken;

use crate::app::AppConfig;
use crate::cli::args::Commands;
use crate::cli::commands::*;

/// Execute a CLI command based on the parsed arguments
pub async fn execute_command(command: Commands, config: &AppConfig) -> Result<()> {
    let cancel = CancellationToken::new();
    let _ctrl_c = spawn_ctrl_c_handler(cancel.clone());

    match command {
        Commands::Run { task } => run_task_command(config, &task, cancel).await,
        Commands::Build { no_install } => run_build_command(config, no_install, cancel).await,
        Commands::Install => run_install_command(config, cancel).await,
        Commands::Test => run_test_command(config, cancel).await,
        Commands::List => run_list_command(config).await,
        Commands::Docs { output } => run_docs_command(&output),
    }
}

/// Cancel in-flight steps on Ctrl-C. The returned guard stops listening when
/// dropped.
fn spawn_ctrl_c_handler(cancel: CancellationToken) -> tokio_util::sync::DropGuard {
    let listener = CancellationToken::new();
    let stop = listener.clone();
    tokio::spawn(async move {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                if result.is_ok() {
                    tracing::warn!("Interrupt received, cancelling running step");
                    cancel.cancel();
                }
            }
            _ = stop.cancelled() => {}
        }
    });
    listener.drop_guard()
}
