use clap::Parser;
use tracing::debug;

use opsrunner::app::{handle_fatal_error, init_logging, AppConfig};
use opsrunner::cli::{execute_command, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = AppConfig::new(cli.verbose)
        .with_config_path(cli.file)
        .with_shell(cli.shell)
        .with_working_dir(cli.dir);
    init_logging(&config);
    debug!("Using config file: {}", config.config_path.display());

    if let Err(e) = execute_command(cli.command, &config).await {
        handle_fatal_error(e, config.verbose);
    }
}
