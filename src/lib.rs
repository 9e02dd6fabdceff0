//! # freezr
//!
//! Binary-side assembly: configuration, tracing, dependency wiring and the
//! command line. Business rules live in `fz-app` and `fz-core`.

pub mod bootstrap;
pub mod cli;

use anyhow::Context;

use fz_app::App;
use fz_core::ports::AppDirsPort;
use fz_platform::DirsAppDirsAdapter;

use bootstrap::config::{resolve_config, ConfigOverrides};
use bootstrap::tracing::init_tracing_subscriber;
use bootstrap::wiring::wire_dependencies;
use cli::{Cli, Command};

/// Resolve config, initialize logging, wire the app and run `cli.command`.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let app_dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("Failed to locate the application data directory")?;
    let overrides = ConfigOverrides {
        config_path: cli.config,
        database_path: cli.database,
    };
    let resolved = resolve_config(&app_dirs, &overrides)?;

    if let Err(err) = init_tracing_subscriber(&resolved.config.log_dir) {
        eprintln!("Failed to initialize tracing: {err:#}");
    }
    tracing::debug!(
        config = %resolved.config_path.display(),
        database = %resolved.config.database_path.display(),
        "Configuration resolved"
    );

    let wired = wire_dependencies(&resolved.config)?;
    let app = App::new(wired.deps, resolved.options);

    match cli.command {
        Command::Shell => cli::run_shell(&app, wired.fired_rx, wired.scheduler).await,
        command => cli::run_command(&app, command, &mut std::io::stdout()).await,
    }
}
