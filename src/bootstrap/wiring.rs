//! # Dependency Injection
//!
//! ## Responsibilities
//!
//! - ✅ Create infra implementations (database, clock, reminder timers)
//! - ✅ Create platform implementations (notifier)
//! - ✅ Inject all dependencies into [`AppDeps`]
//!
//! ## Prohibited
//!
//! ❌ **No business logic.** Rescheduling reminders on startup is a use case.
//!
//! ❌ **No configuration validation.** Config was resolved in `config.rs`.
//!
//! > This is the only place allowed to depend on fz-infra + fz-platform + fz-app
//! > simultaneously, and only for assembly.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::mpsc;

use fz_app::AppDeps;
use fz_core::config::AppConfig;
use fz_core::ports::*;
use fz_core::ContainerId;
use fz_infra::db::executor::DieselSqliteExecutor;
use fz_infra::db::mappers::{
    container_mapper::ContainerRowMapper, settings_mapper::SettingsRowMapper,
};
use fz_infra::db::pool::{init_db_pool, DbPool, IN_MEMORY};
use fz_infra::db::repositories::{DieselContainerRepository, DieselSettingsRepository};
use fz_infra::{SystemClock, TokioReminderScheduler};
use fz_platform::TerminalNotifier;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Database initialization failed: {0}")]
    DatabaseInit(String),
}

/// Everything the runtime needs besides the [`AppDeps`] themselves.
pub struct Wired {
    pub deps: AppDeps,
    /// Ids of reminders whose timer fired.
    pub fired_rx: mpsc::UnboundedReceiver<ContainerId>,
    /// Concrete handle kept for shutdown.
    pub scheduler: Arc<TokioReminderScheduler>,
}

/// Create SQLite database connection pool
///
/// # Errors
///
/// Returns `WiringError::DatabaseInit` if:
/// - Parent directory creation fails
/// - Database pool creation fails
/// - Migration fails
fn create_db_pool(db_path: &Path) -> WiringResult<DbPool> {
    let is_memory = db_path.as_os_str() == IN_MEMORY;

    // Ensure parent directory exists
    if !is_memory {
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                WiringError::DatabaseInit(format!("Failed to create DB directory: {}", e))
            })?;
        }
    }

    let db_url = db_path
        .to_str()
        .ok_or_else(|| WiringError::DatabaseInit("Invalid database path".to_string()))?;

    // Create connection pool and run migrations
    init_db_pool(db_url)
        .map_err(|e| WiringError::DatabaseInit(format!("Failed to initialize DB: {}", e)))
}

/// Infrastructure layer implementations
struct InfraLayer {
    containers: Arc<dyn ContainerRepositoryPort>,
    settings: Arc<dyn SettingsPort>,
    clock: Arc<dyn ClockPort>,
    scheduler: Arc<TokioReminderScheduler>,
    fired_rx: mpsc::UnboundedReceiver<ContainerId>,
}

fn create_infra_layer(db_pool: DbPool) -> InfraLayer {
    let executor = DieselSqliteExecutor::new(db_pool);
    let containers: Arc<dyn ContainerRepositoryPort> = Arc::new(DieselContainerRepository::new(
        executor.clone(),
        ContainerRowMapper,
    ));
    let settings: Arc<dyn SettingsPort> =
        Arc::new(DieselSettingsRepository::new(executor, SettingsRowMapper));

    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);
    let (scheduler, fired_rx) = TokioReminderScheduler::new(Arc::clone(&clock));

    InfraLayer {
        containers,
        settings,
        clock,
        scheduler: Arc::new(scheduler),
        fired_rx,
    }
}

/// Platform layer implementations
struct PlatformLayer {
    notifier: Arc<dyn NotificationPort>,
}

fn create_platform_layer() -> PlatformLayer {
    PlatformLayer {
        notifier: Arc::new(TerminalNotifier::stdout()),
    }
}

/// Assemble the application dependencies from resolved config.
///
/// Must be called inside a tokio runtime; reminder timers are spawned on it.
pub fn wire_dependencies(config: &AppConfig) -> WiringResult<Wired> {
    let db_pool = create_db_pool(&config.database_path)?;
    let infra = create_infra_layer(db_pool);
    let platform = create_platform_layer();

    let scheduler: Arc<dyn ReminderSchedulerPort> = infra.scheduler.clone();
    let deps = AppDeps {
        containers: infra.containers,
        settings: infra.settings,
        scheduler,
        notifier: platform.notifier,
        clock: infra.clock,
    };

    Ok(Wired {
        deps,
        fired_rx: infra.fired_rx,
        scheduler: infra.scheduler,
    })
}
