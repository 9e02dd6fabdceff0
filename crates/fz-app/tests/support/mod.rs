//! Shared wiring for application tests: real SQLite storage in memory, a
//! settable clock, a scheduler that records requests and a mockall notifier.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use mockall::mock;

use fz_app::usecases::ItemForm;
use fz_app::{App, AppDeps, AppOptions};
use fz_core::ports::{
    ClockPort, ContainerRepositoryPort, NotificationPort, ReminderSchedulerError,
    ReminderSchedulerPort, SettingsPort,
};
use fz_core::{ContainerId, ReminderNotification, ReminderRequest};
use fz_infra::db::executor::DieselSqliteExecutor;
use fz_infra::db::mappers::container_mapper::ContainerRowMapper;
use fz_infra::db::mappers::settings_mapper::SettingsRowMapper;
use fz_infra::db::pool::{init_db_pool, IN_MEMORY};
use fz_infra::db::repositories::{DieselContainerRepository, DieselSettingsRepository};

/// 2023-11-14T22:13:20Z
pub const NOW: i64 = 1_700_000_000_000;

pub fn utc_ms(y: i32, m: u32, d: u32, h: u32, min: u32) -> i64 {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .unwrap()
        .timestamp_millis()
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 11, 14).unwrap()
}

pub struct FixedClock {
    now: AtomicI64,
}

impl FixedClock {
    pub fn new(now_ms: i64) -> Self {
        Self {
            now: AtomicI64::new(now_ms),
        }
    }

    pub fn set(&self, now_ms: i64) {
        self.now.store(now_ms, Ordering::SeqCst);
    }
}

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }

    fn local_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }
}

/// Keeps requested reminders in a map instead of running timers.
#[derive(Default)]
pub struct RecordingScheduler {
    pending: Mutex<BTreeMap<ContainerId, i64>>,
    cancelled: Mutex<Vec<ContainerId>>,
    failing: AtomicBool,
}

impl RecordingScheduler {
    pub fn trigger_at(&self, id: ContainerId) -> Option<i64> {
        self.pending.lock().unwrap().get(&id).copied()
    }

    pub fn cancelled(&self) -> Vec<ContainerId> {
        self.cancelled.lock().unwrap().clone()
    }

    pub fn pending_ids(&self) -> Vec<ContainerId> {
        self.pending.lock().unwrap().keys().copied().collect()
    }

    /// Forget every pending request, as a process restart would.
    pub fn reset(&self) {
        self.pending.lock().unwrap().clear();
        self.cancelled.lock().unwrap().clear();
    }

    pub fn fail_schedules(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl ReminderSchedulerPort for RecordingScheduler {
    async fn schedule(
        &self,
        id: ContainerId,
        trigger_at_ms: i64,
    ) -> Result<(), ReminderSchedulerError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ReminderSchedulerError::Schedule("alarm service unavailable".into()));
        }
        self.pending.lock().unwrap().insert(id, trigger_at_ms);
        Ok(())
    }

    async fn cancel(&self, id: ContainerId) -> Result<(), ReminderSchedulerError> {
        self.pending.lock().unwrap().remove(&id);
        self.cancelled.lock().unwrap().push(id);
        Ok(())
    }

    async fn pending(&self) -> Result<Vec<ContainerId>, ReminderSchedulerError> {
        Ok(self.pending_ids())
    }
}

mock! {
    pub Notifier {}

    #[async_trait]
    impl NotificationPort for Notifier {
        async fn show(&self, notification: &ReminderNotification) -> anyhow::Result<()>;
    }
}

pub struct Harness {
    pub app: App,
    pub clock: Arc<FixedClock>,
    pub scheduler: Arc<RecordingScheduler>,
    pub containers: Arc<dyn ContainerRepositoryPort>,
    pub settings: Arc<dyn SettingsPort>,
}

pub fn harness() -> Harness {
    harness_with_notifier(MockNotifier::new())
}

pub fn harness_with_notifier(notifier: MockNotifier) -> Harness {
    let pool = init_db_pool(IN_MEMORY).expect("Failed to init in-memory db");
    let executor = DieselSqliteExecutor::new(pool);
    let containers: Arc<dyn ContainerRepositoryPort> = Arc::new(DieselContainerRepository::new(
        executor.clone(),
        ContainerRowMapper,
    ));
    let settings: Arc<dyn SettingsPort> =
        Arc::new(DieselSettingsRepository::new(executor, SettingsRowMapper));
    let clock = Arc::new(FixedClock::new(NOW));
    let scheduler = Arc::new(RecordingScheduler::default());

    let deps = AppDeps {
        containers: Arc::clone(&containers),
        settings: Arc::clone(&settings),
        scheduler: scheduler.clone(),
        notifier: Arc::new(notifier),
        clock: clock.clone(),
    };

    Harness {
        app: App::new(deps, AppOptions::default()),
        clock,
        scheduler,
        containers,
        settings,
    }
}

/// Register one placeholder label and claim it.
pub async fn claimed(h: &Harness, name: &str, reminder: Option<ReminderRequest>) -> ContainerId {
    let labels = h.app.print_labels().execute(1, true).await.unwrap();
    let mut form = ItemForm::named(name);
    form.reminder = reminder;
    h.app
        .claim_label()
        .execute(&labels[0].uuid, &form)
        .await
        .unwrap()
        .unwrap()
}
