use std::sync::Arc;

use tokio::sync::mpsc;

use fz_core::{ContainerId, TimeOfDay};

use crate::usecases::internal::{ReminderReconciler, UndoSlot};
use crate::usecases::*;
use crate::AppDeps;

pub const DEFAULT_SNOOZE_DAYS: i32 = 7;

/// Session-level knobs that come from configuration rather than stored settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppOptions {
    /// Time of day reminders fire on their target date.
    pub reminder_time: TimeOfDay,
    pub snooze_days: i32,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            reminder_time: TimeOfDay::DEFAULT,
            snooze_days: DEFAULT_SNOOZE_DAYS,
        }
    }
}

/// The application runtime.
///
/// Hands out use cases wired to the shared ports. Owns the one-shot undo slot,
/// so undo only works within the lifetime of one `App`.
pub struct App {
    deps: AppDeps,
    options: AppOptions,
    undo: Arc<UndoSlot>,
}

impl App {
    /// This constructor signature is the dependency manifest.
    pub fn new(deps: AppDeps, options: AppOptions) -> Self {
        Self {
            deps,
            options,
            undo: Arc::new(UndoSlot::new()),
        }
    }

    pub fn deps(&self) -> &AppDeps {
        &self.deps
    }

    pub fn options(&self) -> AppOptions {
        self.options
    }

    fn reminders(&self) -> ReminderReconciler {
        ReminderReconciler::new(
            Arc::clone(&self.deps.containers),
            Arc::clone(&self.deps.scheduler),
            Arc::clone(&self.deps.clock),
        )
    }

    pub fn handle_scan(&self) -> HandleScan {
        HandleScan::new(Arc::clone(&self.deps.containers))
    }

    pub fn create_from_scan(&self) -> CreateFromScan {
        CreateFromScan::new(
            Arc::clone(&self.deps.containers),
            self.reminders(),
            Arc::clone(&self.deps.clock),
        )
    }

    pub fn claim_label(&self) -> ClaimLabel {
        ClaimLabel::new(
            Arc::clone(&self.deps.containers),
            self.reminders(),
            Arc::clone(&self.deps.clock),
        )
    }

    pub fn reuse_label(&self) -> ReuseLabel {
        ReuseLabel::new(
            Arc::clone(&self.deps.containers),
            Arc::clone(&self.deps.settings),
            self.reminders(),
            Arc::clone(&self.deps.clock),
            self.options,
        )
    }

    pub fn get_container(&self) -> GetContainer {
        GetContainer::new(
            Arc::clone(&self.deps.containers),
            Arc::clone(&self.deps.settings),
            Arc::clone(&self.deps.clock),
        )
    }

    pub fn list_containers(&self) -> ListContainers {
        ListContainers::new(
            Arc::clone(&self.deps.containers),
            Arc::clone(&self.deps.settings),
            Arc::clone(&self.deps.clock),
        )
    }

    pub fn mark_used(&self) -> MarkUsed {
        MarkUsed::new(
            Arc::clone(&self.deps.containers),
            self.reminders(),
            Arc::clone(&self.deps.clock),
        )
    }

    pub fn soft_delete(&self) -> SoftDelete {
        SoftDelete::new(
            Arc::clone(&self.deps.containers),
            self.reminders(),
            Arc::clone(&self.deps.clock),
            Arc::clone(&self.undo),
        )
    }

    pub fn undo_last_delete(&self) -> UndoLastDelete {
        UndoLastDelete::new(
            Arc::clone(&self.deps.containers),
            self.reminders(),
            Arc::clone(&self.deps.clock),
            Arc::clone(&self.undo),
        )
    }

    pub fn update_shelf_life(&self) -> UpdateShelfLife {
        UpdateShelfLife::new(
            Arc::clone(&self.deps.containers),
            Arc::clone(&self.deps.clock),
        )
    }

    pub fn set_reminder(&self) -> SetReminder {
        SetReminder::new(Arc::clone(&self.deps.containers), self.reminders())
    }

    pub fn snooze(&self) -> Snooze {
        Snooze::new(
            Arc::clone(&self.deps.containers),
            self.reminders(),
            Arc::clone(&self.deps.clock),
            self.options.snooze_days,
        )
    }

    pub fn deliver_reminder(&self) -> DeliverReminder {
        DeliverReminder::new(
            Arc::clone(&self.deps.containers),
            Arc::clone(&self.deps.notifier),
        )
    }

    pub fn reschedule_reminders(&self) -> RescheduleReminders {
        RescheduleReminders::new(
            Arc::clone(&self.deps.containers),
            self.reminders(),
            Arc::clone(&self.deps.clock),
        )
    }

    pub fn reminder_delivery_loop(
        &self,
        fired_rx: mpsc::UnboundedReceiver<ContainerId>,
    ) -> ReminderDeliveryLoop {
        ReminderDeliveryLoop::new(self.deliver_reminder(), fired_rx)
    }

    pub fn print_labels(&self) -> PrintLabels {
        PrintLabels::new(
            Arc::clone(&self.deps.containers),
            Arc::clone(&self.deps.clock),
        )
    }

    pub fn get_settings(&self) -> GetSettings {
        GetSettings::new(Arc::clone(&self.deps.settings))
    }

    pub fn update_settings(&self) -> UpdateSettings {
        UpdateSettings::new(Arc::clone(&self.deps.settings))
    }
}
