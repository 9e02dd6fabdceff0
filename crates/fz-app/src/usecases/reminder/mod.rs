mod deliver_reminder;
mod delivery_loop;
mod reschedule_reminders;
mod set_reminder;
mod snooze;

pub use deliver_reminder::DeliverReminder;
pub use delivery_loop::ReminderDeliveryLoop;
pub use reschedule_reminders::RescheduleReminders;
pub use set_reminder::SetReminder;
pub use snooze::Snooze;
