mod scheduler;

pub use scheduler::TokioReminderScheduler;
