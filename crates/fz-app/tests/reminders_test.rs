mod support;

use chrono::NaiveDate;
use tokio::sync::mpsc;

use fz_core::container::DAY_MS;
use fz_core::{ContainerId, ReminderRequest, TimeOfDay};
use support::{claimed, harness, harness_with_notifier, utc_ms, MockNotifier, NOW};

#[tokio::test]
async fn reminder_on_explicit_date_stores_day_difference() {
    let h = harness();
    let id = claimed(&h, "Ragu", None).await;

    let request = ReminderRequest::On {
        date: NaiveDate::from_ymd_opt(2023, 11, 20).unwrap(),
        time: TimeOfDay::new(18, 30).unwrap(),
    };
    let at = h.app.set_reminder().execute(id, request).await.unwrap();

    let expected = utc_ms(2023, 11, 20, 18, 30);
    assert_eq!(at, Some(expected));
    assert_eq!(h.scheduler.trigger_at(id), Some(expected));
    let row = h.containers.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(row.reminder_days, Some(6));
    assert_eq!(row.reminder_at_ms, Some(expected));
}

#[tokio::test]
async fn setting_a_reminder_replaces_the_pending_one() {
    let h = harness();
    let id = claimed(&h, "Soup", Some(ReminderRequest::in_days(10))).await;

    h.app
        .set_reminder()
        .execute(id, ReminderRequest::in_days(0))
        .await
        .unwrap();

    assert_eq!(h.scheduler.pending_ids(), vec![id]);
    assert_eq!(h.scheduler.trigger_at(id), Some(utc_ms(2023, 11, 14, 8, 0)));
}

#[tokio::test]
async fn past_dates_and_negative_days_are_rejected() {
    let h = harness();
    let id = claimed(&h, "Stew", None).await;

    let past = ReminderRequest::On {
        date: NaiveDate::from_ymd_opt(2023, 11, 13).unwrap(),
        time: TimeOfDay::DEFAULT,
    };
    assert!(h.app.set_reminder().execute(id, past).await.is_err());
    assert!(h
        .app
        .set_reminder()
        .execute(id, ReminderRequest::in_days(-1))
        .await
        .is_err());
    assert!(h.scheduler.pending_ids().is_empty());
}

#[tokio::test]
async fn reminders_are_only_set_on_active_items() {
    let h = harness();
    let id = claimed(&h, "Cake", None).await;
    h.app.mark_used().execute(id).await.unwrap();

    let at = h
        .app
        .set_reminder()
        .execute(id, ReminderRequest::in_days(2))
        .await
        .unwrap();
    assert_eq!(at, None);
    assert_eq!(h.app.snooze().execute(id).await.unwrap(), None);
    assert!(h.scheduler.pending_ids().is_empty());
}

#[tokio::test]
async fn snooze_pushes_reminder_a_week_out() {
    let h = harness();
    let id = claimed(&h, "Tacos", Some(ReminderRequest::in_days(1))).await;

    let at = h.app.snooze().execute(id).await.unwrap();

    assert_eq!(at, Some(NOW + 7 * DAY_MS));
    assert_eq!(h.scheduler.trigger_at(id), Some(NOW + 7 * DAY_MS));
    let row = h.containers.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(row.reminder_at_ms, Some(NOW + 7 * DAY_MS));
}

#[tokio::test]
async fn scheduler_failure_does_not_fail_the_claim() {
    let h = harness();
    h.scheduler.fail_schedules(true);

    let id = claimed(&h, "Lentils", Some(ReminderRequest::in_days(2))).await;

    let row = h.containers.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(row.reminder_at_ms, Some(utc_ms(2023, 11, 16, 8, 0)));
    assert!(h.scheduler.pending_ids().is_empty());
}

#[tokio::test]
async fn restart_reschedules_only_future_active_reminders() {
    let h = harness();
    let soon = claimed(&h, "Soon", Some(ReminderRequest::in_days(1))).await;
    let later = claimed(&h, "Later", Some(ReminderRequest::in_days(10))).await;
    let used = claimed(&h, "Used", Some(ReminderRequest::in_days(10))).await;
    h.app.mark_used().execute(used).await.unwrap();

    h.scheduler.reset();
    h.clock.set(utc_ms(2023, 11, 16, 0, 0));

    let scheduled = h.app.reschedule_reminders().execute().await.unwrap();

    assert_eq!(scheduled, 1);
    assert_eq!(h.scheduler.pending_ids(), vec![later]);
    assert_eq!(h.scheduler.trigger_at(soon), None);
}

#[tokio::test]
async fn delivered_reminder_names_the_item_and_keeps_reminder_at() {
    let mut notifier = MockNotifier::new();
    notifier
        .expect_show()
        .withf(|n| {
            n.title == "Freezr Reminder"
                && n.body == "Chili – check if it needs action"
                && n.actions.len() == 2
        })
        .times(1)
        .returning(|_| Ok(()));
    let h = harness_with_notifier(notifier);
    let id = claimed(&h, "Chili", Some(ReminderRequest::in_days(1))).await;

    assert!(h.app.deliver_reminder().execute(id).await.unwrap());

    let row = h.containers.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(row.reminder_at_ms, Some(utc_ms(2023, 11, 15, 8, 0)));
}

#[tokio::test]
async fn delivery_loop_skips_inactive_and_missing_containers() {
    let mut notifier = MockNotifier::new();
    notifier.expect_show().times(1).returning(|_| Ok(()));
    let h = harness_with_notifier(notifier);

    let active = claimed(&h, "Active", Some(ReminderRequest::in_days(1))).await;
    let used = claimed(&h, "Used", Some(ReminderRequest::in_days(1))).await;
    h.app.mark_used().execute(used).await.unwrap();

    let (tx, rx) = mpsc::unbounded_channel();
    tx.send(used).unwrap();
    tx.send(ContainerId::new(404)).unwrap();
    tx.send(active).unwrap();
    drop(tx);

    let delivered = h.app.reminder_delivery_loop(rx).run().await;
    assert_eq!(delivered, 1);
}

#[tokio::test]
async fn notifier_errors_surface_from_delivery() {
    let mut notifier = MockNotifier::new();
    notifier
        .expect_show()
        .times(1)
        .returning(|_| Err(anyhow::anyhow!("display unavailable")));
    let h = harness_with_notifier(notifier);
    let id = claimed(&h, "Broth", None).await;

    assert!(h.app.deliver_reminder().execute(id).await.is_err());
}
