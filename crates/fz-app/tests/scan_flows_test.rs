mod support;

use fz_app::usecases::ItemForm;
use fz_core::{ContainerStatus, ContainerUuid, ReminderRequest, ScanMode};
use support::{harness, utc_ms, NOW};

#[tokio::test]
async fn unknown_code_creates_active_container_without_reminder() {
    let h = harness();

    let outcome = h.app.handle_scan().execute("  FREEZR:abc-123\n").await.unwrap();
    assert_eq!(outcome.mode, ScanMode::Unknown);
    assert_eq!(outcome.uuid.as_str(), "abc-123");

    let form = ItemForm::named(" Chili ").with_shelf_life_days(30);
    let id = h
        .app
        .create_from_scan()
        .execute(&outcome.uuid, &form)
        .await
        .unwrap()
        .expect("unknown code should create a row");

    let row = h.containers.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(row.name, "Chili");
    assert_eq!(row.status, ContainerStatus::Active);
    assert_eq!(row.shelf_life_days, Some(30));
    assert_eq!(row.reminder_at_ms, None);
    assert!(h.scheduler.pending_ids().is_empty());

    let rescanned = h.app.handle_scan().execute("FREEZR:abc-123").await.unwrap();
    assert_eq!(rescanned.mode, ScanMode::Active);
    assert_eq!(rescanned.existing.map(|c| c.id), Some(id));
}

#[tokio::test]
async fn create_from_scan_stores_requested_quantity() {
    let h = harness();
    let form = ItemForm::named("Stew").with_quantity(3);

    let id = h
        .app
        .create_from_scan()
        .execute(&ContainerUuid::from("pot-7"), &form)
        .await
        .unwrap()
        .unwrap();

    let row = h.containers.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(row.quantity, 3);
}

#[tokio::test]
async fn empty_scan_is_rejected() {
    let h = harness();
    assert!(h.app.handle_scan().execute("FREEZR:   ").await.is_err());
}

#[tokio::test]
async fn create_from_scan_with_reminder_schedules_it() {
    let h = harness();
    let uuid = ContainerUuid::from("raw-code");
    let form = ItemForm::named("Dumplings").with_reminder(ReminderRequest::in_days(3));

    let id = h
        .app
        .create_from_scan()
        .execute(&uuid, &form)
        .await
        .unwrap()
        .unwrap();

    let expected = utc_ms(2023, 11, 17, 8, 0);
    assert_eq!(h.scheduler.trigger_at(id), Some(expected));
    let row = h.containers.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(row.reminder_at_ms, Some(expected));
    assert_eq!(row.reminder_days, Some(3));
}

#[tokio::test]
async fn create_from_scan_leaves_tracked_labels_alone() {
    let h = harness();
    let uuid = ContainerUuid::from("taken");
    let first = h
        .app
        .create_from_scan()
        .execute(&uuid, &ItemForm::named("Soup"))
        .await
        .unwrap();
    assert!(first.is_some());

    let second = h
        .app
        .create_from_scan()
        .execute(&uuid, &ItemForm::named("Other"))
        .await
        .unwrap();
    assert_eq!(second, None);
}

#[tokio::test]
async fn printed_label_is_claimed_exactly_once() {
    let h = harness();
    let labels = h.app.print_labels().execute(2, true).await.unwrap();
    assert_eq!(labels.len(), 2);

    let outcome = h.app.handle_scan().execute(&labels[0].payload).await.unwrap();
    assert_eq!(outcome.mode, ScanMode::Unused);

    let form = ItemForm::named("Curry")
        .with_quantity(2)
        .with_reminder(ReminderRequest::in_days(3));
    let id = h
        .app
        .claim_label()
        .execute(&outcome.uuid, &form)
        .await
        .unwrap()
        .expect("placeholder should be claimable");

    let row = h.containers.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(row.status, ContainerStatus::Active);
    assert_eq!(row.quantity, 2);
    assert_eq!(row.frozen_date_ms, NOW);
    assert_eq!(row.reminder_days, Some(3));
    assert_eq!(h.scheduler.trigger_at(id), Some(utc_ms(2023, 11, 17, 8, 0)));

    let again = h
        .app
        .claim_label()
        .execute(&outcome.uuid, &ItemForm::named("Something else"))
        .await
        .unwrap();
    assert_eq!(again, None);
    let row = h.containers.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(row.name, "Curry");
}

#[tokio::test]
async fn claim_without_reminder_schedules_nothing() {
    let h = harness();
    let labels = h.app.print_labels().execute(1, true).await.unwrap();

    let id = h
        .app
        .claim_label()
        .execute(&labels[0].uuid, &ItemForm::named("Peas"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(h.scheduler.trigger_at(id), None);
    let row = h.containers.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(row.reminder_at_ms, None);
}

#[tokio::test]
async fn claim_rejects_blank_name_before_writing() {
    let h = harness();
    let labels = h.app.print_labels().execute(1, true).await.unwrap();

    let result = h
        .app
        .claim_label()
        .execute(&labels[0].uuid, &ItemForm::named("   "))
        .await;
    assert!(result.is_err());

    let outcome = h.app.handle_scan().execute(&labels[0].payload).await.unwrap();
    assert_eq!(outcome.mode, ScanMode::Unused);
}

#[tokio::test]
async fn scanning_unknown_flow_on_placeholder_claims_it() {
    let h = harness();
    let labels = h.app.print_labels().execute(1, true).await.unwrap();

    let id = h
        .app
        .create_from_scan()
        .execute(&labels[0].uuid, &ItemForm::named("Bread"))
        .await
        .unwrap()
        .unwrap();

    let row = h.containers.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(row.uuid, labels[0].uuid);
    assert_eq!(row.status, ContainerStatus::Active);
}

#[tokio::test]
async fn used_label_is_reused_with_default_reminder() {
    let h = harness();
    let labels = h.app.print_labels().execute(1, true).await.unwrap();
    let label = labels[0].uuid.clone();

    let first = h
        .app
        .claim_label()
        .execute(&label, &ItemForm::named("Bolognese").with_shelf_life_days(90))
        .await
        .unwrap()
        .unwrap();
    assert!(h.app.mark_used().execute(first).await.unwrap());

    let outcome = h.app.handle_scan().execute(&labels[0].payload).await.unwrap();
    assert_eq!(outcome.mode, ScanMode::Historical);

    let second = h
        .app
        .reuse_label()
        .execute(&label, &ItemForm::named(""))
        .await
        .unwrap()
        .expect("used label should be reusable");
    assert_ne!(second, first);

    let new_row = h.containers.get_by_id(second).await.unwrap().unwrap();
    assert_eq!(new_row.uuid, label);
    assert_eq!(new_row.name, "Bolognese");
    assert_eq!(new_row.status, ContainerStatus::Active);
    assert_eq!(new_row.shelf_life_days, Some(90));
    assert_eq!(new_row.reminder_days, Some(60));

    let old_row = h.containers.get_by_id(first).await.unwrap().unwrap();
    assert_ne!(old_row.uuid, label);
    assert_eq!(old_row.status, ContainerStatus::Used);

    // 60 days after 2023-11-14, at the default 08:00
    assert_eq!(h.scheduler.trigger_at(second), Some(utc_ms(2024, 1, 13, 8, 0)));
}

#[tokio::test]
async fn deleted_label_is_reused_under_a_new_name() {
    let h = harness();
    let uuid = ContainerUuid::from("deleted-label");
    let first = h
        .app
        .create_from_scan()
        .execute(&uuid, &ItemForm::named("Old"))
        .await
        .unwrap()
        .unwrap();
    h.app.soft_delete().execute(first).await.unwrap();

    let form = ItemForm::named("New")
        .with_shelf_life_days(14)
        .with_reminder(ReminderRequest::in_days(1));
    let second = h
        .app
        .reuse_label()
        .execute(&uuid, &form)
        .await
        .unwrap()
        .unwrap();

    let row = h.containers.find_by_uuid(&uuid).await.unwrap().unwrap();
    assert_eq!(row.id, second);
    assert_eq!(row.name, "New");
    assert_eq!(row.shelf_life_days, Some(14));
    assert_eq!(row.reminder_days, Some(1));
    assert_eq!(h.scheduler.trigger_at(second), Some(utc_ms(2023, 11, 15, 8, 0)));
    assert_eq!(
        h.containers.get_by_id(first).await.unwrap().unwrap().status,
        ContainerStatus::Deleted
    );
}

#[tokio::test]
async fn active_label_is_not_reusable() {
    let h = harness();
    let uuid = ContainerUuid::from("in-use");
    h.app
        .create_from_scan()
        .execute(&uuid, &ItemForm::named("Rice"))
        .await
        .unwrap()
        .unwrap();

    let result = h
        .app
        .reuse_label()
        .execute(&uuid, &ItemForm::named("Other"))
        .await
        .unwrap();
    assert_eq!(result, None);
}
