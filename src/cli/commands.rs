use std::io::Write;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing::{info_span, Instrument};

use fz_app::usecases::ItemForm;
use fz_app::App;
use fz_core::scan::decode_payload;
use fz_core::{ContainerId, ContainerUuid};

use super::{render, Command, ItemArgs, SettingsAction};

fn json<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

fn item_form(app: &App, item: &ItemArgs) -> ItemForm {
    let mut form = ItemForm::named(item.name.clone()).with_quantity(item.quantity);
    if let Some(days) = item.shelf_life_days {
        form = form.with_shelf_life_days(days);
    }
    if let Some(reminder) = item.when.request(app.options().reminder_time) {
        form = form.with_reminder(reminder);
    }
    form
}

fn label(code: &str) -> Result<ContainerUuid> {
    decode_payload(code).context("Invalid label code")
}

fn tracked(
    out: &mut dyn Write,
    id: Option<ContainerId>,
    uuid: &ContainerUuid,
    verb: &str,
) -> Result<()> {
    match id {
        Some(id) => writeln!(out, "Tracking #{id} on label {}", uuid.short())?,
        None => writeln!(
            out,
            "Label {} cannot be {verb}; run `scan {uuid}` to see its state",
            uuid.short()
        )?,
    }
    Ok(())
}

/// Run one command against `app`, writing user-facing output to `out`.
pub async fn run_command(app: &App, command: Command, out: &mut dyn Write) -> Result<()> {
    let span = info_span!("cli.command", command = command.name());
    async move {
        let offset = app.deps().clock.local_offset();

        match command {
            Command::Scan { code, json: as_json } => {
                let outcome = app.handle_scan().execute(&code).await?;
                if as_json {
                    json(out, &outcome)?;
                } else {
                    writeln!(out, "{}", render::scan_outcome(&outcome))?;
                }
            }
            Command::Claim { code, item } => {
                let uuid = label(&code)?;
                let id = app.claim_label().execute(&uuid, &item_form(app, &item)).await?;
                tracked(out, id, &uuid, "claimed")?;
            }
            Command::Create { code, item } => {
                let uuid = label(&code)?;
                let id = app
                    .create_from_scan()
                    .execute(&uuid, &item_form(app, &item))
                    .await?;
                tracked(out, id, &uuid, "created")?;
            }
            Command::Reuse { code, item } => {
                let uuid = label(&code)?;
                let id = app.reuse_label().execute(&uuid, &item_form(app, &item)).await?;
                tracked(out, id, &uuid, "reused")?;
            }
            Command::Show { id, json: as_json } => {
                match app.get_container().execute(ContainerId::new(id)).await? {
                    Some(view) if as_json => json(out, &view)?,
                    Some(view) => writeln!(out, "{}", render::container_detail(&view, offset))?,
                    None => writeln!(out, "No container #{id}")?,
                }
            }
            Command::List { filter, json: as_json } => {
                let views = app.list_containers().execute(filter).await?;
                if as_json {
                    json(out, &views)?;
                } else {
                    writeln!(out, "{}", render::container_list(&views, offset))?;
                }
            }
            Command::Use { id } => {
                if app.mark_used().execute(ContainerId::new(id)).await? {
                    writeln!(out, "Marked #{id} as used")?;
                } else {
                    writeln!(out, "No container #{id}")?;
                }
            }
            Command::Delete { id } => match app.soft_delete().execute(ContainerId::new(id)).await? {
                Some(deleted) => writeln!(
                    out,
                    "Deleted #{id} {}. Run `undo` to restore it.",
                    deleted.display_name()
                )?,
                None => writeln!(out, "No container #{id}")?,
            },
            Command::Undo => match app.undo_last_delete().execute().await? {
                Some(restored) => writeln!(out, "Restored as #{restored}")?,
                None => writeln!(out, "Nothing to undo")?,
            },
            Command::ShelfLife { id, days } => {
                if app
                    .update_shelf_life()
                    .execute(ContainerId::new(id), days)
                    .await?
                {
                    match days {
                        Some(days) => writeln!(out, "Shelf life of #{id} is now {days} days")?,
                        None => writeln!(out, "Shelf life of #{id} reset to the default")?,
                    }
                } else {
                    writeln!(out, "No container #{id}")?;
                }
            }
            Command::Remind { id, when } => {
                let Some(request) = when.request(app.options().reminder_time) else {
                    bail!("give --in DAYS or --on YYYY-MM-DD");
                };
                match app.set_reminder().execute(ContainerId::new(id), request).await? {
                    Some(at) => writeln!(out, "Reminder for #{id} set for {}", render::instant(at, offset))?,
                    None => writeln!(out, "#{id} is not an active container")?,
                }
            }
            Command::Snooze { id } => match app.snooze().execute(ContainerId::new(id)).await? {
                Some(at) => writeln!(out, "Snoozed #{id} until {}", render::instant(at, offset))?,
                None => writeln!(out, "#{id} is not an active container")?,
            },
            Command::PrintLabels {
                count,
                register,
                sheet,
                json: as_json,
            } => {
                let labels = app.print_labels().execute(count, register).await?;
                if as_json {
                    json(out, &labels)?;
                } else {
                    writeln!(out, "{}", render::label_sheet(&labels, &sheet.layout()))?;
                    if register {
                        writeln!(out, "Registered {} unused labels", labels.len())?;
                    }
                }
            }
            Command::Settings { action } => match action {
                None | Some(SettingsAction::Show { json: false }) => {
                    let settings = app.get_settings().execute().await?;
                    writeln!(out, "{}", render::settings(&settings))?;
                }
                Some(SettingsAction::Show { json: true }) => {
                    json(out, &app.get_settings().execute().await?)?;
                }
                Some(SettingsAction::Set { key, value }) => {
                    let (settings, changed) =
                        app.update_settings().execute(key.change(&value)?).await?;
                    if !changed {
                        writeln!(out, "Unchanged")?;
                    }
                    writeln!(out, "{}", render::settings(&settings))?;
                }
            },
            Command::Shell => bail!("already in a shell session"),
        }
        Ok(())
    }
    .instrument(span)
    .await
}
