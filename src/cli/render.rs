use chrono::{DateTime, FixedOffset};

use fz_app::usecases::ContainerView;
use fz_core::label::SheetLayout;
use fz_core::{Container, LabelSpec, ScanMode, ScanOutcome, Settings};

/// `YYYY-MM-DD HH:MM` in the given offset, or the raw value if out of range.
pub fn instant(ms: i64, offset: FixedOffset) -> String {
    DateTime::from_timestamp_millis(ms)
        .map(|utc| utc.with_timezone(&offset).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| ms.to_string())
}

fn date(ms: i64, offset: FixedOffset) -> String {
    DateTime::from_timestamp_millis(ms)
        .map(|utc| utc.with_timezone(&offset).format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| ms.to_string())
}

pub fn container_line(view: &ContainerView, offset: FixedOffset) -> String {
    let c = &view.container;
    let mut line = format!(
        "#{:<4} {:<24} {:<7} x{:<3} {}",
        c.id.value(),
        c.display_name(),
        c.status.as_str(),
        c.quantity,
        view.remaining
    );
    if let Some(at) = c.reminder_at_ms {
        line.push_str(&format!("  ⏰ {}", instant(at, offset)));
    }
    line
}

pub fn container_list(views: &[ContainerView], offset: FixedOffset) -> String {
    if views.is_empty() {
        return "No containers.".to_string();
    }
    views
        .iter()
        .map(|v| container_line(v, offset))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn container_detail(view: &ContainerView, offset: FixedOffset) -> String {
    let c = &view.container;
    let mut lines = vec![
        format!("#{} {}", c.id.value(), c.display_name()),
        format!("  label      {}", c.uuid),
        format!("  status     {}", c.status),
        format!("  quantity   {}", c.quantity),
        format!("  frozen     {}", date(c.frozen_date_ms, offset)),
    ];
    match c.shelf_life_days {
        Some(days) => lines.push(format!("  shelf life {days} days")),
        None => lines.push("  shelf life default".to_string()),
    }
    if c.is_active() {
        lines.push(format!(
            "  expiry     {} ({}, {})",
            date(view.expires_at_ms, offset),
            view.remaining,
            view.expiry_status.as_str()
        ));
    }
    if let Some(at) = c.reminder_at_ms {
        lines.push(format!("  reminder   {}", instant(at, offset)));
    }
    if let Some(used) = c.date_used_ms {
        lines.push(format!("  used       {}", date(used, offset)));
    }
    if let Some(notes) = c.notes.as_deref().filter(|n| !n.trim().is_empty()) {
        lines.push(format!("  notes      {notes}"));
    }
    lines.join("\n")
}

fn summary(c: &Container) -> String {
    format!("#{} {}", c.id.value(), c.display_name())
}

/// What a scan found and which command continues the flow.
pub fn scan_outcome(outcome: &ScanOutcome) -> String {
    let code = outcome.uuid.as_str();
    match (&outcome.mode, &outcome.existing) {
        (ScanMode::Unknown, _) => format!(
            "New code {code}.\nTrack it with: create {code} --name NAME"
        ),
        (ScanMode::Unused, _) => format!(
            "Printed label {} is unused.\nClaim it with: claim {code} --name NAME",
            outcome.uuid.short()
        ),
        (ScanMode::Active, Some(c)) => format!(
            "{} is in the freezer.\nSee it with: show {}",
            summary(c),
            c.id.value()
        ),
        (ScanMode::Historical, Some(c)) => format!(
            "{} was {}.\nStart a new item with: reuse {code} [--name NAME]",
            summary(c),
            c.status.as_str().to_ascii_lowercase()
        ),
        (mode, None) => format!("{code}: {}", mode.as_str()),
    }
}

pub fn settings(s: &Settings) -> String {
    [
        format!("sort-order            {}", s.sort_order),
        format!("show-used             {}", s.show_used),
        format!("default-reminder-days {}", s.default_reminder_days),
        format!("expiring-soon-days    {}", s.expiring_soon_days),
        format!("critical-days         {}", s.critical_days),
    ]
    .join("\n")
}

/// Labels grouped into sheet pages, one payload per line.
pub fn label_sheet(labels: &[LabelSpec], layout: &SheetLayout) -> String {
    let pages = layout.paginate(labels);
    let page_count = pages.len();
    let mut out = Vec::new();
    for (index, page) in pages.into_iter().enumerate() {
        out.push(format!(
            "--- page {}/{} ({} x {}) ---",
            index + 1,
            page_count,
            layout.columns(),
            layout.rows()
        ));
        for label in page {
            out.push(format!("{:<8} {}", label.caption, label.payload));
        }
    }
    out.join("\n")
}
