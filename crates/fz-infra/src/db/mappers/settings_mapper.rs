use anyhow::Result;
use fz_core::settings::SETTINGS_KEY;
use fz_core::{Settings, SortOrder};

use crate::db::models::SettingsRow;
use crate::db::ports::{InsertMapper, RowMapper};

pub struct SettingsRowMapper;

impl InsertMapper<Settings, SettingsRow> for SettingsRowMapper {
    fn to_row(&self, domain: &Settings) -> Result<SettingsRow> {
        Ok(SettingsRow {
            key: SETTINGS_KEY.to_string(),
            sort_order: domain.sort_order.as_str().to_string(),
            show_used: domain.show_used,
            default_reminder_days: domain.default_reminder_days,
            expiring_soon_days: domain.expiring_soon_days,
            critical_days: domain.critical_days,
        })
    }
}

impl RowMapper<SettingsRow, Settings> for SettingsRowMapper {
    fn to_domain(&self, row: &SettingsRow) -> Result<Settings> {
        Ok(Settings {
            sort_order: row.sort_order.parse::<SortOrder>()?,
            show_used: row.show_used,
            default_reminder_days: row.default_reminder_days,
            expiring_soon_days: row.expiring_soon_days,
            critical_days: row.critical_days,
        })
    }
}
