use crate::db::schema::settings;
use diesel::prelude::*;

#[derive(Debug, Clone, Queryable, Insertable)]
#[diesel(table_name = settings)]
pub struct SettingsRow {
    pub key: String,
    pub sort_order: String,
    pub show_used: bool,
    pub default_reminder_days: i32,
    pub expiring_soon_days: i32,
    pub critical_days: i32,
}
