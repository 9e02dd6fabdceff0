use crate::db::schema::containers;
use diesel::prelude::*;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = containers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ContainerRow {
    pub id: i64,
    pub uuid: String,
    pub name: String,
    pub status: String,
    pub reminder_at: Option<i64>,
    pub date_used: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
    pub frozen_date: i64,
    pub reminder_days: Option<i32>,
    pub shelf_life_days: Option<i32>,
    pub quantity: i32,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = containers)]
pub struct NewContainerRow {
    pub uuid: String,
    pub name: String,
    pub status: String,
    pub reminder_at: Option<i64>,
    pub date_used: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
    pub frozen_date: i64,
    pub reminder_days: Option<i32>,
    pub shelf_life_days: Option<i32>,
    pub quantity: i32,
    pub notes: Option<String>,
}
