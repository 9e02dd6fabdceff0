use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use tracing::debug;

use fz_core::ports::{SettingsError, SettingsPort};
use fz_core::settings::SETTINGS_KEY;
use fz_core::Settings;

use crate::db::models::SettingsRow;
use crate::db::ports::{DbExecutor, InsertMapper, RowMapper};
use crate::db::schema::settings::dsl::*;

/// Settings stored as a single row keyed `"user"`.
pub struct DieselSettingsRepository<E, M> {
    executor: E,
    mapper: M,
}

impl<E, M> DieselSettingsRepository<E, M> {
    pub fn new(executor: E, mapper: M) -> Self {
        Self { executor, mapper }
    }
}

#[async_trait]
impl<E, M> SettingsPort for DieselSettingsRepository<E, M>
where
    E: DbExecutor,
    M: InsertMapper<Settings, SettingsRow> + RowMapper<SettingsRow, Settings> + Send + Sync,
{
    async fn load(&self) -> Result<Settings, SettingsError> {
        let row = self
            .executor
            .run(|conn| {
                Ok(settings
                    .filter(key.eq(SETTINGS_KEY))
                    .first::<SettingsRow>(conn)
                    .optional()?)
            })
            .map_err(|e| SettingsError::Storage(e.to_string()))?;

        match row {
            Some(r) => self
                .mapper
                .to_domain(&r)
                .map_err(|e| SettingsError::Mapping(e.to_string())),
            None => Ok(Settings::default()),
        }
    }

    async fn save(&self, value: &Settings) -> Result<(), SettingsError> {
        let row = self
            .mapper
            .to_row(value)
            .map_err(|e| SettingsError::Mapping(e.to_string()))?;

        self.executor
            .run(move |conn| {
                diesel::insert_into(settings)
                    .values(&row)
                    .on_conflict(key)
                    .do_update()
                    .set((
                        sort_order.eq(excluded(sort_order)),
                        show_used.eq(excluded(show_used)),
                        default_reminder_days.eq(excluded(default_reminder_days)),
                        expiring_soon_days.eq(excluded(expiring_soon_days)),
                        critical_days.eq(excluded(critical_days)),
                    ))
                    .execute(conn)?;
                Ok(())
            })
            .map_err(|e| SettingsError::Storage(e.to_string()))?;

        debug!(?value, "settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::executor::DieselSqliteExecutor;
    use crate::db::mappers::settings_mapper::SettingsRowMapper;
    use crate::db::pool::{init_db_pool, IN_MEMORY};
    use fz_core::SortOrder;

    fn repo() -> DieselSettingsRepository<DieselSqliteExecutor, SettingsRowMapper> {
        let pool = init_db_pool(IN_MEMORY).expect("Failed to init db");
        DieselSettingsRepository::new(DieselSqliteExecutor::new(pool), SettingsRowMapper)
    }

    #[tokio::test]
    async fn load_without_row_returns_defaults() {
        assert_eq!(repo().load().await.unwrap(), Settings::default());
    }

    #[tokio::test]
    async fn save_then_load_and_overwrite() {
        let repo = repo();
        let mut s = Settings::default();
        s.sort_order = SortOrder::NameAsc;
        s.show_used = true;
        repo.save(&s).await.unwrap();
        assert_eq!(repo.load().await.unwrap(), s);

        s.critical_days = 4;
        repo.save(&s).await.unwrap();
        let loaded = repo.load().await.unwrap();
        assert_eq!(loaded.critical_days, 4);
        assert_eq!(loaded.sort_order, SortOrder::NameAsc);
    }
}
