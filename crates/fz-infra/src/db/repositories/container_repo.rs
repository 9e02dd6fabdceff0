use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use tracing::debug;

use fz_core::ports::{ContainerRepositoryError, ContainerRepositoryPort};
use fz_core::{
    ClaimDetails, Container, ContainerId, ContainerStatus, ContainerUuid, NewContainer, SortOrder,
};

use crate::db::models::{ContainerRow, NewContainerRow};
use crate::db::ports::{DbExecutor, InsertMapper, RowMapper};
use crate::db::schema::containers;

pub struct DieselContainerRepository<E, M> {
    executor: E,
    mapper: M,
}

impl<E, M> DieselContainerRepository<E, M> {
    pub fn new(executor: E, mapper: M) -> Self {
        Self { executor, mapper }
    }
}

/// Keep typed errors raised inside executor closures; anything else is storage.
fn into_repo_error(err: anyhow::Error) -> ContainerRepositoryError {
    match err.downcast::<ContainerRepositoryError>() {
        Ok(typed) => typed,
        Err(other) => ContainerRepositoryError::Storage(other.to_string()),
    }
}

impl<E, M> DieselContainerRepository<E, M>
where
    M: InsertMapper<NewContainer, NewContainerRow> + RowMapper<ContainerRow, Container>,
{
    fn to_domain(&self, row: &ContainerRow) -> anyhow::Result<Container> {
        self.mapper
            .to_domain(row)
            .map_err(|e| ContainerRepositoryError::Mapping(e.to_string()).into())
    }

    fn to_domain_all(&self, rows: Vec<ContainerRow>) -> anyhow::Result<Vec<Container>> {
        rows.iter().map(|row| self.to_domain(row)).collect()
    }

    fn load_row(conn: &mut SqliteConnection, id: i64) -> anyhow::Result<Option<ContainerRow>> {
        Ok(containers::table
            .find(id)
            .first::<ContainerRow>(conn)
            .optional()?)
    }

    fn insert_row(&self, conn: &mut SqliteConnection, new: &NewContainer) -> anyhow::Result<i64> {
        let row = self.mapper.to_row(new)?;
        Ok(diesel::insert_into(containers::table)
            .values(&row)
            .returning(containers::id)
            .get_result::<i64>(conn)?)
    }

    /// Give `old` a fresh random uuid and insert `successor`, which carries the old one.
    fn hand_over_uuid(
        &self,
        conn: &mut SqliteConnection,
        old: &ContainerRow,
        successor: NewContainer,
        now_ms: i64,
    ) -> anyhow::Result<i64> {
        conn.transaction(|conn| {
            let retired = ContainerUuid::generate();
            diesel::update(containers::table.find(old.id))
                .set((
                    containers::uuid.eq(retired.as_str()),
                    containers::updated_at.eq(now_ms),
                ))
                .execute(conn)?;
            self.insert_row(conn, &successor)
        })
    }

    fn update_row(
        &self,
        f: impl FnOnce(&mut SqliteConnection) -> QueryResult<usize>,
    ) -> Result<bool, ContainerRepositoryError>
    where
        E: DbExecutor,
    {
        let affected = self
            .executor
            .run(|conn| Ok(f(conn)?))
            .map_err(into_repo_error)?;
        Ok(affected > 0)
    }
}

#[async_trait]
impl<E, M> ContainerRepositoryPort for DieselContainerRepository<E, M>
where
    E: DbExecutor,
    M: InsertMapper<NewContainer, NewContainerRow>
        + RowMapper<ContainerRow, Container>
        + Send
        + Sync,
{
    async fn get_by_id(
        &self,
        id: ContainerId,
    ) -> Result<Option<Container>, ContainerRepositoryError> {
        self.executor
            .run(|conn| {
                Self::load_row(conn, id.value())?
                    .map(|row| self.to_domain(&row))
                    .transpose()
            })
            .map_err(into_repo_error)
    }

    async fn find_by_uuid(
        &self,
        uuid: &ContainerUuid,
    ) -> Result<Option<Container>, ContainerRepositoryError> {
        let uuid_str = uuid.as_str().to_string();
        self.executor
            .run(move |conn| {
                containers::table
                    .filter(containers::uuid.eq(&uuid_str))
                    .first::<ContainerRow>(conn)
                    .optional()?
                    .map(|row| self.to_domain(&row))
                    .transpose()
            })
            .map_err(into_repo_error)
    }

    async fn list(
        &self,
        show_used: bool,
        sort: SortOrder,
    ) -> Result<Vec<Container>, ContainerRepositoryError> {
        self.executor
            .run(|conn| {
                let mut query: containers::BoxedQuery<'_, Sqlite> = containers::table
                    .filter(containers::status.ne(ContainerStatus::Deleted.as_str()))
                    .into_boxed();
                if !show_used {
                    query = query.filter(containers::status.ne(ContainerStatus::Used.as_str()));
                }
                query = match sort {
                    SortOrder::NameAsc => query.order((containers::name.asc(), containers::id.desc())),
                    SortOrder::NameDesc => {
                        query.order((containers::name.desc(), containers::id.desc()))
                    }
                    SortOrder::CreatedAsc => {
                        query.order((containers::created_at.asc(), containers::id.desc()))
                    }
                    SortOrder::CreatedDesc => {
                        query.order((containers::created_at.desc(), containers::id.desc()))
                    }
                };

                let rows = query.load::<ContainerRow>(conn)?;
                self.to_domain_all(rows)
            })
            .map_err(into_repo_error)
    }

    async fn list_scheduled_active(&self) -> Result<Vec<Container>, ContainerRepositoryError> {
        self.executor
            .run(|conn| {
                let rows = containers::table
                    .filter(containers::status.eq(ContainerStatus::Active.as_str()))
                    .filter(containers::reminder_at.is_not_null())
                    .order(containers::reminder_at.asc())
                    .load::<ContainerRow>(conn)?;
                self.to_domain_all(rows)
            })
            .map_err(into_repo_error)
    }

    async fn insert_placeholders(
        &self,
        uuids: &[ContainerUuid],
        now_ms: i64,
    ) -> Result<usize, ContainerRepositoryError> {
        let rows = uuids
            .iter()
            .map(|uuid| self.mapper.to_row(&NewContainer::placeholder(uuid.clone(), now_ms)))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ContainerRepositoryError::Mapping(e.to_string()))?;

        let inserted = self
            .executor
            .run(|conn| {
                conn.transaction(|conn| {
                    let mut inserted = 0;
                    for row in &rows {
                        inserted += diesel::insert_into(containers::table)
                            .values(row)
                            .execute(conn)?;
                    }
                    Ok(inserted)
                })
            })
            .map_err(into_repo_error)?;

        debug!(count = inserted, "placeholder labels registered");
        Ok(inserted)
    }

    async fn add_from_scan(
        &self,
        uuid: &ContainerUuid,
        name: &str,
        quantity: i32,
        now_ms: i64,
    ) -> Result<ContainerId, ContainerRepositoryError> {
        let new = NewContainer {
            quantity,
            ..NewContainer::active(uuid.clone(), name.trim(), now_ms)
        };
        let uuid_str = uuid.as_str().to_string();

        let id = self
            .executor
            .run(move |conn| {
                conn.transaction(|conn| {
                    let existing = containers::table
                        .filter(containers::uuid.eq(&uuid_str))
                        .select(containers::id)
                        .first::<i64>(conn)
                        .optional()?;
                    match existing {
                        Some(id) => Ok(id),
                        None => self.insert_row(conn, &new),
                    }
                })
            })
            .map_err(into_repo_error)?;

        debug!(id, uuid = %uuid, quantity, "container added from scan");
        Ok(ContainerId::new(id))
    }

    async fn claim_placeholder(
        &self,
        uuid: &ContainerUuid,
        details: &ClaimDetails,
        now_ms: i64,
    ) -> Result<Option<ContainerId>, ContainerRepositoryError> {
        let uuid_str = uuid.as_str().to_string();
        let details = details.clone();

        let claimed = self
            .executor
            .run(move |conn| {
                let target = containers::table
                    .filter(containers::uuid.eq(&uuid_str))
                    .filter(containers::status.eq(ContainerStatus::Unused.as_str()));
                Ok(diesel::update(target)
                    .set((
                        containers::name.eq(details.name.trim()),
                        containers::quantity.eq(details.quantity),
                        containers::shelf_life_days.eq(details.shelf_life_days),
                        containers::reminder_days.eq(details.reminder_days),
                        containers::status.eq(ContainerStatus::Active.as_str()),
                        containers::frozen_date.eq(now_ms),
                        containers::created_at.eq(now_ms),
                        containers::updated_at.eq(now_ms),
                    ))
                    .returning(containers::id)
                    .get_result::<i64>(conn)
                    .optional()?)
            })
            .map_err(into_repo_error)?;

        Ok(claimed.map(ContainerId::new))
    }

    async fn mark_used(
        &self,
        id: ContainerId,
        now_ms: i64,
    ) -> Result<bool, ContainerRepositoryError> {
        self.update_row(|conn| {
            diesel::update(containers::table.find(id.value()))
                .set((
                    containers::status.eq(ContainerStatus::Used.as_str()),
                    containers::date_used.eq(Some(now_ms)),
                    containers::reminder_at.eq(None::<i64>),
                    containers::updated_at.eq(now_ms),
                ))
                .execute(conn)
        })
    }

    async fn soft_delete(
        &self,
        id: ContainerId,
        now_ms: i64,
    ) -> Result<bool, ContainerRepositoryError> {
        self.update_row(|conn| {
            diesel::update(containers::table.find(id.value()))
                .set((
                    containers::status.eq(ContainerStatus::Deleted.as_str()),
                    containers::reminder_at.eq(None::<i64>),
                    containers::updated_at.eq(now_ms),
                ))
                .execute(conn)
        })
    }

    async fn reuse_preserving_uuid(
        &self,
        id: ContainerId,
        new_name: Option<&str>,
        now_ms: i64,
    ) -> Result<Option<ContainerId>, ContainerRepositoryError> {
        let new_id = self
            .executor
            .run(|conn| {
                let Some(row) = Self::load_row(conn, id.value())? else {
                    return Ok(None);
                };
                let old = self.to_domain(&row)?;
                let successor =
                    NewContainer::successor_of(&old, old.uuid.clone(), new_name, now_ms);
                self.hand_over_uuid(conn, &row, successor, now_ms).map(Some)
            })
            .map_err(into_repo_error)?;

        if let Some(new_id) = new_id {
            debug!(old_id = %id, new_id, "label reused");
        }
        Ok(new_id.map(ContainerId::new))
    }

    async fn restore_deleted(
        &self,
        id: ContainerId,
        status: ContainerStatus,
        now_ms: i64,
    ) -> Result<Option<ContainerId>, ContainerRepositoryError> {
        let new_id = self
            .executor
            .run(|conn| {
                let Some(row) = Self::load_row(conn, id.value())? else {
                    return Ok(None);
                };
                let deleted = self.to_domain(&row)?;
                if deleted.status != ContainerStatus::Deleted {
                    return Ok(None);
                }
                let restored =
                    NewContainer::restored_from(&deleted, deleted.uuid.clone(), status, now_ms);
                self.hand_over_uuid(conn, &row, restored, now_ms).map(Some)
            })
            .map_err(into_repo_error)?;
        Ok(new_id.map(ContainerId::new))
    }

    async fn update_shelf_life_days(
        &self,
        id: ContainerId,
        days: Option<i32>,
        now_ms: i64,
    ) -> Result<bool, ContainerRepositoryError> {
        self.update_row(|conn| {
            diesel::update(containers::table.find(id.value()))
                .set((
                    containers::shelf_life_days.eq(days),
                    containers::updated_at.eq(now_ms),
                ))
                .execute(conn)
        })
    }

    async fn update_reminder_days(
        &self,
        id: ContainerId,
        days: Option<i32>,
        now_ms: i64,
    ) -> Result<bool, ContainerRepositoryError> {
        self.update_row(|conn| {
            diesel::update(containers::table.find(id.value()))
                .set((
                    containers::reminder_days.eq(days),
                    containers::updated_at.eq(now_ms),
                ))
                .execute(conn)
        })
    }

    async fn update_reminder_at(
        &self,
        id: ContainerId,
        at_ms: Option<i64>,
        now_ms: i64,
    ) -> Result<bool, ContainerRepositoryError> {
        self.update_row(|conn| {
            diesel::update(containers::table.find(id.value()))
                .set((
                    containers::reminder_at.eq(at_ms),
                    containers::updated_at.eq(now_ms),
                ))
                .execute(conn)
        })
    }
}
