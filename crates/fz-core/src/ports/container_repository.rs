use async_trait::async_trait;

use crate::container::{ClaimDetails, Container, ContainerStatus};
use crate::ids::{ContainerId, ContainerUuid};
use crate::ports::errors::ContainerRepositoryError;
use crate::settings::SortOrder;

/// Persistence of container rows.
///
/// Every mutation stamps `updated_at` with `now_ms`. Operations on a missing
/// row are no-ops reported as `Ok(false)` / `Ok(None)`.
#[async_trait]
pub trait ContainerRepositoryPort: Send + Sync {
    async fn get_by_id(&self, id: ContainerId)
        -> Result<Option<Container>, ContainerRepositoryError>;

    async fn find_by_uuid(
        &self,
        uuid: &ContainerUuid,
    ) -> Result<Option<Container>, ContainerRepositoryError>;

    /// Every row except DELETED; USED only with `show_used`. Ties on the sort
    /// key are broken by id, newest first.
    async fn list(
        &self,
        show_used: bool,
        sort: SortOrder,
    ) -> Result<Vec<Container>, ContainerRepositoryError>;

    /// ACTIVE rows that carry a reminder instant.
    async fn list_scheduled_active(&self) -> Result<Vec<Container>, ContainerRepositoryError>;

    /// Insert blank UNUSED rows, one per uuid, in a single transaction.
    async fn insert_placeholders(
        &self,
        uuids: &[ContainerUuid],
        now_ms: i64,
    ) -> Result<usize, ContainerRepositoryError>;

    /// New ACTIVE row for a scanned uuid. When a row already holds the uuid
    /// its id is returned and nothing is written.
    async fn add_from_scan(
        &self,
        uuid: &ContainerUuid,
        name: &str,
        quantity: i32,
        now_ms: i64,
    ) -> Result<ContainerId, ContainerRepositoryError>;

    /// UNUSED → ACTIVE with the given details; `None` for any other state.
    async fn claim_placeholder(
        &self,
        uuid: &ContainerUuid,
        details: &ClaimDetails,
        now_ms: i64,
    ) -> Result<Option<ContainerId>, ContainerRepositoryError>;

    /// Status USED, `date_used = now`, reminder cleared.
    async fn mark_used(&self, id: ContainerId, now_ms: i64)
        -> Result<bool, ContainerRepositoryError>;

    /// Status DELETED, reminder cleared.
    async fn soft_delete(&self, id: ContainerId, now_ms: i64)
        -> Result<bool, ContainerRepositoryError>;

    /// Hand the uuid of `id` over to a fresh ACTIVE row. The old row keeps its
    /// status and receives a new random uuid.
    async fn reuse_preserving_uuid(
        &self,
        id: ContainerId,
        new_name: Option<&str>,
        now_ms: i64,
    ) -> Result<Option<ContainerId>, ContainerRepositoryError>;

    /// Bring a DELETED row back as a new row with the same content, in the
    /// `status` it had before deletion. `None` unless the row is DELETED.
    async fn restore_deleted(
        &self,
        id: ContainerId,
        status: ContainerStatus,
        now_ms: i64,
    ) -> Result<Option<ContainerId>, ContainerRepositoryError>;

    async fn update_shelf_life_days(
        &self,
        id: ContainerId,
        days: Option<i32>,
        now_ms: i64,
    ) -> Result<bool, ContainerRepositoryError>;

    async fn update_reminder_days(
        &self,
        id: ContainerId,
        days: Option<i32>,
        now_ms: i64,
    ) -> Result<bool, ContainerRepositoryError>;

    async fn update_reminder_at(
        &self,
        id: ContainerId,
        at_ms: Option<i64>,
        now_ms: i64,
    ) -> Result<bool, ContainerRepositoryError>;
}
