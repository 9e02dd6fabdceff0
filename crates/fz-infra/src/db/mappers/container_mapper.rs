use anyhow::{anyhow, Result};
use fz_core::{Container, ContainerId, ContainerStatus, ContainerUuid, NewContainer};

use crate::db::models::{ContainerRow, NewContainerRow};
use crate::db::ports::{InsertMapper, RowMapper};

pub struct ContainerRowMapper;

impl InsertMapper<NewContainer, NewContainerRow> for ContainerRowMapper {
    fn to_row(&self, domain: &NewContainer) -> Result<NewContainerRow> {
        Ok(NewContainerRow {
            uuid: domain.uuid.as_str().to_string(),
            name: domain.name.clone(),
            status: domain.status.as_str().to_string(),
            reminder_at: domain.reminder_at_ms,
            date_used: domain.date_used_ms,
            created_at: domain.created_at_ms,
            updated_at: domain.updated_at_ms,
            frozen_date: domain.frozen_date_ms,
            reminder_days: domain.reminder_days,
            shelf_life_days: domain.shelf_life_days,
            quantity: domain.quantity,
            notes: domain.notes.clone(),
        })
    }
}

impl RowMapper<ContainerRow, Container> for ContainerRowMapper {
    fn to_domain(&self, row: &ContainerRow) -> Result<Container> {
        let status = row
            .status
            .parse::<ContainerStatus>()
            .map_err(|e| anyhow!("container {}: {}", row.id, e))?;

        Ok(Container {
            id: ContainerId::new(row.id),
            uuid: ContainerUuid::from(row.uuid.as_str()),
            name: row.name.clone(),
            status,
            frozen_date_ms: row.frozen_date,
            reminder_days: row.reminder_days,
            shelf_life_days: row.shelf_life_days,
            quantity: row.quantity,
            notes: row.notes.clone(),
            reminder_at_ms: row.reminder_at,
            date_used_ms: row.date_used,
            created_at_ms: row.created_at,
            updated_at_ms: row.updated_at,
        })
    }
}
