use thiserror::Error;

use crate::interfaces::catalog::{CatalogClient, CatalogError};
use crate::vendor::Device;

use super::models::DeviceRecord;
use super::models::Reading;
use super::transform::{self, TransformError};

#[derive(Error, Debug)]
pub enum PublishError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Upsert one device's transformed readings into the readings dataset.
pub fn publish_readings(
    catalog: &CatalogClient,
    dataset_id: &str,
    readings: Vec<Reading>,
) -> Result<(), PublishError> {
    let rows = transform::reformat_for_catalog(readings)?;
    log::trace!("Upserting rows: {:?}", &rows);
    catalog.upsert(dataset_id, &rows)?;
    Ok(())
}

/// Republish the device catalog into the devices dataset.
pub fn publish_devices(
    catalog: &CatalogClient,
    dataset_id: &str,
    devices: &[Device],
) -> Result<(), PublishError> {
    let rows: Vec<DeviceRecord> = devices.iter().map(DeviceRecord::from_device).collect();
    catalog.upsert(dataset_id, &rows)?;
    Ok(())
}
