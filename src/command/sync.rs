use anyhow::Result;

use crate::argsets::FetchArgs;
use crate::config::CatalogConfig;
use crate::data_mgmt::{publish, transform, DateRange};
use crate::interfaces::catalog::CatalogClient;
use crate::vendor;

/// Fetch counts for every device and upsert them into the catalog's
/// readings dataset, then republish the device metadata.
///
/// Devices run sequentially in catalog order; the first failure aborts the
/// whole run. There is no per-device error isolation and no retry, so a
/// failed run is restarted by the operator with a suitable date range.
pub fn sync(args: FetchArgs) -> Result<()> {
    let config = CatalogConfig::from_env()?;
    let range = DateRange::resolve(args.start.as_deref(), args.end.as_deref())?;
    let agent = vendor::agent()?;
    let base_url = vendor::base_url();
    let catalog = CatalogClient::new(config.clone())?;

    let devices = vendor::fetch_devices(&agent, &base_url)?;
    log::info!(
        "Syncing counts for {} devices, {} to {}",
        devices.len(),
        range.start_vendor(),
        range.end_vendor()
    );

    for device in &devices {
        let raw = vendor::fetch_counts(&agent, &base_url, device, &range)?;
        let readings = transform::to_readings(device, &raw);
        if readings.is_empty() {
            log::debug!("No publishable counts for {}; skipping upsert", device.name);
            continue;
        }
        log::info!("Upserting {} readings for {}", readings.len(), device.name);
        publish::publish_readings(&catalog, &config.readings_dataset, readings)?;
    }

    if !devices.is_empty() {
        publish::publish_devices(&catalog, &config.devices_dataset, &devices)?;
        log::info!("Republished metadata for {} devices", devices.len());
    }

    Ok(())
}
