use anyhow::Result;

use crate::argsets::FetchArgs;
use crate::data_mgmt::models::AggregateReading;
use crate::data_mgmt::{transform, DateRange};
use crate::vendor;

/// Fetch counts for every device in the vendor catalog and print one
/// combined table as JSON. No external write takes place.
pub fn aggregate(args: FetchArgs) -> Result<()> {
    let range = DateRange::resolve(args.start.as_deref(), args.end.as_deref())?;
    let agent = vendor::agent()?;
    let base_url = vendor::base_url();

    let devices = vendor::fetch_devices(&agent, &base_url)?;
    log::info!(
        "Fetching counts for {} devices, {} to {}",
        devices.len(),
        range.start_vendor(),
        range.end_vendor()
    );

    let mut table: Vec<AggregateReading> = Vec::new();
    for device in &devices {
        let raw = vendor::fetch_counts(&agent, &base_url, device, &range)?;
        if raw.is_empty() {
            log::debug!("No data for {}; skipping", device.name);
            continue;
        }
        table.extend(transform::to_aggregate(device, &raw));
    }

    log::info!("Collected {} rows in total", table.len());
    println!("{}", serde_json::to_string(&table)?);
    Ok(())
}
