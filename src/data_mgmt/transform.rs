use chrono::NaiveDate;
use thiserror::Error;

use crate::vendor::Device;

use super::daterange::DATE_FORMAT_VENDOR;
use super::models::{AggregateReading, RawCount, Reading};

/// Timestamp format the catalog expects (midnight-anchored ISO-8601).
pub const DATE_FORMAT_CATALOG: &str = "%Y-%m-%dT00:00:00";

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("unparseable date {raw:?} in reading for sensor {sensor_id}: {source}")]
    Date {
        raw: String,
        sensor_id: i64,
        source: chrono::ParseError,
    },
}

/// Strict transform used by catalog-sync runs.
///
/// Rows with a zero, negative or null count are dropped. The record id is
/// the device id concatenated with the raw vendor date string; the catalog
/// uses it as the upsert key.
pub fn to_readings(device: &Device, raw: &[RawCount]) -> Vec<Reading> {
    raw.iter()
        .filter_map(|r| match r.count {
            Some(count) if count > 0 => Some(Reading {
                date: r.timestamp.clone(),
                count,
                sensor_id: device.id,
                sensor_name: device.name.clone(),
                record_id: format!("{}{}", device.id, r.timestamp),
            }),
            _ => None,
        })
        .collect()
}

/// Loose transform used by aggregate runs: no filtering, no key derivation,
/// just the device's display name attached to each row.
pub fn to_aggregate(device: &Device, raw: &[RawCount]) -> Vec<AggregateReading> {
    raw.iter()
        .map(|r| AggregateReading {
            date: r.timestamp.clone(),
            count: r.count,
            sensor_location: device.name.clone(),
        })
        .collect()
}

/// Rewrite each reading's date into the catalog's format.
///
/// Applied after record ids have been derived, so upsert keys stay stable
/// against the raw vendor date strings.
pub fn reformat_for_catalog(readings: Vec<Reading>) -> Result<Vec<Reading>, TransformError> {
    readings
        .into_iter()
        .map(|mut r| {
            let date = NaiveDate::parse_from_str(&r.date, DATE_FORMAT_VENDOR).map_err(|source| {
                TransformError::Date {
                    raw: r.date.clone(),
                    sensor_id: r.sensor_id,
                    source,
                }
            })?;
            r.date = date.format(DATE_FORMAT_CATALOG).to_string();
            Ok(r)
        })
        .collect()
}
