use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::vendor::Device;

/// One `[timestamp, count]` pair from the vendor's time-series endpoint,
/// named at the parse boundary instead of being carried as a bare tuple.
///
/// The vendor serves counts as integers, numeric strings or null; numeric
/// strings are coerced here, anything else fails the decode.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawCount {
    pub timestamp: String,
    pub count: Option<i64>,
}

impl<'de> Deserialize<'de> for RawCount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Count {
            Int(i64),
            Str(String),
        }

        let (timestamp, raw): (String, Option<Count>) = Deserialize::deserialize(deserializer)?;
        let count = match raw {
            None => None,
            Some(Count::Int(i)) => Some(i),
            Some(Count::Str(s)) => Some(
                s.trim()
                    .parse::<i64>()
                    .map_err(|_| de::Error::custom(format!("count is not an integer: {s:?}")))?,
            ),
        };
        Ok(RawCount { timestamp, count })
    }
}

/// Fully typed reading row destined for the catalog's readings dataset.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Reading {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Count")]
    pub count: i64,
    #[serde(rename = "Sensor ID")]
    pub sensor_id: i64,
    #[serde(rename = "Sensor Name")]
    pub sensor_name: String,
    /// Deterministic per-row key the catalog upserts on: the device id
    /// concatenated with the raw vendor date string.
    #[serde(rename = "Record ID")]
    pub record_id: String,
}

/// Untyped per-device row collected by the aggregate command.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AggregateReading {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Count")]
    pub count: Option<i64>,
    #[serde(rename = "Sensor Location")]
    pub sensor_location: String,
}

/// Device metadata row for the catalog's devices dataset.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DeviceRecord {
    #[serde(rename = "Sensor ID")]
    pub sensor_id: i64,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Sensor Name")]
    pub sensor_name: String,
}

impl DeviceRecord {
    pub fn from_device(device: &Device) -> Self {
        Self {
            sensor_id: device.id,
            latitude: device.latitude,
            longitude: device.longitude,
            sensor_name: device.name.clone(),
        }
    }
}
