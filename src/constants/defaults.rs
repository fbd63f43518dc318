use std::time::Duration;

/// Public Eco-Counter endpoint serving the organisation's counters.
pub const VENDOR_API_BASE_URL: &str =
    "https://www.eco-visio.net/api/aladdin/1.0.0/pbl/publicwebpageplus";

/// Catalog upserts of a full date range can be slow on the catalog side;
/// one generous timeout covers all catalog calls.
pub const CATALOG_REQUEST_TIMEOUT: Duration = Duration::from_secs(500);

pub const LOG_LEVEL: &str = "info";
