pub const VENDOR_API_URL: &str = "VENDOR_API_URL";

pub const CATALOG_API_URL: &str = "CATALOG_API_URL";
pub const CATALOG_APP_TOKEN: &str = "CATALOG_APP_TOKEN";
pub const CATALOG_USERNAME: &str = "CATALOG_USERNAME";
pub const CATALOG_PASSWORD: &str = "CATALOG_PASSWORD";
pub const READINGS_DATASET_ID: &str = "READINGS_DATASET_ID";
pub const DEVICES_DATASET_ID: &str = "DEVICES_DATASET_ID";

pub const LOG_LEVEL: &str = "LOG_LEVEL";
