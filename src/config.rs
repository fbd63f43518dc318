use std::env;

use thiserror::Error;

use crate::constants::envvars;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingEnvVar(&'static str),
}

/// Connection and dataset settings for the open-data catalog.
///
/// Built once at process start and passed to whatever needs it, rather than
/// read from the environment at the point of use.
#[derive(Clone, Debug)]
pub struct CatalogConfig {
    pub base_url: String,
    pub app_token: String,
    pub username: String,
    pub password: String,
    pub readings_dataset: String,
    pub devices_dataset: String,
}

impl CatalogConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: require(envvars::CATALOG_API_URL)?,
            app_token: require(envvars::CATALOG_APP_TOKEN)?,
            username: require(envvars::CATALOG_USERNAME)?,
            password: require(envvars::CATALOG_PASSWORD)?,
            readings_dataset: require(envvars::READINGS_DATASET_ID)?,
            devices_dataset: require(envvars::DEVICES_DATASET_ID)?,
        })
    }
}

fn require(var: &'static str) -> Result<String, ConfigError> {
    env::var(var).map_err(|_| ConfigError::MissingEnvVar(var))
}
