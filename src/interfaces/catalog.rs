use std::sync::Arc;

use base64::prelude::{Engine as _, BASE64_STANDARD};
use serde::Serialize;
use thiserror::Error;

use crate::config::CatalogConfig;
use crate::constants::defaults;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog TLS setup failed: {0}")]
    Tls(#[from] native_tls::Error),
    #[error("catalog upsert failed: {0}")]
    Transport(#[from] Box<ureq::Error>),
    #[error("could not serialize upsert payload: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not read catalog response: {0}")]
    Io(#[from] std::io::Error),
}

/// Authenticated client for the open-data catalog's upsert API.
///
/// One client is built per run; all of its calls share a single generous
/// timeout.
pub struct CatalogClient {
    agent: ureq::Agent,
    config: CatalogConfig,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let agent = ureq::AgentBuilder::new()
            .tls_connector(Arc::new(native_tls::TlsConnector::new()?))
            .timeout(defaults::CATALOG_REQUEST_TIMEOUT)
            .build();
        Ok(Self { agent, config })
    }

    /// Insert-or-update `rows` in the given dataset. Idempotency across
    /// overlapping runs is the catalog's responsibility, keyed on the
    /// dataset's configured row identifier.
    pub fn upsert<T: Serialize>(&self, dataset_id: &str, rows: &[T]) -> Result<(), CatalogError> {
        let url = format!("{}/resource/{}.json", self.config.base_url, dataset_id);
        let body = serde_json::to_string(rows)?;
        let resp = self
            .agent
            .post(&url)
            .set("X-App-Token", &self.config.app_token)
            .set("Authorization", &self.basic_auth())
            .set("Content-Type", "application/json")
            .send_string(&body)
            .map_err(Box::new)?;
        log::debug!(
            "Upserted {} rows into {}: {}",
            rows.len(),
            dataset_id,
            resp.into_string()?
        );
        Ok(())
    }

    fn basic_auth(&self) -> String {
        let credentials = format!("{}:{}", self.config.username, self.config.password);
        format!("Basic {}", BASE64_STANDARD.encode(credentials))
    }
}
