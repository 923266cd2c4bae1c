use crate::config::connection::ConfigResolver;
use crate::domain::model::{AdapterRequest, Driver};
use crate::domain::ports::{Adapter, FileAdapterProvider, SqlAdapterProvider};
use crate::utils::error::{AdapterError, Result};
use std::sync::Arc;

/// Driver names accepted by the factory.
pub const SUPPORTED_DRIVERS: [&str; 4] = ["file", "mysql", "postgres", "mssql"];

/// Builds policy adapters from requests, falling back to the local
/// connection config when the request leaves the backend unspecified.
pub struct AdapterFactory {
    resolver: ConfigResolver,
    files: Arc<dyn FileAdapterProvider>,
    sql: Arc<dyn SqlAdapterProvider>,
    supported_drivers: Vec<String>,
}

impl AdapterFactory {
    pub fn new(
        resolver: ConfigResolver,
        files: Arc<dyn FileAdapterProvider>,
        sql: Arc<dyn SqlAdapterProvider>,
    ) -> Self {
        Self {
            resolver,
            files,
            sql,
            supported_drivers: SUPPORTED_DRIVERS.iter().map(|d| d.to_string()).collect(),
        }
    }

    /// Replaces the whitelist checked for non-file drivers.
    pub fn with_supported_drivers<I, S>(mut self, drivers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supported_drivers = drivers.into_iter().map(Into::into).collect();
        self
    }

    pub async fn new_adapter(&self, request: AdapterRequest) -> Result<Box<dyn Adapter>> {
        let request = self.resolver.resolve(request)?;

        let driver = Driver::from_name(&request.driver_name);
        tracing::debug!(driver = %driver.name(), "dispatching adapter request");

        match driver {
            Driver::File => {
                tracing::info!(path = %request.connect_string, "opening file adapter");
                self.files.open(&request.connect_string).await
            }
            Driver::Delegated(name) => {
                self.check_supported(&name)?;
                tracing::info!(
                    driver = %name,
                    db_specified = request.db_specified,
                    "connecting sql adapter"
                );
                self.sql
                    .connect(&name, &request.connect_string, request.db_specified)
                    .await
            }
        }
    }

    fn check_supported(&self, driver: &str) -> Result<()> {
        if self.supported_drivers.iter().any(|d| d == driver) {
            return Ok(());
        }
        tracing::debug!(driver = %driver, "rejecting unsupported driver");
        Err(AdapterError::UnsupportedDriver {
            driver: driver.to_string(),
            supported: self.supported_drivers.clone(),
        })
    }
}
