use crate::domain::model::PolicyRule;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Read-only view of environment variables.
pub trait EnvLookup: Send + Sync {
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        if name.is_empty() {
            return None;
        }
        std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    }
}

impl EnvLookup for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Policy persistence handle handed to the enforcement engine.
#[async_trait]
pub trait Adapter: Send + Sync {
    async fn load_policy(&self) -> Result<Vec<PolicyRule>>;
    async fn save_policy(&self, rules: &[PolicyRule]) -> Result<()>;
}

/// Builds the file-backed adapter.
#[async_trait]
pub trait FileAdapterProvider: Send + Sync {
    async fn open(&self, path: &str) -> Result<Box<dyn Adapter>>;
}

/// Builds SQL-backed adapters (mysql, postgres, mssql).
#[async_trait]
pub trait SqlAdapterProvider: Send + Sync {
    async fn connect(
        &self,
        driver: &str,
        connect_string: &str,
        db_specified: bool,
    ) -> Result<Box<dyn Adapter>>;
}
