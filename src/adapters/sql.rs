use crate::domain::ports::{Adapter, SqlAdapterProvider};
use crate::utils::error::{AdapterError, Result};
use async_trait::async_trait;

/// Stand-in for builds that link no SQL backend. Every connect attempt
/// fails the same way a refused connection would.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnlinkedSqlProvider;

#[async_trait]
impl SqlAdapterProvider for UnlinkedSqlProvider {
    async fn connect(
        &self,
        driver: &str,
        _connect_string: &str,
        _db_specified: bool,
    ) -> Result<Box<dyn Adapter>> {
        Err(AdapterError::construction(format!(
            "no {} backend is linked into this build",
            driver
        )))
    }
}
