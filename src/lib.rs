pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FileAdapter, LocalFileProvider, UnlinkedSqlProvider};
pub use config::{interpolate_env, load_configuration, ConfigResolver};
pub use crate::core::factory::{AdapterFactory, SUPPORTED_DRIVERS};
pub use domain::model::{AdapterRequest, Configuration, Driver, PolicyRule};
pub use domain::ports::{Adapter, EnvLookup, FileAdapterProvider, ProcessEnv, SqlAdapterProvider};
pub use utils::error::{AdapterError, Result};
