pub mod factory;

pub use crate::domain::model::{AdapterRequest, Configuration, Driver, PolicyRule};
pub use crate::domain::ports::{Adapter, EnvLookup, FileAdapterProvider, SqlAdapterProvider};
pub use crate::utils::error::Result;
