#[cfg(feature = "cli")]
pub mod cli;
pub mod connection;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use connection::{
    interpolate_env, load_configuration, ConfigResolver, CONFIG_FILE_DEFAULT_PATH,
    CONFIG_PATH_ENV_VAR,
};
