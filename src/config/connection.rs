use crate::domain::model::{AdapterRequest, Configuration};
use crate::domain::ports::{EnvLookup, ProcessEnv};
use crate::utils::error::{AdapterError, Result};
use regex::{Captures, Regex};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

pub const CONFIG_FILE_DEFAULT_PATH: &str = "config/connection_config.json";
pub const CONFIG_PATH_ENV_VAR: &str = "CONNECTION_CONFIG_PATH";

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$([A-Za-z0-9_]*)").expect("placeholder pattern is valid"))
}

/// Replaces `$NAME` tokens with values from `env`, unset names become "".
///
/// Single pass: substituted values are not scanned again.
pub fn interpolate_env(text: &str, env: &dyn EnvLookup) -> String {
    placeholder_pattern()
        .replace_all(text, |caps: &Captures| env.var(&caps[1]).unwrap_or_default())
        .into_owned()
}

/// Loads the connection config at `path`.
///
/// A missing file is not an error and yields `Configuration::default()`.
pub fn load_configuration<P: AsRef<Path>>(path: P, env: &dyn EnvLookup) -> Result<Configuration> {
    let path = path.as_ref();
    let content = match std::fs::read(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "connection config not found, using defaults");
            return Ok(Configuration::default());
        }
        Err(source) => {
            return Err(AdapterError::ConfigRead {
                path: path.display().to_string(),
                source,
            })
        }
    };

    let parse_error = |source: serde_json::Error| AdapterError::ConfigParse {
        path: path.display().to_string(),
        source,
    };
    // Only the first JSON value counts; anything after it is ignored.
    let first = serde_json::Deserializer::from_slice(&content)
        .into_iter::<Option<Configuration>>()
        .next();
    let mut config = match first {
        Some(value) => value.map_err(parse_error)?.unwrap_or_default(),
        // Blank file: let the strict parser report the EOF.
        None => match serde_json::from_slice::<serde_json::Value>(&content) {
            Err(source) => return Err(parse_error(source)),
            Ok(_) => Configuration::default(),
        },
    };
    config.connection = interpolate_env(&config.connection, env);

    tracing::debug!(
        path = %path.display(),
        driver = %config.driver,
        db_specified = config.db_specified,
        "loaded connection config"
    );
    Ok(config)
}

/// Fills in adapter requests from the local connection config.
#[derive(Clone)]
pub struct ConfigResolver {
    env: Arc<dyn EnvLookup>,
    path: Option<PathBuf>,
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigResolver {
    pub fn new() -> Self {
        Self::with_env(Arc::new(ProcessEnv))
    }

    pub fn with_env(env: Arc<dyn EnvLookup>) -> Self {
        Self { env, path: None }
    }

    /// Pins the config file, ignoring `CONNECTION_CONFIG_PATH`.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn config_path(&self) -> PathBuf {
        if let Some(path) = &self.path {
            return path.clone();
        }
        match self.env.var(CONFIG_PATH_ENV_VAR) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => PathBuf::from(CONFIG_FILE_DEFAULT_PATH),
        }
    }

    pub fn load(&self) -> Result<Configuration> {
        load_configuration(self.config_path(), self.env.as_ref())
    }

    /// Applies the config file when the caller gave neither driver nor
    /// connection string. Otherwise the request is returned untouched.
    pub fn resolve(&self, request: AdapterRequest) -> Result<AdapterRequest> {
        let config = self.load()?;
        if !request.is_unset() {
            return Ok(request);
        }

        tracing::info!(driver = %config.driver, "using adapter settings from connection config");
        Ok(AdapterRequest {
            driver_name: config.driver,
            connect_string: config.connection,
            db_specified: config.db_specified,
        })
    }
}
