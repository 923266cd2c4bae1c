use crate::domain::model::AdapterRequest;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "adapter-factory")]
#[command(about = "Resolve and open policy storage adapters")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Connection config file (defaults to $CONNECTION_CONFIG_PATH, then config/connection_config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the request after merging in the connection config
    Resolve {
        #[command(flatten)]
        request: RequestArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open the adapter and print its policy rules
    Load {
        #[command(flatten)]
        request: RequestArgs,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct RequestArgs {
    /// Storage driver: file | mysql | postgres | mssql
    #[arg(long, default_value = "")]
    pub driver: String,

    /// Connection string, or policy file path for the file driver
    #[arg(long, default_value = "")]
    pub connection: String,

    /// The connection string already names the database
    #[arg(long)]
    pub db_specified: bool,
}

impl From<RequestArgs> for AdapterRequest {
    fn from(args: RequestArgs) -> Self {
        AdapterRequest::new(args.driver, args.connection, args.db_specified)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", &path.to_string_lossy())?;
        }

        let request = match &self.command {
            Command::Resolve { request, .. } | Command::Load { request } => request,
        };
        // Blank-but-present values would bypass the config file silently.
        if !request.driver.is_empty() {
            validate_non_empty_string("driver", &request.driver)?;
        }
        if !request.connection.is_empty() {
            validate_non_empty_string("connection", &request.connection)?;
        }
        Ok(())
    }
}
