use clap::Parser;
use policy_adapter_factory::config::cli::Command;
use policy_adapter_factory::utils::{logger, validation::Validate};
use policy_adapter_factory::{
    AdapterFactory, AdapterRequest, CliConfig, ConfigResolver, LocalFileProvider,
    UnlinkedSqlProvider,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_logger(config.verbose, config.log_json);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let mut resolver = ConfigResolver::new();
    if let Some(path) = &config.config {
        resolver = resolver.with_path(path);
    }

    match config.command {
        Command::Resolve { request, json } => {
            let resolved = resolver.resolve(AdapterRequest::from(request))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&resolved)?);
            } else {
                println!("driver:       {}", resolved.driver_name);
                println!("connection:   {}", resolved.connect_string);
                println!("db_specified: {}", resolved.db_specified);
            }
        }
        Command::Load { request } => {
            let factory = AdapterFactory::new(
                resolver,
                Arc::new(LocalFileProvider::new()),
                Arc::new(UnlinkedSqlProvider),
            );
            let adapter = factory.new_adapter(AdapterRequest::from(request)).await?;
            let rules = adapter.load_policy().await?;

            for rule in &rules {
                println!("{}, {}", rule.ptype, rule.values.join(", "));
            }
            tracing::info!("loaded {} policy rules", rules.len());
        }
    }

    Ok(())
}
