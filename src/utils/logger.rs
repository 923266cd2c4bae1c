use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const CRATE_TARGET: &str = "policy_adapter_factory";

/// Filter used when `RUST_LOG` is unset.
pub fn default_directives(verbose: bool, json: bool) -> String {
    match (verbose, json) {
        (true, _) => format!("{}=debug,info", CRATE_TARGET),
        (false, true) => format!("{}=info", CRATE_TARGET),
        (false, false) => format!("{}=warn", CRATE_TARGET),
    }
}

/// Installs the global subscriber; logs go to stderr so stdout stays
/// reserved for command output.
pub fn init_logger(verbose: bool, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose, json)));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer.compact()).init();
    }
}
