//! Tracing bootstrap for host applications.
//!
//! The core only emits `tracing` events. Hosts that want them on stderr call
//! [`init`] once at startup.

use crate::config::VaultConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Install a global subscriber. `RUST_LOG` takes precedence over
/// `default_filter`. Returns false if a subscriber was already installed.
pub fn init(default_filter: &str, json: bool) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
            .is_ok()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .is_ok()
    }
}

pub fn init_from_config(config: &VaultConfig) -> bool {
    init(&config.log_filter, config.log_json)
}
