use crate::config::ApiServerConfig;
use anyhow::Result;
use std::{
    env,
    net::{SocketAddr, ToSocketAddrs},
    str::FromStr,
};
use tracing::{debug, info};
use tracing_subscriber::filter::EnvFilter;

const RUST_LOG: &str = "RUST_LOG";
const HUMAN_LOGGING: &str = "HUMAN_LOGGING";

/// Derive the [`std::net::SocketAddr`] from a given host and port, falling back
/// to a DNS lookup using [`std::net::ToSocketAddrs`] if the host is not a valid IP address.
pub fn derive_socket_addr(host: &str, port: &str) -> SocketAddr {
    let host = format!("{host}:{port}");
    match SocketAddr::from_str(&host) {
        Ok(v) => v,
        Err(e) => {
            debug!("Failed to parse '{host}': {e}. Retrying...");
            let mut addrs: Vec<_> = host
                .to_socket_addrs()
                .unwrap_or_else(|e| panic!("Unable to resolve domain: {e}"))
                .collect();

            let addr = addrs.pop().expect("Could not derive SocketAddr from '{}'");

            info!("Parsed SocketAddr '{addr:?}' from '{host}'");

            addr
        }
    }
}

pub fn init_logging(config: &ApiServerConfig) -> Result<()> {
    let level = env::var_os(RUST_LOG)
        .map(|x| x.into_string().unwrap())
        .unwrap_or("info".to_string());

    // We manually suppress some of the more verbose crate logging.
    if !config.verbose {
        std::env::set_var(RUST_LOG, format!("{level},hyper=warn,tower_http=warn"));
    }

    let filter = match env::var_os(RUST_LOG) {
        Some(_) => {
            EnvFilter::try_from_default_env().expect("Invalid `RUST_LOG` provided")
        }
        None => EnvFilter::new("info"),
    };

    let human_logging = env::var_os(HUMAN_LOGGING)
        .map(|s| {
            bool::from_str(s.to_str().unwrap())
                .expect("Expected `true` or `false` to be provided for `HUMAN_LOGGING`")
        })
        .unwrap_or(true);

    let sub = tracing_subscriber::fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(filter);

    if human_logging {
        sub.with_ansi(true)
            .with_level(true)
            .with_line_number(true)
            .init();
    } else {
        sub.with_ansi(false)
            .with_level(true)
            .with_line_number(true)
            .json()
            .init();
    }

    Ok(())
}
