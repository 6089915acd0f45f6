use crate::{defaults, utils::derive_socket_addr};
use anyhow::Result;
pub use clap::Parser;
use serde::Deserialize;
use std::fs::File;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser, Clone)]
#[clap(name = "Star Wars API Service", about = "Star Wars GraphQL API")]
pub struct ApiServerArgs {
    #[clap(short, long, parse(from_os_str), help = "API server config file.")]
    pub config: Option<PathBuf>,
    #[clap(long, help = "GraphQL API IP.", default_value = defaults::GRAPHQL_API_HOST)]
    pub graphql_api_host: String,
    #[clap(long, help = "GraphQL API port.", default_value = defaults::GRAPHQL_API_PORT)]
    pub graphql_api_port: String,
    #[clap(short, long, help = "Enable verbose logging.")]
    pub verbose: bool,
}

#[derive(Clone, Deserialize, Debug)]
pub struct GraphQLConfig {
    #[serde(default = "GraphQLConfig::default_host")]
    pub host: String,
    #[serde(default = "GraphQLConfig::default_port")]
    pub port: String,
}

impl GraphQLConfig {
    fn default_host() -> String {
        defaults::GRAPHQL_API_HOST.to_string()
    }

    fn default_port() -> String {
        defaults::GRAPHQL_API_PORT.to_string()
    }

    pub fn derive_socket_addr(&self) -> SocketAddr {
        derive_socket_addr(&self.host, &self.port)
    }
}

impl Default for GraphQLConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl std::fmt::Display for GraphQLConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "http://{}:{}", self.host, self.port)
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct ApiServerConfig {
    #[serde(default)]
    pub graphql_api: GraphQLConfig,
    #[serde(default)]
    pub verbose: bool,
}

impl ApiServerConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let config: ApiServerConfig = serde_yaml::from_reader(file)?;
        Ok(config)
    }
}

impl From<ApiServerArgs> for ApiServerConfig {
    fn from(args: ApiServerArgs) -> Self {
        Self {
            graphql_api: GraphQLConfig {
                host: args.graphql_api_host,
                port: args.graphql_api_port,
            },
            verbose: args.verbose,
        }
    }
}
