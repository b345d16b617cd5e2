use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::origin::DEFAULT_ALLOWED_ORIGINS;

pub const HOST_ENV: &str = "MARQUEE_HOST";
pub const PORT_ENV: &str = "PORT";
pub const SEED_PATH_ENV: &str = "MARQUEE_SEED_PATH";
pub const ALLOWED_ORIGINS_ENV: &str = "MARQUEE_ALLOWED_ORIGINS";
pub const LOG_FORMAT_ENV: &str = "MARQUEE_LOG_FORMAT";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3333;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "marquee-gateway")]
pub struct CLI {
    #[arg(long, env = HOST_ENV, default_value = DEFAULT_HOST)]
    pub host: IpAddr,

    #[arg(long, env = PORT_ENV, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// JSON dataset to seed the catalog with; the bundled one is used when unset.
    #[arg(long, env = SEED_PATH_ENV)]
    pub seed_path: Option<PathBuf>,

    #[arg(
        long,
        env = ALLOWED_ORIGINS_ENV,
        value_delimiter = ',',
        default_values = DEFAULT_ALLOWED_ORIGINS,
    )]
    pub allowed_origins: Vec<String>,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormat::Text
    )]
    pub log_format: LogFormat,
}

impl CLI {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
