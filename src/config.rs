//! src/config.rs
//!
//! Defines the strongly-typed `Config` struct for all runtime parameters,
//! loaded from files and environment variables via `figment`.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Top-level struct holding all application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// JSON snapshot file. `None` keeps everything in memory.
    pub data_path: Option<PathBuf>,
    /// Load the fixture blogs and users when the store starts empty.
    pub seed_fixtures: bool,
    /// Mount `POST /api/testing/reset`.
    pub testing_routes: bool,
}

impl Config {
    /// Loads configuration from `bloglist.toml` and `BLOGLIST_`-prefixed
    /// environment variables, on top of the `Default` implementation.
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file("bloglist.toml"))
            .merge(Env::prefixed("BLOGLIST_"))
            .extract()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 3003),
            data_path: None,
            seed_fixtures: false,
            testing_routes: false,
        }
    }
}
