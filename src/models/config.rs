//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_seed_count() -> usize {
    1000
}

#[derive(Clone, Debug, Deserialize)]
/// Settings shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub templates_dir: String,
    /// Number of sample records inserted into an empty store.
    #[serde(default = "default_seed_count")]
    pub seed_count: usize,
}
