use figment::{Figment, providers::Env};
use serde::Deserialize;

/// Configuration read from the process environment.
///
/// The connection string stays an `Option`: whether an absent or empty
/// value aborts the run is the runner's call, not the config layer's.
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(rename = "neon_database_url", default)]
    pub database_url: Option<String>,
    #[serde(default = "default_loglevel")]
    pub loglevel: String,
}

fn default_loglevel() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            loglevel: default_loglevel(),
        }
    }
}

impl Config {
    /// Extract configuration from the environment.
    ///
    /// Only the two recognized variables are read; figment lowercases
    /// the keys before deserialization.
    pub fn from_env() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Env::raw().only(&["NEON_DATABASE_URL", "LOGLEVEL"]))
            .extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_database_url() {
        let cfg = Config::default();
        assert!(cfg.database_url.is_none());
        assert_eq!(cfg.loglevel, "info");
    }
}
