use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// CLI config (pulse.toml + PULSE_* env overrides).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Timeframes subscribed at startup.
    #[serde(default = "default_timeframes")]
    pub timeframes: Vec<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            timeframes: default_timeframes(),
        }
    }
}

impl CliConfig {
    /// Load from `path` (default `pulse.toml`) merged with env overrides.
    /// A missing file is not an error; the defaults apply.
    pub fn load(path: Option<&str>) -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file(path.unwrap_or("pulse.toml")))
            .merge(Env::prefixed("PULSE_"))
            .extract()
    }
}

fn default_timeframes() -> Vec<String> {
    vec!["1s".to_string(), "1m".to_string()]
}
