use config::{Config, Environment};
use serde::Deserialize;

pub const ENV_PREFIX: &str = "TSDB_ANALYSIS";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Pretty-print the JSON document.
    pub pretty: bool,
}

impl Settings {
    /// Reads `TSDB_ANALYSIS_*` variables; anything unreadable falls back to defaults.
    pub fn load() -> Self {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_environment(env: Environment) -> Self {
        Config::builder()
            .add_source(env.try_parsing(true))
            .build()
            .and_then(|c| c.try_deserialize())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let source: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(source))
    }

    #[test]
    fn defaults_without_variables() {
        assert_eq!(Settings::from_environment(env(&[])), Settings::default());
    }

    #[test]
    fn pretty_from_environment() {
        let settings = Settings::from_environment(env(&[("TSDB_ANALYSIS_PRETTY", "true")]));
        assert!(settings.pretty);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let settings = Settings::from_environment(env(&[("TSDB_ANALYSIS_PRETTY", "sometimes")]));
        assert_eq!(settings, Settings::default());
    }
}
