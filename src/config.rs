use crate::schedule::{DEFAULT_DAYS, MAX_DAYS};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub schedule_days: u32,
    pub static_dir: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid { key: &'static str, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid { key, value } => write!(f, "invalid value for {key}: {value:?}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: "sqlite://bookings.db".to_string(),
            port: 3000,
            cors_origins: vec!["*".to_string()],
            schedule_days: DEFAULT_DAYS,
            static_dir: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults for missing keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value })?,
            None => defaults.port,
        };

        let schedule_days = match lookup("SCHEDULE_DAYS") {
            Some(value) => match value.parse::<u32>() {
                Ok(days) if days <= MAX_DAYS => days,
                _ => return Err(ConfigError::Invalid { key: "SCHEDULE_DAYS", value }),
            },
            None => defaults.schedule_days,
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or(defaults.cors_origins);

        Ok(Config {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            port,
            cors_origins,
            schedule_days,
            static_dir: lookup("STATIC_DIR").map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.schedule_days, 14);
        assert_eq!(config.cors_origins, ["*"]);
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("PORT", "8080"),
            ("CORS_ORIGINS", "https://a.example, https://b.example,"),
            ("SCHEDULE_DAYS", "7"),
            ("STATIC_DIR", "frontend/build"),
        ]))
        .unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins, ["https://a.example", "https://b.example"]);
        assert_eq!(config.schedule_days, 7);
        assert_eq!(config.static_dir, Some(PathBuf::from("frontend/build")));
    }

    #[test]
    fn schedule_days_capped_at_max_window() {
        let config = Config::from_lookup(lookup_from(&[("SCHEDULE_DAYS", "60")])).unwrap();
        assert_eq!(config.schedule_days, 60);

        for value in ["61", "90", "-1"] {
            let err = Config::from_lookup(lookup_from(&[("SCHEDULE_DAYS", value)])).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { key: "SCHEDULE_DAYS", .. }));
        }
    }

    #[test]
    fn rejects_bad_port() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    }
}
