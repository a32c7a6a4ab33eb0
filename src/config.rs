use crate::models::DayOverflow;
use std::env;
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub overflow: DayOverflow,
    pub seed_demo: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            overflow: DayOverflow::default(),
            seed_demo: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unparseable values are logged
    /// and replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                warn!("ignoring invalid PORT {raw:?}");
                defaults.port
            }),
            None => defaults.port,
        };

        let overflow = match lookup("BILLING_DAY_OVERFLOW") {
            Some(raw) => parse_overflow(&raw).unwrap_or_else(|| {
                warn!("ignoring unknown BILLING_DAY_OVERFLOW {raw:?}, expected 'clamp' or 'roll_forward'");
                defaults.overflow
            }),
            None => defaults.overflow,
        };

        let seed_demo = lookup("BILLING_SEED_DEMO")
            .map(|raw| matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.seed_demo);

        Self {
            port,
            overflow,
            seed_demo,
        }
    }
}

fn parse_overflow(raw: &str) -> Option<DayOverflow> {
    match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "clamp" => Some(DayOverflow::Clamp),
        "roll_forward" | "rollover" => Some(DayOverflow::RollForward),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]), Config::default());
    }

    #[test]
    fn reads_all_settings() {
        let config = config_from(&[
            ("PORT", "9090"),
            ("BILLING_DAY_OVERFLOW", "Roll-Forward"),
            ("BILLING_SEED_DEMO", "true"),
        ]);
        assert_eq!(config.port, 9090);
        assert_eq!(config.overflow, DayOverflow::RollForward);
        assert!(config.seed_demo);
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("PORT", "http"),
            ("BILLING_DAY_OVERFLOW", "sideways"),
            ("BILLING_SEED_DEMO", "0"),
        ]);
        assert_eq!(config, Config::default());
    }
}
