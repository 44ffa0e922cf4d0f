use std::env;
use std::path::PathBuf;

/// Environment variable naming an explicit range document
pub const RANGE_MESSAGE_VAR: &str = "ISBN_RANGE_MESSAGE";
/// Environment variable overriding the install/data directory
pub const DATA_DIR_VAR: &str = "ISBN_RANGES_DATA_DIR";

#[derive(Clone, Debug)]
pub struct Config {
    pub range_message: Option<PathBuf>,
    pub data_dir: PathBuf,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let range_message = lookup(RANGE_MESSAGE_VAR)
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let data_dir = lookup(DATA_DIR_VAR)
            .filter(|d| !d.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        Self {
            range_message,
            data_dir,
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_else(Vec::new),
        }
    }
}

/// Directory holding the running executable, where a packaged
/// `RangeMessage.xml` is installed next to the binary.
fn default_data_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.range_message, None);
        assert_eq!(config.port, 8000);
        assert!(config.cors_allowed_origins.is_empty());
    }

    #[test]
    fn test_values_are_read() {
        let config = config_from(&[
            (RANGE_MESSAGE_VAR, " /srv/isbn/RangeMessage.xml "),
            (DATA_DIR_VAR, "/usr/share/isbn-ranges"),
            ("PORT", "9090"),
            ("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test,"),
        ]);
        assert_eq!(
            config.range_message,
            Some(PathBuf::from("/srv/isbn/RangeMessage.xml"))
        );
        assert_eq!(config.data_dir, PathBuf::from("/usr/share/isbn-ranges"));
        assert_eq!(config.port, 9090);
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let config = config_from(&[(RANGE_MESSAGE_VAR, "  "), ("PORT", "not-a-port")]);
        assert_eq!(config.range_message, None);
        assert_eq!(config.port, 8000);
    }
}
