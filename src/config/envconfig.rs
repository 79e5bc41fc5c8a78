use std::{collections::HashMap, path::Path};

use ::config as config_rs;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Loads a config struct from `APP_`-prefixed environment variables, nested
/// with `__` (for example `APP_DATABASE__URL`).
pub trait EnvConfig: Sized + DeserializeOwned {
    const PREFIX: &'static str = "APP";
    const SEPARATOR: &'static str = "__";

    fn load_dotenv() {
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        let _ = dotenvy::from_filename(manifest_dir.join(".env")).or_else(|_| dotenvy::dotenv());
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn environment() -> config_rs::Environment {
        config_rs::Environment::with_prefix(Self::PREFIX)
            .prefix_separator("_")
            .separator(Self::SEPARATOR)
            .try_parsing(true)
    }

    fn from_env() -> Result<Self> {
        Self::load_dotenv();
        Self::build(Self::environment())
    }

    /// Same as [`EnvConfig::from_env`] but reads `vars` instead of the process
    /// environment. `.env` is not consulted.
    fn from_vars(vars: HashMap<String, String>) -> Result<Self> {
        Self::build(Self::environment().source(Some(vars)))
    }

    fn build(source: config_rs::Environment) -> Result<Self> {
        let cfg = config_rs::Config::builder()
            .add_source(source)
            .build()
            .context("failed to read environment variables for config")?
            .try_deserialize::<Self>()
            .context("failed to deserialize environment into config")?;

        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn defaults_fill_missing_sections() {
        let cfg = AppConfig::from_vars(HashMap::new()).expect("load config");
        assert_eq!(cfg.general.port, 3000);
        assert_eq!(cfg.general.site_name, "Mon Projet");
        assert_eq!(cfg.contact.max_message_len, 5000);
        assert!(cfg.database.is_none());
    }

    #[test]
    fn nested_keys_override_defaults() {
        let cfg = AppConfig::from_vars(vars(&[
            ("APP_GENERAL__PORT", "8080"),
            ("APP_CONTACT__MAX_MESSAGE_LEN", "120"),
            ("APP_DATABASE__URL", "postgres://localhost/site"),
        ]))
        .expect("load config");
        assert_eq!(cfg.general.port, 8080);
        assert_eq!(cfg.contact.max_message_len, 120);
        let database = cfg.database.expect("database section");
        assert_eq!(database.max_connections, 10);
        assert_eq!(database.min_idle, 2);
    }

    #[test]
    fn invalid_values_fail_validation() {
        let err = AppConfig::from_vars(vars(&[("APP_CONTACT__EMAIL", "nobody")]))
            .expect_err("should fail");
        assert!(format!("{err:#}").contains("contact.email must be an email address"));
    }
}
