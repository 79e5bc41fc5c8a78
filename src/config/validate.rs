use anyhow::{Result, bail};

use super::AppConfig;

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.general.host.trim().is_empty() {
        errors.push("general.host must not be empty".to_string());
    }

    if cfg.general.site_name.trim().is_empty() {
        errors.push("general.site_name must not be empty".to_string());
    }

    if let Some(database) = cfg.database.as_ref() {
        if database.url.trim().is_empty() {
            errors.push("database.url must not be empty".to_string());
        }

        if database.min_idle > database.max_connections {
            errors.push(format!(
                "database.min_idle ({}) must be <= database.max_connections ({})",
                database.min_idle, database.max_connections
            ));
        }
    }

    if cfg.contact.max_message_len == 0 {
        errors.push("contact.max_message_len must be > 0".to_string());
    }

    if !cfg.contact.email.contains('@') {
        errors.push("contact.email must be an email address".to_string());
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;

    #[test]
    fn defaults_are_valid() {
        assert!(validate(&AppConfig::default()).is_ok());
    }

    #[test]
    fn collects_every_error() {
        let mut cfg = AppConfig::default();
        cfg.general.host = " ".to_string();
        cfg.contact.max_message_len = 0;
        cfg.database = Some(DatabaseConfig {
            url: "postgres://localhost/site".to_string(),
            max_connections: 1,
            min_idle: 4,
        });

        let err = validate(&cfg).expect_err("should fail").to_string();
        assert!(err.contains("general.host must not be empty"));
        assert!(err.contains("contact.max_message_len must be > 0"));
        assert!(err.contains("database.min_idle (4) must be <= database.max_connections (1)"));
    }
}
