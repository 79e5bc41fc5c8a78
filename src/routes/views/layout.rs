use std::path::{Path, PathBuf};

use askama::Template;
use axum::{http::StatusCode, response::Html};
use chrono::{Datelike, Local};

use crate::config::AppConfig;

pub(crate) type HtmlError = (StatusCode, Html<String>);

/// Values the shared layout needs on every page: navigation state and footer.
#[derive(Debug, Clone)]
pub struct Layout {
    pub site_name: String,
    pub initials: String,
    pub email: String,
    pub phone: String,
    pub year: i32,
    pub active: &'static str,
}

impl Layout {
    pub fn new(config: &AppConfig, active: &'static str) -> Self {
        let site_name = config.general.site_name.clone();
        Self {
            initials: initials(&site_name),
            site_name,
            email: config.contact.email.clone(),
            phone: config.contact.phone.clone(),
            year: Local::now().year(),
            active,
        }
    }
}

fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

pub(crate) fn render<T: Template>(template: T, what: &'static str) -> Result<String, HtmlError> {
    template.render().map_err(|err| {
        tracing::error!(error = %err, page = what, "template rendering failed");
        html_error(StatusCode::INTERNAL_SERVER_ERROR, "failed to render page")
    })
}

pub(crate) fn html_error(status: StatusCode, message: &'static str) -> HtmlError {
    (status, Html(message.to_string()))
}

/// Relative paths are looked up in the working directory, next to the
/// executable, then in the crate root.
pub fn resolve_public_dir(configured: &str) -> PathBuf {
    let configured = Path::new(configured);
    if configured.is_absolute() {
        return configured.to_path_buf();
    }

    if let Ok(current_dir) = std::env::current_dir() {
        let candidate = current_dir.join(configured);
        if candidate.exists() {
            return candidate;
        }
    }

    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        let candidate = exe_dir.join(configured);
        if candidate.exists() {
            return candidate;
        }
    }

    Path::new(env!("CARGO_MANIFEST_DIR")).join(configured)
}
