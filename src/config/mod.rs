use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::token::TokenType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigPathError {
    MissingHomeDirectory,
}

pub(crate) const APP_DIR: &str = "swatchbook";
const APP_CONFIG_FILE: &str = "config.json";

/// Application-level settings from `config.json`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AppConfig {
    #[serde(default)]
    pub(crate) theme_file: Option<PathBuf>,
    #[serde(default)]
    pub(crate) filter_types: Vec<TokenType>,
    #[serde(default)]
    pub(crate) show_all_tokens: bool,
    #[serde(default = "default_enable_token_select")]
    pub(crate) enable_token_select: bool,
}

fn default_enable_token_select() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme_file: None,
            filter_types: Vec::new(),
            show_all_tokens: false,
            enable_token_select: default_enable_token_select(),
        }
    }
}

pub(crate) fn load_app_config() -> AppConfig {
    let (xdg_config_home, home) = config_env_dirs();
    load_app_config_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_app_config_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> AppConfig {
    let path = match app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home) {
        Ok(p) => p,
        Err(_) => return AppConfig::default(),
    };
    if !path.exists() {
        return AppConfig::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(?err, ?path, "failed to parse config.json; using defaults");
            AppConfig::default()
        }),
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to read config.json; using defaults");
            AppConfig::default()
        }
    }
}

pub(crate) fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_temp_root<F: FnOnce(&Path)>(f: F) {
        let mut root = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        root.push(format!("swatchbook-config-{}-{nanos}", std::process::id()));
        std::fs::create_dir_all(root.join(APP_DIR)).unwrap();
        f(&root);
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn app_config_path_prefers_xdg_config_home() {
        let path = app_config_path(
            "swatchbook",
            "theme.json",
            Some(Path::new("/tmp/config-root")),
            Some(Path::new("/tmp/home")),
        )
        .expect("path should resolve");

        assert_eq!(path, PathBuf::from("/tmp/config-root/swatchbook/theme.json"));
    }

    #[test]
    fn app_config_path_falls_back_to_home_dot_config() {
        let path = app_config_path("swatchbook", "theme.json", None, Some(Path::new("/tmp/home")))
            .expect("path should resolve");

        assert_eq!(path, PathBuf::from("/tmp/home/.config/swatchbook/theme.json"));
    }

    #[test]
    fn app_config_path_errors_when_home_missing_and_xdg_unset() {
        let error = app_config_path("swatchbook", "theme.json", None, None).unwrap_err();
        assert_eq!(error, ConfigPathError::MissingHomeDirectory);
    }

    #[test]
    fn app_config_defaults_when_file_missing() {
        with_temp_root(|root| {
            let config = load_app_config_with(Some(root), None);
            assert!(config.theme_file.is_none());
            assert!(config.filter_types.is_empty());
            assert!(!config.show_all_tokens);
            assert!(config.enable_token_select);
        });
    }

    #[test]
    fn app_config_parses_panel_settings() {
        with_temp_root(|root| {
            std::fs::write(
                root.join(APP_DIR).join(APP_CONFIG_FILE),
                r#"{
                    "theme_file": "/tmp/brand.json",
                    "filter_types": ["colorText", "radius"],
                    "show_all_tokens": true,
                    "enable_token_select": false
                }"#,
            )
            .unwrap();

            let config = load_app_config_with(Some(root), None);
            assert_eq!(config.theme_file, Some(PathBuf::from("/tmp/brand.json")));
            assert_eq!(
                config.filter_types,
                vec![TokenType::ColorText, TokenType::Radius]
            );
            assert!(config.show_all_tokens);
            assert!(!config.enable_token_select);
        });
    }

    #[test]
    fn app_config_falls_back_to_defaults_on_invalid_json() {
        with_temp_root(|root| {
            std::fs::write(root.join(APP_DIR).join(APP_CONFIG_FILE), "{ nope").unwrap();
            let config = load_app_config_with(Some(root), None);
            assert!(config.filter_types.is_empty());
            assert!(config.enable_token_select);
        });
    }
}
