use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{app_config_path, config_env_dirs, ConfigPathError, APP_DIR};
use crate::token::{TokenMap, TokenValue};

const THEME_CONFIG_FILE: &str = "theme.json";

pub type ThemeResult<T> = std::result::Result<T, ThemeError>;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("missing HOME environment variable")]
    MissingHomeDirectory,
    #[error("failed to read theme config: {path}")]
    ReadConfig { path: PathBuf, source: io::Error },
    #[error("failed to parse theme config")]
    ParseConfig(#[from] serde_json::Error),
}

/// The `override` block: alias tokens plus per-component token maps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverrideBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<Arc<TokenMap>>,
    #[serde(flatten)]
    pub components: Arc<BTreeMap<String, TokenMap>>,
}

/// Base algorithm applied before token overrides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeAlgorithm {
    #[default]
    Default,
    Dark,
    Compact,
}

/// Theme configuration owned by the host.
///
/// Treated as an immutable value: the `with_*` edits return a new
/// configuration and share every sub-structure they do not touch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub token: Arc<TokenMap>,
    #[serde(
        rename = "override",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub overrides: Option<Arc<OverrideBlock>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<ThemeAlgorithm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashed: Option<bool>,
}

impl ThemeConfig {
    /// A configuration that overrides every alias token with `alias`.
    pub fn from_alias(alias: TokenMap) -> Self {
        Self {
            token: Arc::default(),
            overrides: Some(Arc::new(OverrideBlock {
                alias: Some(Arc::new(alias)),
                components: Arc::default(),
            })),
            ..Self::default()
        }
    }

    pub fn seed_token(&self, name: &str) -> Option<&TokenValue> {
        self.token.get(name)
    }

    pub fn alias_tokens(&self) -> Option<&TokenMap> {
        self.overrides
            .as_deref()
            .and_then(|overrides| overrides.alias.as_deref())
    }

    pub fn alias_token(&self, name: &str) -> Option<&TokenValue> {
        self.alias_tokens().and_then(|alias| alias.get(name))
    }

    pub fn with_seed_token(&self, name: &str, value: TokenValue) -> Self {
        let mut token = TokenMap::clone(&self.token);
        token.insert(name.to_string(), value);
        Self {
            token: Arc::new(token),
            ..self.clone()
        }
    }

    pub fn with_alias_token(&self, name: &str, value: TokenValue) -> Self {
        let overrides = self.overrides.as_deref().cloned().unwrap_or_default();
        let mut alias = overrides.alias.as_deref().cloned().unwrap_or_default();
        alias.insert(name.to_string(), value);
        Self {
            overrides: Some(Arc::new(OverrideBlock {
                alias: Some(Arc::new(alias)),
                ..overrides
            })),
            ..self.clone()
        }
    }
}

pub type ThemeChangeHandler = Rc<dyn Fn(ThemeConfig)>;

/// A named theme the panel edits, plus the owner's change handler.
#[derive(Clone)]
pub struct MutableTheme {
    pub name: String,
    pub key: String,
    pub config: ThemeConfig,
    pub on_theme_change: Option<ThemeChangeHandler>,
}

impl MutableTheme {
    pub fn new(name: impl Into<String>, key: impl Into<String>, config: ThemeConfig) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            config,
            on_theme_change: None,
        }
    }

    pub fn with_change_handler(mut self, handler: impl Fn(ThemeConfig) + 'static) -> Self {
        self.on_theme_change = Some(Rc::new(handler));
        self
    }

    pub(crate) fn emit_change(&self, config: ThemeConfig) {
        match self.on_theme_change.as_ref() {
            Some(handler) => handler(config),
            None => tracing::debug!(theme = %self.key, "theme has no change handler"),
        }
    }
}

impl std::fmt::Debug for MutableTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MutableTheme")
            .field("name", &self.name)
            .field("key", &self.key)
            .field("config", &self.config)
            .field("on_theme_change", &self.on_theme_change.is_some())
            .finish()
    }
}

/// Layer seed tokens, then alias overrides, on top of `defaults`.
pub fn resolve_tokens(defaults: &TokenMap, config: &ThemeConfig) -> TokenMap {
    let mut tokens = defaults.clone();
    apply_overrides(&mut tokens, &config.token);
    if let Some(alias) = config.alias_tokens() {
        apply_overrides(&mut tokens, alias);
    }
    tokens
}

fn apply_overrides(tokens: &mut TokenMap, overrides: &TokenMap) {
    for (name, value) in overrides {
        tokens.insert(name.clone(), value.clone());
    }
}

pub fn default_theme_path() -> ThemeResult<PathBuf> {
    let (xdg_config_home, home) = config_env_dirs();
    theme_config_path_with(xdg_config_home.as_deref(), home.as_deref())
}

fn theme_config_path_with(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> ThemeResult<PathBuf> {
    app_config_path(APP_DIR, THEME_CONFIG_FILE, xdg_config_home, home).map_err(|error| {
        match error {
            ConfigPathError::MissingHomeDirectory => ThemeError::MissingHomeDirectory,
        }
    })
}

/// Load a theme file; a missing file yields the empty configuration.
pub fn load_theme_config(path: &Path) -> ThemeResult<ThemeConfig> {
    if !path.exists() {
        tracing::debug!(?path, "theme file missing; using empty theme");
        return Ok(ThemeConfig::default());
    }

    let serialized = fs::read_to_string(path).map_err(|source| ThemeError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    let config = serde_json::from_str(&serialized)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_root() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let pid = std::process::id();
        path.push(format!("swatchbook-theme-{pid}-{nanos}"));
        path
    }

    fn with_temp_root<F: FnOnce(&Path)>(f: F) {
        let root = fixture_root();
        fs::create_dir_all(&root).unwrap();
        f(&root);
        let _ = fs::remove_dir_all(&root);
    }

    fn sample_config() -> ThemeConfig {
        serde_json::from_str(
            r##"{
                "token": { "colorPrimary": "#1677ff", "radiusBase": 6 },
                "override": {
                    "alias": { "colorBgContent": "#fafafa", "colorText": "#111111" },
                    "Button": { "colorPrimary": "#00b96b" }
                }
            }"##,
        )
        .expect("sample config should parse")
    }

    #[test]
    fn seed_edit_replaces_token_and_shares_everything_else() {
        let config = sample_config();
        let edited = config.with_seed_token("colorPrimary", TokenValue::text("#ff0000"));

        assert_eq!(
            edited.seed_token("colorPrimary"),
            Some(&TokenValue::text("#ff0000"))
        );
        assert_eq!(edited.seed_token("radiusBase"), Some(&TokenValue::Number(6.0)));
        assert!(!Arc::ptr_eq(&edited.token, &config.token));
        let (Some(before), Some(after)) = (&config.overrides, &edited.overrides) else {
            panic!("override block should survive a seed edit");
        };
        assert!(Arc::ptr_eq(before, after));
        assert_eq!(
            config.seed_token("colorPrimary"),
            Some(&TokenValue::text("#1677ff"))
        );
    }

    #[test]
    fn alias_edit_keeps_other_alias_keys_and_components() {
        let config = sample_config();
        let edited = config.with_alias_token("colorBgContent", TokenValue::text("#000000"));

        assert_eq!(
            edited.alias_token("colorBgContent"),
            Some(&TokenValue::text("#000000"))
        );
        assert_eq!(edited.alias_token("colorText"), Some(&TokenValue::text("#111111")));
        assert!(Arc::ptr_eq(&edited.token, &config.token));

        let before = config.overrides.as_deref().expect("override block");
        let after = edited.overrides.as_deref().expect("override block");
        assert!(Arc::ptr_eq(&before.components, &after.components));
        assert_eq!(
            config.alias_token("colorBgContent"),
            Some(&TokenValue::text("#fafafa"))
        );
    }

    #[test]
    fn alias_edit_creates_missing_override_block() {
        let config = ThemeConfig::default();
        let edited = config.with_alias_token("colorBgContent", TokenValue::text("#eeeeee"));

        assert_eq!(
            edited.alias_token("colorBgContent"),
            Some(&TokenValue::text("#eeeeee"))
        );
        assert!(config.overrides.is_none());
    }

    #[test]
    fn override_block_round_trips_component_maps() {
        let config = sample_config();
        let serialized = serde_json::to_value(&config).expect("serialize");
        assert_eq!(serialized["override"]["Button"]["colorPrimary"], "#00b96b");
        assert_eq!(serialized["override"]["alias"]["colorText"], "#111111");

        let overrides = config.overrides.as_deref().expect("override block");
        assert!(overrides.components.contains_key("Button"));
        assert!(!overrides.components.contains_key("alias"));
    }

    #[test]
    fn resolve_tokens_layers_seed_then_alias() {
        let mut defaults = TokenMap::new();
        defaults.insert("colorPrimary".into(), TokenValue::text("#1677ff"));
        defaults.insert("colorText".into(), TokenValue::text("#000000"));
        defaults.insert("colorSplit".into(), TokenValue::text("#eeeeee"));

        let config = ThemeConfig::default()
            .with_seed_token("colorPrimary", TokenValue::text("#ff0000"))
            .with_alias_token("colorText", TokenValue::text("#222222"));

        let resolved = resolve_tokens(&defaults, &config);
        assert_eq!(resolved["colorPrimary"], TokenValue::text("#ff0000"));
        assert_eq!(resolved["colorText"], TokenValue::text("#222222"));
        assert_eq!(resolved["colorSplit"], TokenValue::text("#eeeeee"));
    }

    #[test]
    fn algorithm_and_hashed_flags_survive_edits() {
        let config: ThemeConfig =
            serde_json::from_str(r#"{ "algorithm": "dark", "hashed": false }"#).expect("parse");
        assert_eq!(config.algorithm, Some(ThemeAlgorithm::Dark));

        let edited = config.with_alias_token("colorText", TokenValue::text("#ffffff"));
        assert_eq!(edited.algorithm, Some(ThemeAlgorithm::Dark));
        assert_eq!(edited.hashed, Some(false));
        assert!(serde_json::to_value(ThemeConfig::default())
            .expect("serialize")
            .get("algorithm")
            .is_none());
    }

    #[test]
    fn from_alias_places_tokens_in_override_block() {
        let mut alias = TokenMap::new();
        alias.insert("colorText".into(), TokenValue::text("#333333"));
        let config = ThemeConfig::from_alias(alias);
        assert!(config.token.is_empty());
        assert_eq!(config.alias_token("colorText"), Some(&TokenValue::text("#333333")));
    }

    #[test]
    fn load_theme_config_defaults_when_missing() {
        with_temp_root(|root| {
            let config = load_theme_config(&root.join("theme.json")).unwrap();
            assert_eq!(config, ThemeConfig::default());
        });
    }

    #[test]
    fn load_theme_config_reads_seed_and_alias_tokens() {
        with_temp_root(|root| {
            let path = root.join("theme.json");
            fs::write(
                &path,
                r##"{
                    "token": { "colorPrimary": "#00b96b" },
                    "override": { "alias": { "fontSize": 15 } }
                }"##,
            )
            .unwrap();

            let config = load_theme_config(&path).unwrap();
            assert_eq!(
                config.seed_token("colorPrimary"),
                Some(&TokenValue::text("#00b96b"))
            );
            assert_eq!(config.alias_token("fontSize"), Some(&TokenValue::Number(15.0)));
        });
    }

    #[test]
    fn load_theme_config_rejects_invalid_payload() {
        with_temp_root(|root| {
            let path = root.join("theme.json");
            fs::write(&path, "{ invalid ").unwrap();
            let err = load_theme_config(&path).unwrap_err();
            assert!(matches!(err, ThemeError::ParseConfig(_)));
        });
    }

    #[test]
    fn theme_path_prefers_xdg_config_home() {
        let path = theme_config_path_with(Some(Path::new("/tmp/config-root")), None).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/config-root/swatchbook/theme.json"));
    }

    #[test]
    fn theme_path_errors_without_home() {
        let err = theme_config_path_with(None, None).unwrap_err();
        assert!(matches!(err, ThemeError::MissingHomeDirectory));
    }

    #[test]
    fn change_handler_receives_new_config() {
        let received = Rc::new(std::cell::RefCell::new(None));
        let sink = received.clone();
        let theme = MutableTheme::new("Default", "default", ThemeConfig::default())
            .with_change_handler(move |config| {
                sink.borrow_mut().replace(config);
            });

        theme.emit_change(theme.config.with_seed_token("colorPrimary", "#123456".into()));
        let config = received.borrow_mut().take().expect("handler should fire");
        assert_eq!(config.seed_token("colorPrimary"), Some(&TokenValue::text("#123456")));
    }
}
