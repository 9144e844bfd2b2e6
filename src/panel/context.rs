use crate::theme::{MutableTheme, ThemeConfig};
use crate::token::{TokenName, TokenValue};

use super::TokenSelectHandler;

/// What a token row needs from its panel.
pub struct PreviewContext<'a> {
    pub themes: &'a [MutableTheme],
    pub selected_tokens: &'a [TokenName],
    pub enable_token_select: bool,
    pub default_theme: ThemeConfig,
    on_token_select: Option<&'a TokenSelectHandler>,
}

impl<'a> PreviewContext<'a> {
    pub(super) fn new(
        themes: &'a [MutableTheme],
        selected_tokens: &'a [TokenName],
        enable_token_select: bool,
        default_theme: ThemeConfig,
        on_token_select: Option<&'a TokenSelectHandler>,
    ) -> Self {
        Self {
            themes,
            selected_tokens,
            enable_token_select,
            default_theme,
            on_token_select,
        }
    }

    pub fn is_selected(&self, token_name: &str) -> bool {
        self.selected_tokens.iter().any(|name| name == token_name)
    }

    /// Value of `token_name` in the default theme, alias block first.
    pub fn default_value(&self, token_name: &str) -> Option<&TokenValue> {
        self.default_theme
            .alias_token(token_name)
            .or_else(|| self.default_theme.seed_token(token_name))
    }

    /// Fire the selection callback. Returns whether anything was notified.
    pub fn select(&self, token_name: &str) -> bool {
        if !self.enable_token_select {
            return false;
        }
        match self.on_token_select {
            Some(handler) => {
                handler(token_name);
                true
            }
            None => false,
        }
    }
}
