use crate::theme::{MutableTheme, ThemeConfig};
use crate::token::{type_of_token, TokenType, TokenValue};

pub fn handle_seed_token_change(theme: &MutableTheme, token_name: &str, value: TokenValue) {
    tracing::debug!(theme = %theme.key, token = token_name, %value, "seed token edited");
    theme.emit_change(theme.config.with_seed_token(token_name, value));
}

pub fn handle_alias_token_change(theme: &MutableTheme, token_name: &str, value: TokenValue) {
    tracing::debug!(theme = %theme.key, token = token_name, %value, "alias token edited");
    theme.emit_change(theme.config.with_alias_token(token_name, value));
}

/// `config` with the edit routed to the seed block or the alias block by the
/// token's category.
pub fn edited_config(config: &ThemeConfig, token_name: &str, value: TokenValue) -> ThemeConfig {
    match type_of_token(token_name) {
        TokenType::Seed => config.with_seed_token(token_name, value),
        _ => config.with_alias_token(token_name, value),
    }
}

/// Route an edit to the seed block or the alias block by the token's category.
pub fn handle_token_change(theme: &MutableTheme, token_name: &str, value: TokenValue) {
    match type_of_token(token_name) {
        TokenType::Seed => handle_seed_token_change(theme, token_name, value),
        _ => handle_alias_token_change(theme, token_name, value),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;

    use super::*;

    fn recording_theme(config: ThemeConfig) -> (MutableTheme, Rc<RefCell<Vec<ThemeConfig>>>) {
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = received.clone();
        let theme = MutableTheme::new("Default", "default", config)
            .with_change_handler(move |config| sink.borrow_mut().push(config));
        (theme, received)
    }

    #[test]
    fn seed_category_edits_rewrite_token_block() {
        let (theme, received) = recording_theme(ThemeConfig::default());
        handle_token_change(&theme, "colorPrimary", TokenValue::text("#ff0000"));

        let received = received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(
            received[0].seed_token("colorPrimary"),
            Some(&TokenValue::text("#ff0000"))
        );
        assert!(received[0].alias_tokens().is_none());
        assert!(theme.config.token.is_empty());
    }

    #[test]
    fn alias_category_edits_rewrite_override_alias() {
        let base = ThemeConfig::default()
            .with_alias_token("colorText", TokenValue::text("#111111"))
            .with_seed_token("colorPrimary", TokenValue::text("#1677ff"));
        let (theme, received) = recording_theme(base);

        handle_token_change(&theme, "colorBgContent", TokenValue::text("#f0f0f0"));

        let received = received.borrow();
        let config = &received[0];
        assert_eq!(
            config.alias_token("colorBgContent"),
            Some(&TokenValue::text("#f0f0f0"))
        );
        assert_eq!(config.alias_token("colorText"), Some(&TokenValue::text("#111111")));
        assert!(Arc::ptr_eq(&config.token, &theme.config.token));
        assert!(theme.config.alias_token("colorBgContent").is_none());
    }

    #[test]
    fn edits_without_handler_are_ignored() {
        let theme = MutableTheme::new("Plain", "plain", ThemeConfig::default());
        handle_seed_token_change(&theme, "colorPrimary", TokenValue::text("#000000"));
        handle_alias_token_change(&theme, "colorText", TokenValue::text("#000000"));
        assert!(theme.config.token.is_empty());
    }
}
