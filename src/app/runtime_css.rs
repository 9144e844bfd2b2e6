use std::fmt::Write as _;

use gtk4::CssProvider;

use crate::panel::token_item_id;
use crate::token::{TokenMap, TokenValue};
use crate::ui::StyleTokens;

fn token_or<'a>(tokens: &'a TokenMap, name: &str, fallback: &'a str) -> &'a str {
    match tokens.get(name) {
        Some(TokenValue::Text(value)) => value.as_str(),
        _ => fallback,
    }
}

fn px_or(tokens: &TokenMap, name: &str, fallback: f64) -> f64 {
    match tokens.get(name) {
        Some(TokenValue::Number(value)) => *value,
        Some(TokenValue::Text(value)) => value.trim_end_matches("px").parse().unwrap_or(fallback),
        _ => fallback,
    }
}

/// Swatch rules for every color-valued token, keyed by the token's row id.
fn swatch_rules(tokens: &TokenMap) -> String {
    let mut css = String::new();
    for (name, value) in tokens {
        let TokenValue::Text(color) = value else {
            continue;
        };
        if !name.starts_with("color") {
            continue;
        }
        let _ = writeln!(
            css,
            "#{id} .token-swatch {{ background: {color}; }}",
            id = token_item_id(name),
        );
    }
    css
}

/// Stylesheet for the previewer chrome and the demos, driven by resolved tokens.
pub(crate) fn token_stylesheet(tokens: &TokenMap, style: StyleTokens) -> String {
    let radius = px_or(tokens, "borderRadius", f64::from(style.control_radius));
    let radius_lg = px_or(tokens, "borderRadiusLG", f64::from(style.card_radius));
    let line_width = px_or(tokens, "lineWidth", f64::from(style.border_width));
    let control_height = px_or(tokens, "controlHeight", 32.0);

    let mut css = format!(
        "
.preview-panel {{
  background: {bg_container};
  border-left: {line_width}px solid {split};
  min-width: {panel_min_width}px;
}}
.preview-panel .section-title {{
  font-weight: 600;
  color: {text};
}}
.preview-panel-search {{
  border: {line_width}px solid {border};
  border-radius: {radius}px;
}}
.preview-panel-search searchentry {{
  border: none;
  box-shadow: none;
  background: transparent;
}}
button.preview-filter-button {{
  min-width: {search_addon_width}px;
  border-right: {line_width}px solid {split};
  border-radius: {radius}px 0 0 {radius}px;
  color: {text_tertiary};
}}
button.{filter_active} {{
  color: {primary};
}}
.preview-panel-token-shadow {{
  min-height: {shadow_height}px;
  opacity: 0;
  background: linear-gradient(to bottom, rgba(0, 0, 0, 0.08), transparent);
  transition: opacity {motion_ms}ms ease;
}}
.preview-panel-token-shadow.{shadow_visible} {{
  opacity: 1;
}}
expander.token-card {{
  border: {line_width}px solid {split};
  border-radius: {radius_lg}px;
  padding: {spacing_8}px {spacing_12}px;
}}
.token-card-count,
.token-card-hidden {{
  color: {text_tertiary};
}}
.token-item {{
  border-radius: {radius}px;
  padding: {spacing_4}px {spacing_8}px;
}}
.token-item-match .token-name {{
  color: {primary};
  font-weight: 600;
}}
.token-item-active,
.token-item-selected {{
  background: {primary_bg};
}}
.token-swatch {{
  border-radius: 3px;
  border: {line_width}px solid {split};
}}
.token-value-input {{
  min-height: 24px;
  font-family: monospace;
}}
button.token-chip {{
  padding: 0 {spacing_4}px;
  min-height: 20px;
  font-size: 0.85em;
  color: {text_secondary};
}}
button.token-chip:hover {{
  color: {primary};
}}
.demo-component {{
  border-radius: {radius_lg}px;
  border: {line_width}px solid {split};
  background: {bg_container};
}}
.demo-card {{
  border-radius: {radius}px;
  padding: {spacing_8}px;
  border: {line_width}px dashed transparent;
  transition: border-color {motion_ms}ms ease;
}}
.demo-card.{focused} {{
  border-color: {primary};
}}
.demo-card-caption {{
  color: {text_tertiary};
}}
",
        bg_container = token_or(tokens, "colorBgContainer", "#ffffff"),
        split = token_or(tokens, "colorSplit", "rgba(5, 5, 5, 0.06)"),
        border = token_or(tokens, "colorBorder", "#d9d9d9"),
        text = token_or(tokens, "colorText", "rgba(0, 0, 0, 0.88)"),
        text_secondary = token_or(tokens, "colorTextSecondary", "rgba(0, 0, 0, 0.65)"),
        text_tertiary = token_or(tokens, "colorTextTertiary", "rgba(0, 0, 0, 0.45)"),
        primary = token_or(tokens, "colorPrimary", "#1677ff"),
        primary_bg = token_or(tokens, "colorPrimaryBg", "#e6f4ff"),
        panel_min_width = style.panel_min_width,
        search_addon_width = style.search_addon_width,
        shadow_height = style.panel_shadow_height,
        filter_active = "previewer-token-type-dropdown-icon-active",
        shadow_visible = "preview-panel-token-wrapper-ping-top",
        focused = "demo-card-focused",
        motion_ms = style.motion_standard_ms,
        spacing_4 = style.spacing_4,
        spacing_8 = style.spacing_8,
        spacing_12 = style.spacing_12,
    );

    for kind in ["error", "info", "success", "warning"] {
        let capitalized = format!("{}{}", kind[..1].to_uppercase(), &kind[1..]);
        let _ = write!(
            css,
            "
.demo-alert-{kind} {{
  background: {bg};
  border: {line_width}px solid {border};
  border-radius: {radius_lg}px;
  padding: {spacing_8}px {spacing_12}px;
}}
.demo-alert-{kind} .demo-alert-icon {{
  color: {color};
}}
",
            bg = token_or(tokens, &format!("color{capitalized}Bg"), "transparent"),
            border = token_or(tokens, &format!("color{capitalized}Border"), "transparent"),
            color = token_or(tokens, &format!("color{capitalized}"), "currentColor"),
            spacing_8 = style.spacing_8,
            spacing_12 = style.spacing_12,
        );
    }

    let _ = write!(
        css,
        "
entry.demo-picker-input {{
  min-height: {control_height}px;
  border-radius: {radius}px;
}}
entry.demo-status-error {{
  border-color: {error_border};
  outline-color: {error};
}}
entry.demo-status-error:hover {{
  border-color: {error_hover};
}}
entry.demo-status-warning {{
  border-color: {warning_border};
  outline-color: {warning};
}}
entry.demo-picker-input image {{
  color: {action};
}}
entry.demo-picker-input image:hover {{
  color: {action_hover};
}}
popover.demo-dropdown-menu > contents {{
  background: {bg_elevated};
  border-radius: {radius_lg}px;
}}
.demo-dropdown-item-danger {{
  color: {error};
}}
.demo-dropdown-item-danger:hover {{
  color: {error_hover};
}}
.demo-bg-content {{
  background: {bg_content};
  border-radius: {radius}px;
  padding: {spacing_8}px;
}}
.demo-bg-content:hover {{
  background: {bg_content_hover};
}}
scale.demo-slider trough {{
  background: {bg_container};
}}
scale.demo-slider highlight {{
  background: {primary_border};
}}
scale.demo-slider:hover highlight {{
  background: {primary_border_hover};
}}
scale.demo-slider slider {{
  border: 2px solid {primary};
}}
scale.demo-slider slider:hover {{
  border-color: {primary_hover};
}}
",
        error = token_or(tokens, "colorError", "#ff4d4f"),
        error_hover = token_or(tokens, "colorErrorHover", "#ff7875"),
        error_border = token_or(tokens, "colorErrorBorder", "#ffccc7"),
        warning = token_or(tokens, "colorWarning", "#faad14"),
        warning_border = token_or(tokens, "colorWarningBorder", "#ffe58f"),
        action = token_or(tokens, "colorAction", "rgba(0, 0, 0, 0.45)"),
        action_hover = token_or(tokens, "colorActionHover", "rgba(0, 0, 0, 0.88)"),
        bg_elevated = token_or(tokens, "colorBgElevated", "#ffffff"),
        bg_content = token_or(tokens, "colorBgContent", "rgba(0, 0, 0, 0.04)"),
        bg_content_hover = token_or(tokens, "colorBgContentHover", "rgba(0, 0, 0, 0.06)"),
        bg_container = token_or(tokens, "colorBgContainer", "#ffffff"),
        primary = token_or(tokens, "colorPrimary", "#1677ff"),
        primary_hover = token_or(tokens, "colorPrimaryHover", "#4096ff"),
        primary_border = token_or(tokens, "colorPrimaryBorder", "#91caff"),
        primary_border_hover = token_or(tokens, "colorPrimaryBorderHover", "#69b1ff"),
        spacing_8 = style.spacing_8,
    );

    css.push_str(&swatch_rules(tokens));
    css
}

/// Provider registered once on the default display; reloaded on every theme change.
pub(crate) fn install_runtime_css() -> CssProvider {
    let provider = CssProvider::new();
    if let Some(display) = gtk4::gdk::Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    } else {
        tracing::warn!("no default display; token stylesheet not installed");
    }
    provider
}

pub(crate) fn reload_runtime_css(provider: &CssProvider, tokens: &TokenMap, style: StyleTokens) {
    provider.load_from_data(&token_stylesheet(tokens, style));
    tracing::debug!(tokens = tokens.len(), "token stylesheet reloaded");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::default_tokens;
    use crate::ui::LAYOUT_TOKENS;

    #[test]
    fn stylesheet_uses_resolved_token_values() {
        let mut tokens = default_tokens();
        tokens.insert("colorErrorBg".into(), TokenValue::text("#abcdef"));
        let css = token_stylesheet(&tokens, LAYOUT_TOKENS);

        assert!(css.contains(".demo-alert-error {\n  background: #abcdef;"));
        assert!(css.contains(".demo-alert-warning"));
        assert!(css.contains("min-width: 300px;"));
    }

    #[test]
    fn color_tokens_get_swatch_rules_keyed_by_row_id() {
        let css = token_stylesheet(&default_tokens(), LAYOUT_TOKENS);
        let primary_rule = format!(
            "#{} .token-swatch {{ background: #1677ff; }}",
            token_item_id("colorPrimary")
        );
        assert!(css.contains(&primary_rule));
        assert!(!css.contains("#previewer-token-item-borderRadius .token-swatch"));
    }

    #[test]
    fn numeric_tokens_fall_back_when_missing_or_malformed() {
        let mut tokens = TokenMap::new();
        assert_eq!(px_or(&tokens, "borderRadius", 6.0), 6.0);
        tokens.insert("borderRadius".into(), TokenValue::text("10px"));
        assert_eq!(px_or(&tokens, "borderRadius", 6.0), 10.0);
        tokens.insert("borderRadius".into(), TokenValue::text("wide"));
        assert_eq!(px_or(&tokens, "borderRadius", 6.0), 6.0);
        tokens.insert("borderRadius".into(), TokenValue::from(4.0));
        assert_eq!(px_or(&tokens, "borderRadius", 6.0), 4.0);
    }

    #[test]
    fn empty_token_map_still_produces_chrome() {
        let css = token_stylesheet(&TokenMap::new(), LAYOUT_TOKENS);
        assert!(css.contains("background: #ffffff;"));
        assert!(!css.contains(".token-swatch { background"));
    }
}
