use super::{TokenMap, TokenValue};

const TEXT_TOKENS: &[(&str, &str)] = &[
    // seed
    ("colorPrimary", "#1677ff"),
    ("colorSuccess", "#52c41a"),
    ("colorWarning", "#faad14"),
    ("colorError", "#ff4d4f"),
    ("colorInfo", "#1677ff"),
    ("colorTextBase", "#000000"),
    ("colorBgBase", "#ffffff"),
    (
        "fontFamily",
        "-apple-system, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif",
    ),
    ("lineType", "solid"),
    // brand & status
    ("colorPrimaryHover", "#4096ff"),
    ("colorPrimaryActive", "#0958d9"),
    ("colorPrimaryBorder", "#91caff"),
    ("colorPrimaryBorderHover", "#69b1ff"),
    ("colorPrimaryBg", "#e6f4ff"),
    ("colorSuccessBorder", "#b7eb8f"),
    ("colorSuccessBg", "#f6ffed"),
    ("colorWarningBorder", "#ffe58f"),
    ("colorWarningBg", "#fffbe6"),
    ("colorErrorHover", "#ff7875"),
    ("colorErrorBorder", "#ffccc7"),
    ("colorErrorBg", "#fff2f0"),
    ("colorInfoBorder", "#91caff"),
    ("colorInfoBg", "#e6f4ff"),
    ("colorAction", "rgba(0, 0, 0, 0.45)"),
    ("colorActionHover", "rgba(0, 0, 0, 0.88)"),
    ("colorHighlight", "#ff4d4f"),
    // text
    ("colorText", "rgba(0, 0, 0, 0.88)"),
    ("colorTextSecondary", "rgba(0, 0, 0, 0.65)"),
    ("colorTextTertiary", "rgba(0, 0, 0, 0.45)"),
    ("colorTextPlaceholder", "rgba(0, 0, 0, 0.25)"),
    ("colorTextDisabled", "rgba(0, 0, 0, 0.25)"),
    ("colorTextHeading", "rgba(0, 0, 0, 0.88)"),
    ("colorTextLightSolid", "#ffffff"),
    ("colorLink", "#1677ff"),
    ("colorLinkHover", "#69b1ff"),
    ("colorIcon", "rgba(0, 0, 0, 0.45)"),
    // backgrounds
    ("colorBgContainer", "#ffffff"),
    ("colorBgElevated", "#ffffff"),
    ("colorBgLayout", "#f5f5f5"),
    ("colorBgContent", "rgba(0, 0, 0, 0.04)"),
    ("colorBgContentHover", "rgba(0, 0, 0, 0.06)"),
    ("colorBgContainerDisabled", "rgba(0, 0, 0, 0.04)"),
    ("colorBgMask", "rgba(0, 0, 0, 0.45)"),
    // borders
    ("colorBorder", "#d9d9d9"),
    ("colorBorderSecondary", "#f0f0f0"),
    ("colorSplit", "rgba(5, 5, 5, 0.06)"),
    // shadow
    (
        "boxShadow",
        "0 6px 16px 0 rgba(0, 0, 0, 0.08), 0 3px 6px -4px rgba(0, 0, 0, 0.12)",
    ),
    (
        "boxShadowSecondary",
        "0 9px 28px 8px rgba(0, 0, 0, 0.05), 0 3px 6px -4px rgba(0, 0, 0, 0.12)",
    ),
    // motion
    ("motionDurationFast", "0.1s"),
    ("motionDurationMid", "0.2s"),
    ("motionDurationSlow", "0.3s"),
    ("motionEaseInOut", "cubic-bezier(0.645, 0.045, 0.355, 1)"),
    ("motionEaseOut", "cubic-bezier(0.215, 0.61, 0.355, 1)"),
    // control
    ("controlOutline", "rgba(5, 145, 255, 0.1)"),
    ("controlItemBgHover", "rgba(0, 0, 0, 0.04)"),
    ("controlItemBgActive", "#e6f4ff"),
];

const NUMBER_TOKENS: &[(&str, f64)] = &[
    // seed
    ("fontSizeBase", 14.0),
    ("lineWidth", 1.0),
    ("radiusBase", 6.0),
    ("sizeUnit", 4.0),
    ("sizeStep", 4.0),
    ("sizePopupArrow", 16.0),
    ("controlHeight", 32.0),
    ("zIndexBase", 0.0),
    ("zIndexPopupBase", 1000.0),
    ("opacityImage", 1.0),
    ("motionUnit", 0.1),
    ("motionBase", 0.0),
    // typography
    ("fontSize", 14.0),
    ("fontSizeSM", 12.0),
    ("fontSizeLG", 16.0),
    ("fontSizeHeading1", 38.0),
    ("fontSizeHeading2", 30.0),
    ("fontSizeHeading3", 24.0),
    ("lineHeight", 1.5714),
    ("lineHeightSM", 1.6667),
    ("lineHeightLG", 1.5),
    // radius
    ("borderRadius", 6.0),
    ("radiusXS", 2.0),
    ("radiusSM", 4.0),
    ("radiusLG", 8.0),
    // size
    ("sizeXS", 8.0),
    ("sizeSM", 12.0),
    ("sizeMS", 16.0),
    ("sizeLG", 24.0),
    ("sizeXL", 32.0),
    // space
    ("paddingXS", 8.0),
    ("paddingSM", 12.0),
    ("padding", 16.0),
    ("paddingLG", 24.0),
    ("marginXS", 8.0),
    ("marginSM", 12.0),
    ("margin", 16.0),
    ("marginLG", 24.0),
    // breakpoints
    ("screenXS", 480.0),
    ("screenSM", 576.0),
    ("screenMD", 768.0),
    ("screenLG", 992.0),
    ("screenXL", 1200.0),
    // line
    ("lineWidthBold", 2.0),
    ("lineWidthFocus", 4.0),
    // control
    ("controlHeightSM", 24.0),
    ("controlHeightLG", 40.0),
    ("controlOutlineWidth", 2.0),
    ("controlPaddingHorizontal", 12.0),
    // others
    ("opacityLoading", 0.65),
    ("zIndexPopup", 1050.0),
];

/// Built-in token table the previewer resolves themes against.
pub fn default_tokens() -> TokenMap {
    let mut tokens = TokenMap::new();
    for (name, value) in TEXT_TOKENS {
        tokens.insert((*name).to_string(), TokenValue::text(*value));
    }
    for (name, value) in NUMBER_TOKENS {
        tokens.insert((*name).to_string(), TokenValue::Number(*value));
    }
    tokens.insert("wireframe".to_string(), TokenValue::Bool(false));
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{classify_token, TOKEN_SORTS};

    #[test]
    fn default_tokens_cover_every_category() {
        let grouped = classify_token(&default_tokens());
        for token_type in TOKEN_SORTS {
            assert!(
                !grouped.group(token_type).is_empty(),
                "no default token for {token_type:?}"
            );
        }
    }

    #[test]
    fn default_tokens_have_no_duplicate_names_across_tables() {
        let expected = TEXT_TOKENS.len() + NUMBER_TOKENS.len() + 1;
        assert_eq!(default_tokens().len(), expected);
    }
}
