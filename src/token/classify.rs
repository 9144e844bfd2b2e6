use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{TokenMap, TokenName, TokenValue};

/// Sort category every token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenType {
    Seed,
    ColorCommon,
    ColorText,
    ColorBg,
    ColorSplit,
    Font,
    Radius,
    Size,
    Space,
    Screen,
    Shadow,
    Line,
    Motion,
    Control,
    Others,
}

/// Display order of the panel's groups.
pub const TOKEN_SORTS: [TokenType; 15] = [
    TokenType::Seed,
    TokenType::ColorCommon,
    TokenType::ColorText,
    TokenType::ColorBg,
    TokenType::ColorSplit,
    TokenType::Font,
    TokenType::Radius,
    TokenType::Size,
    TokenType::Space,
    TokenType::Screen,
    TokenType::Shadow,
    TokenType::Line,
    TokenType::Motion,
    TokenType::Control,
    TokenType::Others,
];

const SEED_TOKENS: &[&str] = &[
    "colorPrimary",
    "colorSuccess",
    "colorWarning",
    "colorError",
    "colorInfo",
    "colorTextBase",
    "colorBgBase",
    "fontFamily",
    "fontSizeBase",
    "lineWidth",
    "lineType",
    "radiusBase",
    "sizeUnit",
    "sizeStep",
    "sizePopupArrow",
    "controlHeight",
    "zIndexBase",
    "zIndexPopupBase",
    "opacityImage",
    "motionUnit",
    "motionBase",
    "wireframe",
];

// First matching prefix wins, so narrower prefixes come before broader ones.
const PREFIX_RULES: &[(&str, TokenType)] = &[
    ("colorText", TokenType::ColorText),
    ("colorLink", TokenType::ColorText),
    ("colorIcon", TokenType::ColorText),
    ("colorBg", TokenType::ColorBg),
    ("colorBorder", TokenType::ColorSplit),
    ("colorSplit", TokenType::ColorSplit),
    ("color", TokenType::ColorCommon),
    ("font", TokenType::Font),
    ("lineHeight", TokenType::Font),
    ("radius", TokenType::Radius),
    ("borderRadius", TokenType::Radius),
    ("size", TokenType::Size),
    ("padding", TokenType::Space),
    ("margin", TokenType::Space),
    ("screen", TokenType::Screen),
    ("boxShadow", TokenType::Shadow),
    ("line", TokenType::Line),
    ("motion", TokenType::Motion),
    ("control", TokenType::Control),
];

impl TokenType {
    pub fn key(self) -> &'static str {
        match self {
            Self::Seed => "seed",
            Self::ColorCommon => "colorCommon",
            Self::ColorText => "colorText",
            Self::ColorBg => "colorBg",
            Self::ColorSplit => "colorSplit",
            Self::Font => "font",
            Self::Radius => "radius",
            Self::Size => "size",
            Self::Space => "space",
            Self::Screen => "screen",
            Self::Shadow => "shadow",
            Self::Line => "line",
            Self::Motion => "motion",
            Self::Control => "control",
            Self::Others => "others",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Seed => "Seed Token",
            Self::ColorCommon => "Brand & Status Colors",
            Self::ColorText => "Text Colors",
            Self::ColorBg => "Background Colors",
            Self::ColorSplit => "Border & Split Colors",
            Self::Font => "Typography",
            Self::Radius => "Radius",
            Self::Size => "Size",
            Self::Space => "Spacing",
            Self::Screen => "Breakpoints",
            Self::Shadow => "Shadow",
            Self::Line => "Line",
            Self::Motion => "Motion",
            Self::Control => "Control",
            Self::Others => "Others",
        }
    }

    pub fn icon_name(self) -> &'static str {
        match self {
            Self::Seed => "starred-symbolic",
            Self::ColorCommon | Self::ColorText | Self::ColorBg | Self::ColorSplit => {
                "color-select-symbolic"
            }
            Self::Font => "format-text-bold-symbolic",
            Self::Radius | Self::Shadow | Self::Line => "view-grid-symbolic",
            Self::Size | Self::Space | Self::Screen => "zoom-fit-best-symbolic",
            Self::Motion => "media-playback-start-symbolic",
            Self::Control => "input-keyboard-symbolic",
            Self::Others => "view-more-symbolic",
        }
    }
}

pub fn type_of_token(name: &str) -> TokenType {
    if SEED_TOKENS.contains(&name) {
        return TokenType::Seed;
    }
    PREFIX_RULES
        .iter()
        .find(|(prefix, _)| name.starts_with(prefix))
        .map_or(TokenType::Others, |(_, token_type)| *token_type)
}

#[derive(Debug, Clone, PartialEq)]
pub struct TokenItem {
    pub name: TokenName,
    pub value: TokenValue,
    pub token_type: TokenType,
}

/// Classifier output: one (possibly empty) list per category.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedTokens {
    groups: BTreeMap<TokenType, Vec<TokenItem>>,
}

impl GroupedTokens {
    pub fn group(&self, token_type: TokenType) -> &[TokenItem] {
        self.groups
            .get(&token_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TokenType, &[TokenItem])> + '_ {
        TOKEN_SORTS
            .iter()
            .map(move |token_type| (*token_type, self.group(*token_type)))
    }

    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn classify_token(tokens: &TokenMap) -> GroupedTokens {
    let mut groups: BTreeMap<TokenType, Vec<TokenItem>> = TOKEN_SORTS
        .iter()
        .map(|token_type| (*token_type, Vec::new()))
        .collect();

    for (name, value) in tokens {
        let token_type = type_of_token(name);
        groups.entry(token_type).or_default().push(TokenItem {
            name: name.clone(),
            value: value.clone(),
            token_type,
        });
    }

    GroupedTokens { groups }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::token::default_tokens;

    #[test]
    fn type_of_token_uses_seed_table_before_prefix_rules() {
        assert_eq!(type_of_token("colorPrimary"), TokenType::Seed);
        assert_eq!(type_of_token("colorPrimaryHover"), TokenType::ColorCommon);
        assert_eq!(type_of_token("colorTextBase"), TokenType::Seed);
        assert_eq!(type_of_token("colorTextSecondary"), TokenType::ColorText);
        assert_eq!(type_of_token("lineWidth"), TokenType::Seed);
        assert_eq!(type_of_token("lineWidthBold"), TokenType::Line);
        assert_eq!(type_of_token("lineHeightSM"), TokenType::Font);
    }

    #[test]
    fn type_of_token_maps_every_prefix_family() {
        assert_eq!(type_of_token("colorBgContent"), TokenType::ColorBg);
        assert_eq!(type_of_token("colorBorderSecondary"), TokenType::ColorSplit);
        assert_eq!(type_of_token("colorSplit"), TokenType::ColorSplit);
        assert_eq!(type_of_token("colorLinkHover"), TokenType::ColorText);
        assert_eq!(type_of_token("borderRadius"), TokenType::Radius);
        assert_eq!(type_of_token("radiusLG"), TokenType::Radius);
        assert_eq!(type_of_token("sizeMS"), TokenType::Size);
        assert_eq!(type_of_token("paddingXS"), TokenType::Space);
        assert_eq!(type_of_token("marginLG"), TokenType::Space);
        assert_eq!(type_of_token("screenMD"), TokenType::Screen);
        assert_eq!(type_of_token("boxShadowSecondary"), TokenType::Shadow);
        assert_eq!(type_of_token("motionDurationSlow"), TokenType::Motion);
        assert_eq!(type_of_token("controlHeightLG"), TokenType::Control);
    }

    #[test]
    fn unmatched_names_fall_into_others() {
        assert_eq!(type_of_token("zIndexPopup"), TokenType::Others);
        assert_eq!(type_of_token("opacityLoading"), TokenType::Others);
        assert_eq!(type_of_token(""), TokenType::Others);
    }

    #[test]
    fn classify_partitions_every_key_exactly_once() {
        let tokens = default_tokens();
        let grouped = classify_token(&tokens);

        let mut seen = BTreeSet::new();
        for (token_type, items) in grouped.iter() {
            for item in items {
                assert_eq!(item.token_type, token_type);
                assert_eq!(type_of_token(&item.name), token_type);
                assert!(seen.insert(item.name.clone()), "duplicate {}", item.name);
            }
        }

        let keys: BTreeSet<_> = tokens.keys().cloned().collect();
        assert_eq!(seen, keys);
        assert_eq!(grouped.len(), tokens.len());
    }

    #[test]
    fn classify_is_deterministic_for_unchanged_input() {
        let tokens = default_tokens();
        assert_eq!(classify_token(&tokens), classify_token(&tokens));
    }

    #[test]
    fn classify_keeps_empty_groups_for_every_category() {
        let grouped = classify_token(&TokenMap::new());
        assert!(grouped.is_empty());
        assert_eq!(grouped.iter().count(), TOKEN_SORTS.len());
        assert!(grouped.group(TokenType::Motion).is_empty());
    }

    #[test]
    fn classify_places_token_in_its_group() {
        let mut tokens = TokenMap::new();
        tokens.insert("radiusLG".into(), TokenValue::Number(8.0));
        let grouped = classify_token(&tokens);

        let radius = grouped.group(TokenType::Radius);
        assert_eq!(radius.len(), 1);
        assert_eq!(radius[0].name, "radiusLG");
        assert_eq!(radius[0].token_type, TokenType::Radius);
    }

    #[test]
    fn token_type_serializes_as_camel_case_key() {
        let json = serde_json::to_string(&TokenType::ColorBg).expect("serialize");
        assert_eq!(json, format!("\"{}\"", TokenType::ColorBg.key()));
        let parsed: TokenType = serde_json::from_str("\"colorText\"").expect("deserialize");
        assert_eq!(parsed, TokenType::ColorText);
    }
}
