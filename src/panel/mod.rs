//! Headless model of the token panel.
//!
//! [`TokenPanel`] owns the panel's ephemeral UI state (search text, open
//! groups, active token, category filter, show-all switch, scroll shadow) and
//! derives everything a view needs to render from it. Views forward user
//! events to it and re-render from [`TokenPanel::visible_groups`] and
//! [`TokenPanel::group_rows`].

mod context;
mod edit;
mod filter;
mod scroll;

use std::cell::RefCell;
use std::rc::Rc;

use crate::theme::{MutableTheme, ThemeConfig};
use crate::token::{
    classify_token, type_of_token, GroupedTokens, TokenMap, TokenName, TokenType, TokenValue,
    TOKEN_SORTS,
};

pub use context::PreviewContext;
pub use edit::{
    edited_config, handle_alias_token_change, handle_seed_token_change, handle_token_change,
};
pub use filter::FilterTypes;
pub use scroll::{run_scroll_request, token_item_id, ScrollHost};

pub type TokenSelectHandler = Rc<dyn Fn(&str)>;
pub type FilterTypesHandler = Rc<dyn Fn(&[TokenType])>;
/// Marks tokens that the show-all switch hides when off.
pub type UselessTokenPredicate = Rc<dyn Fn(&str) -> bool>;

#[derive(Clone, Default)]
pub struct PanelProps {
    pub themes: Vec<MutableTheme>,
    pub default_theme: Option<ThemeConfig>,
    pub selected_tokens: Vec<TokenName>,
    pub on_token_select: Option<TokenSelectHandler>,
    /// `Some` puts the category filter under the caller's control.
    pub filter_types: Option<Vec<TokenType>>,
    /// Starting selection when the panel owns the filter; duplicates collapse.
    pub default_filter_types: Vec<TokenType>,
    pub on_filter_types_change: Option<FilterTypesHandler>,
    pub enable_token_select: bool,
    pub is_useless: Option<UselessTokenPredicate>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelState {
    pub search: String,
    pub show_all: bool,
    pub shadow_top: bool,
    pub active_cards: Vec<TokenType>,
    pub active_token: Option<TokenName>,
}

/// One rendered token line inside a group.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenRow {
    pub name: TokenName,
    pub value: TokenValue,
    pub item_id: String,
    pub matches_keyword: bool,
    pub active: bool,
    pub selected: bool,
    pub default_value: Option<TokenValue>,
}

pub struct TokenPanel {
    props: PanelProps,
    tokens: TokenMap,
    grouped: GroupedTokens,
    merged_default_theme: ThemeConfig,
    filter: FilterTypes,
    state: PanelState,
    pending_scroll: Option<TokenName>,
}

impl TokenPanel {
    pub fn new(props: PanelProps, tokens: TokenMap) -> Self {
        let filter = match props.filter_types.clone() {
            Some(types) => FilterTypes::controlled(types),
            None => FilterTypes::uncontrolled(dedup_types(&props.default_filter_types)),
        };
        let grouped = classify_token(&tokens);
        let merged_default_theme = merge_default_theme(&props, &tokens);
        Self {
            props,
            tokens,
            grouped,
            merged_default_theme,
            filter,
            state: PanelState::default(),
            pending_scroll: None,
        }
    }

    pub fn props(&self) -> &PanelProps {
        &self.props
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn tokens(&self) -> &TokenMap {
        &self.tokens
    }

    pub fn grouped(&self) -> &GroupedTokens {
        &self.grouped
    }

    pub fn set_tokens(&mut self, tokens: TokenMap) {
        if tokens == self.tokens {
            return;
        }
        self.grouped = classify_token(&tokens);
        self.tokens = tokens;
        self.merged_default_theme = merge_default_theme(&self.props, &self.tokens);
    }

    pub fn set_themes(&mut self, themes: Vec<MutableTheme>) {
        self.props.themes = themes;
    }

    pub fn set_selected_tokens(&mut self, selected_tokens: Vec<TokenName>) {
        self.props.selected_tokens = selected_tokens;
    }

    /// Push a caller-controlled filter selection, or `None` to let the panel own it.
    pub fn set_filter_types(&mut self, filter_types: Option<Vec<TokenType>>) {
        self.filter.set_controlled(filter_types.clone());
        self.props.filter_types = filter_types;
    }

    pub fn context(&self) -> PreviewContext<'_> {
        PreviewContext::new(
            &self.props.themes,
            &self.props.selected_tokens,
            self.props.enable_token_select,
            self.merged_default_theme.clone(),
            self.props.on_token_select.as_ref(),
        )
    }

    pub fn search(&self) -> &str {
        &self.state.search
    }

    pub fn set_search(&mut self, search: &str) {
        self.state.search = search.to_string();
    }

    pub fn show_all(&self) -> bool {
        self.state.show_all
    }

    pub fn set_show_all(&mut self, show_all: bool) {
        self.state.show_all = show_all;
    }

    pub fn filter_types(&self) -> &[TokenType] {
        self.filter.value()
    }

    pub fn toggle_filter_type(&mut self, token_type: TokenType) {
        let next = self.filter.toggled(token_type);
        tracing::debug!(?token_type, ?next, "filter types toggled");
        self.filter.set(next.clone());
        if let Some(handler) = self.props.on_filter_types_change.as_ref() {
            handler(&next);
        }
    }

    pub fn is_group_visible(&self, token_type: TokenType) -> bool {
        let passes_filter = self.filter.is_empty() || self.filter.contains(token_type);
        if !passes_filter {
            return false;
        }
        if self.state.search.is_empty() {
            return true;
        }
        let keyword = self.state.search.to_lowercase();
        self.grouped
            .group(token_type)
            .iter()
            .any(|item| item.name.to_lowercase().contains(&keyword))
    }

    pub fn visible_groups(&self) -> Vec<TokenType> {
        TOKEN_SORTS
            .iter()
            .copied()
            .filter(|token_type| self.is_group_visible(*token_type))
            .collect()
    }

    pub fn is_group_open(&self, token_type: TokenType) -> bool {
        self.state.active_cards.contains(&token_type)
    }

    pub fn set_group_open(&mut self, token_type: TokenType, open: bool) {
        if open {
            if !self.is_group_open(token_type) {
                self.state.active_cards.push(token_type);
            }
        } else {
            self.state.active_cards.retain(|item| *item != token_type);
        }
    }

    pub fn active_token(&self) -> Option<&str> {
        self.state.active_token.as_deref()
    }

    pub fn set_active_token(&mut self, token_name: Option<&str>) {
        self.state.active_token = token_name.map(str::to_string);
    }

    /// Click on a row: mark it active and notify the owner when selection is enabled.
    pub fn select_token(&mut self, token_name: &str) -> bool {
        self.set_active_token(Some(token_name));
        self.context().select(token_name)
    }

    /// Rows of one group, with useless tokens hidden unless show-all is on.
    ///
    /// Seed tokens and the active token are never hidden.
    pub fn group_rows(&self, token_type: TokenType) -> Vec<TokenRow> {
        let keyword = self.state.search.to_lowercase();
        let context = self.context();
        let hide_useless = !self.state.show_all && token_type != TokenType::Seed;

        self.grouped
            .group(token_type)
            .iter()
            .filter(|item| {
                !hide_useless
                    || self.active_token() == Some(item.name.as_str())
                    || !self.is_useless(&item.name)
            })
            .map(|item| TokenRow {
                name: item.name.clone(),
                value: item.value.clone(),
                item_id: token_item_id(&item.name),
                matches_keyword: !keyword.is_empty()
                    && item.name.to_lowercase().contains(&keyword),
                active: self.active_token() == Some(item.name.as_str()),
                selected: context.is_selected(&item.name),
                default_value: context.default_value(&item.name).cloned(),
            })
            .collect()
    }

    /// Rows of a group that show-all would reveal.
    pub fn hidden_row_count(&self, token_type: TokenType) -> usize {
        let total = self.grouped.group(token_type).len();
        total.saturating_sub(self.group_rows(token_type).len())
    }

    fn is_useless(&self, token_name: &str) -> bool {
        self.props
            .is_useless
            .as_ref()
            .is_some_and(|predicate| predicate(token_name))
    }

    /// Open the token's group, mark it active and queue a scroll for after layout.
    pub fn scroll_to_token(&mut self, token_name: &str) {
        let token_type = type_of_token(token_name);
        self.set_group_open(token_type, true);
        self.set_active_token(Some(token_name));
        self.pending_scroll = Some(token_name.to_string());
        tracing::debug!(token = token_name, ?token_type, "scroll to token requested");
    }

    pub fn take_pending_scroll(&mut self) -> Option<TokenName> {
        self.pending_scroll.take()
    }

    /// Scroll listener body. Returns whether the shadow flag changed.
    pub fn handle_scroll(&mut self, scroll_top: f64) -> bool {
        let shadow_top = scroll_top > 0.0;
        let changed = shadow_top != self.state.shadow_top;
        self.state.shadow_top = shadow_top;
        changed
    }

    pub fn shadow_top(&self) -> bool {
        self.state.shadow_top
    }

    /// Apply an edit to the panel's copy of the theme and hand the result to its owner.
    ///
    /// The local copy moves forward immediately, so edits made before the owner
    /// pushes the theme back build on each other.
    pub fn edit_token(&mut self, theme_key: &str, token_name: &str, value: TokenValue) {
        let Some(theme) = self
            .props
            .themes
            .iter_mut()
            .find(|theme| theme.key == theme_key)
        else {
            tracing::warn!(theme = theme_key, token = token_name, "edit for unknown theme ignored");
            return;
        };
        tracing::debug!(theme = theme_key, token = token_name, %value, "token edited");
        let config = edited_config(&theme.config, token_name, value);
        theme.config = config.clone();
        theme.emit_change(config);
    }
}

/// Run the queued scroll of `panel` against `host`.
///
/// The request is taken in a short borrow and run after it ends: scrolling
/// fires the view's scroll listener, which borrows the panel again.
pub fn run_pending_scroll(panel: &RefCell<TokenPanel>, host: &dyn ScrollHost) -> bool {
    let pending = panel.borrow_mut().take_pending_scroll();
    match pending {
        Some(token_name) => run_scroll_request(host, &token_name),
        None => false,
    }
}

fn dedup_types(types: &[TokenType]) -> Vec<TokenType> {
    let mut unique = Vec::with_capacity(types.len());
    for token_type in types {
        if !unique.contains(token_type) {
            unique.push(*token_type);
        }
    }
    unique
}

fn merge_default_theme(props: &PanelProps, tokens: &TokenMap) -> ThemeConfig {
    props
        .default_theme
        .clone()
        .unwrap_or_else(|| ThemeConfig::from_alias(tokens.clone()))
}
