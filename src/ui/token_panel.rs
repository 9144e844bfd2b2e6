use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gtk4::glib::{self, SignalHandlerId};
use gtk4::prelude::*;
use gtk4::{
    Adjustment, Align, Box as GtkBox, CheckButton, Entry, Expander, GestureClick, Image, Label,
    Orientation, Overlay, PolicyType, Popover, ScrolledWindow, SearchEntry, Switch,
};

use crate::panel::{run_pending_scroll, ScrollHost, TokenPanel, TokenRow};
use crate::theme::MutableTheme;
use crate::token::{type_of_token, TokenMap, TokenName, TokenType, TokenValue, TOKEN_SORTS};

use super::style::StyleTokens;
use super::widgets::{icon_button, icon_menu_button, section_title};

const SHADOW_VISIBLE_CLASS: &str = "preview-panel-token-wrapper-ping-top";
const FILTER_ACTIVE_CLASS: &str = "previewer-token-type-dropdown-icon-active";
// Frames to wait before scrolling: one for the expanded group's layout.
const SCROLL_SETTLE_FRAMES: u8 = 2;

/// Scroll listener bound to the token list; detaches itself when dropped.
struct ScrollListener {
    adjustment: Adjustment,
    handler: Option<SignalHandlerId>,
}

impl ScrollListener {
    fn attach(adjustment: Adjustment, inner: Weak<PanelInner>) -> Self {
        let handler = adjustment.connect_value_changed(move |adjustment| {
            let Some(inner) = inner.upgrade() else {
                return;
            };
            let changed = inner.model.borrow_mut().handle_scroll(adjustment.value());
            if changed {
                inner.sync_shadow();
            }
        });
        Self {
            adjustment,
            handler: Some(handler),
        }
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Some(handler) = self.handler.take() {
            self.adjustment.disconnect(handler);
            tracing::debug!("token list scroll listener detached");
        }
    }
}

struct PanelInner {
    model: RefCell<TokenPanel>,
    style: StyleTokens,
    list: GtkBox,
    scroller: ScrolledWindow,
    shadow: GtkBox,
    filter_button: gtk4::MenuButton,
    filter_checks: Vec<(TokenType, CheckButton)>,
    syncing_filters: Cell<bool>,
    rows: RefCell<HashMap<String, gtk4::Widget>>,
    scroll_listener: RefCell<Option<ScrollListener>>,
}

impl ScrollHost for PanelInner {
    fn scroll_into_view(&self, item_id: &str) -> bool {
        let Some(row) = self.rows.borrow().get(item_id).cloned() else {
            return false;
        };
        let origin = gtk4::graphene::Point::new(0.0, 0.0);
        let Some(point) = row.compute_point(&self.list, &origin) else {
            return false;
        };

        let adjustment = self.scroller.vadjustment();
        let row_height = f64::from(row.height());
        let centered = f64::from(point.y()) - (adjustment.page_size() - row_height) / 2.0;
        let max = (adjustment.upper() - adjustment.page_size()).max(adjustment.lower());
        adjustment.set_value(centered.clamp(adjustment.lower(), max));
        true
    }
}

impl PanelInner {
    fn render(self: &Rc<Self>) {
        while let Some(child) = self.list.first_child() {
            self.list.remove(&child);
        }
        self.rows.borrow_mut().clear();

        {
            let model = self.model.borrow();
            for token_type in model.visible_groups() {
                let card = self.build_card(&model, token_type);
                self.list.append(&card);
            }
        }

        self.sync_filters();
        self.sync_shadow();
    }

    fn build_card(self: &Rc<Self>, model: &TokenPanel, token_type: TokenType) -> Expander {
        let rows = model.group_rows(token_type);

        let header = GtkBox::new(Orientation::Horizontal, self.style.spacing_8);
        header.append(&Image::from_icon_name(token_type.icon_name()));
        let title = Label::new(Some(token_type.label()));
        title.add_css_class("token-card-title");
        header.append(&title);
        let count = Label::new(Some(&rows.len().to_string()));
        count.add_css_class("token-card-count");
        count.set_hexpand(true);
        count.set_halign(Align::End);
        header.append(&count);

        let expander = Expander::new(None);
        expander.add_css_class("token-card");
        expander.set_label_widget(Some(&header));
        expander.set_expanded(model.is_group_open(token_type));

        let body = GtkBox::new(Orientation::Vertical, self.style.spacing_4);
        let context = model.context();
        for row in &rows {
            let item = self.build_row(row, context.themes);
            self.rows
                .borrow_mut()
                .insert(row.item_id.clone(), item.clone().upcast());
            body.append(&item);
        }
        if let Some(note) = hidden_rows_note(model.hidden_row_count(token_type)) {
            let hint = Label::new(Some(&note));
            hint.add_css_class("token-card-hidden");
            hint.set_xalign(0.0);
            hint.set_wrap(true);
            body.append(&hint);
        }
        expander.set_child(Some(&body));

        let weak = Rc::downgrade(self);
        expander.connect_expanded_notify(move |expander| {
            if let Some(inner) = weak.upgrade() {
                inner
                    .model
                    .borrow_mut()
                    .set_group_open(token_type, expander.is_expanded());
            }
        });
        expander
    }

    fn build_row(self: &Rc<Self>, row: &TokenRow, themes: &[MutableTheme]) -> GtkBox {
        let item = GtkBox::new(Orientation::Horizontal, self.style.spacing_8);
        item.set_widget_name(&row.item_id);
        item.add_css_class("token-item");
        if row.active {
            item.add_css_class("token-item-active");
        }
        if row.matches_keyword {
            item.add_css_class("token-item-match");
        }
        if row.selected {
            item.add_css_class("token-item-selected");
        }

        let swatch = GtkBox::new(Orientation::Horizontal, 0);
        swatch.add_css_class("token-swatch");
        swatch.set_size_request(self.style.swatch_size, self.style.swatch_size);
        swatch.set_valign(Align::Center);
        item.append(&swatch);

        let name = Label::new(Some(&row.name));
        name.add_css_class("token-name");
        name.set_xalign(0.0);
        name.set_hexpand(true);
        name.set_ellipsize(gtk4::pango::EllipsizeMode::End);
        let click = GestureClick::new();
        click.set_button(gtk4::gdk::BUTTON_PRIMARY);
        {
            let weak = Rc::downgrade(self);
            let token_name = row.name.clone();
            click.connect_released(move |_, _, _, _| {
                if let Some(inner) = weak.upgrade() {
                    inner.select(&token_name);
                }
            });
        }
        name.add_controller(click);
        item.append(&name);

        for theme in themes {
            let current = theme_value(theme, &row.name).unwrap_or(&row.value).clone();
            let entry = Entry::new();
            entry.set_text(&current.to_string());
            entry.set_width_chars(12);
            entry.set_tooltip_text(Some(&theme.name));
            entry.add_css_class("token-value-input");

            let weak = Rc::downgrade(self);
            let theme_key = theme.key.clone();
            let token_name = row.name.clone();
            entry.connect_activate(move |entry| {
                if let Some(inner) = weak.upgrade() {
                    let value = current.reparse(entry.text().as_str());
                    inner
                        .model
                        .borrow_mut()
                        .edit_token(&theme_key, &token_name, value);
                }
            });
            item.append(&entry);
        }

        let changed_default = row
            .default_value
            .as_ref()
            .filter(|value| **value != row.value);
        if let Some(default_value) = changed_default {
            let reset = icon_button(
                "edit-undo-symbolic",
                &format!("Reset to {default_value}"),
                self.style.search_addon_width,
                &["token-reset"],
            );
            let weak = Rc::downgrade(self);
            let theme_keys: Vec<String> = themes.iter().map(|theme| theme.key.clone()).collect();
            let token_name = row.name.clone();
            let default_value = default_value.clone();
            reset.connect_clicked(move |_| {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                let mut model = inner.model.borrow_mut();
                for theme_key in &theme_keys {
                    model.edit_token(theme_key, &token_name, default_value.clone());
                }
            });
            item.append(&reset);
        }

        item
    }

    fn select(self: &Rc<Self>, token_name: &str) {
        let notified = self.model.borrow_mut().select_token(token_name);
        tracing::debug!(token = token_name, notified, "token row selected");
        self.render();
    }

    fn sync_filters(&self) {
        let model = self.model.borrow();
        self.syncing_filters.set(true);
        for (token_type, check) in &self.filter_checks {
            check.set_active(model.filter_types().contains(token_type));
        }
        self.syncing_filters.set(false);

        if model.filter_types().is_empty() {
            self.filter_button.remove_css_class(FILTER_ACTIVE_CLASS);
        } else {
            self.filter_button.add_css_class(FILTER_ACTIVE_CLASS);
        }
    }

    fn sync_shadow(&self) {
        if self.model.borrow().shadow_top() {
            self.shadow.add_css_class(SHADOW_VISIBLE_CLASS);
        } else {
            self.shadow.remove_css_class(SHADOW_VISIBLE_CLASS);
        }
    }
}

fn hidden_rows_note(hidden: usize) -> Option<String> {
    match hidden {
        0 => None,
        1 => Some("1 token hidden; turn on Show all to list it".to_string()),
        n => Some(format!("{n} tokens hidden; turn on Show all to list them")),
    }
}

fn theme_value<'a>(theme: &'a MutableTheme, token_name: &str) -> Option<&'a TokenValue> {
    match type_of_token(token_name) {
        TokenType::Seed => theme.config.seed_token(token_name),
        _ => theme.config.alias_token(token_name),
    }
}

/// GTK rendering of a [`TokenPanel`].
pub struct TokenPanelView {
    root: GtkBox,
    inner: Rc<PanelInner>,
}

/// Imperative handle for other widgets; inert once the view is gone.
#[derive(Clone)]
pub struct TokenPanelHandle {
    inner: Weak<PanelInner>,
}

impl TokenPanelView {
    pub fn new(model: TokenPanel, style: StyleTokens) -> Self {
        let root = GtkBox::new(Orientation::Vertical, 0);
        root.add_css_class("preview-panel");
        root.set_size_request(style.panel_min_width, -1);

        let head = GtkBox::new(Orientation::Vertical, style.spacing_12);
        head.set_margin_top(style.panel_padding);
        head.set_margin_bottom(style.spacing_8);
        head.set_margin_start(style.panel_padding);
        head.set_margin_end(style.panel_padding);

        let title_row = GtkBox::new(Orientation::Horizontal, style.spacing_8);
        title_row.add_css_class("preview-panel-space");
        let title = section_title("Alias Token Preview");
        title.set_hexpand(true);
        title_row.append(&title);
        let show_all_box = GtkBox::new(Orientation::Horizontal, style.spacing_4);
        show_all_box.add_css_class("preview-hide-token");
        show_all_box.append(&Label::new(Some("Show all")));
        let show_all = Switch::new();
        show_all.set_valign(Align::Center);
        show_all.set_active(model.show_all());
        show_all_box.append(&show_all);
        title_row.append(&show_all_box);
        head.append(&title_row);

        let filter_menu = GtkBox::new(Orientation::Vertical, style.spacing_4);
        filter_menu.append(&section_title("Filter"));
        let filter_checks: Vec<(TokenType, CheckButton)> = TOKEN_SORTS
            .iter()
            .map(|token_type| {
                let check = CheckButton::with_label(token_type.label());
                filter_menu.append(&check);
                (*token_type, check)
            })
            .collect();
        let filter_popover = Popover::new();
        filter_popover.set_child(Some(&filter_menu));
        let filter_button = icon_menu_button(
            "view-list-symbolic",
            "Filter token types",
            style.search_addon_width,
            &["preview-filter-button"],
        );
        filter_button.set_popover(Some(&filter_popover));

        let search = SearchEntry::new();
        search.set_hexpand(true);
        search.set_property("placeholder-text", "Search token / color / text / radius");
        let search_row = GtkBox::new(Orientation::Horizontal, 0);
        search_row.add_css_class("preview-panel-search");
        search_row.append(&filter_button);
        search_row.append(&search);
        head.append(&search_row);
        root.append(&head);

        let list = GtkBox::new(Orientation::Vertical, style.spacing_8);
        list.set_margin_start(style.panel_padding);
        list.set_margin_end(style.panel_padding);
        let scroller = ScrolledWindow::new();
        scroller.set_policy(PolicyType::Never, PolicyType::Automatic);
        scroller.set_vexpand(true);
        scroller.set_child(Some(&list));

        let shadow = GtkBox::new(Orientation::Horizontal, 0);
        shadow.add_css_class("preview-panel-token-shadow");
        shadow.set_valign(Align::Start);
        shadow.set_size_request(-1, style.panel_shadow_height);
        shadow.set_can_target(false);

        let token_wrapper = Overlay::new();
        token_wrapper.add_css_class("preview-panel-token-wrapper");
        token_wrapper.set_child(Some(&scroller));
        token_wrapper.add_overlay(&shadow);
        root.append(&token_wrapper);

        let inner = Rc::new(PanelInner {
            model: RefCell::new(model),
            style,
            list,
            scroller,
            shadow,
            filter_button,
            filter_checks,
            syncing_filters: Cell::new(false),
            rows: RefCell::new(HashMap::new()),
            scroll_listener: RefCell::new(None),
        });

        *inner.scroll_listener.borrow_mut() = Some(ScrollListener::attach(
            inner.scroller.vadjustment(),
            Rc::downgrade(&inner),
        ));

        {
            let weak = Rc::downgrade(&inner);
            show_all.connect_active_notify(move |switch| {
                if let Some(inner) = weak.upgrade() {
                    inner.model.borrow_mut().set_show_all(switch.is_active());
                    inner.render();
                }
            });
        }
        {
            let weak = Rc::downgrade(&inner);
            search.connect_search_changed(move |search| {
                if let Some(inner) = weak.upgrade() {
                    inner.model.borrow_mut().set_search(search.text().as_str());
                    inner.render();
                }
            });
        }
        for (token_type, check) in &inner.filter_checks {
            let weak = Rc::downgrade(&inner);
            let token_type = *token_type;
            check.connect_toggled(move |_| {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                if inner.syncing_filters.get() {
                    return;
                }
                inner.model.borrow_mut().toggle_filter_type(token_type);
                inner.render();
            });
        }

        inner.render();
        Self { root, inner }
    }

    pub fn widget(&self) -> &GtkBox {
        &self.root
    }

    pub fn handle(&self) -> TokenPanelHandle {
        TokenPanelHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn set_tokens(&self, tokens: TokenMap) {
        self.inner.model.borrow_mut().set_tokens(tokens);
        self.inner.render();
    }

    pub fn set_themes(&self, themes: Vec<MutableTheme>) {
        self.inner.model.borrow_mut().set_themes(themes);
        self.inner.render();
    }

    pub fn set_selected_tokens(&self, selected_tokens: Vec<TokenName>) {
        self.inner
            .model
            .borrow_mut()
            .set_selected_tokens(selected_tokens);
        self.inner.render();
    }
}

impl TokenPanelHandle {
    /// Expand the token's group, highlight it, and scroll to it once laid out.
    pub fn scroll_to_token(&self, token_name: &str) {
        let Some(inner) = self.inner.upgrade() else {
            tracing::debug!(token = token_name, "token panel gone; scroll ignored");
            return;
        };
        inner.model.borrow_mut().scroll_to_token(token_name);
        inner.render();

        let weak = self.inner.clone();
        let frames = Cell::new(0u8);
        inner.list.add_tick_callback(move |_, _| {
            frames.set(frames.get() + 1);
            if frames.get() < SCROLL_SETTLE_FRAMES {
                return glib::ControlFlow::Continue;
            }
            if let Some(inner) = weak.upgrade() {
                run_pending_scroll(&inner.model, &*inner);
            }
            glib::ControlFlow::Break
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_rows_note_names_the_show_all_switch() {
        assert_eq!(hidden_rows_note(0), None);
        assert_eq!(
            hidden_rows_note(1).as_deref(),
            Some("1 token hidden; turn on Show all to list it")
        );
        let note = hidden_rows_note(5).expect("note for hidden rows");
        assert!(note.starts_with("5 tokens hidden"));
        assert!(note.contains("Show all"));
    }
}
