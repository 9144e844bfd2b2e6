use gtk4::prelude::*;
use gtk4::{Align, Button, Label, MenuButton};

pub fn icon_menu_button(
    icon_name: &str,
    tooltip: &str,
    size: i32,
    extra_classes: &[&str],
) -> MenuButton {
    let button = MenuButton::new();
    button.set_icon_name(icon_name);
    button.set_focus_on_click(false);
    button.set_tooltip_text(Some(tooltip));
    button.add_css_class("flat");
    button.add_css_class("icon-button");
    for css_class in extra_classes {
        button.add_css_class(css_class);
    }
    button.set_size_request(size, size);
    button
}

pub fn icon_button(icon_name: &str, tooltip: &str, size: i32, extra_classes: &[&str]) -> Button {
    let button = Button::from_icon_name(icon_name);
    button.set_focus_on_click(false);
    button.set_tooltip_text(Some(tooltip));
    button.add_css_class("flat");
    button.add_css_class("icon-button");
    for css_class in extra_classes {
        button.add_css_class(css_class);
    }
    button.set_size_request(size, size);
    button
}

pub fn section_title(text: &str) -> Label {
    let label = Label::new(Some(text));
    label.add_css_class("section-title");
    label.set_halign(Align::Start);
    label.set_xalign(0.0);
    label
}

/// Small flat button naming a token; used as a cross-link into the token panel.
pub fn token_chip(token_name: &str) -> Button {
    let chip = Button::with_label(token_name);
    chip.set_focus_on_click(false);
    chip.add_css_class("flat");
    chip.add_css_class("token-chip");
    chip.set_tooltip_text(Some("Show in token panel"));
    chip
}
