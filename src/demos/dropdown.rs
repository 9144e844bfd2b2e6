use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Label, MenuButton, Orientation, Popover};

use super::{ComponentDemo, PreviewerDemo};

pub(super) const PREVIEWER_DEMO: PreviewerDemo = PreviewerDemo {
    default: ComponentDemo {
        key: Some("default"),
        tokens: &["colorError", "colorErrorHover", "colorBgElevated"],
        build: build_default,
    },
    optional: &[],
};

const MENU_ITEMS: &[(&str, bool)] = &[
    ("1st menu item", false),
    ("2nd menu item", false),
    ("3rd menu item", false),
    ("a danger item", true),
];

fn build_default() -> gtk4::Widget {
    let menu = GtkBox::new(Orientation::Vertical, 2);
    for &(text, danger) in MENU_ITEMS {
        let item = Label::new(Some(text));
        item.set_xalign(0.0);
        item.add_css_class("demo-dropdown-item");
        if danger {
            item.add_css_class("demo-dropdown-item-danger");
        }
        menu.append(&item);
    }

    let popover = Popover::new();
    popover.add_css_class("demo-dropdown-menu");
    popover.set_child(Some(&menu));

    let trigger = MenuButton::new();
    trigger.set_label("Hover me");
    trigger.add_css_class("demo-dropdown-link");
    trigger.set_popover(Some(&popover));
    trigger.upcast()
}
