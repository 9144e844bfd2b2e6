use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Calendar, Entry, Orientation};

use super::{ComponentDemo, PreviewerDemo};

pub(super) const PREVIEWER_DEMO: PreviewerDemo = PreviewerDemo {
    default: ComponentDemo {
        key: None,
        tokens: &[],
        build: build_default,
    },
    optional: &[DANGER, WARNING, ICON],
};

const DANGER: ComponentDemo = ComponentDemo {
    key: Some("danger"),
    tokens: &["colorError", "colorErrorHover", "colorErrorBorder"],
    build: build_danger,
};

const WARNING: ComponentDemo = ComponentDemo {
    key: Some("warning"),
    tokens: &["colorWarning", "colorWarningBorder"],
    build: build_warning,
};

const ICON: ComponentDemo = ComponentDemo {
    key: Some("icon"),
    tokens: &["colorAction", "colorActionHover"],
    build: build_open_panel,
};

fn picker_input(status: Option<&str>) -> Entry {
    let entry = Entry::new();
    entry.set_placeholder_text(Some("Select date"));
    entry.set_secondary_icon_name(Some("x-office-calendar-symbolic"));
    entry.add_css_class("demo-picker-input");
    if let Some(status) = status {
        entry.add_css_class(&format!("demo-status-{status}"));
    }
    entry
}

fn build_default() -> gtk4::Widget {
    picker_input(None).upcast()
}

fn build_danger() -> gtk4::Widget {
    picker_input(Some("error")).upcast()
}

fn build_warning() -> gtk4::Widget {
    picker_input(Some("warning")).upcast()
}

fn build_open_panel() -> gtk4::Widget {
    let column = GtkBox::new(Orientation::Vertical, 6);
    column.append(&picker_input(None));
    let calendar = Calendar::new();
    calendar.add_css_class("demo-picker-panel");
    column.append(&calendar);
    column.upcast()
}
