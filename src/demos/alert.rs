use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Image, Label, Orientation};

use super::{ComponentDemo, PreviewerDemo};

pub(super) const PREVIEWER_DEMO: PreviewerDemo = PreviewerDemo {
    default: ComponentDemo {
        key: None,
        tokens: &[],
        build: build_default,
    },
    optional: &[ERROR, INFO, SUCCESS, WARNING],
};

const ERROR: ComponentDemo = ComponentDemo {
    key: Some("error"),
    tokens: &["colorError", "colorErrorBorder", "colorErrorBg"],
    build: build_error,
};

const INFO: ComponentDemo = ComponentDemo {
    key: Some("info"),
    tokens: &["colorInfo", "colorInfoBorder", "colorInfoBg"],
    build: build_info,
};

const SUCCESS: ComponentDemo = ComponentDemo {
    key: Some("success"),
    tokens: &["colorSuccess", "colorSuccessBorder", "colorSuccessBg"],
    build: build_success,
};

const WARNING: ComponentDemo = ComponentDemo {
    key: Some("warning"),
    tokens: &["colorWarning", "colorWarningBorder", "colorWarningBg"],
    build: build_warning,
};

fn alert(kind: &str, icon_name: &str, message: &str) -> gtk4::Widget {
    let row = GtkBox::new(Orientation::Horizontal, 8);
    row.add_css_class("demo-alert");
    row.add_css_class(&format!("demo-alert-{kind}"));

    let icon = Image::from_icon_name(icon_name);
    icon.add_css_class("demo-alert-icon");
    let label = Label::new(Some(message));
    label.set_xalign(0.0);
    label.set_hexpand(true);
    label.set_wrap(true);

    row.append(&icon);
    row.append(&label);
    row.upcast()
}

fn build_default() -> gtk4::Widget {
    let column = GtkBox::new(Orientation::Vertical, 8);
    column.append(&alert("info", "dialog-information-symbolic", "Informational Notes"));
    column.append(&alert("success", "emblem-ok-symbolic", "Success Tips"));
    column.upcast()
}

fn build_error() -> gtk4::Widget {
    alert("error", "dialog-error-symbolic", "Error Text")
}

fn build_info() -> gtk4::Widget {
    alert("info", "dialog-information-symbolic", "Info Text")
}

fn build_success() -> gtk4::Widget {
    alert("success", "emblem-ok-symbolic", "Success Text")
}

fn build_warning() -> gtk4::Widget {
    alert("warning", "dialog-warning-symbolic", "Warning Text")
}
