use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Orientation, Scale};

use super::{ComponentDemo, PreviewerDemo};

pub(super) const PREVIEWER_DEMO: PreviewerDemo = PreviewerDemo {
    default: ComponentDemo {
        key: Some("default"),
        tokens: &[
            "colorBgContent",
            "colorBgContentHover",
            "colorBgContainer",
            "colorPrimary",
            "colorPrimaryHover",
            "colorPrimaryBorderHover",
            "colorPrimaryBorder",
        ],
        build: build_in_background,
    },
    optional: &[],
};

fn slider(value: f64) -> Scale {
    let scale = Scale::with_range(Orientation::Horizontal, 0.0, 100.0, 1.0);
    scale.set_value(value);
    scale.set_hexpand(true);
    scale.add_css_class("demo-slider");
    scale
}

// GTK has no two-handle range slider; two linked scales stand in for one.
fn range_slider(start: f64, end: f64) -> GtkBox {
    let row = GtkBox::new(Orientation::Horizontal, 4);
    let lower = slider(start);
    let upper = slider(end);

    let upper_weak = upper.downgrade();
    lower.connect_value_changed(move |lower| {
        let Some(upper) = upper_weak.upgrade() else {
            return;
        };
        if lower.value() > upper.value() {
            upper.set_value(lower.value());
        }
    });
    let lower_weak = lower.downgrade();
    upper.connect_value_changed(move |upper| {
        let Some(lower) = lower_weak.upgrade() else {
            return;
        };
        if upper.value() < lower.value() {
            lower.set_value(upper.value());
        }
    });

    row.append(&lower);
    row.append(&upper);
    row
}

fn build_in_background() -> gtk4::Widget {
    let column = GtkBox::new(Orientation::Vertical, 8);
    column.add_css_class("demo-bg-content");
    column.append(&slider(30.0));
    column.append(&range_slider(20.0, 50.0));
    column.upcast()
}
