use std::cell::RefCell;
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{
    Align, Box as GtkBox, FlowBox, Frame, GestureClick, Label, Orientation, PolicyType,
    ScrolledWindow, SelectionMode,
};

use crate::demos::{component_demos, ComponentDemo, ComponentEntry};

use super::style::StyleTokens;
use super::widgets::{section_title, token_chip};

const FOCUSED_CARD_CLASS: &str = "demo-card-focused";

/// Called with the component name and demo when a demo card is clicked.
pub type DemoFocusHandler = Rc<dyn Fn(&'static str, &'static ComponentDemo)>;
/// Called with a token name when one of a card's token chips is clicked.
pub type TokenLinkHandler = Rc<dyn Fn(&str)>;

/// Scrollable column with every registered component and its demo variants.
pub fn build_gallery(
    style: StyleTokens,
    on_focus: DemoFocusHandler,
    on_token: TokenLinkHandler,
) -> ScrolledWindow {
    let column = GtkBox::new(Orientation::Vertical, style.spacing_20);
    column.add_css_class("demo-gallery");
    column.set_margin_top(style.spacing_20);
    column.set_margin_bottom(style.spacing_20);
    column.set_margin_start(style.spacing_20);
    column.set_margin_end(style.spacing_20);

    let focused: Rc<RefCell<Option<GtkBox>>> = Rc::new(RefCell::new(None));
    for entry in component_demos() {
        column.append(&component_frame(
            style,
            entry,
            &focused,
            &on_focus,
            &on_token,
        ));
    }

    let scroller = ScrolledWindow::new();
    scroller.set_policy(PolicyType::Never, PolicyType::Automatic);
    scroller.set_hexpand(true);
    scroller.set_vexpand(true);
    scroller.set_size_request(style.gallery_min_width, -1);
    scroller.set_child(Some(&column));
    scroller
}

fn component_frame(
    style: StyleTokens,
    entry: &'static ComponentEntry,
    focused: &Rc<RefCell<Option<GtkBox>>>,
    on_focus: &DemoFocusHandler,
    on_token: &TokenLinkHandler,
) -> Frame {
    let cards = FlowBox::new();
    cards.set_selection_mode(SelectionMode::None);
    cards.set_column_spacing(style.spacing_12 as u32);
    cards.set_row_spacing(style.spacing_12 as u32);
    cards.set_homogeneous(false);
    for demo in entry.demo.variants() {
        cards.insert(
            &demo_card(style, entry.name, demo, focused, on_focus, on_token),
            -1,
        );
    }

    let body = GtkBox::new(Orientation::Vertical, style.spacing_12);
    body.set_margin_top(style.spacing_12);
    body.set_margin_bottom(style.spacing_12);
    body.set_margin_start(style.spacing_12);
    body.set_margin_end(style.spacing_12);
    body.append(&section_title(entry.name));
    body.append(&cards);

    let frame = Frame::new(None);
    frame.add_css_class("demo-component");
    frame.set_child(Some(&body));
    frame
}

fn demo_card(
    style: StyleTokens,
    component: &'static str,
    demo: &'static ComponentDemo,
    focused: &Rc<RefCell<Option<GtkBox>>>,
    on_focus: &DemoFocusHandler,
    on_token: &TokenLinkHandler,
) -> GtkBox {
    let card = GtkBox::new(Orientation::Vertical, style.spacing_8);
    card.add_css_class("demo-card");
    card.set_valign(Align::Start);

    let caption = Label::new(Some(demo.label()));
    caption.add_css_class("demo-card-caption");
    caption.set_halign(Align::Start);
    card.append(&caption);
    card.append(&(demo.build)());

    if demo.is_token_sensitive() {
        let chips = FlowBox::new();
        chips.set_selection_mode(SelectionMode::None);
        chips.set_column_spacing(style.spacing_4 as u32);
        chips.set_row_spacing(style.spacing_4 as u32);
        chips.set_max_children_per_line(3);
        for &token_name in demo.tokens {
            let chip = token_chip(token_name);
            let on_token = on_token.clone();
            chip.connect_clicked(move |_| on_token(token_name));
            chips.insert(&chip, -1);
        }
        card.append(&chips);
    }

    let click = GestureClick::new();
    click.set_button(gtk4::gdk::BUTTON_PRIMARY);
    {
        let card = card.downgrade();
        let focused = focused.clone();
        let on_focus = on_focus.clone();
        click.connect_pressed(move |_, _, _, _| {
            let Some(card) = card.upgrade() else {
                return;
            };
            let previous = focused.borrow_mut().replace(card.clone());
            if let Some(previous) = previous {
                previous.remove_css_class(FOCUSED_CARD_CLASS);
            }
            card.add_css_class(FOCUSED_CARD_CLASS);
            tracing::debug!(component, demo = demo.label(), "demo focused");
            on_focus(component, demo);
        });
    }
    card.add_controller(click);
    card
}
