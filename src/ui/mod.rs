pub mod gallery;
pub mod style;
pub mod token_panel;
pub mod widgets;

pub use gallery::{build_gallery, DemoFocusHandler, TokenLinkHandler};
pub use style::{StyleTokens, LAYOUT_TOKENS};
pub use token_panel::{TokenPanelHandle, TokenPanelView};
pub use widgets::{icon_button, icon_menu_button, section_title, token_chip};
