/// Compile-time layout tokens of the previewer chrome; never user-overridable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTokens {
    pub spacing_4: i32,
    pub spacing_8: i32,
    pub spacing_12: i32,
    pub spacing_16: i32,
    pub spacing_20: i32,
    pub panel_min_width: i32,
    pub panel_padding: i32,
    pub panel_shadow_height: i32,
    pub search_addon_width: i32,
    pub swatch_size: i32,
    pub card_radius: u16,
    pub control_radius: u16,
    pub border_width: u16,
    pub window_default_width: i32,
    pub window_default_height: i32,
    pub gallery_min_width: i32,
    pub motion_standard_ms: u32,
}

pub const LAYOUT_TOKENS: StyleTokens = StyleTokens {
    spacing_4: 4,
    spacing_8: 8,
    spacing_12: 12,
    spacing_16: 16,
    spacing_20: 20,
    panel_min_width: 300,
    panel_padding: 16,
    panel_shadow_height: 40,
    search_addon_width: 32,
    swatch_size: 14,
    card_radius: 8,
    control_radius: 6,
    border_width: 1,
    window_default_width: 1280,
    window_default_height: 800,
    gallery_min_width: 480,
    motion_standard_ms: 300,
};

impl StyleTokens {
    /// Tighter spacing for the compact theme algorithm; panel width is unchanged.
    pub const fn compact(self) -> Self {
        Self {
            spacing_8: 6,
            spacing_12: 8,
            spacing_16: 12,
            spacing_20: 12,
            panel_padding: 12,
            swatch_size: 12,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LAYOUT_TOKENS;

    #[test]
    fn layout_tokens_keep_panel_dimensions() {
        let tokens = LAYOUT_TOKENS;
        assert_eq!(tokens.panel_min_width, 300);
        assert_eq!(tokens.panel_padding, 16);
        assert_eq!(tokens.panel_shadow_height, 40);
        assert_eq!(tokens.search_addon_width, 32);
    }

    #[test]
    fn layout_window_fits_gallery_and_panel() {
        let tokens = LAYOUT_TOKENS;
        assert!(tokens.window_default_width >= tokens.gallery_min_width + tokens.panel_min_width);
    }
}
