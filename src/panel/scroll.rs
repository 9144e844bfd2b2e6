const TOKEN_ITEM_ID_PREFIX: &str = "previewer-token-item-";

/// Element id of a token's row, the target of scroll requests.
pub fn token_item_id(token_name: &str) -> String {
    format!("{TOKEN_ITEM_ID_PREFIX}{token_name}")
}

/// The surface that owns the scrollable token list.
pub trait ScrollHost {
    /// Bring the element with `item_id` into view. Returns `false` when no
    /// such element exists.
    fn scroll_into_view(&self, item_id: &str) -> bool;
}

/// Scroll `host` to the row of `token_name`. A missing row is a no-op.
pub fn run_scroll_request(host: &dyn ScrollHost, token_name: &str) -> bool {
    let scrolled = host.scroll_into_view(&token_item_id(token_name));
    if !scrolled {
        tracing::debug!(token = token_name, "scroll target not found; skipping");
    }
    scrolled
}
