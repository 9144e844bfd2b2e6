use crate::token::TokenType;

/// Category filter selection, either owned by the panel or driven by the caller.
///
/// In controlled mode `value()` reports the caller's selection until the caller
/// pushes a new one, even after a toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterTypes {
    inner: Vec<TokenType>,
    controlled: Option<Vec<TokenType>>,
}

impl FilterTypes {
    pub fn uncontrolled(initial: Vec<TokenType>) -> Self {
        Self {
            inner: initial,
            controlled: None,
        }
    }

    pub fn controlled(value: Vec<TokenType>) -> Self {
        Self {
            inner: value.clone(),
            controlled: Some(value),
        }
    }

    pub fn value(&self) -> &[TokenType] {
        self.controlled.as_deref().unwrap_or(&self.inner)
    }

    pub fn contains(&self, token_type: TokenType) -> bool {
        self.value().contains(&token_type)
    }

    pub fn is_empty(&self) -> bool {
        self.value().is_empty()
    }

    pub fn set_controlled(&mut self, value: Option<Vec<TokenType>>) {
        if let Some(value) = value.as_ref() {
            self.inner = value.clone();
        }
        self.controlled = value;
    }

    /// Selection after toggling `token_type`, without applying it.
    pub fn toggled(&self, token_type: TokenType) -> Vec<TokenType> {
        if self.contains(token_type) {
            self.value()
                .iter()
                .copied()
                .filter(|item| *item != token_type)
                .collect()
        } else {
            let mut next = self.value().to_vec();
            next.push(token_type);
            next
        }
    }

    pub fn set(&mut self, next: Vec<TokenType>) {
        self.inner = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_adds_then_removes_category() {
        let mut filter = FilterTypes::default();
        let next = filter.toggled(TokenType::Font);
        assert_eq!(next, vec![TokenType::Font]);
        filter.set(next);

        let next = filter.toggled(TokenType::Radius);
        assert_eq!(next, vec![TokenType::Font, TokenType::Radius]);
        filter.set(next);

        assert_eq!(filter.toggled(TokenType::Font), vec![TokenType::Radius]);
    }

    #[test]
    fn controlled_value_wins_until_owner_updates_it() {
        let mut filter = FilterTypes::controlled(vec![TokenType::Motion]);
        filter.set(filter.toggled(TokenType::Shadow));
        assert_eq!(filter.value(), &[TokenType::Motion]);

        filter.set_controlled(Some(vec![TokenType::Motion, TokenType::Shadow]));
        assert_eq!(filter.value(), &[TokenType::Motion, TokenType::Shadow]);

        filter.set_controlled(None);
        assert_eq!(filter.value(), &[TokenType::Motion, TokenType::Shadow]);
        filter.set(filter.toggled(TokenType::Motion));
        assert_eq!(filter.value(), &[TokenType::Shadow]);
    }
}
