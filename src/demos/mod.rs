//! Static catalogue of component demos.
//!
//! Each component registers a default demo plus optional variants. A demo
//! lists the tokens that change its rendering so the previewer can point the
//! token panel at them.

mod alert;
mod date_picker;
mod dropdown;
mod slider;

/// Builds a fresh widget for one demo.
pub type DemoBuilder = fn() -> gtk4::Widget;

#[derive(Debug, Clone, Copy)]
pub struct ComponentDemo {
    pub key: Option<&'static str>,
    pub tokens: &'static [&'static str],
    pub build: DemoBuilder,
}

impl ComponentDemo {
    pub fn label(&self) -> &'static str {
        self.key.unwrap_or("default")
    }

    pub fn is_token_sensitive(&self) -> bool {
        !self.tokens.is_empty()
    }

    pub fn depends_on(&self, token_name: &str) -> bool {
        self.tokens.contains(&token_name)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PreviewerDemo {
    pub default: ComponentDemo,
    pub optional: &'static [ComponentDemo],
}

impl PreviewerDemo {
    /// Default demo first, then the optional variants in registration order.
    pub fn variants(&self) -> impl Iterator<Item = &ComponentDemo> + '_ {
        std::iter::once(&self.default).chain(self.optional.iter())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ComponentEntry {
    pub name: &'static str,
    pub demo: PreviewerDemo,
}

static COMPONENT_DEMOS: &[ComponentEntry] = &[
    ComponentEntry {
        name: "Alert",
        demo: alert::PREVIEWER_DEMO,
    },
    ComponentEntry {
        name: "DatePicker",
        demo: date_picker::PREVIEWER_DEMO,
    },
    ComponentEntry {
        name: "Dropdown",
        demo: dropdown::PREVIEWER_DEMO,
    },
    ComponentEntry {
        name: "Slider",
        demo: slider::PREVIEWER_DEMO,
    },
];

pub fn component_demos() -> &'static [ComponentEntry] {
    COMPONENT_DEMOS
}

pub fn find_component(name: &str) -> Option<&'static ComponentEntry> {
    COMPONENT_DEMOS
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
}

/// Every registered demo whose rendering depends on `token_name`.
pub fn demos_using_token(token_name: &str) -> Vec<(&'static str, &'static ComponentDemo)> {
    COMPONENT_DEMOS
        .iter()
        .flat_map(|entry| entry.demo.variants().map(move |demo| (entry.name, demo)))
        .filter(|(_, demo)| demo.depends_on(token_name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::default_tokens;

    #[test]
    fn registry_lists_components_in_registration_order() {
        let names: Vec<_> = component_demos().iter().map(|entry| entry.name).collect();
        assert_eq!(names, vec!["Alert", "DatePicker", "Dropdown", "Slider"]);
    }

    #[test]
    fn variants_start_with_default_demo() {
        let alert = find_component("alert").expect("alert registered");
        let labels: Vec<_> = alert.demo.variants().map(ComponentDemo::label).collect();
        assert_eq!(labels, vec!["default", "error", "info", "success", "warning"]);
    }

    #[test]
    fn declared_tokens_exist_in_default_table() {
        let defaults = default_tokens();
        for entry in component_demos() {
            for demo in entry.demo.variants() {
                for token in demo.tokens {
                    assert!(
                        defaults.contains_key(*token),
                        "{}::{} declares unknown token {token}",
                        entry.name,
                        demo.label()
                    );
                }
            }
        }
    }

    #[test]
    fn demos_without_tokens_are_not_token_sensitive() {
        let picker = find_component("DatePicker").expect("date picker registered");
        assert!(!picker.demo.default.is_token_sensitive());
        assert!(picker
            .demo
            .optional
            .iter()
            .all(ComponentDemo::is_token_sensitive));
    }

    #[test]
    fn reverse_lookup_finds_demos_by_token() {
        let users = demos_using_token("colorBgContent");
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].0, "Slider");
        assert_eq!(users[0].1.label(), "default");

        let error_users: Vec<_> = demos_using_token("colorError")
            .into_iter()
            .map(|(name, demo)| (name, demo.label()))
            .collect();
        assert!(error_users.contains(&("Alert", "error")));
        assert!(error_users.contains(&("Dropdown", "default")));

        assert!(demos_using_token("screenXL").is_empty());
    }

    #[test]
    fn unknown_component_lookup_returns_none() {
        assert!(find_component("Cascader").is_none());
    }
}
