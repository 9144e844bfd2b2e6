use std::cell::{Cell, RefCell};
use std::path::Path;
use std::rc::{Rc, Weak};

use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, CssProvider, Orientation, Paned};

use crate::config::{load_app_config, AppConfig};
use crate::demos::{demos_using_token, ComponentDemo};
use crate::error::AppResult;
use crate::panel::{PanelProps, TokenPanel};
use crate::theme::{
    default_theme_path, load_theme_config, resolve_tokens, MutableTheme, ThemeAlgorithm,
    ThemeConfig,
};
use crate::token::{default_tokens, TokenMap, TokenType};
use crate::ui::{build_gallery, StyleTokens, TokenPanelView, LAYOUT_TOKENS};

mod runtime_css;
mod startup;

use self::runtime_css::{install_runtime_css, reload_runtime_css};
use self::startup::{gtk_launch_args, StartupConfig};
pub use self::startup::StartupError;

const APP_ID: &str = "io.github.swatchbook";
const WINDOW_TITLE: &str = "Swatchbook";
const THEME_KEY: &str = "default";
const DEFAULT_THEME_NAME: &str = "Default";

struct AppBootstrap {
    app_config: AppConfig,
    theme_name: String,
    theme_config: ThemeConfig,
}

fn bootstrap_app_runtime() -> AppResult<AppBootstrap> {
    let startup_config = StartupConfig::from_args()?;
    let app_config = load_app_config();

    let explicit_path = startup_config
        .theme_path
        .or_else(|| app_config.theme_file.clone());
    let (theme_name, theme_config) = match explicit_path {
        Some(path) => {
            let config = load_theme_config(&path)?;
            (theme_name_for(&path), config)
        }
        None => (DEFAULT_THEME_NAME.to_string(), load_or_default_theme_config()),
    };
    tracing::info!(
        theme = %theme_name,
        algorithm = ?theme_config.algorithm,
        seed_tokens = theme_config.token.len(),
        "loaded theme config"
    );

    Ok(AppBootstrap {
        app_config,
        theme_name,
        theme_config,
    })
}

fn load_or_default_theme_config() -> ThemeConfig {
    let path = match default_theme_path() {
        Ok(path) => path,
        Err(err) => {
            tracing::warn!(?err, "failed to resolve theme config path; using defaults");
            return ThemeConfig::default();
        }
    };
    load_theme_config(&path).unwrap_or_else(|err| {
        tracing::warn!(?err, ?path, "failed to load theme config; using defaults");
        ThemeConfig::default()
    })
}

fn theme_name_for(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| DEFAULT_THEME_NAME.to_string())
}

fn style_for(algorithm: Option<ThemeAlgorithm>) -> StyleTokens {
    match algorithm {
        Some(ThemeAlgorithm::Compact) => LAYOUT_TOKENS.compact(),
        _ => LAYOUT_TOKENS,
    }
}

/// Tokens no registered demo renders; hidden until "Show all" is on.
fn is_unused_by_demos(token_name: &str) -> bool {
    demos_using_token(token_name).is_empty()
}

/// Owner of the edited theme. Panel edits land here and flow back as tokens.
struct ThemeRuntime {
    name: String,
    config: RefCell<ThemeConfig>,
    defaults: TokenMap,
    style: StyleTokens,
    css: CssProvider,
    panel: RefCell<Option<TokenPanelView>>,
}

impl ThemeRuntime {
    fn new(name: String, config: ThemeConfig, style: StyleTokens) -> Rc<Self> {
        let runtime = Rc::new(Self {
            name,
            config: RefCell::new(config),
            defaults: default_tokens(),
            style,
            css: install_runtime_css(),
            panel: RefCell::new(None),
        });
        reload_runtime_css(&runtime.css, &runtime.resolved_tokens(), style);
        runtime
    }

    fn resolved_tokens(&self) -> TokenMap {
        resolve_tokens(&self.defaults, &self.config.borrow())
    }

    fn mutable_theme(self: &Rc<Self>) -> MutableTheme {
        let weak = Rc::downgrade(self);
        MutableTheme::new(self.name.clone(), THEME_KEY, self.config.borrow().clone())
            .with_change_handler(move |config| schedule_theme_change(weak.clone(), config))
    }

    fn apply_theme_change(self: &Rc<Self>, config: ThemeConfig) {
        self.config.replace(config);
        let tokens = self.resolved_tokens();
        reload_runtime_css(&self.css, &tokens, self.style);
        if let Some(panel) = self.panel.borrow().as_ref() {
            panel.set_themes(vec![self.mutable_theme()]);
            panel.set_tokens(tokens);
        }
        tracing::info!(theme = %self.name, "theme change applied");
    }

    fn focus_demo(&self, component: &str, demo: &ComponentDemo) {
        let panel = self.panel.borrow();
        let Some(view) = panel.as_ref() else {
            return;
        };
        view.set_selected_tokens(demo.tokens.iter().map(|name| name.to_string()).collect());
        if let Some(first) = demo.tokens.first() {
            view.handle().scroll_to_token(first);
        }
        tracing::debug!(
            component,
            demo = demo.label(),
            tokens = demo.tokens.len(),
            "demo tokens selected"
        );
    }
}

// The panel model is borrowed while it notifies; apply the edit on the next idle.
fn schedule_theme_change(runtime: Weak<ThemeRuntime>, config: ThemeConfig) {
    glib::idle_add_local_once(move || {
        if let Some(runtime) = runtime.upgrade() {
            runtime.apply_theme_change(config);
        }
    });
}

fn panel_props(runtime: &Rc<ThemeRuntime>, app_config: &AppConfig) -> PanelProps {
    PanelProps {
        themes: vec![runtime.mutable_theme()],
        default_theme: Some(ThemeConfig::from_alias(runtime.defaults.clone())),
        selected_tokens: Vec::new(),
        on_token_select: Some(Rc::new(|token_name: &str| {
            let demos: Vec<String> = demos_using_token(token_name)
                .into_iter()
                .map(|(component, demo)| format!("{component}/{}", demo.label()))
                .collect();
            tracing::info!(token = token_name, ?demos, "token selected");
        })),
        filter_types: None,
        default_filter_types: app_config.filter_types.clone(),
        on_filter_types_change: Some(Rc::new(|types: &[TokenType]| {
            tracing::debug!(?types, "token filter changed");
        })),
        enable_token_select: app_config.enable_token_select,
        is_useless: Some(Rc::new(is_unused_by_demos)),
    }
}

fn build_window(app: &Application, runtime: &Rc<ThemeRuntime>, app_config: &AppConfig) {
    let style = runtime.style;
    let mut model = TokenPanel::new(panel_props(runtime, app_config), runtime.resolved_tokens());
    model.set_show_all(app_config.show_all_tokens);
    let panel = TokenPanelView::new(model, style);
    let handle = panel.handle();

    let focus_runtime = Rc::downgrade(runtime);
    let gallery = build_gallery(
        style,
        Rc::new(move |component: &'static str, demo: &'static ComponentDemo| {
            if let Some(runtime) = focus_runtime.upgrade() {
                runtime.focus_demo(component, demo);
            }
        }),
        Rc::new(move |token_name: &str| handle.scroll_to_token(token_name)),
    );

    let paned = Paned::new(Orientation::Horizontal);
    paned.set_start_child(Some(&gallery));
    paned.set_end_child(Some(panel.widget()));
    paned.set_resize_end_child(false);
    paned.set_shrink_end_child(false);
    paned.set_shrink_start_child(false);
    runtime.panel.replace(Some(panel));

    let window = ApplicationWindow::builder()
        .application(app)
        .title(WINDOW_TITLE)
        .default_width(style.window_default_width)
        .default_height(style.window_default_height)
        .child(&paned)
        .build();
    window.present();
}

fn apply_algorithm_preference(algorithm: Option<ThemeAlgorithm>) {
    if algorithm != Some(ThemeAlgorithm::Dark) {
        return;
    }
    match gtk4::Settings::default() {
        Some(settings) => settings.set_gtk_application_prefer_dark_theme(true),
        None => tracing::warn!("gtk settings unavailable; dark algorithm ignored"),
    }
}

#[derive(Debug, Default)]
pub struct App;

impl App {
    pub fn new() -> Self {
        Self
    }

    pub fn start(&self) -> AppResult<()> {
        let AppBootstrap {
            app_config,
            theme_name,
            theme_config,
        } = bootstrap_app_runtime()?;

        let application = Application::new(
            Some(APP_ID),
            gtk4::gio::ApplicationFlags::NON_UNIQUE,
        );
        let activate_once = Rc::new(Cell::new(false));
        let runtime_slot: Rc<RefCell<Option<Rc<ThemeRuntime>>>> = Rc::new(RefCell::new(None));
        {
            let runtime_slot = runtime_slot.clone();
            application.connect_activate(move |app| {
                if activate_once.replace(true) {
                    tracing::debug!("ignoring duplicate gtk activate signal");
                    return;
                }
                apply_algorithm_preference(theme_config.algorithm);
                let runtime = ThemeRuntime::new(
                    theme_name.clone(),
                    theme_config.clone(),
                    style_for(theme_config.algorithm),
                );
                build_window(app, &runtime, &app_config);
                runtime_slot.replace(Some(runtime));
            });
        }

        // Pass only argv[0] to GTK so `--theme` does not fail GTK parsing.
        let gtk_args = gtk_launch_args();
        let status = application.run_with_args(&gtk_args);
        tracing::debug!(?status, "gtk application exited");
        runtime_slot.replace(None);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_name_comes_from_file_stem() {
        assert_eq!(theme_name_for(Path::new("/tmp/brand-dark.json")), "brand-dark");
        assert_eq!(theme_name_for(Path::new("/")), DEFAULT_THEME_NAME);
    }

    #[test]
    fn compact_algorithm_tightens_layout() {
        assert_eq!(style_for(None), LAYOUT_TOKENS);
        assert_eq!(style_for(Some(ThemeAlgorithm::Dark)), LAYOUT_TOKENS);
        let compact = style_for(Some(ThemeAlgorithm::Compact));
        assert!(compact.spacing_12 < LAYOUT_TOKENS.spacing_12);
        assert_eq!(compact.panel_min_width, LAYOUT_TOKENS.panel_min_width);
    }

    #[test]
    fn demo_tokens_are_never_unused() {
        assert!(!is_unused_by_demos("colorBgContent"));
        assert!(!is_unused_by_demos("colorError"));
        assert!(is_unused_by_demos("screenXL"));
    }
}
