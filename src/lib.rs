pub mod app;
mod config;
pub mod demos;
pub mod error;
pub mod logging;
pub mod panel;
pub mod theme;
pub mod token;
pub mod ui;
pub use error::{AppError, AppResult};

/// Entrypoint used by the `swatchbook` binary.
pub fn run() -> AppResult<()> {
    logging::init();
    tracing::info!("starting swatchbook");

    let app = app::App::new();
    app.start()?;

    tracing::info!("previewer closed");
    Ok(())
}
