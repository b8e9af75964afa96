//! Entry point for the Folio desktop app.

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use folio_logging::{FolioSubscriberBuilder, LogConfig};
use folio_site::components::app::App;
use folio_site::content::PROFILE;
use folio_site::SITE_CSS;

fn main() {
    // FOLIO_LOG_DIR switches to JSONL files for unattended runs
    let _log_guard = FolioSubscriberBuilder::new()
        .with_config(LogConfig::from_env())
        .init();

    let window_title = format!("{} - {}", PROFILE.name, PROFILE.title);
    tracing::info!("Starting {}", window_title);

    let wb = WindowBuilder::new()
        .with_title(&window_title)
        .with_inner_size(LogicalSize::new(1200.0, 860.0));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(wb)
                .with_custom_head(format!(r#"<style>{}</style>"#, SITE_CSS)),
        )
        .launch(App);
}
