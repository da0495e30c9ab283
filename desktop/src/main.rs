#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::core::config::DashboardConfig;
use ui::views::Dashboard;

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme, embedded so the binary has no stylesheet to ship.

/// Optional JSON override for the dashboard settings, read at startup.
const CONFIG_ENV: &str = "BASEPATH_CONFIG";

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Basepath – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);
    use_context_provider(load_config);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            AppNavbar {}
            Dashboard {}
        }
    }
}

/// Defaults, unless `BASEPATH_CONFIG` names a readable JSON file. A relative
/// dataset source is looked up in the same resource directory as the webview.
fn load_config() -> DashboardConfig {
    #[allow(unused_mut)]
    let mut config = read_config_override().unwrap_or_default();
    #[cfg(feature = "desktop")]
    {
        let resource_dir = resolve_resource_dir();
        let source = ui::core::platform::resolve_in(&config.dataset.source, &resource_dir);
        config.dataset.source = source.to_string_lossy().into_owned();
    }
    tracing::debug!(source = %config.dataset.source, "dataset source resolved");
    config
}

fn read_config_override() -> Option<DashboardConfig> {
    let path = std::env::var(CONFIG_ENV).ok()?;
    match std::fs::read_to_string(&path)
        .map_err(|err| err.to_string())
        .and_then(|json| DashboardConfig::from_json(&json).map_err(|err| err.to_string()))
    {
        Ok(config) => {
            tracing::info!(%path, "dashboard config loaded");
            Some(config)
        }
        Err(err) => {
            tracing::warn!(%path, %err, "ignoring unreadable dashboard config");
            None
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}
