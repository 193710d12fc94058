#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::dpi::LogicalSize, tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::core::platform::Platform;
use ui::{AppShell, THEME_CSS};

/// Phone-sized window so the mobile-first layout renders as designed.
#[cfg(feature = "desktop")]
const WINDOW_SIZE: (f64, f64) = (420.0, 860.0);

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Crop Helper – v{}", env!("CARGO_PKG_VERSION")))
                    .with_inner_size(LogicalSize::new(WINDOW_SIZE.0, WINDOW_SIZE.1))
                    .with_resizable(true),
            ),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_hook(|| tracing::info!(platform = Platform::current().as_str(), "crop helper starting"));

    rsx! {
        // Always inline the shared theme; desktop bundles carry no asset directory.
        document::Style { "{THEME_CSS}" }
        AppShell {}
    }
}
