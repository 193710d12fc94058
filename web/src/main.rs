use dioxus::prelude::*;

use ui::core::platform::Platform;
use ui::{AppShell, THEME_CSS};

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_hook(|| tracing::info!(platform = Platform::current().as_str(), "crop helper starting"));

    rsx! {
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Style { "{THEME_CSS}" }
        AppShell {}
    }
}
