use dioxus::prelude::*;

use crate::t;

/// Title bar shared by the detail screens.
///
/// The back button is the screen's only way out; it always leads to the
/// dashboard. `trailing` is an optional icon button on the right and
/// `children` render below the title row (location pickers, search boxes).
#[component]
pub fn ScreenHeader(
    title: String,
    subtitle: String,
    on_back: EventHandler<()>,
    #[props(default)] trailing: String,
    #[props(default = VNode::empty())] children: Element,
) -> Element {
    let back_label = t!("nav-back");

    rsx! {
        header { class: "screen-header",
            div { class: "screen-header__row",
                button {
                    r#type: "button",
                    class: "screen-header__back",
                    aria_label: "{back_label}",
                    onclick: move |_| on_back.call(()),
                    "←"
                }
                div { class: "screen-header__titles",
                    h1 { class: "screen-header__title", "{title}" }
                    p { class: "screen-header__subtitle", "{subtitle}" }
                }
                if !trailing.is_empty() {
                    button { r#type: "button", class: "screen-header__action", "{trailing}" }
                }
            }
            {children}
        }
    }
}
