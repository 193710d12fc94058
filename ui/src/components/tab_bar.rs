use dioxus::prelude::*;

/// Segmented control used by the tabbed screens. Tabs are addressed by index.
#[component]
pub fn TabBar(labels: Vec<String>, active: usize, on_select: EventHandler<usize>) -> Element {
    rsx! {
        div { class: "tabs", role: "tablist",
            for (index, label) in labels.into_iter().enumerate() {
                button {
                    key: "{index}",
                    r#type: "button",
                    role: "tab",
                    class: tab_class(index == active),
                    aria_selected: index == active,
                    onclick: move |_| on_select.call(index),
                    "{label}"
                }
            }
        }
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "tabs__tab tabs__tab--active"
    } else {
        "tabs__tab"
    }
}
