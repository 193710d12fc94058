use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::navigation::{NavEvent, Navigator, Screen};
use crate::views::{
    DashboardScreen, FeedbackScreen, OnboardingScreen, PestDetectionScreen, PricingScreen,
    SoilHealthScreen, WeatherScreen,
};

/// Root component. Owns the navigator and renders exactly the screen it
/// points at; every other screen is unmounted along with its local state.
#[component]
pub fn AppShell() -> Element {
    use_hook(crate::i18n::init);

    let nav = use_signal(Navigator::new);

    // Single consumer: events are applied strictly in arrival order.
    let router = use_coroutine(move |mut rx: UnboundedReceiver<NavEvent>| {
        let mut nav = nav;
        async move {
            while let Some(event) = rx.next().await {
                match nav.with_mut(|n| n.apply(event)) {
                    Ok(t) if t.is_noop() => tracing::debug!(screen = %t.to, "navigation no-op"),
                    Ok(t) => tracing::info!(from = %t.from, to = %t.to, "screen transition"),
                    Err(err) => tracing::warn!(?event, %err, "navigation rejected"),
                }
            }
        }
    });

    let on_back = move |_: ()| router.send(NavEvent::Back);

    rsx! {
        main { class: "app",
            {match nav().current() {
                Screen::Onboarding => rsx! {
                    OnboardingScreen { on_complete: move |_| router.send(NavEvent::CompleteOnboarding) }
                },
                Screen::Dashboard => rsx! {
                    DashboardScreen { on_navigate: move |screen: Screen| router.send(NavEvent::Navigate(screen)) }
                },
                Screen::SoilHealth => rsx! { SoilHealthScreen { on_back: on_back } },
                Screen::PestDetection => rsx! { PestDetectionScreen { on_back: on_back } },
                Screen::Weather => rsx! { WeatherScreen { on_back: on_back } },
                Screen::Pricing => rsx! { PricingScreen { on_back: on_back } },
                Screen::Feedback => rsx! { FeedbackScreen { on_back: on_back } },
            }}
        }
    }
}
