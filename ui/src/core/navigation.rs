//! Screen navigation controller.
//!
//! The app shows exactly one screen at a time. `Navigator` owns that single
//! value and every change goes through [`Navigator::apply`], which the shell
//! feeds from one coroutine channel so transitions never interleave.
//!
//! Navigation is hub-and-spoke rather than a history stack:
//!
//! ```text
//! onboarding --complete--> dashboard --navigate(X)--> X
//!                              ^                      |
//!                              +--------back----------+
//! ```
//!
//! Detail screens carry no memory of how they were reached; `back` always
//! lands on the dashboard. Onboarding is only ever the initial state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every screen the app can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Onboarding,
    Dashboard,
    SoilHealth,
    PestDetection,
    Weather,
    Pricing,
    Feedback,
}

impl Screen {
    pub const ALL: [Screen; 7] = [
        Screen::Onboarding,
        Screen::Dashboard,
        Screen::SoilHealth,
        Screen::PestDetection,
        Screen::Weather,
        Screen::Pricing,
        Screen::Feedback,
    ];

    /// Screens reachable from the dashboard, each returning to it on back.
    pub const DETAILS: [Screen; 5] = [
        Screen::SoilHealth,
        Screen::PestDetection,
        Screen::Weather,
        Screen::Pricing,
        Screen::Feedback,
    ];

    /// Canonical kebab-case identifier.
    pub fn tag(self) -> &'static str {
        match self {
            Screen::Onboarding => "onboarding",
            Screen::Dashboard => "dashboard",
            Screen::SoilHealth => "soil-health",
            Screen::PestDetection => "pest-detection",
            Screen::Weather => "weather",
            Screen::Pricing => "pricing",
            Screen::Feedback => "feedback",
        }
    }

    pub fn is_detail(self) -> bool {
        Self::DETAILS.contains(&self)
    }

    /// Valid `navigate` targets: the dashboard plus the detail screens.
    pub fn is_destination(self) -> bool {
        self != Screen::Onboarding
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Screen {
    type Err = NavigationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Screen::ALL
            .into_iter()
            .find(|screen| screen.tag() == raw)
            .ok_or_else(|| NavigationError::InvalidScreen(raw.to_string()))
    }
}

/// Reasons a navigation request is refused. State is never modified when one
/// of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The identifier is unknown or not a valid destination.
    #[error("invalid screen identifier `{0}`")]
    InvalidScreen(String),
    /// Forward navigation is only offered by the dashboard.
    #[error("cannot navigate to `{to}` from `{from}`; destinations are only reachable from the dashboard")]
    NotFromDashboard { from: Screen, to: Screen },
}

/// A request to change the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    CompleteOnboarding,
    Navigate(Screen),
    Back,
}

/// An applied state change. `from == to` for no-op transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Screen,
    pub to: Screen,
}

impl Transition {
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// Owner of the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current: Screen,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            current: Screen::Onboarding,
        }
    }

    #[must_use]
    pub fn current(&self) -> Screen {
        self.current
    }

    /// Apply one event. This is the only place the current screen changes.
    pub fn apply(&mut self, event: NavEvent) -> Result<Transition, NavigationError> {
        let from = self.current;
        let to = match event {
            NavEvent::CompleteOnboarding => Screen::Dashboard,
            NavEvent::Back => Screen::Dashboard,
            NavEvent::Navigate(target) => {
                if !target.is_destination() {
                    return Err(NavigationError::InvalidScreen(target.tag().to_string()));
                }
                if from != Screen::Dashboard {
                    return Err(NavigationError::NotFromDashboard { from, to: target });
                }
                target
            }
        };

        self.current = to;
        Ok(Transition { from, to })
    }

    pub fn navigate(&mut self, target: Screen) -> Result<Transition, NavigationError> {
        self.apply(NavEvent::Navigate(target))
    }

    /// Navigate by string identifier, e.g. `"pest-detection"`.
    pub fn navigate_tag(&mut self, tag: &str) -> Result<Transition, NavigationError> {
        let target: Screen = tag.parse()?;
        self.navigate(target)
    }

    pub fn go_back(&mut self) -> Transition {
        self.transition_to_hub()
    }

    /// Permissive: forces the dashboard from any state.
    pub fn complete_onboarding(&mut self) -> Transition {
        self.transition_to_hub()
    }

    fn transition_to_hub(&mut self) -> Transition {
        let from = self.current;
        self.current = Screen::Dashboard;
        Transition {
            from,
            to: Screen::Dashboard,
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const EVENTS: [NavEvent; 9] = [
        NavEvent::CompleteOnboarding,
        NavEvent::Back,
        NavEvent::Navigate(Screen::Onboarding),
        NavEvent::Navigate(Screen::Dashboard),
        NavEvent::Navigate(Screen::SoilHealth),
        NavEvent::Navigate(Screen::PestDetection),
        NavEvent::Navigate(Screen::Weather),
        NavEvent::Navigate(Screen::Pricing),
        NavEvent::Navigate(Screen::Feedback),
    ];

    fn at(screen: Screen) -> Navigator {
        let mut nav = Navigator::new();
        nav.complete_onboarding();
        if screen != Screen::Dashboard {
            nav.navigate(screen).unwrap();
        }
        nav
    }

    #[test]
    fn starts_at_onboarding() {
        assert_eq!(Navigator::new().current(), Screen::Onboarding);
        assert_eq!(Navigator::default().current(), Screen::Onboarding);
    }

    #[test]
    fn completing_onboarding_lands_on_dashboard() {
        let mut nav = Navigator::new();
        let t = nav.complete_onboarding();
        assert_eq!(t.from, Screen::Onboarding);
        assert_eq!(nav.current(), Screen::Dashboard);
    }

    #[test]
    fn complete_onboarding_is_permissive_from_any_state() {
        for screen in Screen::DETAILS {
            let mut nav = at(screen);
            nav.complete_onboarding();
            assert_eq!(nav.current(), Screen::Dashboard);
        }
        let mut nav = at(Screen::Dashboard);
        assert!(nav.complete_onboarding().is_noop());
    }

    #[test]
    fn dashboard_reaches_every_detail_screen() {
        for screen in Screen::DETAILS {
            let mut nav = at(Screen::Dashboard);
            let t = nav.navigate(screen).unwrap();
            assert_eq!(t, Transition { from: Screen::Dashboard, to: screen });
            assert_eq!(nav.current(), screen);
        }
    }

    #[test]
    fn back_always_returns_to_dashboard() {
        for screen in Screen::DETAILS {
            let mut nav = at(screen);
            let t = nav.go_back();
            assert_eq!(t.from, screen);
            assert_eq!(nav.current(), Screen::Dashboard);
        }
    }

    #[test]
    fn navigate_to_dashboard_from_dashboard_is_noop() {
        let mut nav = at(Screen::Dashboard);
        let t = nav.navigate(Screen::Dashboard).unwrap();
        assert!(t.is_noop());
        assert_eq!(nav.current(), Screen::Dashboard);
    }

    #[test]
    fn onboarding_is_never_a_destination() {
        let mut nav = at(Screen::Dashboard);
        let err = nav.navigate(Screen::Onboarding).unwrap_err();
        assert_eq!(err, NavigationError::InvalidScreen("onboarding".into()));
        assert_eq!(nav.current(), Screen::Dashboard);
    }

    #[test]
    fn unknown_tag_is_rejected_without_state_change() {
        let mut nav = at(Screen::Dashboard);
        let err = nav.navigate_tag("not-a-screen").unwrap_err();
        assert_eq!(err, NavigationError::InvalidScreen("not-a-screen".into()));
        assert_eq!(nav.current(), Screen::Dashboard);
    }

    #[test]
    fn navigate_tag_accepts_kebab_identifiers() {
        let mut nav = at(Screen::Dashboard);
        nav.navigate_tag("pest-detection").unwrap();
        assert_eq!(nav.current(), Screen::PestDetection);
    }

    #[test]
    fn detail_screens_cannot_navigate_sideways() {
        let mut nav = at(Screen::Weather);
        let err = nav.navigate(Screen::Pricing).unwrap_err();
        assert_eq!(
            err,
            NavigationError::NotFromDashboard {
                from: Screen::Weather,
                to: Screen::Pricing
            }
        );
        assert_eq!(nav.current(), Screen::Weather);
    }

    #[test]
    fn no_event_moves_between_two_detail_screens() {
        // Explore every state reachable from the initial one and check each edge.
        let mut seen = HashSet::new();
        let mut frontier = vec![Navigator::new()];
        while let Some(nav) = frontier.pop() {
            if !seen.insert(nav.current()) {
                continue;
            }
            for event in EVENTS {
                let mut next = nav.clone();
                match next.apply(event) {
                    Ok(t) => {
                        assert_eq!(t.from, nav.current());
                        assert_eq!(t.to, next.current());
                        assert!(
                            !(t.from.is_detail() && t.to.is_detail() && t.from != t.to),
                            "{event:?} moved {} -> {}",
                            t.from,
                            t.to
                        );
                        assert_ne!(t.to, Screen::Onboarding);
                        frontier.push(next);
                    }
                    Err(_) => assert_eq!(next, nav),
                }
            }
        }
        assert_eq!(seen.len(), Screen::ALL.len());
    }

    #[test]
    fn weather_then_pricing_round_trip() {
        let mut nav = Navigator::new();
        let mut observed = Vec::new();

        nav.apply(NavEvent::CompleteOnboarding).unwrap();
        observed.push(nav.current());
        nav.apply(NavEvent::Navigate(Screen::Weather)).unwrap();
        observed.push(nav.current());
        nav.apply(NavEvent::Back).unwrap();
        observed.push(nav.current());
        nav.apply(NavEvent::Navigate(Screen::Pricing)).unwrap();

        assert_eq!(
            observed,
            vec![Screen::Dashboard, Screen::Weather, Screen::Dashboard]
        );
        assert_eq!(nav.current(), Screen::Pricing);
    }

    #[test]
    fn tags_round_trip_through_display_and_serde() {
        for screen in Screen::ALL {
            assert_eq!(screen.to_string().parse::<Screen>().unwrap(), screen);
            let json = serde_json::to_string(&screen).unwrap();
            assert_eq!(json, format!("\"{}\"", screen.tag()));
        }
    }
}
