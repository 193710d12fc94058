use ui::core::navigation::{NavEvent, NavigationError, Navigator, Screen};

/// Drive the navigator the way the shell does: one event at a time, recording
/// the screen after each applied event.
fn run(events: &[NavEvent]) -> (Navigator, Vec<Result<Screen, NavigationError>>) {
    let mut nav = Navigator::new();
    let trail = events
        .iter()
        .map(|event| nav.apply(*event).map(|t| t.to))
        .collect();
    (nav, trail)
}

#[test]
fn weather_then_pricing_visits_the_hub_between() {
    let (nav, trail) = run(&[
        NavEvent::CompleteOnboarding,
        NavEvent::Navigate(Screen::Weather),
        NavEvent::Back,
        NavEvent::Navigate(Screen::Pricing),
    ]);

    assert_eq!(
        trail,
        vec![
            Ok(Screen::Dashboard),
            Ok(Screen::Weather),
            Ok(Screen::Dashboard),
            Ok(Screen::Pricing),
        ]
    );
    assert_eq!(nav.current(), Screen::Pricing);
}

#[test]
fn rejected_events_do_not_disturb_the_sequence() {
    let (nav, trail) = run(&[
        NavEvent::CompleteOnboarding,
        NavEvent::Navigate(Screen::SoilHealth),
        NavEvent::Navigate(Screen::Feedback),
        NavEvent::Back,
        NavEvent::Navigate(Screen::Onboarding),
        NavEvent::Navigate(Screen::PestDetection),
    ]);

    assert!(matches!(
        trail[2],
        Err(NavigationError::NotFromDashboard { .. })
    ));
    assert!(matches!(trail[4], Err(NavigationError::InvalidScreen(_))));
    assert_eq!(nav.current(), Screen::PestDetection);
}

#[test]
fn back_before_onboarding_skips_to_dashboard() {
    let (nav, trail) = run(&[NavEvent::Back]);
    assert_eq!(trail, vec![Ok(Screen::Dashboard)]);
    assert_eq!(nav.current(), Screen::Dashboard);
}

#[test]
fn string_tags_parse_to_screens() {
    let mut nav = Navigator::new();
    nav.complete_onboarding();
    for tag in ["soil-health", "pest-detection", "weather", "pricing", "feedback"] {
        nav.navigate_tag(tag).unwrap();
        assert_eq!(nav.current().tag(), tag);
        nav.go_back();
    }
    assert_eq!(nav.current(), Screen::Dashboard);
}
