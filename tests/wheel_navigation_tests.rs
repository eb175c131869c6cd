use approx::assert_abs_diff_eq;
use deck_rs::NavigatorConfig;
use deck_rs::api::SlideNavigator;
use deck_rs::core::Deck;
use deck_rs::interaction::WheelBehavior;
use deck_rs::render::NullPresenter;

/// Five-slide deck parked on slide 2 with the transition lock released at t=400.
fn navigator_on_slide_two() -> SlideNavigator<NullPresenter> {
    let deck = Deck::uniform(5).expect("deck");
    let mut nav =
        SlideNavigator::with_defaults(NullPresenter::default(), deck).expect("navigator init");
    nav.go_to_slide(2).expect("move to slide 2");
    nav.tick(400.0).expect("release lock");
    nav
}

fn feed(nav: &mut SlideNavigator<NullPresenter>, start_ms: f64, deltas: &[f64]) {
    for (offset, delta) in deltas.iter().enumerate() {
        nav.tick(start_ms + offset as f64 * 10.0).expect("tick");
        nav.handle_wheel(*delta).expect("wheel");
    }
}

#[test]
fn burst_crossing_threshold_advances_exactly_once() {
    let mut nav = navigator_on_slide_two();
    feed(&mut nav, 400.0, &[20.0, 20.0, 20.0]);

    assert_eq!(nav.current_slide(), 3);
    assert_abs_diff_eq!(nav.scroll_accumulator(), 0.0);
}

#[test]
fn burst_below_threshold_does_not_navigate() {
    let mut nav = navigator_on_slide_two();
    feed(&mut nav, 400.0, &[20.0, 20.0]);

    assert_eq!(nav.current_slide(), 2);
    assert_abs_diff_eq!(nav.scroll_accumulator(), 40.0);
}

#[test]
fn negative_burst_goes_back() {
    let mut nav = navigator_on_slide_two();
    feed(&mut nav, 400.0, &[-30.0, -30.0]);
    assert_eq!(nav.current_slide(), 1);
}

#[test]
fn idle_gap_discards_partial_accumulation() {
    let mut nav = navigator_on_slide_two();
    feed(&mut nav, 400.0, &[30.0]);
    assert_abs_diff_eq!(nav.scroll_accumulator(), 30.0);

    nav.tick(550.0).expect("idle tick");
    assert_abs_diff_eq!(nav.scroll_accumulator(), 0.0);

    feed(&mut nav, 600.0, &[30.0]);
    assert_eq!(nav.current_slide(), 2);
}

#[test]
fn continued_input_keeps_accumulation_alive() {
    let mut nav = navigator_on_slide_two();
    nav.tick(400.0).expect("tick");
    nav.handle_wheel(15.0).expect("wheel");
    nav.tick(540.0).expect("tick");
    nav.handle_wheel(15.0).expect("wheel");
    nav.tick(680.0).expect("tick");
    nav.handle_wheel(15.0).expect("wheel");
    assert_abs_diff_eq!(nav.scroll_accumulator(), 45.0);

    nav.tick(820.0).expect("tick");
    nav.handle_wheel(15.0).expect("wheel");
    assert_eq!(nav.current_slide(), 3);
}

#[test]
fn wheel_is_ignored_during_transition() {
    let mut nav = navigator_on_slide_two();
    nav.tick(400.0).expect("tick");
    nav.handle_wheel(60.0).expect("wheel");
    assert_eq!(nav.current_slide(), 3);
    assert!(nav.is_animating());

    nav.tick(450.0).expect("tick");
    assert_eq!(nav.handle_wheel(200.0).expect("wheel during lock"), None);
    assert_abs_diff_eq!(nav.scroll_accumulator(), 0.0);
    assert_eq!(nav.current_slide(), 3);
}

#[test]
fn custom_threshold_is_respected() {
    let deck = Deck::uniform(3).expect("deck");
    let config = NavigatorConfig::default().with_wheel_behavior(WheelBehavior {
        threshold: 100.0,
        idle_reset_ms: 150.0,
    });
    let mut nav = SlideNavigator::new(NullPresenter::default(), deck, config).expect("init");

    nav.handle_wheel(60.0).expect("wheel");
    assert_eq!(nav.current_slide(), 1);
    nav.handle_wheel(40.0).expect("wheel");
    assert_eq!(nav.current_slide(), 2);
}

#[test]
fn non_finite_delta_is_an_error() {
    let mut nav = navigator_on_slide_two();
    assert!(nav.handle_wheel(f64::NAN).is_err());
    assert_eq!(nav.current_slide(), 2);
}
