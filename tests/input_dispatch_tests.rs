use deck_rs::api::{IgnoreReason, NavigationOutcome, SlideNavigator};
use deck_rs::core::Deck;
use deck_rs::interaction::InputEvent;
use deck_rs::render::NullPresenter;

fn navigator(total: usize) -> SlideNavigator<NullPresenter> {
    let deck = Deck::uniform(total).expect("deck");
    SlideNavigator::with_defaults(NullPresenter::default(), deck).expect("navigator init")
}

#[test]
fn input_events_parse_from_tagged_json() {
    let events: Vec<InputEvent> = serde_json::from_str(
        r#"[
            {"type": "key", "key": "ArrowRight"},
            {"type": "wheel", "delta_y": 42.5},
            {"type": "touch_start", "x": 10, "y": 20},
            {"type": "touch_end", "x": 90, "y": 20},
            {"type": "prev_button"},
            {"type": "next_button"},
            {"type": "dot", "slide": 3}
        ]"#,
    )
    .expect("events");

    assert_eq!(
        events,
        vec![
            InputEvent::Key {
                key: "ArrowRight".to_owned()
            },
            InputEvent::Wheel { delta_y: 42.5 },
            InputEvent::TouchStart { x: 10.0, y: 20.0 },
            InputEvent::TouchEnd { x: 90.0, y: 20.0 },
            InputEvent::PrevButton,
            InputEvent::NextButton,
            InputEvent::Dot { slide: 3 },
        ]
    );
}

#[test]
fn buttons_and_dots_navigate() {
    let mut nav = navigator(5);

    let response = nav.dispatch(&InputEvent::NextButton).expect("next");
    assert!(response.moved());
    assert!(!response.prevent_default);
    nav.tick(400.0).expect("settle");

    assert!(nav.dispatch(&InputEvent::Dot { slide: 5 }).expect("dot").moved());
    assert_eq!(nav.current_slide(), 5);
    nav.tick(800.0).expect("settle");

    assert!(nav.dispatch(&InputEvent::PrevButton).expect("prev").moved());
    assert_eq!(nav.current_slide(), 4);
}

#[test]
fn clicking_active_dot_is_ignored() {
    let mut nav = navigator(3);
    let response = nav.dispatch(&InputEvent::Dot { slide: 1 }).expect("dot");
    assert_eq!(
        response.outcome,
        Some(NavigationOutcome::Ignored {
            target: 1,
            reason: IgnoreReason::AlreadyActive,
        })
    );
}

#[test]
fn touch_events_pair_through_dispatch() {
    let mut nav = navigator(3);
    let start = nav
        .dispatch(&InputEvent::TouchStart { x: 200.0, y: 50.0 })
        .expect("touch start");
    assert_eq!(start.outcome, None);

    let end = nav
        .dispatch(&InputEvent::TouchEnd { x: 100.0, y: 60.0 })
        .expect("touch end");
    assert!(end.moved());
    assert_eq!(nav.current_slide(), 2);
}

#[test]
fn key_dispatch_reports_prevent_default() {
    let mut nav = navigator(3);
    let response = nav
        .dispatch(&InputEvent::Key {
            key: "End".to_owned(),
        })
        .expect("key");
    assert!(response.prevent_default);
    assert_eq!(nav.current_slide(), 3);
}
