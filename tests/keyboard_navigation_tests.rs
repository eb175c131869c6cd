use deck_rs::api::{IgnoreReason, NavigationOutcome, SlideNavigator};
use deck_rs::core::Deck;
use deck_rs::render::NullPresenter;

fn navigator(total: usize) -> SlideNavigator<NullPresenter> {
    let deck = Deck::uniform(total).expect("deck");
    SlideNavigator::with_defaults(NullPresenter::default(), deck).expect("navigator init")
}

fn press(nav: &mut SlideNavigator<NullPresenter>, key: &str) -> bool {
    let response = nav.handle_key(key).expect("key");
    let now = nav.now_ms() + 400.0;
    nav.tick(now).expect("settle");
    response.prevent_default
}

#[test]
fn forward_keys_advance() {
    let mut nav = navigator(5);
    for key in ["ArrowRight", "ArrowDown", " "] {
        assert!(press(&mut nav, key), "`{key}` should be handled");
    }
    assert_eq!(nav.current_slide(), 4);
}

#[test]
fn backward_keys_go_back() {
    let mut nav = navigator(5);
    nav.last_slide().expect("last");
    nav.tick(400.0).expect("settle");

    assert!(press(&mut nav, "ArrowLeft"));
    assert!(press(&mut nav, "ArrowUp"));
    assert_eq!(nav.current_slide(), 3);
}

#[test]
fn home_and_end_jump_to_deck_edges() {
    let mut nav = navigator(7);
    assert!(press(&mut nav, "End"));
    assert_eq!(nav.current_slide(), 7);
    assert!(press(&mut nav, "Home"));
    assert_eq!(nav.current_slide(), 1);
}

#[test]
fn unrelated_keys_are_not_handled() {
    let mut nav = navigator(3);
    let response = nav.handle_key("Enter").expect("key");
    assert!(!response.prevent_default);
    assert_eq!(response.outcome, None);
    assert_eq!(nav.current_slide(), 1);
}

#[test]
fn navigation_keys_stay_handled_at_edges() {
    let mut nav = navigator(3);
    let response = nav.handle_key("ArrowLeft").expect("key");
    assert!(response.prevent_default);
    assert_eq!(
        response.outcome,
        Some(NavigationOutcome::Ignored {
            target: 0,
            reason: IgnoreReason::OutOfRange,
        })
    );
}
