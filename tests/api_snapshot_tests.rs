use approx::assert_relative_eq;
use deck_rs::api::{
    NAVIGATOR_SNAPSHOT_JSON_SCHEMA_V1, NavigatorSnapshot, NavigatorSnapshotJsonContractV1,
    SlideNavigator,
};
use deck_rs::core::{Deck, SlideKind, TransitionDirection};
use deck_rs::interaction::WheelBehavior;
use deck_rs::render::NullPresenter;
use deck_rs::{DeckError, NavigatorConfig};

fn navigator() -> SlideNavigator<NullPresenter> {
    let deck = Deck::from_kinds([SlideKind::Title, SlideKind::Content, SlideKind::Content])
        .expect("deck");
    SlideNavigator::with_defaults(NullPresenter::default(), deck).expect("navigator init")
}

#[test]
fn config_json_roundtrip_preserves_tuning() {
    let config = NavigatorConfig::default()
        .with_transition_duration_ms(250.0)
        .with_wheel_behavior(WheelBehavior {
            threshold: 80.0,
            idle_reset_ms: 200.0,
        })
        .with_swipe_threshold_px(30.0)
        .with_dimmed_control_opacity(0.4);

    let json = config.to_json_pretty().expect("serialize");
    let restored = NavigatorConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored, config);
}

#[test]
fn config_json_fills_missing_fields_with_defaults() {
    let config = NavigatorConfig::from_json_str(r#"{"transition_duration_ms": 600}"#)
        .expect("parse");
    assert_relative_eq!(config.transition_duration_ms, 600.0);
    assert_eq!(config.wheel, WheelBehavior::default());
    assert_relative_eq!(config.swipe_threshold_px, 50.0);
    assert_relative_eq!(config.dimmed_control_opacity, 0.3);
}

#[test]
fn invalid_config_is_rejected() {
    let err = NavigatorConfig::from_json_str(r#"{"dimmed_control_opacity": 1.5}"#)
        .expect_err("opacity out of range");
    assert!(matches!(err, DeckError::InvalidConfig(_)));

    let deck = Deck::uniform(2).expect("deck");
    let config = NavigatorConfig::default().with_wheel_behavior(WheelBehavior {
        threshold: 0.0,
        idle_reset_ms: 150.0,
    });
    let err = SlideNavigator::new(NullPresenter::default(), deck, config)
        .err()
        .expect("zero wheel threshold");
    assert!(matches!(err, DeckError::InvalidConfig(_)));
}

#[test]
fn empty_deck_is_rejected() {
    let err = Deck::uniform(0).expect_err("empty deck");
    assert!(matches!(err, DeckError::InvalidDeck(_)));
    assert!(serde_json::from_str::<Deck>("[]").is_err());
}

#[test]
fn snapshot_captures_navigation_state() {
    let mut nav = navigator();
    nav.tick(100.0).expect("tick");
    nav.handle_wheel(20.0).expect("wheel");
    nav.go_to_slide(3).expect("navigate");

    let snapshot = nav.snapshot().expect("snapshot");
    assert_eq!(snapshot.current_slide, 3);
    assert!(snapshot.is_animating);
    assert_relative_eq!(snapshot.scroll_accumulator, 20.0);
    assert_relative_eq!(snapshot.progress_percent, 100.0);
    assert_eq!(snapshot.last_direction, Some(TransitionDirection::Forward));
    assert_eq!(snapshot.pending.scroll_reset_ms, Some(250.0));
    assert_eq!(snapshot.pending.transition_unlock_ms, Some(500.0));
    assert_eq!(snapshot.frame_generation, 2);
    assert!(snapshot.deck.is_title(1));
}

#[test]
fn snapshot_contract_v1_is_versioned_and_compatible() {
    let mut nav = navigator();
    nav.next_slide().expect("advance");

    let json = nav.snapshot_json_contract_v1_pretty().expect("contract");
    let payload: NavigatorSnapshotJsonContractV1 =
        serde_json::from_str(&json).expect("contract payload");
    assert_eq!(payload.schema_version, NAVIGATOR_SNAPSHOT_JSON_SCHEMA_V1);

    let from_contract = NavigatorSnapshot::from_json_compat_str(&json).expect("compat contract");
    let bare = nav.snapshot_json_pretty().expect("bare snapshot");
    let from_bare = NavigatorSnapshot::from_json_compat_str(&bare).expect("compat bare");
    assert_eq!(from_contract, from_bare);
    assert_eq!(from_contract, nav.snapshot().expect("snapshot"));
}

#[test]
fn unknown_snapshot_schema_version_is_rejected() {
    let nav = navigator();
    let snapshot = nav.snapshot().expect("snapshot");
    let payload = NavigatorSnapshotJsonContractV1 {
        schema_version: 99,
        snapshot,
    };
    let json = serde_json::to_string(&payload).expect("serialize");
    assert!(NavigatorSnapshot::from_json_compat_str(&json).is_err());
}
