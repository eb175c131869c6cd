use deck_rs::api::SlideNavigator;
use deck_rs::core::Deck;
use deck_rs::interaction::InputEvent;
use deck_rs::render::NullPresenter;
use proptest::prelude::*;

fn input_event_strategy() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        prop::sample::select(vec![
            "ArrowRight", "ArrowLeft", "ArrowUp", "ArrowDown", " ", "Home", "End", "a"
        ])
        .prop_map(|key| InputEvent::Key { key: key.to_owned() }),
        (-120.0f64..120.0).prop_map(|delta_y| InputEvent::Wheel { delta_y }),
        (0.0f64..800.0, 0.0f64..600.0).prop_map(|(x, y)| InputEvent::TouchStart { x, y }),
        (0.0f64..800.0, 0.0f64..600.0).prop_map(|(x, y)| InputEvent::TouchEnd { x, y }),
        Just(InputEvent::PrevButton),
        Just(InputEvent::NextButton),
        (0usize..12).prop_map(|slide| InputEvent::Dot { slide }),
    ]
}

proptest! {
    #[test]
    fn random_input_keeps_navigator_consistent(
        total in 1usize..10,
        steps in prop::collection::vec((input_event_strategy(), 0.0f64..500.0), 1..64),
    ) {
        let deck = Deck::uniform(total).expect("deck");
        let mut nav = SlideNavigator::with_defaults(NullPresenter::default(), deck)
            .expect("navigator init");
        let mut now = 0.0;

        for (event, gap) in steps {
            now += gap;
            nav.tick(now).expect("tick");
            let before = nav.current_slide();
            let response = nav.dispatch(&event).expect("dispatch");

            let current = nav.current_slide();
            prop_assert!((1..=total).contains(&current));
            if response.moved() {
                prop_assert_ne!(before, current);
                prop_assert!(nav.is_animating());
            } else {
                prop_assert_eq!(before, current);
            }

            let frame = nav.frame().expect("frame");
            prop_assert_eq!(frame.active_slide_count(), 1);
            prop_assert_eq!(frame.active_dot, current);
            prop_assert!((0.0..=100.0).contains(&frame.progress_percent));
        }
    }

    #[test]
    fn wheel_never_navigates_below_threshold(deltas in prop::collection::vec(-9.0f64..9.0, 1..5)) {
        let deck = Deck::uniform(5).expect("deck");
        let mut nav = SlideNavigator::with_defaults(NullPresenter::default(), deck)
            .expect("navigator init");
        for delta in deltas {
            prop_assert_eq!(nav.handle_wheel(delta).expect("wheel"), None);
        }
        prop_assert_eq!(nav.current_slide(), 1);
    }
}
