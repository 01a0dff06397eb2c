//! Controller invariants under random input.

use proptest::prelude::*;

use super::common::{ms, palette};
use glint::{Activation, Key, Phase, PanelState};

#[derive(Debug, Clone)]
enum Input {
    Open,
    Close,
    Toggle,
    OutsideClick,
    Type(String),
    Wait(u64),
    Press(Key),
}

fn key_strategy() -> impl Strategy<Value = Key> {
    prop::sample::select(vec![
        Key::ArrowDown,
        Key::ArrowUp,
        Key::Home,
        Key::End,
        Key::Enter,
        Key::Escape,
        Key::Other,
    ])
}

fn input_strategy() -> impl Strategy<Value = Input> {
    prop_oneof![
        1 => Just(Input::Open),
        1 => Just(Input::Close),
        1 => Just(Input::Toggle),
        1 => Just(Input::OutsideClick),
        3 => prop::string::string_regex("[a-z ]{0,8}").unwrap().prop_map(Input::Type),
        2 => (0..400u64).prop_map(Input::Wait),
        6 => key_strategy().prop_map(Input::Press),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Whatever happens, the selection points at a visible row or nowhere,
    /// and a closed palette holds no state.
    #[test]
    fn prop_selection_stays_in_bounds(inputs in prop::collection::vec(input_strategy(), 0..40)) {
        let mut p = palette();
        let mut now = 0u64;

        for input in inputs {
            match input {
                Input::Open => p.open(),
                Input::Close => p.close(),
                Input::Toggle => p.toggle(),
                Input::OutsideClick => {
                    p.outside_click();
                }
                Input::Type(text) => p.set_query(&text, ms(now)),
                Input::Wait(delay) => now += delay,
                Input::Press(key) => {
                    p.handle_key(key);
                }
            }
            p.tick(ms(now));

            if let Some(i) = p.selection() {
                prop_assert!(i < p.results().len());
            }
            prop_assert!(p.results().len() <= 5);
            if p.state() == PanelState::Closed {
                prop_assert_eq!(p.query(), "");
                prop_assert_eq!(p.selection(), None);
                prop_assert!(p.results().is_empty());
                prop_assert_eq!(p.next_deadline(), None);
            }
        }
    }

    /// Arrow presses clamp: ArrowDown never moves past the last row and
    /// ArrowUp never past the first.
    #[test]
    fn prop_arrows_clamp(keys in prop::collection::vec(
        prop::sample::select(vec![Key::ArrowDown, Key::ArrowUp]), 0..30,
    )) {
        let mut p = palette();
        p.open();
        let len = p.results().len();
        let mut expected: Option<usize> = None;

        for key in keys {
            p.handle_key(key);
            expected = match (key, expected) {
                (Key::ArrowDown, None) => Some(0),
                (Key::ArrowDown, Some(i)) => Some((i + 1).min(len - 1)),
                (_, None) => None,
                (_, Some(i)) => Some(i.saturating_sub(1)),
            };
            prop_assert_eq!(p.selection(), expected);
        }
    }

    /// Escape always lands in a clean closed state, from anywhere.
    #[test]
    fn prop_escape_resets(query in "[a-z ]{0,10}", downs in 0..6usize, settle in any::<bool>()) {
        let mut p = palette();
        p.open();
        p.set_query(&query, ms(0));
        if settle {
            p.tick(ms(1000));
        }
        for _ in 0..downs {
            p.handle_key(Key::ArrowDown);
        }

        prop_assert_eq!(p.handle_key(Key::Escape), Activation::Closed);
        prop_assert_eq!(p.query(), "");
        prop_assert_eq!(p.selection(), None);

        p.open();
        prop_assert_eq!(p.state(), PanelState::Open(Phase::Empty));
        prop_assert_eq!(p.query(), "");
    }
}
