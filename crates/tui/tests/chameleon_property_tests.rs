//! Property-based tests for state transitions.
//!
//! Test coverage:
//! - The change listener fires exactly once per actual transition, with
//!   (new, old), and never for a repeated state
//! - Visibility after any sequence depends only on the last state
//! - The current state is always the last one shown

mod helpers;

use chameleon_config::ChameleonState;
use chameleon_tui::{Chameleon, StateVisibility};
use helpers::*;
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

fn any_state() -> impl Strategy<Value = ChameleonState> {
    proptest::sample::select(ChameleonState::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_listener_fires_once_per_transition(
        states in proptest::collection::vec(any_state(), 0..40),
    ) {
        let mut chameleon = Chameleon::default();
        chameleon.attach_content(sample_list(2)).unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        chameleon.set_state_change_listener(move |new, old| sink.borrow_mut().push((new, old)));

        let mut expected = Vec::new();
        let mut current = chameleon.state();
        for state in &states {
            chameleon.show_state(*state);
            if *state != current {
                expected.push((*state, current));
            }
            current = *state;
        }

        prop_assert_eq!(&*seen.borrow(), &expected);
        prop_assert_eq!(chameleon.state(), current);
    }

    #[test]
    fn prop_visibility_depends_only_on_last_state(
        history in proptest::collection::vec(any_state(), 0..20),
        last in any_state(),
        items in 0usize..5,
    ) {
        let mut chameleon = chameleon_with_buttons(items);
        for state in history {
            chameleon.show_state(state);
        }
        chameleon.show_state(last);

        let fresh = StateVisibility::for_state(last, chameleon.attr());
        prop_assert_eq!(chameleon.visibility(), Some(fresh));
        prop_assert_eq!(chameleon.has_no_content(), items == 0);
    }

    #[test]
    fn prop_repeated_state_is_silent(state in any_state()) {
        let mut chameleon = Chameleon::default();
        chameleon.attach_content(sample_list(1)).unwrap();
        chameleon.show_state(state);

        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        chameleon.set_state_change_listener(move |_, _| *counter.borrow_mut() += 1);
        chameleon.show_state(state);

        prop_assert_eq!(*calls.borrow(), 0);
    }
}
