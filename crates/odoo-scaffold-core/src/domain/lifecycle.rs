//! The four-state record lifecycle baked into every generated model.
//!
//! ```text
//!   draft ──confirm──▶ confirmed ──done──▶ done
//!     │                   │  ▲
//!     └─────cancel────────┤  └──reset── (from confirmed or cancelled)
//!                         ▼
//!                     cancelled
//! ```
//!
//! Each [`Transition`] becomes one model method and one form header button.
//! The button's visibility guard is derived from [`Transition::sources`], so
//! the model stub and the view can never disagree about the state machine.

use std::fmt;

use serde::Serialize;

use crate::domain::dialect::{Operator, Predicate};

/// Field on the generated model that holds the lifecycle state.
pub const STATE_FIELD: &str = "state";

/// A lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    Draft,
    Confirmed,
    Done,
    Cancelled,
}

impl State {
    /// All states in selection order.
    pub const ALL: [Self; 4] = [Self::Draft, Self::Confirmed, Self::Done, Self::Cancelled];

    /// Initial state of a new record.
    pub const INITIAL: Self = Self::Draft;

    /// Selection key stored in the database.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Confirmed => "confirmed",
            Self::Done => "done",
            Self::Cancelled => "cancelled",
        }
    }

    /// Selection label shown to users.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Confirmed => "Confirmed",
            Self::Done => "Done",
            Self::Cancelled => "Cancelled",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Cancelled)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lifecycle transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    Confirm,
    Done,
    Cancel,
    ResetToDraft,
}

impl Transition {
    /// All transitions in button order.
    pub const ALL: [Self; 4] = [Self::Confirm, Self::Done, Self::Cancel, Self::ResetToDraft];

    /// Name of the model method and of the button that calls it.
    pub const fn method(self) -> &'static str {
        match self {
            Self::Confirm => "action_confirm",
            Self::Done => "action_done",
            Self::Cancel => "action_cancel",
            Self::ResetToDraft => "action_draft",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Confirm => "Confirm",
            Self::Done => "Done",
            Self::Cancel => "Cancel",
            Self::ResetToDraft => "Reset to Draft",
        }
    }

    /// States from which this transition may fire.
    pub const fn sources(self) -> &'static [State] {
        match self {
            Self::Confirm => &[State::Draft],
            Self::Done => &[State::Confirmed],
            Self::Cancel => &[State::Draft, State::Confirmed],
            Self::ResetToDraft => &[State::Confirmed, State::Cancelled],
        }
    }

    pub const fn target(self) -> State {
        match self {
            Self::Confirm => State::Confirmed,
            Self::Done => State::Done,
            Self::Cancel => State::Cancelled,
            Self::ResetToDraft => State::Draft,
        }
    }

    /// Forward transitions get the primary button style.
    pub const fn is_primary(self) -> bool {
        matches!(self, Self::Confirm | Self::Done)
    }

    pub fn is_available_from(self, state: State) -> bool {
        self.sources().contains(&state)
    }

    /// Condition under which the button is hidden.
    ///
    /// Holds exactly for the states outside [`Self::sources`]. Each arm picks
    /// the shortest form: a single source becomes `!=`, and Cancel is phrased
    /// over its two terminal non-sources.
    pub fn hide_predicate(self) -> Predicate {
        match self {
            Self::Confirm | Self::Done => {
                Predicate::new(STATE_FIELD, Operator::Ne, state_values(self.sources()))
            }
            Self::Cancel => Predicate::new(
                STATE_FIELD,
                Operator::In,
                state_values(&[State::Done, State::Cancelled]),
            ),
            Self::ResetToDraft => {
                Predicate::new(STATE_FIELD, Operator::NotIn, state_values(self.sources()))
            }
        }
    }
}

fn state_values(states: &[State]) -> Vec<&'static str> {
    states.iter().map(|s| s.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hide_predicate_is_complement_of_sources() {
        for transition in Transition::ALL {
            let predicate = transition.hide_predicate();
            for state in State::ALL {
                assert_eq!(
                    predicate.holds(state.as_str()),
                    !transition.is_available_from(state),
                    "{transition:?} from {state}"
                );
            }
        }
    }

    #[test]
    fn terminal_states_only_leave_through_reset() {
        for state in State::ALL.into_iter().filter(|s| s.is_terminal()) {
            let exits: Vec<_> = Transition::ALL
                .into_iter()
                .filter(|t| t.is_available_from(state))
                .collect();
            match state {
                State::Done => assert!(exits.is_empty()),
                State::Cancelled => assert_eq!(exits, vec![Transition::ResetToDraft]),
                _ => unreachable!(),
            }
        }
    }

    #[test]
    fn every_non_initial_state_is_reachable() {
        for state in State::ALL.into_iter().filter(|s| *s != State::INITIAL) {
            assert!(Transition::ALL.iter().any(|t| t.target() == state), "{state}");
        }
    }

    #[test]
    fn methods_are_unique() {
        let mut methods: Vec<_> = Transition::ALL.iter().map(|t| t.method()).collect();
        methods.sort_unstable();
        methods.dedup();
        assert_eq!(methods.len(), Transition::ALL.len());
    }
}
