//! Reducers: pure state transitions.

use crate::store::action::Action;
use crate::store::state::{AppState, EntitlementsState, FetchState, ModalState, StoreState};

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen. It must
/// be a pure function: `(State, Action) -> State`. Actions a reducer does
/// not care about return the input unchanged.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: StoreState;

    /// The action type this reducer handles.
    type Action;

    /// Process an action and return the new state.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}

/// Reducer for the entitlement collection.
///
/// Success replaces the collection wholesale; failure leaves it untouched
/// (the failure is surfaced by the modal reducer instead).
pub struct EntitlementsReducer;

impl Reducer for EntitlementsReducer {
    type State = EntitlementsState;
    type Action = Action;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            Action::FetchSucceeded {
                username,
                entitlements,
                ..
            } => EntitlementsState {
                items: entitlements,
                for_user: Some(username),
            },
            _ => state,
        }
    }
}

/// Reducer for the modal overlay.
pub struct ModalReducer;

impl Reducer for ModalReducer {
    type State = ModalState;
    type Action = Action;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            Action::FetchFailed { error, .. } => ModalState::Error { message: error },
            // A fresh result set dismisses a stale error, but a detail
            // modal the operator opened stays put.
            Action::FetchSucceeded { .. } => match state {
                ModalState::Error { .. } => ModalState::Hidden,
                other => other,
            },
            Action::ShowEntitlement { index } => ModalState::Detail { index },
            Action::CloseModal => ModalState::Hidden,
        }
    }
}

/// Root reducer: drops superseded fetch reports, then delegates to the
/// slice reducers.
pub struct AppReducer;

impl AppReducer {
    /// Generation carried by a fetch outcome, if the action is one.
    fn fetch_generation(action: &Action) -> Option<u64> {
        match action {
            Action::FetchSucceeded { generation, .. } | Action::FetchFailed { generation, .. } => {
                Some(*generation)
            }
            _ => None,
        }
    }
}

impl Reducer for AppReducer {
    type State = AppState;
    type Action = Action;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        let fetch = match Self::fetch_generation(&action) {
            // A report from a submit that has been superseded by a newer
            // one is dropped entirely: the newest submit wins no matter
            // which response arrives first. Equal generations pass, so
            // re-dispatching an action stays idempotent.
            Some(generation) if generation < state.fetch.latest_seen => return state,
            Some(generation) => FetchState {
                latest_seen: generation,
            },
            None => state.fetch,
        };

        AppState {
            entitlements: EntitlementsReducer::reduce(state.entitlements, action.clone()),
            modal: ModalReducer::reduce(state.modal, action),
            fetch,
        }
    }
}
