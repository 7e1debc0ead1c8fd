//! Actions: plain data records consumed by the reducers.

use crate::entitlements::Entitlement;

/// Everything that can be dispatched to the store.
///
/// Fetch outcomes are produced by the effect runner; the rest come straight
/// from key handling. Every variant is inert data; constructing an action
/// has no side effects.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The gateway resolved; the payload replaces the collection.
    FetchSucceeded {
        username: String,
        generation: u64,
        entitlements: Vec<Entitlement>,
    },
    /// The gateway failed. Transport, status, and decode errors all land here.
    FetchFailed {
        username: String,
        generation: u64,
        error: String,
    },
    /// Open the detail modal for one row of the results table.
    ShowEntitlement { index: usize },
    /// Dismiss whichever modal is open.
    CloseModal,
}
