//! State types held by the store.

use crate::entitlements::Entitlement;

/// Marker trait for store state.
///
/// State values should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait StoreState: Clone + PartialEq + Default + Send + 'static {}

/// Root application state. Created once at startup with an empty
/// entitlement collection; lives for the process lifetime.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub entitlements: EntitlementsState,
    pub modal: ModalState,
    pub fetch: FetchState,
}

impl StoreState for AppState {}

/// The entitlement collection for the most recently fetched user.
/// Replaced wholesale on every successful fetch; never merged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntitlementsState {
    pub items: Vec<Entitlement>,
    /// Username the current collection belongs to.
    pub for_user: Option<String>,
}

impl StoreState for EntitlementsState {}

/// Popup layered over the results view.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState {
    #[default]
    Hidden,
    /// Detail view for one entitlement, by index into the collection.
    Detail { index: usize },
    /// A fetch failed; the message is the rendered gateway error.
    Error { message: String },
}

impl StoreState for ModalState {}

impl ModalState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

/// Bookkeeping for overlapping fetches. Outcome actions carry the
/// generation of the submit that produced them; `latest_seen` is a running
/// maximum, and reports below it are superseded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FetchState {
    pub latest_seen: u64,
}

impl StoreState for FetchState {}
