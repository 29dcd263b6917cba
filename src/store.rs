//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The router is the
//! only app-wide state; each view owns its own working lists.

use hearth_core::{UserProfile, View, ViewRouter};
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current view and the profile driving it
    pub router: ViewRouter,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_view(store: &AppStore) -> View {
    store.router().read().view()
}

pub fn store_profile(store: &AppStore) -> Option<UserProfile> {
    store.router().read().profile().cloned()
}

pub fn store_start_onboarding(store: &AppStore) -> bool {
    store.router().write().start_onboarding()
}

pub fn store_complete_onboarding(store: &AppStore, profile: UserProfile) -> bool {
    store.router().write().complete_onboarding(profile)
}

/// Jump to the dashboard with a profile loaded from the backend
pub fn store_restore(store: &AppStore, profile: UserProfile) -> bool {
    store.router().write().restore(profile)
}

pub fn store_open_chat(store: &AppStore) -> bool {
    store.router().write().open_chat()
}

pub fn store_back_to_dashboard(store: &AppStore) -> bool {
    store.router().write().back_to_dashboard()
}

/// Forget the profile, e.g. after sign-out
pub fn store_reset(store: &AppStore) {
    *store.router().write() = ViewRouter::new();
}
