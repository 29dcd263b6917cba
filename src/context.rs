//! Application Context
//!
//! The session ("auth") state, provided via Leptos Context API.

use hearth_core::DB_INITIALIZED_EVENT;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::models::LocalUser;

/// The backend opens its database in the background; early calls fail
/// until it announces it is ready.
const DB_WAIT_ATTEMPTS: u32 = 5;
const DB_WAIT_MS: i32 = 1_000;

/// Session signals provided via context
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Signed-in user, if any - read
    pub current_user: ReadSignal<Option<LocalUser>>,
    set_current_user: WriteSignal<Option<LocalUser>>,
    /// True until the first session lookup finishes - read
    pub is_loading: ReadSignal<bool>,
    set_is_loading: WriteSignal<bool>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (current_user, set_current_user) = signal(None);
        let (is_loading, set_is_loading) = signal(true);
        Self {
            current_user,
            set_current_user,
            is_loading,
            set_is_loading,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.with(|user| user.is_some())
    }

    pub fn user_id(&self) -> Option<String> {
        self.current_user.with(|user| user.as_ref().map(|u| u.id.clone()))
    }

    /// Look up the session once, provisioning a user if there is none
    pub fn resolve(&self) {
        let ctx = *self;
        ctx.set_is_loading.set(true);
        spawn_local(async move {
            match establish_session().await {
                Ok(user) => {
                    web_sys::console::log_1(&format!("[APP] Session for {}", user.id).into());
                    ctx.set_current_user.set(Some(user));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] Session lookup failed: {}", e).into());
                }
            }
            ctx.set_is_loading.set(false);
        });
    }

    pub fn sign_out(&self) {
        let ctx = *self;
        spawn_local(async move {
            match commands::sign_out().await {
                Ok(()) => {
                    web_sys::console::log_1(&"[APP] Signed out".into());
                    ctx.set_current_user.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] Sign out failed: {}", e).into());
                }
            }
        });
    }
}

async fn establish_session() -> Result<LocalUser, String> {
    let mut attempts = 0;
    loop {
        match commands::current_user().await {
            Ok(Some(user)) => return Ok(user),
            Ok(None) => return commands::start_session().await,
            Err(e) if attempts < DB_WAIT_ATTEMPTS => {
                attempts += 1;
                web_sys::console::log_1(&format!("[APP] Waiting for database: {}", e).into());
                commands::next_event(DB_INITIALIZED_EVENT, DB_WAIT_MS).await?;
            }
            Err(e) => return Err(e),
        }
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}
