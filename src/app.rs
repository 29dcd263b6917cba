//! Hearth Frontend App
//!
//! Session gate plus the four top-level views driven by `ViewRouter`.

use hearth_core::{UserProfile, View};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{ChatAssistant, Dashboard, OnboardingFlow, WelcomeScreen};
use crate::context::{use_auth, AuthContext};
use crate::store::{
    store_back_to_dashboard, store_complete_onboarding, store_open_chat, store_profile,
    store_reset, store_restore, store_start_onboarding, store_view, use_app_store, AppState,
};

#[component]
pub fn App() -> impl IntoView {
    let auth = AuthContext::new();
    provide_context(auth);
    provide_context(Store::new(AppState::default()));

    auth.resolve();

    view! {
        <div class="app">
            <Show
                when=move || !auth.is_loading.get()
                fallback=|| view! { <LoadingScreen message="Getting things ready..." /> }
            >
                <Show
                    when=move || auth.is_authenticated()
                    fallback=move || view! { <SignedOut on_continue=move |_: ()| auth.resolve() /> }
                >
                    <Session />
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn LoadingScreen(message: &'static str) -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner"></div>
            <p class="muted">{message}</p>
        </div>
    }
}

#[component]
fn SignedOut(#[prop(into)] on_continue: Callback<()>) -> impl IntoView {
    view! {
        <div class="signed-out card">
            <h2>"You're signed out"</h2>
            <p class="muted">"Your plan stays on this device until you start again."</p>
            <button class="primary-btn" on:click=move |_| on_continue.run(())>"Start again"</button>
        </div>
    }
}

/// Views for a signed-in user. Loads the saved profile once per user.
#[component]
fn Session() -> impl IntoView {
    let auth = use_auth();
    let store = use_app_store();
    let (profile_checked, set_profile_checked) = signal(false);

    Effect::new(move |_| {
        let Some(user_id) = auth.user_id() else { return };
        spawn_local(async move {
            match commands::load_profile(&user_id).await {
                Ok(Some(profile)) => {
                    web_sys::console::log_1(&format!("[PROFILE] Loaded profile for {}", profile.name).into());
                    store_restore(&store, profile);
                }
                Ok(None) => {
                    web_sys::console::log_1(&"[PROFILE] No saved profile".into());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[PROFILE] Failed to load profile: {}", e).into());
                }
            }
            set_profile_checked.set(true);
        });
    });

    let complete = move |profile: UserProfile| {
        store_complete_onboarding(&store, profile.clone());
        let Some(user_id) = auth.user_id() else { return };
        spawn_local(async move {
            match commands::save_profile(&user_id, &profile).await {
                Ok(()) => web_sys::console::log_1(&"[PROFILE] Profile saved".into()),
                Err(e) => {
                    web_sys::console::error_1(&format!("[PROFILE] Failed to save profile: {}", e).into());
                }
            }
        });
    };

    let sign_out = move |_: ()| {
        store_reset(&store);
        auth.sign_out();
    };

    view! {
        <Show
            when=move || profile_checked.get()
            fallback=|| view! { <LoadingScreen message="Loading your plan..." /> }
        >
            {move || {
                let profile = store_profile(&store);
                match (store_view(&store), profile) {
                    (View::Welcome, _) => view! {
                        <WelcomeScreen on_start=move |_: ()| {
                            store_start_onboarding(&store);
                        } />
                    }.into_any(),
                    (View::Onboarding, _) => view! { <OnboardingFlow on_complete=complete /> }.into_any(),
                    (View::Dashboard, Some(profile)) => view! {
                        <Dashboard
                            profile=profile
                            on_open_chat=move |_: ()| {
                                store_open_chat(&store);
                            }
                            on_sign_out=sign_out
                        />
                    }.into_any(),
                    (View::Chat, Some(profile)) => view! {
                        <ChatAssistant
                            profile=profile
                            on_back=move |_: ()| {
                                store_back_to_dashboard(&store);
                            }
                        />
                    }.into_any(),
                    // view() never reports dashboard or chat without a profile
                    (_, None) => view! { <LoadingScreen message="Loading your plan..." /> }.into_any(),
                }
            }}
        </Show>
    }
}
