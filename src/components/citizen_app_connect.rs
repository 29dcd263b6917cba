//! Community Connections panel

use hearth_core::{network_advice, CitizenApp, SocialSupport};
use leptos::prelude::*;

/// Shown once connected; the app has no neighbor directory of its own
const NEARBY_USERS: &[(&str, &str, bool)] = &[
    ("Sarah M.", "0.3 mi", true),
    ("David L.", "0.5 mi", true),
    ("Maria G.", "0.8 mi", false),
];

const COMMUNITY_FEATURES: &[&str] = &[
    "Share real-time safety updates",
    "Coordinate evacuation carpools",
    "Offer/request mutual aid",
    "Group emergency planning",
];

#[component]
pub fn CitizenAppConnect(
    citizen_app: Option<CitizenApp>,
    social_support: SocialSupport,
) -> impl IntoView {
    let connected = RwSignal::new(false);
    let sharing = RwSignal::new(false);
    let advice = network_advice(social_support);
    let advice_class = if advice.needs_building { "advice building" } else { "advice strong" };

    view! {
        <section class="card community">
            <h3>"Community Connections"</h3>
            <p class="muted">"Connect with neighbors for mutual aid and safety"</p>

            <div class="citizen-app row">
                <div>
                    <h4>"Citizen App"</h4>
                    <span class="badge">{CitizenApp::status_label(citizen_app)}</span>
                </div>
                {if CitizenApp::can_connect(citizen_app) {
                    view! {
                        <button
                            class=move || if connected.get() { "primary-btn" } else { "outline-btn" }
                            on:click=move |_| connected.update(|c| *c = !*c)
                        >
                            {move || if connected.get() { "Connected" } else { "Connect" }}
                        </button>
                    }.into_any()
                } else {
                    view! { <button class="outline-btn" disabled=true>"Not Available"</button> }.into_any()
                }}
            </div>

            <Show when=move || connected.get()>
                <label class="switch-row">
                    <input
                        type="checkbox"
                        prop:checked=move || sharing.get()
                        on:change=move |_| sharing.update(|s| *s = !*s)
                    />
                    <span>"Share location during emergencies"</span>
                </label>

                <h4>"Nearby Hearth Users"</h4>
                {NEARBY_USERS.iter().map(|(name, distance, verified)| view! {
                    <div class="nearby row">
                        <span>{*name}</span>
                        <span class="muted">{*distance}</span>
                        {verified.then(|| view! { <span class="badge verified">"Verified"</span> })}
                    </div>
                }).collect_view()}
            </Show>

            <div class="features">
                <h4>"🤝 Community Features"</h4>
                {COMMUNITY_FEATURES.iter().map(|f| view! { <p>"• " {*f}</p> }).collect_view()}
            </div>

            <div class=advice_class>
                <h4>{advice.title}</h4>
                {advice.tips.into_iter().map(|tip| view! { <p>"• " {tip}</p> }).collect_view()}
            </div>
        </section>
    }
}
