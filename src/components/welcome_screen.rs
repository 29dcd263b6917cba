//! Welcome Screen
//!
//! Landing view shown before onboarding.

use leptos::prelude::*;

const FEATURES: &[(&str, &str)] = &[
    ("Personalized", "Based on your location, living situation, and specific needs"),
    ("Actionable", "Clear steps and reminders that fit into your daily life"),
    ("Community-Centered", "Connect with neighbors and build mutual support networks"),
];

#[component]
pub fn WelcomeScreen(#[prop(into)] on_start: Callback<()>) -> impl IntoView {
    view! {
        <div class="welcome">
            <div class="welcome-header">
                <div class="hearth-logo">"♥"</div>
                <h1>"Welcome to " <span class="accent">"Hearth"</span></h1>
                <p class="subtitle">"Your Personal Disaster Companion"</p>
            </div>

            <section class="card">
                <h2>"You are cared for"</h2>
                <p>
                    "Disasters don't affect everyone equally. That's why Hearth creates a personalized preparedness plan that understands your unique situation, needs, and community."
                </p>
                <div class="feature-grid">
                    {FEATURES.iter().map(|(title, text)| view! {
                        <div class="feature">
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <button class="primary-btn large" on:click=move |_| on_start.run(())>
                "Let's Get Started"
            </button>
            <p class="hint">"Takes about 3 minutes • Your information stays private"</p>
        </div>
    }
}
