//! Progress Bar Component

use leptos::prelude::*;

/// Horizontal bar filled to `value` percent (clamped to 0..=100)
#[component]
pub fn ProgressBar(#[prop(into)] value: Signal<f64>) -> impl IntoView {
    let width = move || format!("width: {:.0}%", value.get().clamp(0.0, 100.0));

    view! {
        <div class="progress" role="progressbar">
            <div class="progress-fill" style=width></div>
        </div>
    }
}
