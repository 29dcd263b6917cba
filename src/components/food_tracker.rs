//! Food Supply Tracker
//!
//! Per-category quantities against two-week targets.

use hearth_core::{food_tips, FoodCategory, FoodSupply};
use leptos::prelude::*;

use crate::components::ProgressBar;

#[component]
pub fn FoodTracker(household_size: u32, dietary: Vec<String>) -> impl IntoView {
    let supply = RwSignal::new(FoodSupply::new(household_size, &dietary));
    let tips = food_tips(&dietary);
    let overall = Signal::derive(move || supply.with(|s| s.overall_progress()) as f64);

    view! {
        <section class="card food-tracker">
            <h3>"Food Supply Tracker"</h3>
            <p class="muted">
                {format!("Two weeks of supplies for a household of {}", household_size)}
            </p>

            <div class="overall">
                <div class="row">
                    <span>"Overall Progress"</span>
                    <span class="accent">{move || format!("{}%", overall.get())}</span>
                </div>
                <ProgressBar value=overall />
            </div>

            {FoodCategory::ALL.into_iter().map(|category| {
                let rows = move || supply.with(|s| s.by_category(category));
                view! {
                    <Show when=move || !rows().is_empty()>
                        <div class="food-category">
                            <h4>{category.as_str()}</h4>
                            {move || rows().into_iter().map(|(index, item)| {
                                let percent = item.progress_percent();
                                view! {
                                    <div class="food-item">
                                        <div class="row">
                                            <span class="name">{item.name.clone()}</span>
                                            <span class="count">
                                                {format!("{} / {} {}", item.current, item.target, item.unit)}
                                            </span>
                                        </div>
                                        <ProgressBar value=Signal::derive(move || percent) />
                                        <div class="stepper">
                                            <button on:click=move |_| supply.update(|s| s.decrement(index))>"-"</button>
                                            <input
                                                type="number"
                                                min="0"
                                                prop:value=item.current.to_string()
                                                on:change=move |ev| {
                                                    let value = event_target_value(&ev).trim().parse::<i64>().unwrap_or(0);
                                                    supply.update(|s| s.update_quantity(index, value));
                                                }
                                            />
                                            <button on:click=move |_| supply.update(|s| s.increment(index))>"+"</button>
                                        </div>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    </Show>
                }
            }).collect_view()}

            <div class="tips">
                <h4>"💡 Smart Tips"</h4>
                {tips.into_iter().map(|tip| view! { <p>"• " {tip}</p> }).collect_view()}
            </div>
        </section>
    }
}
