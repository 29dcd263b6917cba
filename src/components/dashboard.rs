//! Dashboard
//!
//! The personalized plan: checklist progress, profile summary and the
//! food, reminder and community panels behind tabs.

use hearth_core::{community_note, greeting_for_hour, Checklist, ChecklistItem, UserProfile};
use leptos::prelude::*;

use crate::components::{CitizenAppConnect, FoodTracker, ProgressBar, ReminderSystem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Checklist,
    Food,
    Reminders,
    Community,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Checklist, Tab::Food, Tab::Reminders, Tab::Community];

    fn label(&self) -> &'static str {
        match self {
            Tab::Checklist => "Checklist",
            Tab::Food => "Food Supply",
            Tab::Reminders => "Reminders",
            Tab::Community => "Community",
        }
    }
}

fn checklist_row(item: ChecklistItem, checklist: RwSignal<Checklist>) -> impl IntoView {
    let id = item.id;
    let class = if item.completed { "task done" } else { "task" };
    view! {
        <div class=class>
            <input
                type="checkbox"
                prop:checked=item.completed
                on:change=move |_| {
                    checklist.update(|c| {
                        c.toggle(id);
                    });
                }
            />
            <div class="body">
                <div class="row">
                    <span class="title">{item.task}</span>
                    <span class=format!("badge {}", item.priority.as_str())>
                        {format!("{} priority", item.priority.as_str())}
                    </span>
                </div>
                <p class="muted">{item.explanation}</p>
                <span class="category">{item.category}</span>
            </div>
        </div>
    }
}

#[component]
pub fn Dashboard(
    profile: UserProfile,
    #[prop(into)] on_open_chat: Callback<()>,
    #[prop(into)] on_sign_out: Callback<()>,
) -> impl IntoView {
    let checklist = RwSignal::new(Checklist::for_profile(&profile));
    let tab = RwSignal::new(Tab::Checklist);

    let hour = js_sys::Date::new_0().get_hours();
    let greeting = greeting_for_hour(hour, &profile.name);
    let completed = move || checklist.with(|c| c.completed_count());
    let total = checklist.with_untracked(|c| c.items().len());
    let percent = Signal::derive(move || checklist.with(|c| c.completion_percentage()) as f64);

    let medications = profile.medications().map(str::to_string);
    let panel_profile = profile.clone();

    view! {
        <div class="dashboard">
            <header class="dashboard-header row">
                <h1 class="brand">"Hearth"</h1>
                <div class="actions">
                    <button class="primary-btn" on:click=move |_| on_open_chat.run(())>
                        "Chat with Assistant"
                    </button>
                    <button class="link-btn" on:click=move |_| on_sign_out.run(())>"Sign out"</button>
                </div>
            </header>

            <div class="dashboard-intro">
                <h2>{greeting}</h2>
                <p class="muted">
                    {format!("Here's your personalized preparedness plan for {}.", profile.location)}
                </p>
            </div>

            <div class="dashboard-grid">
                <main>
                    <section class="card progress-card">
                        <div class="row">
                            <h3>"Your Progress"</h3>
                            <span class="accent">{move || format!("{}%", percent.get())}</span>
                        </div>
                        <ProgressBar value=percent />
                        <p class="muted">
                            {move || format!(
                                "You've completed {} of {} preparedness tasks. Every step makes you more resilient.",
                                completed(),
                                total,
                            )}
                        </p>
                    </section>

                    <nav class="tabs">
                        {Tab::ALL.into_iter().map(|t| view! {
                            <button
                                class=move || if tab.get() == t { "tab active" } else { "tab" }
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }).collect_view()}
                    </nav>

                    {move || {
                        let profile = panel_profile.clone();
                        match tab.get() {
                            Tab::Checklist => view! {
                                <section class="card checklist">
                                    <h3>"Preparedness Checklist"</h3>
                                    {move || checklist.with(|c| c.display_order())
                                        .into_iter()
                                        .map(|item| checklist_row(item, checklist))
                                        .collect_view()}
                                </section>
                            }.into_any(),
                            Tab::Food => view! {
                                <FoodTracker
                                    household_size=profile.household_size
                                    dietary=profile.dietary.clone()
                                />
                            }.into_any(),
                            Tab::Reminders => view! { <ReminderSystem profile=profile /> }.into_any(),
                            Tab::Community => view! {
                                <CitizenAppConnect
                                    citizen_app=profile.citizen_app
                                    social_support=profile.social_support
                                />
                            }.into_any(),
                        }
                    }}
                </main>

                <aside>
                    <section class="card profile-card">
                        <h3>"Your Profile"</h3>
                        <p>{format!("Household: {}", profile.household_size)}</p>
                        <p>{format!("Housing: {}", profile.housing_type.spoken())}</p>
                        <p>{format!("Transportation: {}", profile.transportation.spoken())}</p>
                        <p>{format!("Pets: {}", if profile.pets { "Yes" } else { "No" })}</p>
                        {(!profile.dietary.is_empty()).then(|| view! {
                            <p>{format!("Dietary: {}", profile.dietary.join(", "))}</p>
                        })}
                        {medications.map(|m| view! { <p>{format!("Medications: {}", m)}</p> })}
                    </section>

                    <section class="card encouragement">
                        <h3>"You're doing great!"</h3>
                        <p class="muted">{community_note(profile.social_support)}</p>
                    </section>
                </aside>
            </div>
        </div>
    }
}
