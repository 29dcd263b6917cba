//! Reminder System

use hearth_core::{preference_notes, Reminder, ReminderList, UserProfile};
use leptos::prelude::*;

fn reminder_row(reminder: Reminder, list: RwSignal<ReminderList>) -> impl IntoView {
    let id = reminder.id;
    let class = if reminder.completed { "reminder done" } else { "reminder" };
    view! {
        <div class=class>
            <input
                type="checkbox"
                prop:checked=reminder.completed
                on:change=move |_| {
                    list.update(|l| {
                        l.toggle(id);
                    });
                }
            />
            <span class="icon">{reminder.reminder_type.icon()}</span>
            <div class="body">
                <div class="row">
                    <span class="title">{reminder.title}</span>
                    <span class=format!("badge {}", reminder.priority.as_str())>
                        {reminder.priority.as_str()}
                    </span>
                </div>
                <p class="muted">{reminder.description}</p>
                <span class="category">{reminder.category}</span>
            </div>
        </div>
    }
}

#[component]
pub fn ReminderSystem(profile: UserProfile) -> impl IntoView {
    let list = RwSignal::new(ReminderList::for_profile(&profile));
    let notes = preference_notes(profile.reminder_preference);

    view! {
        <section class="card reminders">
            <h3>"Smart Reminders"</h3>

            <Show
                when=move || list.with(|l| !l.active().is_empty())
                fallback=|| view! {
                    <div class="all-done">
                        <p>"🎉 All caught up!"</p>
                        <p class="muted">"Great job staying prepared."</p>
                    </div>
                }
            >
                {move || list.with(|l| l.active())
                    .into_iter()
                    .map(|r| reminder_row(r, list))
                    .collect_view()}
            </Show>

            <Show when=move || list.with(|l| !l.completed().is_empty())>
                <h4>"Completed"</h4>
                {move || list.with(|l| l.completed())
                    .into_iter()
                    .map(|r| reminder_row(r, list))
                    .collect_view()}
            </Show>

            <div class="settings">
                <h4>"🔔 Reminder Settings"</h4>
                {notes.into_iter().map(|note| view! { <p>"• " {note}</p> }).collect_view()}
            </div>
        </section>
    }
}
