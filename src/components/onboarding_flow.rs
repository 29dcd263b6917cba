//! Onboarding Flow
//!
//! The questionnaire wizard. Step order and the per-step gates live in
//! `OnboardingSequencer`; this component only renders the current step.

use hearth_core::{
    Advance, CitizenApp, FoodStock, HousingType, Mobility, OnboardingSequencer, OnboardingStep,
    ProfileDraft, ReminderPreference, SocialSupport, Transportation, UserProfile,
    DIETARY_OPTIONS, DISASTER_OPTIONS, MAX_HOUSEHOLD,
};
use leptos::prelude::*;

use crate::components::{FloorPlanUpload, OptionGroup, ProgressBar, TagGroup, YesNoGroup};

#[component]
pub fn OnboardingFlow(#[prop(into)] on_complete: Callback<UserProfile>) -> impl IntoView {
    let sequencer = RwSignal::new(OnboardingSequencer::new());

    // Re-render the step body only when the step itself changes
    let step = Memo::new(move |_| sequencer.with(|s| s.current_step()));
    let can_advance = move || sequencer.with(|s| s.can_advance());
    let progress = Signal::derive(move || {
        let (index, total) = sequencer.with(|s| s.progress());
        index as f64 / (total - 1) as f64 * 100.0
    });

    let next = move |_: web_sys::MouseEvent| {
        if let Some(Advance::Completed(profile)) = sequencer.try_update(|s| s.advance()) {
            web_sys::console::log_1(&format!("[PROFILE] Onboarding complete for {}", profile.name).into());
            on_complete.run(profile);
        }
    };
    let back = move |_: web_sys::MouseEvent| {
        sequencer.update(|s| {
            s.retreat();
        });
    };

    view! {
        <div class="onboarding">
            <Show when=move || step.get() != OnboardingStep::Intro>
                <div class="onboarding-progress">
                    <ProgressBar value=progress />
                    <button class="link-btn" on:click=back>"← Back"</button>
                </div>
            </Show>

            <section class="card onboarding-card">
                {move || match step.get() {
                    OnboardingStep::Intro => intro_step().into_any(),
                    OnboardingStep::Basic => basic_step(sequencer).into_any(),
                    OnboardingStep::Housing => housing_step(sequencer).into_any(),
                    OnboardingStep::Mobility => mobility_step(sequencer).into_any(),
                    OnboardingStep::Dietary => dietary_step(sequencer).into_any(),
                    OnboardingStep::Support => support_step(sequencer).into_any(),
                    OnboardingStep::Details => details_step(sequencer).into_any(),
                    OnboardingStep::Complete => complete_step(sequencer).into_any(),
                }}

                <button
                    class="primary-btn wide"
                    disabled=move || !can_advance()
                    on:click=next
                >
                    {move || match step.get() {
                        OnboardingStep::Intro => "I'm ready to begin",
                        OnboardingStep::Complete => "See My Preparedness Plan",
                        _ => "Continue",
                    }}
                </button>
            </section>
        </div>
    }
}

/// Read a draft field reactively
fn draft_signal<T: Clone + Send + Sync + 'static>(
    sequencer: RwSignal<OnboardingSequencer>,
    read: fn(&ProfileDraft) -> T,
) -> Signal<T> {
    Signal::derive(move || sequencer.with(|s| read(s.draft())))
}

/// Write a draft field from an event handler
fn draft_setter<T: 'static>(
    sequencer: RwSignal<OnboardingSequencer>,
    write: fn(&mut ProfileDraft, T),
) -> Callback<T> {
    Callback::new(move |value: T| sequencer.update(|s| write(s.draft_mut(), value)))
}

/// Blank input clears the field
fn text_value(raw: String) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw)
    }
}

fn intro_step() -> impl IntoView {
    view! {
        <div class="step-intro">
            <h2>"Let's get to know you"</h2>
            <p class="lead">
                "I'm here to help create a preparedness plan that works for your unique situation. This isn't about judgment or perfection. It's about meeting you where you are and helping you feel more secure."
            </p>
            <p>"Your answers help me understand what matters most for your safety and peace of mind."</p>
        </div>
    }
}

fn basic_step(sequencer: RwSignal<OnboardingSequencer>) -> impl IntoView {
    let name = draft_signal(sequencer, |d| d.name.clone().unwrap_or_default());
    let location = draft_signal(sequencer, |d| d.location.clone().unwrap_or_default());
    let size = draft_signal(sequencer, |d| {
        d.household_size.map(|n| n.to_string()).unwrap_or_default()
    });
    let set_name = draft_setter(sequencer, |d, v: String| d.name = text_value(v));
    let set_location = draft_setter(sequencer, |d, v: String| d.location = text_value(v));
    let set_size = draft_setter(sequencer, |d, v: String| d.household_size = v.trim().parse().ok());

    view! {
        <div class="step">
            <h2>"Tell me about yourself"</h2>
            <p class="muted">"What should I call you, and where do you live?"</p>

            <label class="field">
                <span>"What's your name?"</span>
                <input
                    type="text"
                    placeholder="How would you like me to address you?"
                    prop:value=name
                    on:input=move |ev| set_name.run(event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span>"Where are you located?"</span>
                <input
                    type="text"
                    placeholder="City, State (helps me understand local risks)"
                    prop:value=location
                    on:input=move |ev| set_location.run(event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span>"How many people live with you?"</span>
                <input
                    type="number"
                    min="1"
                    max=MAX_HOUSEHOLD.to_string()
                    placeholder="Including yourself"
                    prop:value=size
                    on:input=move |ev| set_size.run(event_target_value(&ev))
                />
            </label>
        </div>
    }
}

fn housing_step(sequencer: RwSignal<OnboardingSequencer>) -> impl IntoView {
    view! {
        <div class="step">
            <h2>"Your living situation"</h2>
            <p class="muted">"This helps me understand your evacuation options and storage space"</p>

            <h3>"What type of housing do you live in?"</h3>
            <OptionGroup
                name="housing"
                selected=draft_signal(sequencer, |d| d.housing_type)
                on_select=draft_setter(sequencer, |d, v: HousingType| d.housing_type = Some(v))
            />

            <h3>"Do you have pets?"</h3>
            <YesNoGroup
                name="pets"
                selected=draft_signal(sequencer, |d| d.pets)
                on_select=draft_setter(sequencer, |d, v: bool| d.pets = Some(v))
            />
        </div>
    }
}

fn mobility_step(sequencer: RwSignal<OnboardingSequencer>) -> impl IntoView {
    view! {
        <div class="step">
            <h2>"Getting around"</h2>
            <p class="muted">
                "Understanding your transportation and mobility helps me plan better evacuation options"
            </p>

            <h3>"What transportation do you typically have access to?"</h3>
            <OptionGroup
                name="transportation"
                selected=draft_signal(sequencer, |d| d.transportation)
                on_select=draft_setter(sequencer, |d, v: Transportation| d.transportation = Some(v))
            />

            <h3>"Do you have any mobility considerations?"</h3>
            <OptionGroup
                name="mobility"
                selected=draft_signal(sequencer, |d| d.mobility)
                on_select=draft_setter(sequencer, |d, v: Mobility| d.mobility = Some(v))
            />
        </div>
    }
}

fn dietary_step(sequencer: RwSignal<OnboardingSequencer>) -> impl IntoView {
    let toggle = Callback::new(move |tag: &'static str| sequencer.update(|s| s.toggle_dietary(tag)));

    view! {
        <div class="step">
            <h2>"Food and dietary needs"</h2>
            <p class="muted">"This helps me suggest emergency food supplies that work for you"</p>

            <h3>"Do any of these apply to your household's dietary needs? (Select all that apply)"</h3>
            <TagGroup
                options=DIETARY_OPTIONS
                selected=draft_signal(sequencer, |d| d.dietary.clone())
                on_toggle=toggle
            />
        </div>
    }
}

fn support_step(sequencer: RwSignal<OnboardingSequencer>) -> impl IntoView {
    view! {
        <div class="step">
            <h2>"Your support network"</h2>
            <p class="muted">"Community connections are vital for resilience and mutual aid"</p>

            <h3>"How would you describe your local support network?"</h3>
            <OptionGroup
                name="support"
                selected=draft_signal(sequencer, |d| d.social_support)
                on_select=draft_setter(sequencer, |d, v: SocialSupport| d.social_support = Some(v))
            />
        </div>
    }
}

fn details_step(sequencer: RwSignal<OnboardingSequencer>) -> impl IntoView {
    let toggle_concern =
        Callback::new(move |tag: &'static str| sequencer.update(|s| s.toggle_concern(tag)));
    let medications = draft_signal(sequencer, |d| d.medications.clone().unwrap_or_default());
    let contacts = draft_signal(sequencer, |d| d.emergency_contacts.clone().unwrap_or_default());
    let worry = draft_signal(sequencer, |d| d.biggest_worry.clone().unwrap_or_default());
    let set_medications = draft_setter(sequencer, |d, v: String| d.medications = text_value(v));
    let set_contacts = draft_setter(sequencer, |d, v: String| d.emergency_contacts = text_value(v));
    let set_worry = draft_setter(sequencer, |d, v: String| d.biggest_worry = text_value(v));

    view! {
        <div class="step">
            <h2>"A few more details"</h2>
            <p class="muted">"Everything here is optional. Skip anything you'd rather not share."</p>

            <FloorPlanUpload
                current=draft_signal(sequencer, |d| d.floor_plan.clone())
                on_change=draft_setter(sequencer, |d, v: Option<String>| d.floor_plan = v)
            />

            <h3>"How much food do you have on hand right now?"</h3>
            <OptionGroup
                name="food-stock"
                selected=draft_signal(sequencer, |d| d.food_stock)
                on_select=draft_setter(sequencer, |d, v: FoodStock| d.food_stock = Some(v))
            />

            <label class="field">
                <span>"Any medications you rely on?"</span>
                <textarea
                    placeholder="Names and how often you need them"
                    prop:value=medications
                    on:input=move |ev| set_medications.run(event_target_value(&ev))
                ></textarea>
            </label>
            <label class="field">
                <span>"Who should be contacted in an emergency?"</span>
                <textarea
                    placeholder="Names and phone numbers"
                    prop:value=contacts
                    on:input=move |ev| set_contacts.run(event_target_value(&ev))
                ></textarea>
            </label>

            <h3>"Do you use the Citizen app?"</h3>
            <OptionGroup
                name="citizen-app"
                selected=draft_signal(sequencer, |d| d.citizen_app)
                on_select=draft_setter(sequencer, |d, v: CitizenApp| d.citizen_app = Some(v))
            />

            <h3>"Which disasters concern you most?"</h3>
            <TagGroup
                options=DISASTER_OPTIONS
                selected=draft_signal(sequencer, |d| d.concerned_disasters.clone())
                on_toggle=toggle_concern
            />

            <label class="field">
                <span>"What's your biggest worry?"</span>
                <textarea
                    prop:value=worry
                    on:input=move |ev| set_worry.run(event_target_value(&ev))
                ></textarea>
            </label>

            <h3>"How would you like to be reminded?"</h3>
            <OptionGroup
                name="reminders"
                selected=draft_signal(sequencer, |d| d.reminder_preference)
                on_select=draft_setter(sequencer, |d, v: ReminderPreference| d.reminder_preference = Some(v))
            />
        </div>
    }
}

fn complete_step(sequencer: RwSignal<OnboardingSequencer>) -> impl IntoView {
    let name = draft_signal(sequencer, |d| d.name.clone().unwrap_or_default());

    view! {
        <div class="step-complete">
            <h2>"Thank you, " {name}</h2>
            <p class="lead">"I now have what I need to create your personalized preparedness plan."</p>
            <p>
                "Remember: this is about progress, not perfection. We'll build your resilience step by step, in a way that fits your life and resources."
            </p>
        </div>
    }
}
