//! Option Group Components
//!
//! Single-choice radio cards for questionnaire enums, and multi-choice
//! checkboxes for tag sets.

use hearth_core::{
    CitizenApp, FoodStock, HousingType, Mobility, ReminderPreference, SocialSupport,
    Transportation,
};
use leptos::prelude::*;

/// A questionnaire answer rendered as one radio card per option
pub trait Choice: Copy + PartialEq + Send + Sync + 'static {
    fn options() -> &'static [Self];
    fn text(&self) -> &'static str;
}

macro_rules! impl_choice {
    ($($ty:ty),+) => {
        $(impl Choice for $ty {
            fn options() -> &'static [Self] {
                <$ty>::ALL
            }

            fn text(&self) -> &'static str {
                self.label()
            }
        })+
    };
}

impl_choice!(
    HousingType,
    Transportation,
    Mobility,
    SocialSupport,
    FoodStock,
    CitizenApp,
    ReminderPreference
);

#[component]
pub fn OptionGroup<T: Choice>(
    /// Radio group name; must be unique on the page
    name: &'static str,
    selected: Signal<Option<T>>,
    on_select: Callback<T>,
) -> impl IntoView {
    view! {
        <div class="option-group" role="radiogroup">
            {T::options().iter().copied().map(|option| {
                let is_selected = move || selected.get() == Some(option);
                view! {
                    <label class=move || if is_selected() { "option selected" } else { "option" }>
                        <input
                            type="radio"
                            name=name
                            prop:checked=is_selected
                            on:change=move |_| on_select.run(option)
                        />
                        <span>{option.text()}</span>
                    </label>
                }
            }).collect_view()}
        </div>
    }
}

/// Yes/No pair for boolean answers
#[component]
pub fn YesNoGroup(
    name: &'static str,
    selected: Signal<Option<bool>>,
    on_select: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="option-group inline" role="radiogroup">
            {[(true, "Yes"), (false, "No")].into_iter().map(|(value, text)| {
                let is_selected = move || selected.get() == Some(value);
                view! {
                    <label class=move || if is_selected() { "option selected" } else { "option" }>
                        <input
                            type="radio"
                            name=name
                            prop:checked=is_selected
                            on:change=move |_| on_select.run(value)
                        />
                        <span>{text}</span>
                    </label>
                }
            }).collect_view()}
        </div>
    }
}

/// Checkbox grid over a fixed tag list
#[component]
pub fn TagGroup(
    options: &'static [&'static str],
    selected: Signal<Vec<String>>,
    on_toggle: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <div class="tag-group">
            {options.iter().copied().map(|tag| {
                let checked = move || selected.with(|tags| tags.iter().any(|t| t == tag));
                view! {
                    <label class="tag-option">
                        <input
                            type="checkbox"
                            prop:checked=checked
                            on:change=move |_| on_toggle.run(tag)
                        />
                        <span>{tag}</span>
                    </label>
                }
            }).collect_view()}
        </div>
    }
}
