//! Chat Assistant
//!
//! Canned, profile-aware replies arrive after a short "thinking" delay. The
//! pending timer is dropped when the view unmounts so a late reply never
//! lands in a discarded transcript.

use gloo_timers::callback::Timeout;
use hearth_core::{thinking_delay, ChatSession, Message, Sender, UserProfile};
use leptos::html::Div;
use leptos::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

fn clock(timestamp: i64) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp as f64));
    format!("{:02}:{:02}", date.get_hours(), date.get_minutes())
}

fn message_bubble(message: Message) -> impl IntoView {
    let class = match message.sender {
        Sender::User => "bubble user",
        Sender::Assistant => "bubble assistant",
    };
    view! {
        <div class=class>
            <p>{message.content}</p>
            <span class="time">{clock(message.timestamp)}</span>
        </div>
    }
}

#[component]
pub fn ChatAssistant(profile: UserProfile, #[prop(into)] on_back: Callback<()>) -> impl IntoView {
    let session = RwSignal::new(ChatSession::new(&profile, now_ms()));
    let input = RwSignal::new(String::new());
    let rng = StoredValue::new_local(SmallRng::seed_from_u64(
        (js_sys::Math::random() * u64::MAX as f64) as u64,
    ));
    let timer: StoredValue<Option<Timeout>, LocalStorage> = StoredValue::new_local(None);
    let profile = StoredValue::new(profile);
    let transcript_ref = NodeRef::<Div>::new();

    let is_typing = move || session.with(|s| s.is_typing());
    let can_send = move || !is_typing() && input.with(|t| !t.trim().is_empty());

    // Keep the newest message in view
    Effect::new(move |_| {
        session.track();
        if let Some(el) = transcript_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    on_cleanup(move || {
        timer.try_update_value(|t| t.take());
        session.try_update(|s| s.cancel());
    });

    let send = move || {
        let text = input.get_untracked();
        let Some(pending) = session.try_update(|s| s.submit(&text, now_ms())).flatten() else {
            return;
        };
        input.set(String::new());

        let Some(delay) = rng.try_update_value(|r| thinking_delay(r)) else {
            return;
        };
        let handle = Timeout::new(delay.as_millis() as u32, move || {
            session.try_update(|s| {
                profile.try_with_value(|p| {
                    rng.try_update_value(|r| s.answer(&pending, p, r, now_ms()))
                })
            });
        });
        timer.set_value(Some(handle));
    };

    view! {
        <div class="chat">
            <header class="chat-header row">
                <button class="link-btn" on:click=move |_| on_back.run(())>"← Back to Dashboard"</button>
                <div>
                    <h2>"Your Assistant"</h2>
                    <p class="muted">"Here to help you prepare, one step at a time"</p>
                </div>
            </header>

            <div class="transcript" node_ref=transcript_ref>
                {move || session.with(|s| s.messages().to_vec())
                    .into_iter()
                    .map(message_bubble)
                    .collect_view()}
                <Show when=is_typing>
                    <div class="bubble assistant typing">
                        <span class="dot"></span>
                        <span class="dot"></span>
                        <span class="dot"></span>
                    </div>
                </Show>
            </div>

            <div class="composer row">
                <input
                    type="text"
                    placeholder="Ask me anything about disaster preparedness..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" && !ev.shift_key() {
                            ev.prevent_default();
                            send();
                        }
                    }
                />
                <button
                    class="primary-btn"
                    disabled=move || !can_send()
                    on:click=move |_| send()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
