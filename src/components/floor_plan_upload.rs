//! Floor Plan Upload
//!
//! Either pick an image through the backend file dialog or sketch on a
//! canvas. Both end up as a data URL handed to `on_change`.

use leptos::html::Canvas;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use crate::commands;

const STROKE_COLOR: &str = "#d9644f";
const STROKE_WIDTH: f64 = 2.0;

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

/// Pointer position relative to the canvas
fn position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    (
        ev.client_x() as f64 - rect.left(),
        ev.client_y() as f64 - rect.top(),
    )
}

#[component]
pub fn FloorPlanUpload(
    current: Signal<Option<String>>,
    on_change: Callback<Option<String>>,
) -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();
    let drawing = RwSignal::new(false);
    let last_position = StoredValue::new((0.0_f64, 0.0_f64));

    let start = move |ev: MouseEvent| {
        if let Some(canvas) = canvas_ref.get() {
            last_position.set_value(position(&canvas, &ev));
            drawing.set(true);
        }
    };

    let draw = move |ev: MouseEvent| {
        if !drawing.get_untracked() {
            return;
        }
        let Some(canvas) = canvas_ref.get() else { return };
        let Some(ctx) = context_2d(&canvas) else { return };

        let (x, y) = position(&canvas, &ev);
        let (from_x, from_y) = last_position.get_value();

        ctx.set_stroke_style_str(STROKE_COLOR);
        ctx.set_line_width(STROKE_WIDTH);
        ctx.set_line_cap("round");
        ctx.begin_path();
        ctx.move_to(from_x, from_y);
        ctx.line_to(x, y);
        ctx.stroke();

        last_position.set_value((x, y));
    };

    let stop = move |_: MouseEvent| {
        if !drawing.get_untracked() {
            return;
        }
        drawing.set(false);
        if let Some(canvas) = canvas_ref.get() {
            match canvas.to_data_url() {
                Ok(url) => on_change.run(Some(url)),
                Err(e) => web_sys::console::error_1(&e),
            }
        }
    };

    let clear = move |_: MouseEvent| {
        if let Some(canvas) = canvas_ref.get() {
            if let Some(ctx) = context_2d(&canvas) {
                ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
            }
        }
        on_change.run(None);
    };

    let upload = move |_: MouseEvent| {
        spawn_local(async move {
            match commands::pick_floor_plan().await {
                Ok(Some(url)) => on_change.run(Some(url)),
                Ok(None) => {}
                Err(e) => {
                    web_sys::console::error_1(&format!("[PROFILE] Floor plan upload failed: {}", e).into());
                }
            }
        });
    };

    view! {
        <div class="floor-plan card inset">
            <h3>"Floor Plan & Evacuation Routes"</h3>
            <p class="muted">"Upload a photo or sketch your home layout to help plan evacuation routes"</p>

            <button type="button" class="upload-zone" on:click=upload>
                "Click to upload floor plan photo"
            </button>

            <div class="divider">"or"</div>

            <span class="field-label">"Draw your floor plan:"</span>
            <canvas
                node_ref=canvas_ref
                class="sketch-canvas"
                width="400"
                height="300"
                on:mousedown=start
                on:mousemove=draw
                on:mouseup=stop
                on:mouseleave=stop
            ></canvas>
            <div class="canvas-actions">
                <button type="button" class="outline-btn small" on:click=clear>"Clear Drawing"</button>
                <span class="hint">"Click and drag to draw walls and exits"</span>
            </div>

            <Show when=move || current.with(|plan| plan.is_some())>
                <span class="field-label">"Current floor plan:"</span>
                <img
                    class="floor-plan-preview"
                    alt="Floor plan"
                    src=move || current.get().unwrap_or_default()
                />
            </Show>
        </div>
    }
}
