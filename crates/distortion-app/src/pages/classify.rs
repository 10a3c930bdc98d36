// crates/distortion-app/src/pages/classify.rs
// Classify page - text input, presets, submit, status and result

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{ClassifyClient, GlooTransport};
use crate::components::{PresetPills, ResultPanel, StatusLine};
use crate::config::AppConfig;
use crate::controller::{FormController, SubmissionPhase};
use crate::surface::SignalSurface;

#[component]
pub fn ClassifyPage(config: AppConfig) -> impl IntoView {
    let text = RwSignal::new(String::new());
    let api_field = RwSignal::new(String::new());
    let surface = SignalSurface::new();
    let input_ref = NodeRef::<html::Textarea>::new();

    let presets = config.presets.clone();
    let api_placeholder = config
        .default_api_base
        .clone()
        .unwrap_or_else(|| "https://<api-id>.execute-api.<region>.amazonaws.com/prod".to_string());

    let controller = FormController::new(ClassifyClient::new(GlooTransport, config));

    let submit_controller = controller.clone();
    let on_submit = move |_: ev::MouseEvent| {
        let controller = submit_controller.clone();
        let raw_text = text.get_untracked();
        let field = api_field.get_untracked();
        spawn_local(async move {
            controller.submit(&surface, &raw_text, &field).await;
        });
    };

    let on_check = move |_: ev::MouseEvent| {
        let controller = controller.clone();
        let field = api_field.get_untracked();
        spawn_local(async move {
            controller.check_health(&surface, &field).await;
        });
    };

    view! {
        <section class="card">
            <label class="field-label">
                "API base URL"
                <input
                    id="apiUrl"
                    type="text"
                    class="field"
                    placeholder=api_placeholder
                    prop:value=move || api_field.get()
                    on:input=move |ev| api_field.set(event_target_value(&ev))
                />
            </label>

            <label class="field-label">
                "Text to analyze"
                <textarea
                    id="textInput"
                    class="field"
                    rows="5"
                    placeholder="Type a sentence or short paragraph..."
                    node_ref=input_ref
                    prop:value=move || text.get()
                    on:input=move |ev| text.set(event_target_value(&ev))
                ></textarea>
            </label>

            <PresetPills presets=presets text=text input_ref=input_ref/>

            <div class="actions">
                <button
                    id="submitBtn"
                    class="primary"
                    prop:disabled=move || surface.busy.get()
                    on:click=on_submit
                >
                    "Analyze"
                </button>
                <button
                    class="secondary"
                    prop:disabled=move || surface.busy.get()
                    on:click=on_check
                >
                    "Check API"
                </button>
            </div>

            <StatusLine status=surface.status/>

            <div
                id="result"
                class="result"
                aria-busy=move || (surface.phase.get() == SubmissionPhase::Submitting).to_string()
            >
                {move || surface.result.get().map(|result| view! { <ResultPanel result=result/> })}
            </div>
        </section>
    }
}
