// crates/distortion-app/src/components.rs
// Shared layout and result components

use leptos::html;
use leptos::prelude::*;

use crate::presets::Preset;
use crate::render::{DistortionItem, ResultView, EMPTY_LIST_PLACEHOLDER};
use crate::surface::Status;

// ============================================================================
// Layout Components
// ============================================================================

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="page">
            <header class="page-header">
                <h1>"Distortion Check"</h1>
                <p class="text-muted">"Spot cognitive distortions in a sentence or short paragraph"</p>
            </header>
            <main>
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn StatusLine(status: RwSignal<Option<Status>>) -> impl IntoView {
    view! {
        <div
            id="status"
            class=move || {
                status.with(|s| match s {
                    Some(s) => format!("status {}", s.kind.css_class()),
                    None => "status".to_string(),
                })
            }
        >
            {move || status.with(|s| s.as_ref().map(|s| s.message.clone()).unwrap_or_default())}
        </div>
    }
}

// ============================================================================
// Presets
// ============================================================================

fn focus_input(input_ref: NodeRef<html::Textarea>) {
    if let Some(el) = input_ref.get() {
        if let Err(e) = el.focus() {
            log::warn!("Could not focus input: {:?}", e);
        }
    }
}

#[component]
pub fn PresetPills(
    presets: Vec<Preset>,
    text: RwSignal<String>,
    input_ref: NodeRef<html::Textarea>,
) -> impl IntoView {
    view! {
        <div class="pills">
            {presets
                .into_iter()
                .map(|preset| {
                    let fill = preset.fill_text().to_string();
                    view! {
                        <button
                            type="button"
                            class="pill"
                            title=preset.text.clone()
                            on:click=move |_| {
                                text.set(fill.clone());
                                focus_input(input_ref);
                            }
                        >
                            {preset.label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

// ============================================================================
// Result
// ============================================================================

#[component]
pub fn ResultPanel(result: ResultView) -> impl IntoView {
    let ResultView { badge, summary, items, raw_json } = result;

    let list = if items.is_empty() {
        view! {
            <div class="distortion-list empty">{EMPTY_LIST_PLACEHOLDER}</div>
        }
        .into_any()
    } else {
        view! {
            <div class="distortion-list">
                {items
                    .into_iter()
                    .map(|item| view! { <DistortionCard item=item/> })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <div class=format!("badge {}", badge.tone.css_class())>{badge.label}</div>
        <div class="distortion-summary">{summary}</div>
        {list}
        <pre class="raw-json">{raw_json}</pre>
    }
}

#[component]
fn DistortionCard(item: DistortionItem) -> impl IntoView {
    let DistortionItem {
        name,
        confidence_label,
        confidence_class,
        explanation,
        description,
    } = item;

    view! {
        <div class="distortion-item" title=description>
            <div class="distortion-header">
                <span class="distortion-name">{name}</span>
                <span class=format!("confidence {}", confidence_class)>{confidence_label}</span>
            </div>
            <div class="distortion-expl">{explanation}</div>
        </div>
    }
}
