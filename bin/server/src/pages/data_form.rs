//! Data form component: loads an integration's records and shows them
//! grouped by container.

mod server;

pub use server::load_integration_data;

use integration_loader_core::IntegrationType;
use integration_loader_records::{
    LOAD_FAILED_MESSAGE, PanelState, PanelView, Record, RecordGroup, TypeStyle, empty_message,
    format_date, heading, item_count_label,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Maps a failed load to the banner text.
///
/// Server-side failures already carry the user message; transport and
/// decoding failures between browser and server get the fallback.
pub fn load_error_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(message) => message.clone(),
        _ => LOAD_FAILED_MESSAGE.to_string(),
    }
}

/// Load/clear controls plus the grouped result for one integration.
#[component]
pub fn DataForm(
    integration: IntegrationType,
    /// JSON text of the stored credentials.
    #[prop(into)]
    credentials: Signal<String>,
) -> impl IntoView {
    let state = RwSignal::new(PanelState::default());
    let busy = move || state.with(PanelState::is_loading);

    let on_load = move |_| {
        if !state.with_untracked(PanelState::controls_enabled) {
            return;
        }
        state.update(PanelState::begin_load);
        let credentials = credentials.get_untracked();
        spawn_local(async move {
            let outcome = load_integration_data(integration, credentials)
                .await
                .map_err(|e| load_error_message(&e));
            state.update(|s| s.finish_load(outcome));
        });
    };

    let on_clear = move |_| state.update(PanelState::clear);

    view! {
        <div class="data-form" data-phase=move || state.with(|s| s.phase().as_str())>
            <div class="data-form-actions">
                <button class="primary-btn" on:click=on_load disabled=busy>
                    {move || if busy() {
                        view! { <span class="spinner" aria-hidden="true"></span>"Loading..." }.into_any()
                    } else {
                        view! { "Load Data" }.into_any()
                    }}
                </button>
                <button class="secondary-btn" on:click=on_clear disabled=busy>
                    "Clear Data"
                </button>
            </div>

            {move || state.with(|s| s.error().map(str::to_string)).map(|message| view! {
                <div class="alert alert-error" role="alert">{message}</div>
            })}

            {move || match state.with(PanelState::view) {
                PanelView::Idle => ().into_any(),
                PanelView::Empty => view! {
                    <div class="alert alert-info">{empty_message(integration)}</div>
                }.into_any(),
                PanelView::Loaded { total, groups } => view! {
                    <div class="data-groups">
                        <h2 class="data-heading">{heading(integration, total)}</h2>
                        {groups.into_iter()
                            .map(|group| view! { <RecordGroupSection group=group/> })
                            .collect_view()}
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

/// Collapsible section for one container and its children.
#[component]
fn RecordGroupSection(group: RecordGroup) -> impl IntoView {
    let RecordGroup {
        name,
        container,
        items,
    } = group;
    let badge = item_count_label(items.len());
    let body = if items.is_empty() {
        view! { <p class="empty-group">"No items in this category"</p> }.into_any()
    } else {
        items
            .into_iter()
            .map(|record| view! { <DataCard record=record/> })
            .collect_view()
            .into_any()
    };

    view! {
        <details class="record-group">
            <summary class="record-group-summary">
                <TypeIcon style=container.kind.style()/>
                <span class="record-group-name">{name}</span>
                <span class="chip chip-outlined tone-primary">{badge}</span>
            </summary>
            <div class="record-group-items">{body}</div>
        </details>
    }
}

/// Card for a single record.
#[component]
fn DataCard(record: Record) -> impl IntoView {
    let style = record.kind.style();
    let name = record.display_name().to_string();
    let kind = record.kind.to_string();
    let created = record.creation_time.as_deref().map(format_date);
    let modified = record.last_modified_time.as_deref().map(format_date);
    let has_dates = created.is_some() || modified.is_some();

    view! {
        <div class="data-card">
            <div class="data-card-header">
                <div class="data-card-title">
                    <TypeIcon style=style/>
                    <span class="data-card-name">{name}</span>
                </div>
                <span class=style.badge_classes()>{kind}</span>
            </div>
            {record.id.map(|id| view! { <span class="caption">{format!("ID: {}", id)}</span> })}
            {has_dates.then(|| view! {
                <div class="data-card-dates">
                    {created.map(|date| view! { <span class="caption">{format!("Created: {}", date)}</span> })}
                    {modified.map(|date| view! { <span class="caption">{format!("Modified: {}", date)}</span> })}
                </div>
            })}
        </div>
    }
}

#[component]
fn TypeIcon(style: TypeStyle) -> impl IntoView {
    view! {
        <span class=style.icon_classes() aria-hidden="true">{style.icon.glyph()}</span>
    }
}
