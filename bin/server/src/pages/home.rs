//! Home page component.

use super::DataForm;
use integration_loader_core::IntegrationType;
use leptos::prelude::*;

/// The home page: integration picker, credentials input and the data form.
#[component]
pub fn HomePage() -> impl IntoView {
    let (integration, set_integration) = signal(IntegrationType::Notion);
    let (credentials, set_credentials) = signal("{}".to_string());

    view! {
        <div class="home-page">
            <h1>"Integration Data"</h1>
            <p>"Load the records an integration exposes with your stored credentials."</p>

            <div class="form-group">
                <label for="integration-type">"Integration"</label>
                <select
                    id="integration-type"
                    on:change=move |ev| {
                        match event_target_value(&ev).parse::<IntegrationType>() {
                            Ok(selected) => set_integration.set(selected),
                            Err(e) => leptos::logging::warn!("{}", e),
                        }
                    }
                >
                    {IntegrationType::ALL.into_iter().map(|option| view! {
                        <option
                            value=option.display_name()
                            selected=move || integration.get() == option
                        >
                            {option.display_name()}
                        </option>
                    }).collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label for="credentials">"Credentials (JSON)"</label>
                <textarea
                    id="credentials"
                    rows="4"
                    prop:value=move || credentials.get()
                    on:input=move |ev| set_credentials.set(event_target_value(&ev))
                ></textarea>
            </div>

            // A new integration starts from an idle form
            {move || {
                let integration = integration.get();
                view! { <DataForm integration=integration credentials=credentials/> }
            }}
        </div>
    }
}
