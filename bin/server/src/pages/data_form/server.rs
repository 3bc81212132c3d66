//! Data form server functions.

use integration_loader_core::IntegrationType;
use integration_loader_records::Record;
use leptos::prelude::*;

/// Server function to load an integration's records from the backend.
///
/// `credentials` is the JSON text of the stored credentials and is forwarded
/// to the backend unmodified. It is never logged.
#[server]
pub async fn load_integration_data(
    integration: IntegrationType,
    credentials: String,
) -> Result<Vec<Record>, ServerFnError> {
    use crate::error::LoadDataError;
    use axum::Extension;
    use integration_loader_client::LoaderClient;

    let Extension(client): Extension<LoaderClient> =
        leptos_axum::extract().await.map_err(|e| {
            tracing::error!(
                error = %e,
                "Integration backend client missing from request extensions"
            );
            LoadDataError::ClientUnavailable {
                details: e.to_string(),
            }
            .into_server_error()
        })?;

    let records = client
        .load(integration, &credentials)
        .await
        .map_err(|e| {
            tracing::warn!(
                error = %e,
                integration = %integration,
                backend = %client.base_url(),
                "Integration load failed"
            );
            LoadDataError::from(e).into_server_error()
        })?;

    tracing::info!(
        integration = %integration,
        record_count = records.len(),
        "Loaded integration data"
    );

    Ok(records)
}
