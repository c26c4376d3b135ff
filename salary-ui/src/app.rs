use anyhow::Context;
use salary_core::service::ServiceRegistry;
use salary_core::{FormInput, RequestState};
use salary_http::HttpServiceFactory;
use serde_json::json;
use tracing::debug;

use crate::config::AppConfig;
use crate::render;
use crate::state::AppState;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Build a [`ServiceRegistry`] with every transport this binary knows about.
pub fn build_registry() -> ServiceRegistry {
    let mut registry = ServiceRegistry::new();
    registry.register(Box::new(HttpServiceFactory));
    registry
}

/// Submit `form` once against the configured service.
///
/// Validation and service failures end up in the returned state; only a
/// broken configuration (unknown backend, unusable client) is an `Err`.
pub async fn calculate(
    config: &AppConfig,
    form: FormInput,
) -> anyhow::Result<AppState> {
    let service = build_registry()
        .create(&config.service_config())
        .await
        .context("could not set up the salary service")?;

    let mut state = AppState::new(form);
    let outcome = state.submit(&*service).await;
    debug!(state = outcome.name(), "submission finished");
    Ok(state)
}

/// Formats the final state for stdout.
pub fn render_output(
    state: &RequestState,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render::render_state(state)),
        OutputFormat::Json => {
            let value = match state {
                RequestState::Succeeded(result) => serde_json::to_value(result)?,
                RequestState::Failed(message) => json!({ "error": message }),
                RequestState::Idle | RequestState::Loading => json!({ "state": state.name() }),
            };
            let mut text = serde_json::to_string_pretty(&value)?;
            text.push('\n');
            Ok(text)
        }
    }
}
