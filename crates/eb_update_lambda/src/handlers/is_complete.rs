use serde_json::json;

use crate::adapters::environment::EnvironmentManager;
use crate::logging::{event_context, log_error, log_info};
use crate::runtime::completion::{deployment_complete, is_transitioning};
use crate::runtime::contract::{HandlerError, IsCompleteResponse, LifecycleEvent, RequestType};

const COMPONENT: &str = "is_complete";

/// Reports whether the update submitted for `event` has settled.
///
/// Environments are described fresh on every call. No waiting happens here;
/// the orchestrator re-invokes until `is_complete` is true or it times out.
pub fn handle_is_complete(
    event: &LifecycleEvent,
    environments: &impl EnvironmentManager,
) -> Result<IsCompleteResponse, HandlerError> {
    let request_type = match event.parsed_request_type() {
        Ok(value) => value,
        Err(error) => {
            log_error(
                COMPONENT,
                "invalid_request",
                json!({"context": event_context(event), "error": error.to_string()}),
            );
            return Err(error);
        }
    };

    if request_type == RequestType::Delete {
        return Ok(IsCompleteResponse { is_complete: true });
    }

    let target = event.update_target()?;
    log_info(COMPONENT, "poll_started", event_context(event));

    let described = environments
        .describe_environments(&target.application_name, &target.environment_name)
        .map_err(|message| {
            log_error(
                COMPONENT,
                "poll_failed",
                json!({"context": event_context(event), "error": message.clone()}),
            );
            HandlerError::Api(message)
        })?;

    if described.is_empty() {
        log_error(COMPONENT, "environment_missing", json!({"context": event_context(event)}));
    }

    let observed = described.iter().inspect(|environment| {
        log_info(
            COMPONENT,
            "environment_observed",
            json!({
                "environment_name": environment.environment_name.clone(),
                "version_label": environment.version_label.clone(),
                "health": environment.health.as_ref().map(|health| health.as_str().to_string()),
                "status": environment.status.clone(),
                "in_progress": is_transitioning(environment),
            }),
        );
    });
    let is_complete = deployment_complete(observed, &target.version_label);

    log_info(
        COMPONENT,
        "poll_completed",
        json!({
            "context": event_context(event),
            "environments_described": described.len(),
            "is_complete": is_complete,
        }),
    );
    Ok(IsCompleteResponse { is_complete })
}
