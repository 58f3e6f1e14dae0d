use serde_json::json;

use crate::adapters::environment::EnvironmentManager;
use crate::logging::{event_context, log_error, log_info};
use crate::runtime::contract::{HandlerError, LifecycleEvent, OnEventResponse, RequestType};
use crate::runtime::resource_ids::physical_resource_id;

const COMPONENT: &str = "on_event";

/// Applies a lifecycle event to the target environment.
///
/// Delete has nothing to undo and yields `None`. Create and Update submit a
/// single update call; its outcome is not awaited here, completion is observed
/// by the poll handler.
pub fn handle_on_event(
    event: &LifecycleEvent,
    environments: &impl EnvironmentManager,
) -> Result<Option<OnEventResponse>, HandlerError> {
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

    match request_type {
        RequestType::Delete => {
            log_info(COMPONENT, "update_skipped", event_context(event));
            Ok(None)
        }
        RequestType::Create | RequestType::Update => {
            let target = event.update_target()?;
            log_info(COMPONENT, "update_requested", event_context(event));

            if let Err(message) = environments.update_environment(
                &target.application_name,
                &target.environment_name,
                &target.version_label,
            ) {
                log_error(
                    COMPONENT,
                    "update_failed",
                    json!({"context": event_context(event), "error": message.clone()}),
                );
                return Err(HandlerError::Api(message));
            }

            let physical_resource_id =
                physical_resource_id(&target.application_name, &target.environment_name);
            log_info(
                COMPONENT,
                "update_submitted",
                json!({
                    "context": event_context(event),
                    "physical_resource_id": physical_resource_id.clone(),
                }),
            );
            Ok(Some(OnEventResponse {
                physical_resource_id,
            }))
        }
    }
}
