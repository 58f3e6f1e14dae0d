use serde_json::{json, Value};

use crate::runtime::contract::LifecycleEvent;

pub fn log_info(component: &str, event: &str, details: Value) {
    eprintln!("{}", log_record(component, None, event, details));
}

pub fn log_error(component: &str, event: &str, details: Value) {
    eprintln!("{}", log_record(component, Some("error"), event, details));
}

fn log_record(component: &str, level: Option<&str>, event: &str, details: Value) -> Value {
    let mut record = json!({
        "component": component,
        "event": event,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "details": details,
    });
    if let Some(level) = level {
        record["level"] = json!(level);
    }
    record
}

/// Correlation fields carried by every handler log line.
pub fn event_context(event: &LifecycleEvent) -> Value {
    let properties = &event.resource_properties;
    json!({
        "request_type": event.request_type.clone(),
        "request_id": event.request_id.clone(),
        "stack_id": event.stack_id.clone(),
        "logical_resource_id": event.logical_resource_id.clone(),
        "physical_resource_id": event.physical_resource_id.clone(),
        "resource_type": event.resource_type.clone(),
        "application_name": properties.application_name.clone(),
        "environment_name": properties.environment_name.clone(),
        "version_label": properties.version_label.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::contract::ResourceProperties;

    #[test]
    fn info_record_has_no_level() {
        let record = log_record("on_event", None, "update_requested", json!({"a": 1}));

        assert_eq!(record["component"], "on_event");
        assert_eq!(record["event"], "update_requested");
        assert_eq!(record["details"]["a"], 1);
        assert!(record.get("level").is_none());
        assert!(record["timestamp"].as_str().is_some());
    }

    #[test]
    fn error_record_is_tagged() {
        let record = log_record("is_complete", Some("error"), "poll_failed", json!({}));
        assert_eq!(record["level"], "error");
    }

    #[test]
    fn context_carries_event_identifiers() {
        let mut event = LifecycleEvent::new(
            "Create",
            ResourceProperties {
                application_name: Some("app1".to_string()),
                environment_name: Some("env1".to_string()),
                version_label: None,
            },
        );
        event.request_id = Some("req-9".to_string());
        event.stack_id = Some("arn:aws:cloudformation:eu-west-1:123:stack/app/1".to_string());
        event.physical_resource_id = Some("EBUpdate-app1-env1".to_string());
        event.resource_type = Some("Custom::EBUpdate".to_string());

        let context = event_context(&event);
        assert_eq!(context["request_type"], "Create");
        assert_eq!(context["request_id"], "req-9");
        assert_eq!(context["stack_id"], "arn:aws:cloudformation:eu-west-1:123:stack/app/1");
        assert_eq!(context["physical_resource_id"], "EBUpdate-app1-env1");
        assert_eq!(context["resource_type"], "Custom::EBUpdate");
        assert_eq!(context["application_name"], "app1");
        assert!(context["version_label"].is_null());
    }
}
