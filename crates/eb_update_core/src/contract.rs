use serde::{Deserialize, Serialize};

pub const REQUEST_TYPE_CREATE: &str = "Create";
pub const REQUEST_TYPE_UPDATE: &str = "Update";
pub const REQUEST_TYPE_DELETE: &str = "Delete";
pub const NOMINAL_HEALTH: &str = "Green";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestType {
    Create,
    Update,
    Delete,
}

impl RequestType {
    pub fn parse(value: &str) -> Result<Self, HandlerError> {
        match value {
            REQUEST_TYPE_CREATE => Ok(Self::Create),
            REQUEST_TYPE_UPDATE => Ok(Self::Update),
            REQUEST_TYPE_DELETE => Ok(Self::Delete),
            other => Err(HandlerError::InvalidRequest(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => REQUEST_TYPE_CREATE,
            Self::Update => REQUEST_TYPE_UPDATE,
            Self::Delete => REQUEST_TYPE_DELETE,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_label: Option<String>,
}

/// CloudFormation custom-resource lifecycle event.
///
/// `request_type` stays a raw string so an unrecognized value can be reported
/// verbatim by the handler that dispatches on it. The envelope identifiers are
/// optional and only used for log correlation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct LifecycleEvent {
    pub request_type: String,
    #[serde(default)]
    pub resource_properties: ResourceProperties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical_resource_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_resource_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

impl LifecycleEvent {
    pub fn new(request_type: impl Into<String>, properties: ResourceProperties) -> Self {
        Self {
            request_type: request_type.into(),
            resource_properties: properties,
            request_id: None,
            stack_id: None,
            logical_resource_id: None,
            physical_resource_id: None,
            resource_type: None,
        }
    }

    pub fn parsed_request_type(&self) -> Result<RequestType, HandlerError> {
        RequestType::parse(&self.request_type)
    }

    pub fn update_target(&self) -> Result<UpdateTarget, HandlerError> {
        UpdateTarget::from_properties(&self.resource_properties)
    }
}

/// The (application, environment, version) triple a Create/Update acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTarget {
    pub application_name: String,
    pub environment_name: String,
    pub version_label: String,
}

impl UpdateTarget {
    pub fn from_properties(properties: &ResourceProperties) -> Result<Self, HandlerError> {
        Ok(Self {
            application_name: required(&properties.application_name, "ApplicationName")?,
            environment_name: required(&properties.environment_name, "EnvironmentName")?,
            version_label: required(&properties.version_label, "VersionLabel")?,
        })
    }
}

fn required(value: &Option<String>, key: &'static str) -> Result<String, HandlerError> {
    value.clone().ok_or(HandlerError::MissingProperty(key))
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OnEventResponse {
    #[serde(rename = "PhysicalResourceId")]
    pub physical_resource_id: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct IsCompleteResponse {
    #[serde(rename = "IsComplete")]
    pub is_complete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Health {
    Green,
    Other(String),
}

impl Health {
    pub fn from_provider(value: &str) -> Self {
        if value == NOMINAL_HEALTH {
            Self::Green
        } else {
            Self::Other(value.to_string())
        }
    }

    pub fn is_nominal(&self) -> bool {
        matches!(self, Self::Green)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Green => NOMINAL_HEALTH,
            Self::Other(value) => value,
        }
    }
}

/// One record of a describe-environments response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentStatus {
    pub environment_name: Option<String>,
    pub version_label: Option<String>,
    pub health: Option<Health>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    InvalidRequest(String),
    MissingProperty(&'static str),
    Api(String),
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequest(request_type) => {
                write!(f, "Invalid request type: {request_type}")
            }
            Self::MissingProperty(key) => {
                write!(f, "ResourceProperties.{key} is required")
            }
            Self::Api(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for HandlerError {}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_cloudformation_event_shape() {
        let event: LifecycleEvent = serde_json::from_value(json!({
            "RequestType": "Update",
            "RequestId": "req-1",
            "StackId": "arn:aws:cloudformation:eu-west-1:123:stack/app/1",
            "LogicalResourceId": "EBUpdate",
            "PhysicalResourceId": "EBUpdate-app1-env1",
            "ResourceType": "Custom::EBUpdate",
            "ResourceProperties": {
                "ServiceToken": "arn:aws:lambda:eu-west-1:123:function:provider",
                "ApplicationName": "app1",
                "EnvironmentName": "env1",
                "VersionLabel": "v2"
            }
        }))
        .expect("event should decode");

        assert_eq!(event.parsed_request_type(), Ok(RequestType::Update));
        assert_eq!(event.physical_resource_id.as_deref(), Some("EBUpdate-app1-env1"));
        assert_eq!(
            event.update_target(),
            Ok(UpdateTarget {
                application_name: "app1".to_string(),
                environment_name: "env1".to_string(),
                version_label: "v2".to_string(),
            })
        );
    }

    #[test]
    fn delete_event_decodes_without_properties() {
        let event: LifecycleEvent =
            serde_json::from_value(json!({"RequestType": "Delete"})).expect("event should decode");

        assert_eq!(event.parsed_request_type(), Ok(RequestType::Delete));
        assert_eq!(event.resource_properties, ResourceProperties::default());
    }

    #[test]
    fn unknown_request_type_names_the_value() {
        let error = RequestType::parse("Replace").expect_err("unknown type should fail");
        assert_eq!(error, HandlerError::InvalidRequest("Replace".to_string()));
        assert!(error.to_string().contains("Replace"));
    }

    #[test]
    fn request_type_matching_is_case_sensitive() {
        assert!(RequestType::parse("create").is_err());
        assert_eq!(RequestType::parse("Create").map(RequestType::as_str), Ok("Create"));
    }

    #[test]
    fn missing_property_is_reported_by_key() {
        let properties = ResourceProperties {
            application_name: Some("app1".to_string()),
            environment_name: None,
            version_label: Some("v2".to_string()),
        };

        let error = UpdateTarget::from_properties(&properties).expect_err("should fail");
        assert_eq!(error, HandlerError::MissingProperty("EnvironmentName"));
        assert_eq!(error.to_string(), "ResourceProperties.EnvironmentName is required");
    }

    #[test]
    fn responses_use_cloudformation_keys() {
        let on_event = serde_json::to_value(OnEventResponse {
            physical_resource_id: "EBUpdate-a-b".to_string(),
        })
        .expect("response should serialize");
        let is_complete = serde_json::to_value(IsCompleteResponse { is_complete: true })
            .expect("response should serialize");

        assert_eq!(on_event, json!({"PhysicalResourceId": "EBUpdate-a-b"}));
        assert_eq!(is_complete, json!({"IsComplete": true}));
    }

    #[test]
    fn only_green_health_is_nominal() {
        assert!(Health::from_provider("Green").is_nominal());
        assert!(!Health::from_provider("Yellow").is_nominal());
        assert!(!Health::from_provider("green").is_nominal());
        assert_eq!(Health::from_provider("Grey").as_str(), "Grey");
    }
}
