use crate::contract::EnvironmentStatus;

/// Lifecycle statuses during which Elastic Beanstalk is still applying a change.
pub const TRANSITIONING_STATUSES: [&str; 2] = ["Launching", "Updating"];

/// True while the environment reports a launch or update in flight.
///
/// Informational only: completion is decided by version and health alone.
pub fn is_transitioning(environment: &EnvironmentStatus) -> bool {
    environment
        .status
        .as_deref()
        .map(|status| TRANSITIONING_STATUSES.contains(&status))
        .unwrap_or(false)
}

/// True once `environment` runs `version_label` and reports nominal health.
pub fn is_settled(environment: &EnvironmentStatus, version_label: &str) -> bool {
    environment.version_label.as_deref() == Some(version_label)
        && environment
            .health
            .as_ref()
            .map(|health| health.is_nominal())
            .unwrap_or(false)
}

/// Scans described environments until one has settled on `version_label`.
pub fn deployment_complete<'a>(
    environments: impl IntoIterator<Item = &'a EnvironmentStatus>,
    version_label: &str,
) -> bool {
    environments
        .into_iter()
        .any(|environment| is_settled(environment, version_label))
}
