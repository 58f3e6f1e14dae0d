pub const PHYSICAL_ID_PREFIX: &str = "EBUpdate";

/// Physical resource id reported for an environment update.
///
/// Names are concatenated verbatim; no escaping or trimming is applied.
pub fn physical_resource_id(application_name: &str, environment_name: &str) -> String {
    format!("{PHYSICAL_ID_PREFIX}-{application_name}-{environment_name}")
}
