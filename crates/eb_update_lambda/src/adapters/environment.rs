use crate::runtime::contract::EnvironmentStatus;

/// Port over the Elastic Beanstalk environment management API.
pub trait EnvironmentManager {
    fn update_environment(
        &self,
        application_name: &str,
        environment_name: &str,
        version_label: &str,
    ) -> Result<(), String>;

    fn describe_environments(
        &self,
        application_name: &str,
        environment_name: &str,
    ) -> Result<Vec<EnvironmentStatus>, String>;
}
