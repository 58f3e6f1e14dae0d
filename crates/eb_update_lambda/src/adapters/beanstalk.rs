use aws_sdk_elasticbeanstalk::error::DisplayErrorContext;
use aws_sdk_elasticbeanstalk::types::EnvironmentDescription;

use crate::adapters::environment::EnvironmentManager;
use crate::runtime::contract::{EnvironmentStatus, Health};

/// [`EnvironmentManager`] backed by the Elastic Beanstalk SDK client.
///
/// Calls are bridged onto the current Tokio runtime with `block_in_place`, so
/// this must be used from a multi-threaded runtime.
#[derive(Clone)]
pub struct ElasticBeanstalkEnvironments {
    client: aws_sdk_elasticbeanstalk::Client,
}

impl ElasticBeanstalkEnvironments {
    pub fn new(client: aws_sdk_elasticbeanstalk::Client) -> Self {
        Self { client }
    }
}

impl EnvironmentManager for ElasticBeanstalkEnvironments {
    fn update_environment(
        &self,
        application_name: &str,
        environment_name: &str,
        version_label: &str,
    ) -> Result<(), String> {
        let client = self.client.clone();
        let application_name = application_name.to_string();
        let environment_name = environment_name.to_string();
        let version_label = version_label.to_string();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .update_environment()
                    .application_name(application_name)
                    .environment_name(environment_name)
                    .version_label(version_label)
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| {
                        format!(
                            "failed to update environment: {}",
                            DisplayErrorContext(&error)
                        )
                    })
            })
        })
    }

    fn describe_environments(
        &self,
        application_name: &str,
        environment_name: &str,
    ) -> Result<Vec<EnvironmentStatus>, String> {
        let client = self.client.clone();
        let application_name = application_name.to_string();
        let environment_name = environment_name.to_string();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .describe_environments()
                    .application_name(application_name)
                    .environment_names(environment_name)
                    .send()
                    .await
                    .map(|output| {
                        output
                            .environments()
                            .iter()
                            .map(environment_status)
                            .collect()
                    })
                    .map_err(|error| {
                        format!(
                            "failed to describe environments: {}",
                            DisplayErrorContext(&error)
                        )
                    })
            })
        })
    }
}

fn environment_status(description: &EnvironmentDescription) -> EnvironmentStatus {
    EnvironmentStatus {
        environment_name: description.environment_name().map(str::to_string),
        version_label: description.version_label().map(str::to_string),
        health: description
            .health()
            .map(|health| Health::from_provider(health.as_str())),
        status: description.status().map(|status| status.as_str().to_string()),
    }
}
