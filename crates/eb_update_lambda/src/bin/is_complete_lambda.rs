use eb_update_lambda::adapters::beanstalk::ElasticBeanstalkEnvironments;
use eb_update_lambda::config::RuntimeConfig;
use eb_update_lambda::handlers::decode_event;
use eb_update_lambda::handlers::is_complete::handle_is_complete;
use eb_update_lambda::runtime::contract::IsCompleteResponse;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(
    event: LambdaEvent<Value>,
    environments: &ElasticBeanstalkEnvironments,
) -> Result<IsCompleteResponse, Error> {
    let lifecycle_event = decode_event(event.payload).map_err(Error::from)?;

    Ok(handle_is_complete(&lifecycle_event, environments)?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = RuntimeConfig::from_env();
    let environments = ElasticBeanstalkEnvironments::new(config.beanstalk_client().await);

    lambda_runtime::run(service_fn(|event| handle_request(event, &environments))).await
}
