use aws_config::BehaviorVersion;

pub const ENDPOINT_URL_ENV: &str = "EB_ENDPOINT_URL";

/// Cold-start configuration shared by both Lambda binaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub endpoint_url: Option<String>,
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let endpoint_url = lookup(ENDPOINT_URL_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        Self { endpoint_url }
    }

    pub async fn load_sdk_config(&self) -> aws_config::SdkConfig {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(endpoint_url) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        loader.load().await
    }

    pub async fn beanstalk_client(&self) -> aws_sdk_elasticbeanstalk::Client {
        aws_sdk_elasticbeanstalk::Client::new(&self.load_sdk_config().await)
    }
}
