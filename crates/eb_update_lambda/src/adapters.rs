pub mod beanstalk;
pub mod environment;
