//! Shared Elastic Beanstalk update custom-resource primitives.
//!
//! This crate owns the lifecycle event contract, physical id construction and
//! completion evaluation. It intentionally excludes AWS SDK and Lambda runtime
//! concerns.

pub mod completion;
pub mod contract;
pub mod resource_ids;
