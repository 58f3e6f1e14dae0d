//! AWS-oriented adapters and handlers for the Elastic Beanstalk update
//! custom resource.
//!
//! This crate owns runtime integration details (Lambda handlers, the Elastic
//! Beanstalk client adapter, logging and configuration) and exposes a single
//! runtime module boundary for the contract primitives.

pub mod adapters;
pub mod config;
pub mod handlers;
pub mod logging;
pub mod runtime;
