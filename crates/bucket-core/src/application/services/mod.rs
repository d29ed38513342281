//! Application services.

pub mod setup_service;

pub use setup_service::{PublishOptions, PublishOutcome, SetupReport, SetupService};
