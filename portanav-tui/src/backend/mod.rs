//! Local services

mod config_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
