//! Infrastructure layer for Emotive: file locations, configuration and
//! secret loading.

pub mod config_service;
pub mod paths;
pub mod secret_service;

pub use config_service::ConfigService;
pub use secret_service::SecretServiceImpl;
