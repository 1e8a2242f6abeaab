//! Session application services.
//!
//! This module contains the factory that wires analysis sessions and the
//! manager that keeps track of open ones.

mod factory;
mod manager;

pub use factory::SessionFactory;
pub use manager::SessionManager;
