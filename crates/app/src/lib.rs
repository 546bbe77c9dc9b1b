//! Application wiring: configuration and a scripted routine-builder session.

pub mod config;
pub mod session;

pub use config::AppConfig;
pub use session::{SessionReport, run_session};
