//! Core module - Application state, configuration, and common types

mod config;
mod error;
mod types;

pub use config::{Config, DisplayConfig, FieldDefaults, WindowConfig};
pub use error::{Error, Result};
pub use types::{AppState, RawInputs};
