//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → MonitorConfig (validated, immutable)
//!     → shared by value with the monitor service at startup
//! ```
//!
//! # Design Decisions
//! - Config is read exactly once at startup; there is no reload path
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    ContentDriftConfig, MonitorConfig, NotificationConfig, ObservabilityConfig, PollConfig,
};
pub use validation::{validate_config, ValidationError};
