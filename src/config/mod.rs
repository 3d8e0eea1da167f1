//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → command-line overrides applied by the binary
//!     → validation.rs (semantic checks)
//!     → ProbeConfig (validated, immutable for the run)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so the tool runs with only a base URL
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::BackoffStrategy;
pub use schema::ConcurrencyConfig;
pub use schema::HttpConfig;
pub use schema::ObservabilityConfig;
pub use schema::OutputConfig;
pub use schema::ProbeConfig;
pub use schema::RetryConfig;
pub use schema::TargetConfig;
pub use validation::{validate_config, ValidationError};
