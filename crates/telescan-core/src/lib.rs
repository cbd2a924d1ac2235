//! Telescan Core - Foundation crate for the Telescan client.
//!
//! This crate provides the phone-number normalization pipeline, shared
//! error handling, and configuration management that the other Telescan
//! crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`number`] - Phone-number normalization and validation (`PhoneNumber`)
//! - [`label`] - Display-label helpers for identifier-like names
//!
//! # Example
//!
//! ```rust
//! use telescan_core::{is_valid, normalize, PhoneNumber};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! assert_eq!(normalize("+1 (555) 444-3333"), "15554443333");
//! assert!(is_valid("+1 (555) 444-3333"));
//!
//! let number = PhoneNumber::new("+1 (555) 444-3333")?;
//! assert_eq!(number.as_str(), "15554443333");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod label;
pub mod number;

// Re-export commonly used types
pub use config::{ApiConfig, ClientConfig, HttpConfig};
pub use error::{ConfigError, ConfigResult, Result, TelescanError};
pub use label::humanize;
pub use number::{is_valid, normalize, PhoneNumber};
