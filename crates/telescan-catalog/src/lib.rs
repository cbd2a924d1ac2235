//! Telescan Catalog - Scanner catalog retrieval.
//!
//! This crate talks to the scanning backend's v2 HTTP API: it lists the
//! scanner plugins the backend advertises, applies the client-side filter
//! policy, and submits numbers for remote scanning. All intelligence
//! gathering happens on the backend; this crate only moves requests and
//! typed responses across the wire.
//!
//! # Example
//!
//! ```rust,ignore
//! use telescan_catalog::CatalogClient;
//!
//! let client = CatalogClient::new("http://localhost:5000/api")?;
//! let scanners = client.get_scanners().await?;
//! for scanner in scanners {
//!     println!("{}: {}", scanner.display_name(), scanner.description);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod client;
pub mod error;
pub mod filter;
pub mod types;

// Re-export commonly used types
pub use client::CatalogClient;
pub use error::{CatalogError, Result};
pub use filter::{ScannerFilter, LOCAL_SCANNER};
pub use types::{DryRunOutcome, NumberInsight, ScannerDescriptor, ScannerOptions};
