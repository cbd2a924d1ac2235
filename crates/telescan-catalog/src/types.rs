//! Wire types for the backend's v2 API.

use serde::{Deserialize, Serialize};
use telescan_core::humanize;

/// One scanner plugin advertised by the backend.
///
/// Descriptors are plain values as returned by the server: order is the
/// server's order, duplicates are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerDescriptor {
    /// Internal scanner name, e.g. `googlesearch`
    pub name: String,
    /// Human-written description of what the scanner does
    pub description: String,
}

impl ScannerDescriptor {
    /// Human-readable label for the scanner name.
    #[must_use]
    pub fn display_name(&self) -> String {
        humanize(&self.name)
    }
}

/// Free-form options forwarded verbatim to a scanner.
pub type ScannerOptions = serde_json::Map<String, serde_json::Value>;

/// Outcome of a scanner dry run: the backend checked the number against
/// the scanner's requirements without performing a scan.
#[derive(Debug, Clone, Deserialize)]
pub struct DryRunOutcome {
    /// Whether the scanner would accept the number
    pub success: bool,
    /// Rejection reason when `success` is false
    #[serde(default)]
    pub error: Option<String>,
}

/// Parsed-number information returned by the backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberInsight {
    /// Whether the backend considers the number valid
    pub valid: bool,
    /// Raw national significant number
    pub raw_local: String,
    /// Nationally formatted number
    pub local: String,
    /// E.164 formatted number
    pub e164: String,
    /// Internationally formatted number
    pub international: String,
    /// Country calling code
    pub country_code: i32,
    /// ISO country name
    pub country: String,
    /// Carrier name, empty when unknown
    pub carrier: String,
}

/// `GET /v2/scanners` response body.
///
/// The backend serializes an empty scanner list as `null`, hence the
/// `Option`.
#[derive(Debug, Deserialize)]
pub(crate) struct ScannersResponse {
    #[serde(default)]
    pub scanners: Option<Vec<ScannerDescriptor>>,
}

/// `POST /v2/scanners/{scanner}/run` response body.
#[derive(Debug, Deserialize)]
pub(crate) struct RunResponse {
    pub result: serde_json::Value,
}

/// Error body the backend attaches to non-success statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: String,
}

/// Request body for scan and dry-run submissions.
#[derive(Debug, Serialize)]
pub(crate) struct ScanInput<'a> {
    pub number: &'a str,
    pub options: &'a ScannerOptions,
}

/// Request body for `POST /v2/numbers`.
#[derive(Debug, Serialize)]
pub(crate) struct NumberInput<'a> {
    pub number: &'a str,
}
