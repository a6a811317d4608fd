//! Every way a lookup can end without an image.
//!
//! The `Display` text of each variant is exactly what the tool host receives,
//! so these strings are part of the tool's observable output.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EpicError {
    #[error("Error: Invalid type '{0}'. Valid options: 'natural', 'enhanced','aerosol', 'cloud'")]
    InvalidImageType(String),
    #[error("Error: earth_date must be in YYYY-MM-DD format")]
    InvalidDateFormat,
    /// Not a failure as such, the api simply had nothing for the request.
    #[error("No images found for the specified parameters")]
    NoImagesFound,
    #[error("Error: Request timed out. Please try again.")]
    RequestTimeout,
    #[error("Error: HTTP {0}")]
    HttpStatus(u16),
    #[error("Error: {0}")]
    Unexpected(String),
}

impl EpicError {
    /// Whether the rendered text reports a failure rather than an empty result.
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::NoImagesFound)
    }
}

impl From<reqwest::Error> for EpicError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::RequestTimeout
        } else if let Some(status) = e.status() {
            Self::HttpStatus(status.as_u16())
        } else {
            Self::Unexpected(e.to_string())
        }
    }
}

impl From<serde_json::Error> for EpicError {
    fn from(e: serde_json::Error) -> Self {
        Self::Unexpected(e.to_string())
    }
}
