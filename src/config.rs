use std::{
    env,
    time::Duration,
};

use tracing::warn;
use url::Url;

use crate::utils::constants::{
    EPIC_API_BASE,
    EPIC_ARCHIVE_BASE,
    REQUEST_TIMEOUT,
};

pub const API_URL_VAR: &str = "EPIC_API_URL";
pub const ARCHIVE_URL_VAR: &str = "EPIC_ARCHIVE_URL";
pub const TIMEOUT_VAR: &str = "EPIC_TIMEOUT_SECS";

/// Where lookups are sent and how long they may take.
///
/// Both base urls are expected to end in a `/`, the image type and date
/// segments are appended to them as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpicConfig {
    pub api_base: String,
    pub archive_base: String,
    pub timeout: Duration,
}

impl Default for EpicConfig {
    fn default() -> Self {
        Self {
            api_base: EPIC_API_BASE.to_owned(),
            archive_base: EPIC_ARCHIVE_BASE.to_owned(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl EpicConfig {
    /// Builds the config from `EPIC_API_URL`, `EPIC_ARCHIVE_URL` and
    /// `EPIC_TIMEOUT_SECS`, keeping the default for anything unset or invalid.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base = lookup(API_URL_VAR)
            .and_then(|v| base_url(API_URL_VAR, v))
            .unwrap_or(defaults.api_base);

        let archive_base = lookup(ARCHIVE_URL_VAR)
            .and_then(|v| base_url(ARCHIVE_URL_VAR, v))
            .unwrap_or(defaults.archive_base);

        let timeout = lookup(TIMEOUT_VAR)
            .and_then(|v| {
                match v.trim().parse::<u64>() {
                    Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                    _ => {
                        warn!(var = TIMEOUT_VAR, value = %v, "ignoring invalid timeout");
                        None
                    },
                }
            })
            .unwrap_or(defaults.timeout);

        Self {
            api_base,
            archive_base,
            timeout,
        }
    }
}

fn base_url(var: &str, value: String) -> Option<String> {
    match Url::parse(&value) {
        Ok(url) if !url.cannot_be_a_base() => {
            let mut base = url.to_string();
            if !base.ends_with('/') {
                base.push('/');
            }
            Some(base)
        },
        _ => {
            warn!(var, value = %value, "ignoring invalid base url");
            None
        },
    }
}
