use std::time::Duration;

use lazy_static::lazy_static;
use reqwest::header::{
    HeaderMap,
    HeaderValue,
    ACCEPT,
    ACCEPT_ENCODING,
    CONNECTION,
    USER_AGENT,
};

// The EPIC servers turn away requests that identify as a generic http client,
// so lookups present themselves as a desktop browser instead.
fn browser_like_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
        ),
    );
    headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
    headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate, br"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));

    headers
}

lazy_static! {
    pub static ref BROWSER_LIKE_HEADERS: HeaderMap = browser_like_headers();
}

pub const EPIC_API_BASE: &str = "https://epic.gsfc.nasa.gov/api/";
pub const EPIC_ARCHIVE_BASE: &str = "https://epic.gsfc.nasa.gov/archive/";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const NO_CAPTION: &str = "No caption available";

pub const TOOL_NAME: &str = "get_earth_image_definition";
pub const TOOL_DESCRIPTION: &str = "Request to Earth Polychromatic Imaging Camera (EPIC) API. \
Fetch satellite images of Earth from NASA's DSCOVR satellite.";
