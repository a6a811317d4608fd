use reqwest::{
    redirect,
    ClientBuilder,
};
use serde_json::{
    json,
    Value,
};
use tracing::{
    debug,
    info,
    warn,
};

use crate::{
    config::EpicConfig,
    error::EpicError,
    models::pictures::{
        EpicImage,
        ImageRequestParams,
        ImageResult,
        ImageType,
        ToolArguments,
    },
    utils::{
        constants::*,
        pictures::{
            archive_url,
            image_records,
        },
    },
};

/// Looks up the newest EPIC picture of Earth for an optional date and image type.
///
/// Every call is independent: a fresh http client is built for the request and
/// dropped with it, so concurrent lookups share nothing.
#[derive(Debug, Clone, Default)]
pub struct EpicImageFetcher {
    config: EpicConfig,
}

impl EpicImageFetcher {
    pub fn new(config: EpicConfig) -> Self {
        Self {
            config,
        }
    }

    /// Runs a lookup and renders the outcome as the text handed back to the
    /// tool host. Failures are rendered too, they start with `Error:`.
    pub async fn fetch(&self, earth_date: Option<&str>, image_type: Option<&str>) -> String {
        match self
            .try_fetch(earth_date, image_type)
            .await
        {
            Ok(result) => result.to_string(),
            Err(e) => {
                if e.is_error() {
                    warn!("EPIC lookup failed: {}", e);
                }
                e.to_string()
            },
        }
    }

    pub async fn try_fetch(
        &self,
        earth_date: Option<&str>,
        image_type: Option<&str>,
    ) -> Result<ImageResult, EpicError> {
        let params = ImageRequestParams::parse(earth_date, image_type)?;
        let request_url = params.request_url(&self.config.api_base);

        info!(url = %request_url, "calling the EPIC api");

        let client = ClientBuilder::new()
            .redirect(redirect::Policy::default())
            .timeout(self.config.timeout)
            .default_headers(BROWSER_LIKE_HEADERS.clone())
            .build()?;

        let body: Value = client
            .get(request_url.as_str())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let images = image_records(body)?;
        debug!(count = images.len(), "received EPIC image records");

        let first: EpicImage = match images.first() {
            Some(first) => serde_json::from_value(first.clone())?,
            None => return Err(EpicError::NoImagesFound),
        };

        let image_type = ImageType::from_request_url(&request_url);

        Ok(ImageResult {
            archive_url: archive_url(&self.config.archive_base, image_type, &first)?,
            caption: first
                .caption
                .unwrap_or_else(|| NO_CAPTION.to_owned()),
            date: first.date,
            image_type,
            total_count: images.len(),
            request_url,
        })
    }

    /// Entry point for hosts that pass the keyword arguments as a json object.
    pub async fn call_tool(&self, arguments: Value) -> String {
        let arguments = match arguments {
            Value::Null => ToolArguments::default(),
            other => {
                match serde_json::from_value::<ToolArguments>(other) {
                    Ok(args) => args,
                    Err(e) => return EpicError::from(e).to_string(),
                }
            },
        };

        self.fetch(
            arguments
                .earth_date
                .as_deref(),
            arguments
                .image_type
                .as_deref(),
        )
        .await
    }
}

/// Fetches an Earth picture using the environment's [`EpicConfig`].
pub async fn get_earth_image(earth_date: Option<&str>, image_type: Option<&str>) -> String {
    EpicImageFetcher::new(EpicConfig::from_env())
        .fetch(earth_date, image_type)
        .await
}

/// Describes the tool for hosts that list their tools with a json schema.
pub fn tool_definition() -> Value {
    let types: Vec<&str> = ImageType::ALL
        .iter()
        .map(|t| t.as_str())
        .collect();

    json!({
        "name": TOOL_NAME,
        "description": TOOL_DESCRIPTION,
        "inputSchema": {
            "type": "object",
            "properties": {
                "earth_date": {
                    "type": "string",
                    "description": "Date when the photo was taken, in \"YYYY-MM-DD\" format. If not provided, will get latest available images.",
                },
                "type": {
                    "type": "string",
                    "enum": types,
                    "default": ImageType::default().as_str(),
                    "description": "Type of image to retrieve, natural color images by default.",
                },
            },
        },
    })
}
