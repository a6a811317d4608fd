use std::{
    fmt,
    str::FromStr,
};

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

use crate::{
    error::EpicError,
    utils::other::capitalize,
};

lazy_static! {
    static ref EARTH_DATE_REGEX: Regex =
        Regex::new("^([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})$").expect("valid earth date regex");
}

/// The image variants the EPIC api exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageType {
    #[default]
    Natural,
    Enhanced,
    Aerosol,
    Cloud,
}

impl ImageType {
    pub const ALL: [ImageType; 4] = [
        Self::Natural,
        Self::Enhanced,
        Self::Aerosol,
        Self::Cloud,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Natural => "natural",
            Self::Enhanced => "enhanced",
            Self::Aerosol => "aerosol",
            Self::Cloud => "cloud",
        }
    }

    pub fn title(self) -> String {
        capitalize(self.as_str())
    }

    /// Recovers the image type from an already built request url.
    ///
    /// This is a plain substring search, so the order of the checks matters and
    /// any url that happens to contain one of the names is classified by it.
    pub fn from_request_url(url: &str) -> Self {
        if url.contains("enhanced") {
            Self::Enhanced
        } else if url.contains("aerosol") {
            Self::Aerosol
        } else if url.contains("cloud") {
            Self::Cloud
        } else {
            Self::Natural
        }
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageType {
    type Err = EpicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == lowered)
            .ok_or_else(|| EpicError::InvalidImageType(s.to_owned()))
    }
}

/// A caller supplied date, kept exactly as it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EarthDate {
    pub year: String,
    pub month: String,
    pub day: String,
}

impl FromStr for EarthDate {
    type Err = EpicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = EARTH_DATE_REGEX
            .captures(s)
            .ok_or(EpicError::InvalidDateFormat)?;

        let (year, month, day) = (&captures[1], &captures[2], &captures[3]);

        // Year 0 exists in chrono's proleptic calendar but is not a valid date here
        let valid = match (year.parse::<i32>(), month.parse::<u32>(), day.parse::<u32>()) {
            (Ok(y), Ok(m), Ok(d)) if y >= 1 => NaiveDate::from_ymd_opt(y, m, d).is_some(),
            _ => false,
        };

        if !valid {
            return Err(EpicError::InvalidDateFormat);
        }

        Ok(Self {
            year: year.to_owned(),
            month: month.to_owned(),
            day: day.to_owned(),
        })
    }
}

/// Validated input for a single EPIC lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageRequestParams {
    pub earth_date: Option<EarthDate>,
    pub image_type: ImageType,
}

impl ImageRequestParams {
    /// Validates the raw tool arguments, image type first and then the date.
    /// Empty strings are treated as if the argument was not given.
    pub fn parse(earth_date: Option<&str>, image_type: Option<&str>) -> Result<Self, EpicError> {
        let image_type = match image_type.filter(|t| !t.is_empty()) {
            Some(t) => t.parse()?,
            None => ImageType::default(),
        };

        let earth_date = earth_date
            .filter(|d| !d.is_empty())
            .map(str::parse::<EarthDate>)
            .transpose()?;

        Ok(Self {
            earth_date,
            image_type,
        })
    }

    pub fn request_url(&self, api_base: &str) -> String {
        let mut url = format!("{}{}/", api_base, self.image_type);

        if let Some(date) = &self.earth_date {
            url.push_str(&format!("date/{}-{}-{}", date.year, date.month, date.day));
        }

        url
    }
}

/// One entry of the json array returned by the EPIC api.
#[derive(Deserialize, Debug, Clone)]
pub struct EpicImage {
    pub image: String,
    pub date: String,
    #[serde(default)]
    pub caption: Option<String>,
}

/// The keyword arguments a tool host hands to the fetcher.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ToolArguments {
    #[serde(default, with = "crate::utils::serde::string_option")]
    pub earth_date: Option<String>,
    #[serde(default, rename = "type", with = "crate::utils::serde::string_option")]
    pub image_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResult {
    pub archive_url: String,
    pub caption: String,
    pub date: String,
    pub image_type: ImageType,
    pub total_count: usize,
    pub request_url: String,
}

impl fmt::Display for ImageResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Earth Image Found!")?;
        writeln!(f, "Image URL: {}", self.archive_url)?;
        writeln!(f, "Caption: {}", self.caption)?;
        writeln!(f, "Date: {}", self.date)?;
        writeln!(f, "Image Type: {}", self.image_type.title())?;
        write!(
            f,
            "Total images available: {} {}",
            self.total_count, self.request_url
        )
    }
}
