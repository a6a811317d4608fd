//! Pictures of Earth from the EPIC camera onboard NOAA's DSCOVR spacecraft,
//! packaged as a single tool that always answers with text.

pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

pub use commands::pictures::{
    get_earth_image,
    tool_definition,
    EpicImageFetcher,
};
pub use config::EpicConfig;
pub use error::EpicError;
