pub mod constants;
pub mod other;
pub mod pictures;
pub mod serde;
