//! Types shared by the vox crates

mod error;
pub mod headers;

pub use error::HttpError;
