//! Core vocabulary for the trophic encounter engine: vitality arithmetic,
//! dietary capability classes, rule configuration and errors.

pub mod types;
pub mod diet;
pub mod config;
pub mod error;

pub use error::{Error, Result};
pub use types::*;
pub use diet::*;
pub use config::*;
