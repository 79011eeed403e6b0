//! Common utilities for the geoboundary toolkit

pub mod error;

pub use error::{Error, Result};
