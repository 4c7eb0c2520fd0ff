//! # pagekit-core
//!
//! Core crate for pagekit. Contains the page window calculator, the
//! pagination request and link types, configuration schemas, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other pagekit crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
