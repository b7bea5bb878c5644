#![forbid(unsafe_code)]

//! Core domain model and calculations for workout statistics.
//!
//! This crate provides:
//! - Domain types (workout kinds, sensor packages)
//! - Workout variants and their distance/speed/calorie formulas
//! - The type-code factory
//! - Summary formatting
//! - Package input files and configuration

pub mod types;
pub mod error;
pub mod workout;
pub mod factory;
pub mod summary;
pub mod input;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use workout::{Readings, Running, Swimming, Training, Walking, Workout};
pub use factory::{read_package, read_packages};
pub use summary::InfoMessage;
pub use input::load_packages;
pub use config::{Config, OutputFormat};
