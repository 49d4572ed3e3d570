//! Diesel row models and their conversions to and from domain entities.

pub mod category;
#[cfg(feature = "cli")]
pub mod config;
pub mod genre;
