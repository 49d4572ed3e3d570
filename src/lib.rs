//! Core library exports for the catalog administration service.
//!
//! This crate exposes the category and genre domain, the repositories that
//! store it, and the services (use cases) that operate on it.

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "data")]
pub mod services;
