//! Request and response shapes exchanged with the services.

pub mod categories;
pub mod genres;
