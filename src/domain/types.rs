//! Strongly-typed value objects used by domain entities.
//!
//! Entities carry these wrappers instead of raw primitives so that
//! identifiers and names are validated once, at the boundary, and stay valid
//! for as long as the value lives.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;
use validator::ValidateLength;

/// Longest name accepted for categories and genres, in characters.
pub const MAX_NAME_LENGTH: u64 = 255;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required string was empty.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// A string exceeded the maximum number of characters.
    #[error("{field} cannot be longer than {max} characters")]
    TooLong { field: &'static str, max: u64 },
    /// An identifier could not be parsed as a UUID.
    #[error("{0} must be a valid UUID")]
    InvalidId(&'static str),
}

fn require_bounded_name(value: String, field: &'static str) -> Result<String, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyString(field));
    }
    if !value.validate_length(None, Some(MAX_NAME_LENGTH), None) {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_NAME_LENGTH,
        });
    }
    Ok(value)
}

/// Macro to generate UUID-backed identifier newtypes.
macro_rules! uuid_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh random (v4) identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Parses a hyphenated or simple UUID string.
            pub fn parse_str(value: &str) -> Result<Self, ValidationError> {
                Uuid::parse_str(value.trim())
                    .map(Self)
                    .map_err(|_| ValidationError::InvalidId($field))
            }

            /// Returns the raw [`Uuid`] backing this identifier.
            pub const fn get(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::parse_str(value)
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$name> for Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<Uuid> for $name {
            fn eq(&self, other: &Uuid) -> bool {
                self.0 == *other
            }
        }
    };
}

macro_rules! bounded_name_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Constructs a non-empty name of at most [`MAX_NAME_LENGTH`] characters.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, ValidationError> {
                require_bounded_name(value.into(), $field).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = ValidationError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

uuid_newtype!(CategoryId, "Unique identifier for a category.", "category_id");
uuid_newtype!(GenreId, "Unique identifier for a genre.", "genre_id");

bounded_name_newtype!(
    CategoryName,
    "Category name holding between 1 and 255 characters.",
    "name"
);
bounded_name_newtype!(
    GenreName,
    "Genre name holding between 1 and 255 characters.",
    "name"
);
