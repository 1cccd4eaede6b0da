//! Error types

use std::fmt;
use thiserror::Error;

/// Contract violations detected while building view inputs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("Duplicate list key: {0}")]
    DuplicateKey(String),
}

/// Login form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Email => write!(f, "email"),
            Field::Password => write!(f, "password"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error("Missing required field: {0}")]
    MissingField(Field),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("Invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type ViewResult<T> = std::result::Result<T, ViewError>;
