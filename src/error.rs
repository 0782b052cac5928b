// Error types for the stepdeck application.
// Covers resource fetch failures, manifest problems, and structural defects.

#![allow(dead_code)]

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no template registered for model '{0}'")]
    TemplateNotFound(String),

    #[error("missing structural element: {0}")]
    MissingElement(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DeckError>;
