use thiserror::Error;

use crate::field::InputField;

#[derive(Debug, Error, PartialEq)]
pub enum HubsError {
    #[error("unknown input field: {0}")]
    UnknownField(String),
    #[error("{field} range is empty: min {min} is not below max {max}")]
    InvalidRange { field: InputField, min: f32, max: f32 },
    #[error("{field} step must be positive, got {step}")]
    InvalidStep { field: InputField, step: f32 },
    #[error("{field} default {default} lies outside [{min}, {max}]")]
    DefaultOutOfRange {
        field: InputField,
        default: f32,
        min: f32,
        max: f32,
    },
}

pub type Result<T> = std::result::Result<T, HubsError>;
