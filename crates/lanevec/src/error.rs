use std::{fmt, result};

use thiserror::Error;

use crate::LaneKind;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for lanevec operations.
///
/// Every variant describes a programmer error. None of them is retried or
/// downgraded inside the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] fmt::Error),

    #[error("Unsupported lane element type: {name} ({size} bytes)")]
    UnsupportedElementType { name: String, size: usize },

    #[error("Index out of bounds: index: {index}, lanes: {lanes}")]
    IndexOutOfBounds { index: usize, lanes: usize },

    #[error("Source too short: need {needed} bytes at offset {offset}, have {len}")]
    SourceTooShort {
        needed: usize,
        offset: usize,
        len: usize,
    },

    #[error("Invalid format specifier: {0:?}")]
    InvalidFormatSpec(String),

    #[error("Format specifier '{spec}' is not supported for {kind} lanes")]
    FormatNotSupported { spec: char, kind: LaneKind },
}

impl Error {
    pub(crate) fn unsupported(name: impl Into<String>, size: usize) -> Self {
        Self::UnsupportedElementType {
            name: name.into(),
            size,
        }
    }
}
