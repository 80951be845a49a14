// src/error.rs
use crate::types::HeaderField;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IsfError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid ISF file: header separator not found")]
    HeaderSeparatorNotFound,

    #[error("Invalid ISF file: bad length prefix at offset {offset}: {reason}")]
    InvalidLengthPrefix { offset: usize, reason: String },

    #[error("Invalid ISF file: payload declares {declared} bytes but only {available} remain")]
    TruncatedPayload { declared: usize, available: usize },

    #[error("Invalid ISF file: incomplete file for ENV mode ({0})")]
    IncompleteEnvelope(Box<IsfError>),

    #[error("Invalid ISF file: ENV nesting exceeds {max_depth} level(s)")]
    NestingTooDeep { max_depth: usize },

    #[error("Cannot convert {field} value {value:?} to {expected}")]
    Coercion {
        field: HeaderField,
        value: String,
        expected: &'static str,
    },

    #[error("Payload size mismatch: expected {expected} bytes ({points} points x {width} bytes), found {found}")]
    PayloadSizeMismatch {
        expected: usize,
        found: usize,
        points: usize,
        width: usize,
    },

    #[error("Unsupported sample width: {0} bytes")]
    UnsupportedSampleWidth(usize),

    #[error("Header field(s) {0} missing in ISF file")]
    MissingFields(String),
}

/// Coarse error categories callers can match on without caring about the
/// exact variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Boundary marker, length prefix or ENV nesting could not be resolved.
    InvalidFile,
    /// A header value could not be converted to its declared type.
    Coercion,
    /// The binary payload does not match the declared sample layout.
    Decode,
    /// Required header fields were absent and the policy asked to fail.
    MissingFields,
    Io,
}

impl IsfError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            IsfError::Io(_) => ErrorKind::Io,
            IsfError::HeaderSeparatorNotFound
            | IsfError::InvalidLengthPrefix { .. }
            | IsfError::TruncatedPayload { .. }
            | IsfError::IncompleteEnvelope(_)
            | IsfError::NestingTooDeep { .. } => ErrorKind::InvalidFile,
            IsfError::Coercion { .. } => ErrorKind::Coercion,
            IsfError::PayloadSizeMismatch { .. } | IsfError::UnsupportedSampleWidth(_) => {
                ErrorKind::Decode
            }
            IsfError::MissingFields(_) => ErrorKind::MissingFields,
        }
    }

    pub fn is_invalid_file(&self) -> bool {
        self.kind() == ErrorKind::InvalidFile
    }
}

pub type Result<T> = std::result::Result<T, IsfError>;
