//! Centralized error handling for soda-split
//!
//! This module provides structured error types to replace the generic `Box<dyn Error>`
//! pattern, enabling better error context and type safety.

use std::fmt;

/// Main error type for soda-split operations
#[derive(Debug)]
pub enum SodaSplitError {
    /// NetCDF file operation errors
    NetCDFError(netcdf::Error),

    /// I/O operation errors
    IoError(std::io::Error),

    /// Expected source variable not found in yearly file
    VariableNotFound { var: String },

    /// Time index beyond the yearly file's time dimension
    TimeIndexOutOfRange { index: usize, time_len: usize },

    /// Array shape or dimension error
    ArrayError(ndarray::ShapeError),

    /// Generic error
    Generic(String),
}

impl fmt::Display for SodaSplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SodaSplitError::NetCDFError(e) => write!(f, "NetCDF error: {}", e),
            SodaSplitError::IoError(e) => write!(f, "I/O error: {}", e),
            SodaSplitError::VariableNotFound { var } => {
                write!(f, "Variable '{}' not found in file", var)
            }
            SodaSplitError::TimeIndexOutOfRange { index, time_len } => {
                write!(
                    f,
                    "Time index {} out of range (file has {} time steps)",
                    index, time_len
                )
            }
            SodaSplitError::ArrayError(e) => write!(f, "Array error: {}", e),
            SodaSplitError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for SodaSplitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SodaSplitError::NetCDFError(e) => Some(e),
            SodaSplitError::IoError(e) => Some(e),
            SodaSplitError::ArrayError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<netcdf::Error> for SodaSplitError {
    fn from(error: netcdf::Error) -> Self {
        SodaSplitError::NetCDFError(error)
    }
}

impl From<std::io::Error> for SodaSplitError {
    fn from(error: std::io::Error) -> Self {
        SodaSplitError::IoError(error)
    }
}

impl From<ndarray::ShapeError> for SodaSplitError {
    fn from(error: ndarray::ShapeError) -> Self {
        SodaSplitError::ArrayError(error)
    }
}

impl From<String> for SodaSplitError {
    fn from(error: String) -> Self {
        SodaSplitError::Generic(error)
    }
}

impl From<&str> for SodaSplitError {
    fn from(error: &str) -> Self {
        SodaSplitError::Generic(error.to_string())
    }
}

/// Result type alias for soda-split operations
pub type Result<T> = std::result::Result<T, SodaSplitError>;
