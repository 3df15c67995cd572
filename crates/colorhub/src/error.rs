//! Utility module with colorhub's errors.
//!
//! Conversion and gamut mapping are total functions and hence have no error
//! conditions. The one exception is looking up a color space by name.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An unknown color space identifier.
///
/// This error results from parsing a [`ColorSpace`](crate::ColorSpace) from a
/// name that is none of the identifiers returned by
/// [`ColorSpace::identifier`](crate::ColorSpace::identifier), e.g., `p3`
/// instead of `display-p3`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownColorSpaceError {
    name: String,
}

impl UnknownColorSpaceError {
    /// Create a new unknown color space error.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }

    /// Get the offending name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl core::fmt::Display for UnknownColorSpaceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "{} is not a known color space identifier",
            self.name
        ))
    }
}

impl std::error::Error for UnknownColorSpaceError {}

#[cfg(feature = "pyffi")]
impl From<UnknownColorSpaceError> for PyErr {
    fn from(value: UnknownColorSpaceError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
