//! Error types for structure generation.
//!
//! Errors are raised before any atom is produced whenever possible, so a
//! failed build never yields a partial model.

use thiserror::Error;

/// Errors that can occur while building a carbon allotrope model.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to parse bonding parameters TOML.
    #[error("failed to parse bonding parameters: {0}")]
    ParameterParse(#[from] toml::de::Error),

    /// The requested functionalization cannot be applied to the structure.
    ///
    /// Carboxyl and carboxylate groups are only defined for nanotube rims.
    #[error("{functionalization} functionalization is not supported for {structure}")]
    UnsupportedConfiguration {
        /// Structure that was requested.
        structure: String,
        /// Functionalization that was requested.
        functionalization: String,
    },

    /// A geometric input is out of range.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}

impl Error {
    /// Creates an [`UnsupportedConfiguration`](Error::UnsupportedConfiguration) error.
    pub fn unsupported(structure: impl ToString, functionalization: impl ToString) -> Self {
        Self::UnsupportedConfiguration {
            structure: structure.to_string(),
            functionalization: functionalization.to_string(),
        }
    }

    /// Creates an [`InvalidGeometry`](Error::InvalidGeometry) error.
    pub fn invalid_geometry(detail: impl Into<String>) -> Self {
        Self::InvalidGeometry(detail.into())
    }
}
