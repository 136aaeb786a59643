// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Catalogx product customizer.

use std::path::PathBuf;

use thiserror::Error;

/// The primary error type used across the registry pipeline and its collaborators.
///
/// Malformed or duplicate declarations never show up here: they are absorbed
/// by the normalizer. Only conditions that break the resolved model contract
/// are surfaced.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Configuration errors (invalid TOML, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// A declaration manifest could not be parsed.
    #[error("invalid declaration manifest {path}: {message}")]
    Manifest { path: String, message: String },

    /// The host taxonomy store failed while ensuring a product type term.
    #[error("taxonomy error for product type `{slug}`: {source}")]
    Taxonomy {
        slug: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The resolved registry was queried before it was built.
    #[error("registry not initialized: build the customizer before querying it")]
    NotInitialized,

    /// Filesystem errors while reading declaration sources.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Rendering the resolved model as JSON failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Wrap a host storage failure for the given product type slug.
    pub fn taxonomy(
        slug: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        CatalogError::Taxonomy {
            slug: slug.into(),
            source: source.into(),
        }
    }
}
