// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Catalogx product customizer.
//!
//! This crate provides the error type, the visibility-class vocabulary and
//! the collaborator traits (taxonomy storage, product records, declaration
//! contributors) used throughout the workspace.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::CatalogError;
pub use types::{
    DEFAULT_OPTIONS, DEFAULT_TYPES, VisibilityAction, bool_to_flag, hide_if, is_default_option,
    is_default_type, show_if,
};

pub use traits::{ProductRecord, TaxonomyStore};
