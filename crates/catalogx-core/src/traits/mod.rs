// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator traits for the host catalog editor.
//!
//! The registry never talks to host storage directly; it goes through these
//! seams so tests and the CLI can supply in-memory implementations.

pub mod product;
pub mod taxonomy;

pub use product::ProductRecord;
pub use taxonomy::TaxonomyStore;
