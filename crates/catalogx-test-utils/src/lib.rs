// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Catalogx integration tests.
//!
//! Provides deterministic stand-ins for host collaborators so the pipeline
//! can be exercised without a catalog editor behind it.
//!
//! # Components
//!
//! - [`MockTaxonomy`] - Taxonomy store with call counting and failure injection
//! - [`MockProduct`] - Product record capturing setter and metadata writes
//! - [`StaticContributor`] - Contributor returning fixed declarations

pub mod fixtures;
pub mod mock_product;
pub mod mock_taxonomy;

pub use fixtures::{CountingContributor, StaticContributor};
pub use mock_product::MockProduct;
pub use mock_taxonomy::MockTaxonomy;
