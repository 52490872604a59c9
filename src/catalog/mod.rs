//! Concurrent assembly of content records from the normalized catalog.
//!
//! [`Aggregator`] is the entry point. It talks to the database only through
//! the [`EntityStore`] trait, which [`crate::db::Store`] implements.

mod aggregator;
mod error;
mod roles;
mod store;
mod subtype;

#[cfg(test)]
pub(crate) mod testing;

pub use aggregator::{Aggregator, FULL_FACETS, PREVIEW_FACETS};
pub use error::{CatalogError, Facet, FacetError, StoreError};
pub use roles::RoleResolver;
pub use store::{EntityStore, IdList, SeasonRow};
