//! Service layer holding the cat catalog.
//! - `catalog` owns the record collection and answers lookup, listing and insertion.
//! - `pagination` provides the offset/limit window used by listing.

pub mod catalog;
pub mod pagination;

pub use catalog::{Cat, CatPage, CatalogStore, ListQuery, MemoryCatalog, NewCat};
