//! Catalog module: domain types, the `CatalogStore` abstraction and its in-memory backing.
//!
//! The collection is seeded once at startup and only ever grows through `create`.

pub mod domain;
pub mod memory;
pub mod repository;
pub mod seed;

pub use domain::{Cat, CatPage, ListQuery, NewCat};
pub use memory::MemoryCatalog;
pub use repository::CatalogStore;
