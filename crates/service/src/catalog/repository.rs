use async_trait::async_trait;

use super::domain::{Cat, CatPage, ListQuery, NewCat};

/// Storage abstraction for the cat catalog.
/// None of the operations can fail; a lookup miss is `None`.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// First cat whose name matches exactly (case-sensitive).
    async fn get(&self, name: &str) -> Option<Cat>;
    /// Optionally filter by category, then cut the offset/limit window.
    async fn list(&self, query: ListQuery) -> CatPage;
    /// Append a cat at the end of the collection and return it.
    async fn create(&self, input: NewCat) -> Cat;
}
