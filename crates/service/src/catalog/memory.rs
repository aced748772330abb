use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::domain::{Cat, CatPage, ListQuery, NewCat};
use super::repository::CatalogStore;
use super::seed::seed_cats;

/// In-memory catalog kept in insertion order.
///
/// Reads share the lock, `create` takes it exclusively, so a listing never
/// observes a half-applied append.
#[derive(Clone, Default)]
pub struct MemoryCatalog {
    inner: Arc<RwLock<Vec<Cat>>>,
}

impl MemoryCatalog {
    /// Catalog preloaded with the startup records.
    pub fn seeded() -> Self {
        Self::with_cats(seed_cats())
    }

    pub fn with_cats(cats: Vec<Cat>) -> Self {
        Self { inner: Arc::new(RwLock::new(cats)) }
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    pub async fn get(&self, name: &str) -> Option<Cat> {
        let cats = self.inner.read().await;
        let found = cats.iter().find(|c| c.name == name).cloned();
        debug!(%name, found = found.is_some(), "catalog get");
        found
    }

    pub async fn list(&self, query: ListQuery) -> CatPage {
        let window = query.window();
        let cats = self.inner.read().await;
        let page = match query.category_filter() {
            Some(category) => {
                let filtered: Vec<Cat> = cats.iter().filter(|c| c.category == category).cloned().collect();
                CatPage { total_count: filtered.len(), cats: window.apply(&filtered) }
            }
            None => CatPage { total_count: cats.len(), cats: window.apply(cats.as_slice()) },
        };
        debug!(
            category = query.category_filter().unwrap_or_default(),
            offset = window.offset,
            limit = ?window.limit,
            total_count = page.total_count,
            returned = page.cats.len(),
            "catalog list"
        );
        page
    }

    pub async fn create(&self, input: NewCat) -> Cat {
        let cat = Cat::from(input);
        let mut cats = self.inner.write().await;
        cats.push(cat.clone());
        debug!(name = %cat.name, category = %cat.category, size = cats.len(), "catalog create");
        cat
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalog {
    async fn get(&self, name: &str) -> Option<Cat> { self.get(name).await }
    async fn list(&self, query: ListQuery) -> CatPage { self.list(query).await }
    async fn create(&self, input: NewCat) -> Cat { self.create(input).await }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::SEED;

    fn names(page: &CatPage) -> Vec<&str> {
        page.cats.iter().map(|c| c.name.as_str()).collect()
    }

    fn query(limit: Option<usize>, offset: Option<usize>, category: Option<&str>) -> ListQuery {
        ListQuery { limit, offset, category: category.map(str::to_string) }
    }

    #[tokio::test]
    async fn get_finds_seeded_cat() {
        let store = MemoryCatalog::seeded();
        assert_eq!(store.get("arthur").await, Some(Cat::new("arthur", "calico")));
        assert_eq!(store.get("nonexistent").await, None);
    }

    #[tokio::test]
    async fn get_is_case_sensitive() {
        let store = MemoryCatalog::seeded();
        assert_eq!(store.get("Arthur").await, None);
    }

    #[tokio::test]
    async fn get_returns_first_of_duplicates() {
        let store = MemoryCatalog::with_cats(vec![Cat::new("tom", "tabby"), Cat::new("tom", "siamese")]);
        assert_eq!(store.get("tom").await.map(|c| c.category), Some("tabby".to_string()));
    }

    #[tokio::test]
    async fn list_without_filters_returns_everything() {
        let store = MemoryCatalog::seeded();
        let page = store.list(ListQuery::default()).await;
        assert_eq!(page.total_count, 10);
        let expected: Vec<&str> = SEED.iter().map(|(n, _)| *n).collect();
        assert_eq!(names(&page), expected);
    }

    #[tokio::test]
    async fn list_by_category_skips_misspelled_seed() {
        let store = MemoryCatalog::seeded();
        let page = store.list(query(None, None, Some("persian"))).await;
        assert_eq!(page.total_count, 3);
        assert_eq!(names(&page), vec!["garfield", "hercules", "joker"]);

        let page = store.list(query(None, None, Some("parsian"))).await;
        assert_eq!(names(&page), vec!["ignacio"]);
    }

    #[tokio::test]
    async fn list_by_category_with_limit_keeps_filtered_total() {
        let store = MemoryCatalog::seeded();
        let page = store.list(query(Some(2), None, Some("persian"))).await;
        assert_eq!(page.total_count, 3);
        assert_eq!(names(&page), vec!["garfield", "hercules"]);

        let page = store.list(query(Some(2), Some(2), Some("persian"))).await;
        assert_eq!(page.total_count, 3);
        assert_eq!(names(&page), vec!["joker"]);
    }

    #[tokio::test]
    async fn list_window_clamps_at_end() {
        let store = MemoryCatalog::seeded();
        let page = store.list(query(Some(3), Some(8), None)).await;
        assert_eq!(page.total_count, 10);
        assert_eq!(names(&page), vec!["ignacio", "joker"]);

        let page = store.list(query(None, Some(50), None)).await;
        assert_eq!(page.total_count, 10);
        assert!(page.cats.is_empty());
    }

    #[tokio::test]
    async fn list_with_unknown_category_is_empty() {
        let store = MemoryCatalog::seeded();
        let page = store.list(query(None, None, Some("Calico"))).await;
        assert_eq!(page.total_count, 0);
        assert!(page.cats.is_empty());
    }

    #[tokio::test]
    async fn empty_category_lists_everything() {
        let store = MemoryCatalog::seeded();
        let page = store.list(query(Some(1), None, Some(""))).await;
        assert_eq!(page.total_count, 10);
        assert_eq!(names(&page), vec!["arthur"]);
    }

    #[tokio::test]
    async fn create_appends_and_is_visible() {
        let store = MemoryCatalog::seeded();
        let created = store.create(NewCat { name: "newcat".into(), category: "tabby".into() }).await;
        assert_eq!(created, Cat::new("newcat", "tabby"));
        assert_eq!(store.get("newcat").await, Some(created.clone()));

        let page = store.list(ListQuery::default()).await;
        assert_eq!(page.total_count, 11);
        assert_eq!(page.cats.last(), Some(&created));
    }

    #[tokio::test]
    async fn create_accepts_duplicates_and_empty_values() {
        let store = MemoryCatalog::seeded();
        store.create(NewCat { name: "arthur".into(), category: "tabby".into() }).await;
        store.create(NewCat { name: String::new(), category: String::new() }).await;
        assert_eq!(store.len().await, 12);
        // lookup still hits the seeded arthur first
        assert_eq!(store.get("arthur").await.map(|c| c.category), Some("calico".to_string()));
        assert_eq!(store.get("").await, Some(Cat::new("", "")));
    }

    #[tokio::test]
    async fn reads_do_not_mutate() {
        let store = MemoryCatalog::seeded();
        let first = store.list(query(Some(4), Some(1), None)).await;
        for _ in 0..3 {
            let _ = store.get("felix").await;
            assert_eq!(store.list(query(Some(4), Some(1), None)).await, first);
        }
        assert_eq!(store.len().await, 10);
    }

    #[tokio::test]
    async fn concurrent_creates_are_all_kept() {
        let store = MemoryCatalog::default();
        assert!(store.is_empty().await);
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store.create(NewCat { name: format!("cat{i}"), category: "tabby".into() }).await
                })
            })
            .collect();
        for h in handles {
            h.await.unwrap();
        }
        let page = store.list(query(None, None, Some("tabby"))).await;
        assert_eq!(page.total_count, 16);
    }

    #[tokio::test]
    async fn works_through_trait_object() {
        let store: Arc<dyn CatalogStore> = Arc::new(MemoryCatalog::seeded());
        store.create(NewCat { name: "newcat".into(), category: "tabby".into() }).await;
        assert_eq!(store.list(ListQuery::default()).await.total_count, 11);
        assert!(store.get("newcat").await.is_some());
    }
}
