use serde::{Deserialize, Serialize};

use crate::pagination::Window;

/// A catalogued cat
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cat {
    pub name: String,
    pub category: String,
}

impl Cat {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self { name: name.into(), category: category.into() }
    }
}

/// Creation input; both fields required, nothing else is checked
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewCat {
    pub name: String,
    pub category: String,
}

impl From<NewCat> for Cat {
    fn from(input: NewCat) -> Self {
        Cat { name: input.name, category: input.category }
    }
}

/// Listing parameters as they arrive from the query string
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListQuery {
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub offset: Option<usize>,
    #[serde(default)]
    pub category: Option<String>,
}

impl ListQuery {
    /// Category filter to apply; an empty string means no filter.
    pub fn category_filter(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    pub fn window(&self) -> Window {
        Window::new(self.offset, self.limit)
    }
}

/// One page of a listing.
/// `total_count` counts the collection the page was sliced from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CatPage {
    pub cats: Vec<Cat>,
    pub total_count: usize,
}
