//! Pagination utilities for service layer
//!
//! Provides an offset/limit `Window` that slices a sequence without ever failing.

/// Offset/limit window over an ordered sequence
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Window {
    /// number of leading items to skip
    pub offset: usize,
    /// maximum number of items to return; `None` runs to the end
    pub limit: Option<usize>,
}

impl Window {
    pub fn new(offset: Option<usize>, limit: Option<usize>) -> Self {
        Self { offset: offset.unwrap_or(0), limit }
    }

    /// Clamp the window to `len` and return the half-open index range it covers.
    pub fn bounds(self, len: usize) -> (usize, usize) {
        let start = self.offset.min(len);
        let end = match self.limit {
            Some(limit) => self.offset.saturating_add(limit).min(len),
            None => len,
        };
        (start, end.max(start))
    }

    /// Copy out the items covered by the window.
    pub fn apply<T: Clone>(self, items: &[T]) -> Vec<T> {
        let (start, end) = self.bounds(items.len());
        items[start..end].to_vec()
    }
}
