use serde::Serialize;

/// Offset-based pagination request.
///
/// `limit` is clamped to `1..=MAX_LIMIT`; a `limit` of 0 means "use the
/// default". `offset` is unbounded.
///
/// # Example
/// ```
/// use trace_core_db::repository::pagination::PageRequest;
///
/// let first = PageRequest::new(20, 0);
/// assert_eq!(first.limit, 20);
///
/// let defaulted = PageRequest::new(0, 40);
/// assert_eq!(defaulted.limit, PageRequest::DEFAULT_LIMIT);
/// assert_eq!(defaulted.offset, 40);
///
/// let capped = PageRequest::new(10_000, 0);
/// assert_eq!(capped.limit, PageRequest::MAX_LIMIT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of items to return
    pub limit: usize,
    /// Number of items to skip
    pub offset: usize,
}

impl PageRequest {
    pub const DEFAULT_LIMIT: usize = 50;
    pub const MAX_LIMIT: usize = 500;

    pub fn new(limit: usize, offset: usize) -> Self {
        let limit = match limit {
            0 => Self::DEFAULT_LIMIT,
            n => n.min(Self::MAX_LIMIT),
        };
        Self { limit, offset }
    }

    /// Build from optional `skip`/`limit` query values.
    pub fn from_query(skip: Option<usize>, limit: Option<usize>) -> Self {
        Self::new(limit.unwrap_or(Self::DEFAULT_LIMIT), skip.unwrap_or(0))
    }

    /// `(limit, offset)` as SQL bind values
    pub fn as_sql(&self) -> (i64, i64) {
        (
            i64::try_from(self.limit).unwrap_or(i64::MAX),
            i64::try_from(self.offset).unwrap_or(i64::MAX),
        )
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT, 0)
    }
}

/// Paginated response containing items and metadata
///
/// # Example
/// ```
/// use trace_core_db::repository::pagination::Page;
///
/// let page = Page::new(vec![1, 2, 3], 100, 20, 0);
/// assert!(page.has_more());
/// assert_eq!(page.total_pages(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// The items in this page
    pub items: Vec<T>,
    /// Total number of items across all pages
    pub total: usize,
    /// Maximum number of items per page
    pub limit: usize,
    /// Number of items skipped before this page
    pub offset: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: usize, limit: usize, offset: usize) -> Self {
        Self {
            items,
            total,
            limit,
            offset,
        }
    }

    /// Check if there are more pages after this one
    pub fn has_more(&self) -> bool {
        self.offset + self.items.len() < self.total
    }

    /// Get the total number of pages
    pub fn total_pages(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            self.total.div_ceil(self.limit)
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            limit: self.limit,
            offset: self.offset,
        }
    }
}
