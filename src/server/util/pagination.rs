//! Page and page size normalization shared by every paginated endpoint.

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// A normalized, 1-based page request.
///
/// Construction never fails: pages below 1 are treated as the first page, page sizes below 1
/// fall back to [`DEFAULT_PAGE_SIZE`] and oversized pages are capped at [`MAX_PAGE_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u64,
    page_size: u64,
}

impl Pagination {
    pub fn new(page: i64, page_size: i64) -> Self {
        let page = if page < 1 { DEFAULT_PAGE } else { page as u64 };
        let page_size = if page_size < 1 {
            DEFAULT_PAGE_SIZE
        } else {
            (page_size as u64).min(MAX_PAGE_SIZE)
        };

        Self { page, page_size }
    }

    /// Build from raw query values, anything that is not an integer falls back to the default.
    pub fn from_params(page: Option<&str>, page_size: Option<&str>) -> Self {
        let parse = |value: Option<&str>, default: u64| {
            value
                .and_then(|v| v.trim().parse::<i64>().ok())
                .unwrap_or(default as i64)
        };

        Self::new(
            parse(page, DEFAULT_PAGE),
            parse(page_size, DEFAULT_PAGE_SIZE),
        )
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Number of items preceding the page
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// The portion of `items` covered by this page, empty past the end.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        if start >= items.len() {
            return &[];
        }

        let end = start
            .saturating_add(self.page_size as usize)
            .min(items.len());

        &items[start..end]
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
