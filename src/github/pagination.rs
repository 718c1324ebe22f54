//! Page requests for draining the notifications collection.
//!
//! The notifications endpoint is read with a fixed page size. A page shorter
//! than that size is the last one; a full page says nothing about whether
//! more data follows, so the caller must always ask for the next page.

/// Largest page size the notifications endpoint accepts.
pub const MAX_PER_PAGE: u8 = 100;

/// One page request against the notifications collection.
///
/// # Example
///
/// ```
/// use quieten::github::pagination::PageRequest;
///
/// let first = PageRequest::first(true);
/// assert_eq!(first.page(), 1);
/// assert_eq!(first.next().page(), 2);
/// assert!(first.is_last_page(37));
/// assert!(!first.is_last_page(100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Current page number (1-based).
    page: u32,
    /// Items per page.
    per_page: u8,
    /// Whether already-read notifications are included.
    include_read: bool,
}

impl PageRequest {
    /// Creates the request for page 1 at the maximum page size.
    #[must_use]
    pub const fn first(include_read: bool) -> Self {
        Self {
            page: 1,
            per_page: MAX_PER_PAGE,
            include_read,
        }
    }

    /// Returns the request for the following page.
    #[must_use]
    pub const fn next(self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            ..self
        }
    }

    /// Returns the current page number (1-based).
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Returns the number of items per page.
    #[must_use]
    pub const fn per_page(&self) -> u8 {
        self.per_page
    }

    /// Returns true when read notifications are requested as well.
    #[must_use]
    pub const fn include_read(&self) -> bool {
        self.include_read
    }

    /// Returns true when a page holding `received` items ends the collection.
    #[must_use]
    pub fn is_last_page(&self, received: usize) -> bool {
        received < usize::from(self.per_page)
    }
}
