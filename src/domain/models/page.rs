//! Page Specification
//!
//! Describes a bounded slice of an ordered result set: page number, page
//! size, and sort order.

/// Default page number when the caller provides none
pub const DEFAULT_PAGE: u32 = 0;

/// Default page size when the caller provides none
pub const DEFAULT_SIZE: u32 = 20;

/// Fields a cash card listing can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Amount,
    Id,
    Owner,
}

impl SortField {
    /// Parse a sort field name from a query string segment
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "amount" => Some(Self::Amount),
            "id" => Some(Self::Id),
            "owner" => Some(Self::Owner),
            _ => None,
        }
    }

    /// Column name backing this field
    #[must_use]
    pub fn as_column(&self) -> &'static str {
        match self {
            Self::Amount => "amount",
            Self::Id => "id",
            Self::Owner => "owner",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Parse a direction from a query string segment
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(Self::Ascending),
            "desc" => Some(Self::Descending),
            _ => None,
        }
    }

    /// SQL keyword for this direction
    #[must_use]
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

/// Sort order: field plus direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Sort {
    #[must_use]
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

impl Default for Sort {
    /// Listings default to ascending amount
    fn default() -> Self {
        Self {
            field: SortField::Amount,
            direction: SortDirection::Ascending,
        }
    }
}

/// Page specification for list queries
///
/// `page` is zero-based. `size` is guaranteed greater than zero by the
/// request DTO; no upper bound is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    page: u32,
    size: u32,
    sort: Sort,
}

impl PageSpec {
    #[must_use]
    pub fn new(page: u32, size: u32, sort: Sort) -> Self {
        Self { page, size, sort }
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[must_use]
    pub fn sort(&self) -> Sort {
        self.sort
    }

    /// Number of rows to skip before this page starts
    #[must_use]
    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }

    /// Maximum number of rows in this page
    #[must_use]
    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_SIZE,
            sort: Sort::default(),
        }
    }
}
