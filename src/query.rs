//! Filter-query construction
//!
//! Translates filter state into the vendor's query-string grammar. Every
//! filter condition serializes to `filter=<operator>~~<field>~~<value>`;
//! repeated `filter` parameters are applied conjunctively by the API.
//!
//! Built strings double as cache keys downstream, so construction order is
//! deterministic: equal filter states always build byte-identical queries.

/// Comparison operators understood by the catalog API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    Like,
    In,
}

impl FilterOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOp::Eq => "eq",
            FilterOp::Ne => "ne",
            FilterOp::Gt => "gt",
            FilterOp::Gte => "gte",
            FilterOp::Lt => "lt",
            FilterOp::Lte => "lte",
            FilterOp::Like => "like",
            FilterOp::In => "in",
        }
    }
}

/// One filter condition: operator, field, value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub op: FilterOp,
    pub field: String,
    pub value: String,
}

impl Condition {
    pub fn new(op: FilterOp, field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            op,
            field: field.into(),
            value: value.into(),
        }
    }

    /// Exact-match condition
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(FilterOp::Eq, field, value)
    }

    /// Substring text search: `like` with `*term*` wildcards
    pub fn contains(field: impl Into<String>, term: &str) -> Self {
        Self::new(FilterOp::Like, field, format!("*{}*", term))
    }

    /// Membership condition with a comma-joined value list
    pub fn is_in(field: impl Into<String>, values: &[&str]) -> Self {
        Self::new(FilterOp::In, field, values.join(","))
    }

    /// A condition with an empty field or value must be omitted from the
    /// query; an empty fragment corrupts the grammar server-side.
    pub fn is_empty(&self) -> bool {
        self.field.is_empty() || self.value.is_empty()
    }

    fn to_query_param(&self) -> String {
        format!("filter={}~~{}~~{}", self.op.as_str(), self.field, self.value)
    }
}

/// Sort direction for a catalog field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Sort field plus direction; descending renders with a leading `-`
/// (e.g. `-created`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub field: String,
    pub direction: SortDirection,
}

impl Sort {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }

    fn to_query_value(&self) -> String {
        match self.direction {
            SortDirection::Ascending => self.field.clone(),
            SortDirection::Descending => format!("-{}", self.field),
        }
    }
}

/// The user's current selection: ephemeral, UI-scoped filter state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FirmwareFilters {
    pub product: Option<String>,
    pub platform: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub sort: Option<Sort>,
}

impl FirmwareFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(mut self, product: impl Into<String>) -> Self {
        self.product = Some(product.into());
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }
}

/// Build the query string for the paginated firmware endpoint.
///
/// Condition order is fixed (product, platform, extra conditions), then
/// `limit`, `offset`, and `sort`, each appended only when present. Unset or
/// empty values are omitted entirely, never serialized as empty fragments.
pub fn build_firmware_query(filters: &FirmwareFilters, extra: &[Condition]) -> String {
    let mut params: Vec<String> = Vec::new();

    if let Some(product) = filters.product.as_deref().filter(|p| !p.is_empty()) {
        params.push(Condition::eq("product", product).to_query_param());
    }
    if let Some(platform) = filters.platform.as_deref().filter(|p| !p.is_empty()) {
        params.push(Condition::eq("platform", platform).to_query_param());
    }
    for condition in extra {
        if !condition.is_empty() {
            params.push(condition.to_query_param());
        }
    }

    if let Some(limit) = filters.limit {
        params.push(format!("limit={}", limit));
    }
    if let Some(offset) = filters.offset {
        params.push(format!("offset={}", offset));
    }
    if let Some(sort) = filters.sort.as_ref().filter(|s| !s.field.is_empty()) {
        params.push(format!("sort={}", sort.to_query_value()));
    }

    params.join("&")
}
