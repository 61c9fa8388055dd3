//! Visible-product filtering.
//!
//! Three independent predicates (owner, name query, category) are ANDed
//! together. Each one has a "disabled" sentinel: an id `<= 0` or an empty
//! query. Because the predicates are side-effect free they commute, so the
//! order they are applied in never changes the result.

use crate::models::ProductWithCategory;

/// Id value meaning "no owner / category filter".
pub const NO_FILTER: i64 = 0;

/// `true` when `product` passes the owner filter.
///
/// Compares against the category's `owner_id`, so a product whose category
/// is unresolved never matches a positive `owner_id`.
pub fn matches_owner(product: &ProductWithCategory, owner_id: i64) -> bool {
    if owner_id <= 0 {
        return true;
    }
    product
        .category
        .as_ref()
        .is_some_and(|c| c.owner_id() == owner_id)
}

/// `true` when `product` passes the case-insensitive name filter.
pub fn matches_query(product: &ProductWithCategory, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    product
        .name()
        .to_lowercase()
        .contains(&query.to_lowercase())
}

/// `true` when `product` passes the category filter.
pub fn matches_category(product: &ProductWithCategory, category_id: i64) -> bool {
    category_id <= 0 || product.category_id() == category_id
}

/// Select the products that pass all three filters, in their original order.
pub fn visible_products<'a>(
    all: &'a [ProductWithCategory],
    owner_id: i64,
    query: &str,
    category_id: i64,
) -> Vec<&'a ProductWithCategory> {
    all.iter()
        .filter(|p| matches_owner(p, owner_id))
        .filter(|p| matches_query(p, query))
        .filter(|p| matches_category(p, category_id))
        .collect()
}

// ── FilterState ───────────────────────────────────────────────────────────────

/// The complete interactive state: one value per filter.
///
/// Every combination of values is valid. Each field can be changed on its
/// own, and [`FilterState::reset`] clears all three at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    owner_id: i64,
    query: String,
    category_id: i64,
}

impl FilterState {
    /// State with every filter disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// State with explicit starting values.
    pub fn with(owner_id: i64, query: impl Into<String>, category_id: i64) -> Self {
        Self {
            owner_id,
            query: query.into(),
            category_id,
        }
    }

    pub fn owner_id(&self) -> i64 {
        self.owner_id
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category_id(&self) -> i64 {
        self.category_id
    }

    pub fn set_owner(&mut self, owner_id: i64) {
        self.owner_id = owner_id;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Reset the text filter alone.
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn set_category(&mut self, category_id: i64) {
        self.category_id = category_id;
    }

    /// Reset all three filters to their disabled values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// `true` when the owner filter restricts anything.
    pub fn has_owner_filter(&self) -> bool {
        self.owner_id > 0
    }

    /// `true` when the category filter restricts anything.
    pub fn has_category_filter(&self) -> bool {
        self.category_id > 0
    }

    /// `true` when no filter restricts the product list.
    pub fn is_default(&self) -> bool {
        !self.has_owner_filter() && self.query.is_empty() && !self.has_category_filter()
    }

    /// Apply the current state to `all`.
    pub fn apply<'a>(&self, all: &'a [ProductWithCategory]) -> Vec<&'a ProductWithCategory> {
        visible_products(all, self.owner_id, &self.query, self.category_id)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
