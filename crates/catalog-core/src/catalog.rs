//! The enriched, read-only catalog built once at startup.

use tracing::debug;

use crate::enrich::{enrich_categories, enrich_products};
use crate::filter::FilterState;
use crate::models::{Category, CategoryWithOwner, Product, ProductWithCategory, User};

/// Users plus the enriched categories and products derived from them.
///
/// Built with [`Catalog::new`] and never mutated afterwards. Filtering
/// borrows from it and returns a subset.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    users: Vec<User>,
    categories: Vec<CategoryWithOwner>,
    products: Vec<ProductWithCategory>,
}

impl Catalog {
    /// Join the raw collections. Runs both enrichment passes exactly once.
    pub fn new(users: Vec<User>, categories: Vec<Category>, products: Vec<Product>) -> Self {
        let categories = enrich_categories(&categories, &users);
        let products = enrich_products(&products, &categories);

        let orphan_categories = categories.iter().filter(|c| c.owner.is_none()).count();
        let orphan_products = products.iter().filter(|p| p.category.is_none()).count();
        debug!(
            "Catalog built: {} users, {} categories ({} without owner), {} products ({} without category)",
            users.len(),
            categories.len(),
            orphan_categories,
            products.len(),
            orphan_products
        );

        Self {
            users,
            categories,
            products,
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn categories(&self) -> &[CategoryWithOwner] {
        &self.categories
    }

    pub fn products(&self) -> &[ProductWithCategory] {
        &self.products
    }

    /// First user with the given id.
    pub fn user(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// First enriched category with the given id.
    pub fn category(&self, id: i64) -> Option<&CategoryWithOwner> {
        self.categories.iter().find(|c| c.id() == id)
    }

    /// Products visible under `filters`, in catalog order.
    pub fn visible(&self, filters: &FilterState) -> Vec<&ProductWithCategory> {
        filters.apply(&self.products)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
