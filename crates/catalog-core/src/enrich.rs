//! Joins that turn raw collections into their enriched views.
//!
//! Both joins are one output per input, order-preserving, and resolve a
//! missing reference to `None` instead of failing.

use std::collections::HashMap;

use crate::models::{Category, CategoryWithOwner, Product, ProductWithCategory, User};

/// Attach the owning [`User`] to every category.
pub fn enrich_categories(categories: &[Category], users: &[User]) -> Vec<CategoryWithOwner> {
    let users_by_id = index_first(users, |u: &User| u.id);

    categories
        .iter()
        .map(|category| CategoryWithOwner {
            category: category.clone(),
            owner: users_by_id.get(&category.owner_id).map(|u| (*u).clone()),
        })
        .collect()
}

/// Attach the enriched category to every product.
pub fn enrich_products(
    products: &[Product],
    categories: &[CategoryWithOwner],
) -> Vec<ProductWithCategory> {
    let categories_by_id = index_first(categories, CategoryWithOwner::id);

    products
        .iter()
        .map(|product| ProductWithCategory {
            product: product.clone(),
            category: categories_by_id
                .get(&product.category_id)
                .map(|c| (*c).clone()),
        })
        .collect()
}

/// Index `items` by id. On duplicate ids the earliest item wins, so lookups
/// behave like a linear "find first".
fn index_first<T>(items: &[T], id: impl Fn(&T) -> i64) -> HashMap<i64, &T> {
    let mut index = HashMap::with_capacity(items.len());
    for item in items {
        index.entry(id(item)).or_insert(item);
    }
    index
}

// ── Tests ──────────────────────────────────────────────────────────────────────
