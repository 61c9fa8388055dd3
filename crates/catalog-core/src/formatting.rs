//! Display strings shared by the terminal UI and the plain listing.

use crate::catalog::Catalog;
use crate::models::{CategoryWithOwner, ProductWithCategory};

/// Placeholder for an unresolved reference.
pub const MISSING: &str = "-";

/// Format a category as `"<icon> - <title>"`.
///
/// # Examples
///
/// ```
/// use catalog_core::formatting::category_label;
/// use catalog_core::models::{Category, CategoryWithOwner};
///
/// let fruits = CategoryWithOwner {
///     category: Category {
///         id: 3,
///         title: "Fruits".to_string(),
///         icon: "🍏".to_string(),
///         owner_id: 2,
///     },
///     owner: None,
/// };
/// assert_eq!(category_label(&fruits), "🍏 - Fruits");
/// ```
pub fn category_label(category: &CategoryWithOwner) -> String {
    format!("{} - {}", category.category.icon, category.category.title)
}

/// Category column for a product row, or [`MISSING`].
pub fn category_column(product: &ProductWithCategory) -> String {
    product
        .category
        .as_ref()
        .map(category_label)
        .unwrap_or_else(|| MISSING.to_string())
}

/// Owner name for a product row, or [`MISSING`].
pub fn owner_label(product: &ProductWithCategory) -> &str {
    product.owner().map(|u| u.name.as_str()).unwrap_or(MISSING)
}

/// `"Showing 3 of 8 products"`.
pub fn visible_summary(shown: usize, total: usize) -> String {
    let noun = if total == 1 { "product" } else { "products" };
    format!("Showing {} of {} {}", shown, total, noun)
}

/// Label for the current owner filter: `"All"`, the user's name, or
/// `"#<id>"` when the id matches no user.
pub fn owner_filter_label(catalog: &Catalog, owner_id: i64) -> String {
    if owner_id <= 0 {
        return "All".to_string();
    }
    catalog
        .user(owner_id)
        .map(|u| u.name.clone())
        .unwrap_or_else(|| format!("#{}", owner_id))
}

/// Label for the current category filter: `"All"`, the category label, or
/// `"#<id>"` when the id matches no category.
pub fn category_filter_label(catalog: &Catalog, category_id: i64) -> String {
    if category_id <= 0 {
        return "All".to_string();
    }
    catalog
        .category(category_id)
        .map(category_label)
        .unwrap_or_else(|| format!("#{}", category_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Product, User};

    fn catalog() -> Catalog {
        Catalog::new(
            vec![User {
                id: 2,
                name: "Anna".to_string(),
                sex: "f".to_string(),
            }],
            vec![Category {
                id: 3,
                title: "Fruits".to_string(),
                icon: "🍏".to_string(),
                owner_id: 2,
            }],
            vec![
                Product {
                    id: 8,
                    name: "Apple".to_string(),
                    category_id: 3,
                },
                Product {
                    id: 9,
                    name: "Ghost".to_string(),
                    category_id: 77,
                },
            ],
        )
    }

    #[test]
    fn test_category_column() {
        let c = catalog();
        assert_eq!(category_column(&c.products()[0]), "🍏 - Fruits");
        assert_eq!(category_column(&c.products()[1]), MISSING);
    }

    #[test]
    fn test_owner_label() {
        let c = catalog();
        assert_eq!(owner_label(&c.products()[0]), "Anna");
        assert_eq!(owner_label(&c.products()[1]), MISSING);
    }

    #[test]
    fn test_visible_summary() {
        assert_eq!(visible_summary(3, 8), "Showing 3 of 8 products");
        assert_eq!(visible_summary(0, 0), "Showing 0 of 0 products");
        assert_eq!(visible_summary(1, 1), "Showing 1 of 1 product");
    }

    #[test]
    fn test_owner_filter_label() {
        let c = catalog();
        assert_eq!(owner_filter_label(&c, 0), "All");
        assert_eq!(owner_filter_label(&c, -4), "All");
        assert_eq!(owner_filter_label(&c, 2), "Anna");
        assert_eq!(owner_filter_label(&c, 5), "#5");
    }

    #[test]
    fn test_category_filter_label() {
        let c = catalog();
        assert_eq!(category_filter_label(&c, 0), "All");
        assert_eq!(category_filter_label(&c, 3), "🍏 - Fruits");
        assert_eq!(category_filter_label(&c, 4), "#4");
    }
}
