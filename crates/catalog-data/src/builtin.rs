//! Bundled demo collections, used when no data directory is configured.

use catalog_core::models::{Category, Product, User};

use crate::reader::RawCatalog;

pub fn users() -> Vec<User> {
    [(1, "Roma", "m"), (2, "Anna", "f"), (3, "Max", "m"), (4, "John", "m")]
        .into_iter()
        .map(|(id, name, sex)| User {
            id,
            name: name.to_string(),
            sex: sex.to_string(),
        })
        .collect()
}

pub fn categories() -> Vec<Category> {
    [
        (1, "Grocery", "🍞", 2),
        (2, "Drinks", "🍺", 1),
        (3, "Fruits", "🍏", 2),
        (4, "Electronics", "💻", 1),
        (5, "Clothes", "👚", 3),
    ]
    .into_iter()
    .map(|(id, title, icon, owner_id)| Category {
        id,
        title: title.to_string(),
        icon: icon.to_string(),
        owner_id,
    })
    .collect()
}

pub fn products() -> Vec<Product> {
    [
        (1, "Milk", 2),
        (2, "Bread", 1),
        (3, "Eggs", 1),
        (4, "Jacket", 5),
        (5, "Sugar", 1),
        (6, "Sausage", 1),
        (7, "Sweater", 5),
        (8, "Apple", 3),
    ]
    .into_iter()
    .map(|(id, name, category_id)| Product {
        id,
        name: name.to_string(),
        category_id,
    })
    .collect()
}

/// All three bundled collections.
pub fn raw_catalog() -> RawCatalog {
    RawCatalog {
        users: users(),
        categories: categories(),
        products: products(),
    }
}
