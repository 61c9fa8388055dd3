use serde::{Deserialize, Serialize};

/// A person who can own categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique, positive identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Free-form sex marker (`"m"` / `"f"` in the bundled data).
    pub sex: String,
}

/// A product category as it appears in the raw data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique, positive identifier.
    pub id: i64,
    /// Human-readable title, e.g. `"Fruits"`.
    pub title: String,
    /// Short icon string, usually a single emoji.
    pub icon: String,
    /// Id of the owning [`User`].
    pub owner_id: i64,
}

/// A product as it appears in the raw data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique, positive identifier.
    pub id: i64,
    /// Product name, matched by the text filter.
    pub name: String,
    /// Id of the [`Category`] the product belongs to.
    pub category_id: i64,
}

/// A [`Category`] joined with its owner.
///
/// `owner` is `None` when `owner_id` does not resolve to any user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryWithOwner {
    #[serde(flatten)]
    pub category: Category,
    #[serde(default)]
    pub owner: Option<User>,
}

impl CategoryWithOwner {
    pub fn id(&self) -> i64 {
        self.category.id
    }

    /// The raw owner reference, whether or not it resolved.
    pub fn owner_id(&self) -> i64 {
        self.category.owner_id
    }
}

/// A [`Product`] joined with its (already owner-enriched) category.
///
/// `category` is `None` when `category_id` does not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductWithCategory {
    #[serde(flatten)]
    pub product: Product,
    #[serde(default)]
    pub category: Option<CategoryWithOwner>,
}

impl ProductWithCategory {
    pub fn id(&self) -> i64 {
        self.product.id
    }

    pub fn name(&self) -> &str {
        &self.product.name
    }

    pub fn category_id(&self) -> i64 {
        self.product.category_id
    }

    /// Resolved owner of the product's category, if both links resolved.
    pub fn owner(&self) -> Option<&User> {
        self.category.as_ref().and_then(|c| c.owner.as_ref())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn fruits() -> Category {
        Category {
            id: 10,
            title: "Fruits".to_string(),
            icon: "🍏".to_string(),
            owner_id: 1,
        }
    }

    #[test]
    fn test_category_deserializes_camel_case() {
        let json = r#"{"id":10,"title":"Fruits","icon":"🍏","ownerId":1}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category, fruits());
    }

    #[test]
    fn test_product_deserializes_camel_case() {
        let json = r#"{"id":100,"name":"Apple","categoryId":10}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.category_id, 10);
        assert_eq!(product.name, "Apple");
    }

    #[test]
    fn test_product_missing_field_is_rejected() {
        let json = r#"{"id":100,"name":"Apple"}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }

    #[test]
    fn test_category_with_owner_serializes_flat() {
        let enriched = CategoryWithOwner {
            category: fruits(),
            owner: None,
        };
        let value = serde_json::to_value(&enriched).unwrap();
        assert_eq!(value["id"], 10);
        assert_eq!(value["ownerId"], 1);
        assert!(value["owner"].is_null());
        assert!(value.get("category").is_none());
    }

    #[test]
    fn test_product_with_category_serializes_nested_flat() {
        let product = ProductWithCategory {
            product: Product {
                id: 100,
                name: "Apple".to_string(),
                category_id: 10,
            },
            category: Some(CategoryWithOwner {
                category: fruits(),
                owner: Some(User {
                    id: 1,
                    name: "Max".to_string(),
                    sex: "m".to_string(),
                }),
            }),
        };

        let value = serde_json::to_value(&product).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "id": 100,
                "name": "Apple",
                "categoryId": 10,
                "category": {
                    "id": 10,
                    "title": "Fruits",
                    "icon": "🍏",
                    "ownerId": 1,
                    "owner": { "id": 1, "name": "Max", "sex": "m" }
                }
            })
        );
    }

    #[test]
    fn test_product_with_unresolved_category_serializes_null() {
        let product = ProductWithCategory {
            product: Product {
                id: 7,
                name: "Mystery".to_string(),
                category_id: 99,
            },
            category: None,
        };

        let value = serde_json::to_value(&product).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "id": 7,
                "name": "Mystery",
                "categoryId": 99,
                "category": null
            })
        );
    }

    #[test]
    fn test_product_with_category_owner_accessor() {
        let max = User {
            id: 1,
            name: "Max".to_string(),
            sex: "m".to_string(),
        };
        let product = ProductWithCategory {
            product: Product {
                id: 100,
                name: "Apple".to_string(),
                category_id: 10,
            },
            category: Some(CategoryWithOwner {
                category: fruits(),
                owner: Some(max.clone()),
            }),
        };
        assert_eq!(product.owner(), Some(&max));
        assert_eq!(product.id(), 100);
        assert_eq!(product.category_id(), 10);
    }

    #[test]
    fn test_product_without_category_has_no_owner() {
        let product = ProductWithCategory {
            product: Product {
                id: 1,
                name: "Orphan".to_string(),
                category_id: 99,
            },
            category: None,
        };
        assert!(product.owner().is_none());
    }
}
