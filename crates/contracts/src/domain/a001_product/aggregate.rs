use crate::shared::list_query::{SortColumn, SortKey, SortKind, SortValue};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор товара: в источнике данных встречаются и числа, и строки
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl ProductId {
    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(value) => write!(f, "{}", value),
            ProductId::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        ProductId::Number(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        ProductId::Text(value.to_string())
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Товар каталога. Неизменяем в течение сессии.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: i64,
}

impl Product {
    /// Точное совпадение категории; значения-«все категории» пропускают любой товар
    pub fn matches_category(&self, category: &str) -> bool {
        is_all_categories(category) || self.category == category
    }
}

// ============================================================================
// Categories
// ============================================================================

/// Значение фильтра «все категории»
pub const ALL_CATEGORIES: &str = "All Categories";

/// Короткая форма того же значения
pub const ALL_CATEGORIES_SHORT: &str = "all";

pub fn is_all_categories(category: &str) -> bool {
    category == ALL_CATEGORIES || category == ALL_CATEGORIES_SHORT
}

// ============================================================================
// Sorting
// ============================================================================

/// Колонки списка товаров, по которым разрешена сортировка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductSortColumn {
    Name,
    Price,
    Stock,
}

impl ProductSortColumn {
    pub fn label(&self) -> &'static str {
        match self {
            ProductSortColumn::Name => "Product Name",
            ProductSortColumn::Price => "Price",
            ProductSortColumn::Stock => "Stock",
        }
    }

    pub fn kind(&self) -> SortKind {
        match self {
            ProductSortColumn::Name => SortKind::Text,
            ProductSortColumn::Price | ProductSortColumn::Stock => SortKind::Number,
        }
    }
}

impl SortColumn for ProductSortColumn {
    const ALL: &'static [Self] = &[
        ProductSortColumn::Name,
        ProductSortColumn::Price,
        ProductSortColumn::Stock,
    ];

    fn key(&self) -> &'static str {
        match self {
            ProductSortColumn::Name => "name",
            ProductSortColumn::Price => "price",
            ProductSortColumn::Stock => "stock",
        }
    }
}

impl SortKey<ProductSortColumn> for Product {
    fn sort_value(&self, column: ProductSortColumn) -> SortValue<'_> {
        match column {
            ProductSortColumn::Name => SortValue::Text(&self.name),
            ProductSortColumn::Price => SortValue::Number(self.price),
            ProductSortColumn::Stock => SortValue::Number(self.stock as f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_deserializes_from_number_or_string() {
        let products: Vec<Product> = serde_json::from_str(
            r#"[
                {"id": 7, "name": "Banana", "category": "Fruit", "price": 2.5, "stock": 5},
                {"id": "sku-9", "name": "Carrot", "category": "Veg", "price": 1, "stock": 0}
            ]"#,
        )
        .unwrap();

        assert_eq!(products[0].id, ProductId::Number(7));
        assert_eq!(products[1].id, ProductId::from("sku-9"));
        assert_eq!(products[1].id.as_string(), "sku-9");
        assert_eq!(products[1].price, 1.0);
    }

    #[test]
    fn sentinel_categories_match_everything() {
        let product = Product {
            id: ProductId::Number(1),
            name: "Banana".into(),
            category: "Fruit".into(),
            price: 2.0,
            stock: 5,
        };
        assert!(product.matches_category("Fruit"));
        assert!(product.matches_category(ALL_CATEGORIES));
        assert!(product.matches_category("all"));
        assert!(!product.matches_category("fruit"));
        assert!(!product.matches_category("Nonexistent"));
    }
}
