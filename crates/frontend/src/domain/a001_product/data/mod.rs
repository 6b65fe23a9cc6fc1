//! Статический каталог товаров, встроенный в бандл

use contracts::domain::a001_product::aggregate::{Product, ALL_CATEGORIES};

const PRODUCTS_JSON: &str = include_str!("products.json");

pub fn load_products() -> Result<Vec<Product>, serde_json::Error> {
    serde_json::from_str(PRODUCTS_JSON)
}

/// Варианты фильтра: сначала «все категории», затем категории каталога по алфавиту
pub fn category_options(products: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = products.iter().map(|p| p.category.clone()).collect();
    categories.sort();
    categories.dedup();
    categories.insert(0, ALL_CATEGORIES.to_string());
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses() {
        let products = load_products().unwrap();
        assert_eq!(products.len(), 32);
        assert!(products.iter().all(|p| p.price >= 0.0 && p.stock >= 0));
    }

    #[test]
    fn category_options_start_with_sentinel() {
        let products = load_products().unwrap();
        let options = category_options(&products);
        assert_eq!(
            options,
            vec![
                ALL_CATEGORIES,
                "Books",
                "Clothing",
                "Electronics",
                "Furniture",
                "Groceries",
                "Sports",
            ]
        );
    }
}
