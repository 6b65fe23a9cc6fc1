//! Query-параметры списка товаров: `category`, `page`, `sort`.

use crate::shared::url_state::QueryParams;
use contracts::domain::a001_product::aggregate::{
    is_all_categories, ProductSortColumn, ALL_CATEGORIES,
};
use contracts::shared::list_query::{
    parse_multi_sort_param, serialize_multi_sort_param, SortColumn, SortDirective,
};

pub const CATEGORY_PARAM: &str = "category";
pub const PAGE_PARAM: &str = "page";
pub const SORT_PARAM: &str = "sort";

const DEFAULT_PAGE: usize = 1;

/// Начальное состояние списка, восстановленное из URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductsQueryParams {
    /// Unknown categories are passed through as-is and simply match nothing
    pub initial_category: String,
    pub initial_page: usize,
    pub initial_sorts: Vec<SortDirective<ProductSortColumn>>,
}

impl ProductsQueryParams {
    pub fn from_params(params: &QueryParams) -> Self {
        let initial_category = match params.get(CATEGORY_PARAM) {
            None | Some("") => ALL_CATEGORIES.to_string(),
            Some(category) if is_all_categories(category) => ALL_CATEGORIES.to_string(),
            Some(category) => category.to_string(),
        };

        Self {
            initial_category,
            initial_page: parse_page(params.get(PAGE_PARAM)),
            initial_sorts: parse_multi_sort_param(
                params.get(SORT_PARAM),
                ProductSortColumn::ALL,
            ),
        }
    }
}

/// Positive decimal integer, anything else is page 1.
///
/// Numbers past `usize::MAX` saturate; [`Pagination`] then clamps them to
/// the last page.
///
/// [`Pagination`]: contracts::shared::list_query::Pagination
fn parse_page(raw: Option<&str>) -> usize {
    let Some(digits) = raw.map(str::trim) else {
        return DEFAULT_PAGE;
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return DEFAULT_PAGE;
    }

    let page = digits.parse::<usize>().unwrap_or(usize::MAX);
    if page >= 1 {
        page
    } else {
        DEFAULT_PAGE
    }
}

/// Записывает состояние списка поверх текущих параметров.
///
/// Чужие параметры сохраняются. `category` убирается для «всех категорий»,
/// `page` для первой страницы, `sort` при пустой сортировке.
pub fn apply_view_state(
    params: &mut QueryParams,
    category: &str,
    page: usize,
    sorts: &[SortDirective<ProductSortColumn>],
) {
    if category.is_empty() || is_all_categories(category) {
        params.remove(CATEGORY_PARAM);
    } else {
        params.set(CATEGORY_PARAM, category);
    }

    if page > 1 {
        params.set(PAGE_PARAM, page.to_string());
    } else {
        params.remove(PAGE_PARAM);
    }

    let sort_param = serialize_multi_sort_param(sorts);
    if sort_param.is_empty() {
        params.remove(SORT_PARAM);
    } else {
        params.set(SORT_PARAM, sort_param);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_query::SortDirection;
    use pretty_assertions::assert_eq;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_url_gives_defaults() {
        let query = ProductsQueryParams::from_params(&QueryParams::new());
        assert_eq!(
            query,
            ProductsQueryParams {
                initial_category: ALL_CATEGORIES.to_string(),
                initial_page: 1,
                initial_sorts: Vec::new(),
            }
        );
    }

    #[test]
    fn reads_category_page_and_sort() {
        let query = ProductsQueryParams::from_params(&params(&[
            ("category", "Books"),
            ("page", "3"),
            ("sort", "price.desc,bogus.asc,name.asc"),
        ]));
        assert_eq!(query.initial_category, "Books");
        assert_eq!(query.initial_page, 3);
        assert_eq!(
            query.initial_sorts,
            vec![
                SortDirective::new(ProductSortColumn::Price, SortDirection::Desc, 1),
                SortDirective::new(ProductSortColumn::Name, SortDirection::Asc, 2),
            ]
        );
    }

    #[test]
    fn invalid_pages_fall_back_to_first() {
        for raw in ["0", "-2", "abc", "", "1.5", "00"] {
            let query = ProductsQueryParams::from_params(&params(&[("page", raw)]));
            assert_eq!(query.initial_page, 1, "page={raw:?}");
        }
    }

    #[test]
    fn oversized_page_saturates_instead_of_resetting() {
        let query =
            ProductsQueryParams::from_params(&params(&[("page", "99999999999999999999999")]));
        assert_eq!(query.initial_page, usize::MAX);
        assert_eq!(parse_page(Some(" 12 ")), 12);
    }

    #[test]
    fn first_value_wins_for_repeated_params() {
        let query = ProductsQueryParams::from_params(&QueryParams::parse(
            "category=Books&category=Sports&page=2&page=5&sort=name.asc&sort=price.desc",
        ));
        assert_eq!(query.initial_category, "Books");
        assert_eq!(query.initial_page, 2);
        assert_eq!(
            query.initial_sorts,
            vec![SortDirective::new(ProductSortColumn::Name, SortDirection::Asc, 1)]
        );
    }

    #[test]
    fn apply_view_state_keeps_repeated_foreign_params() {
        let mut current = QueryParams::parse("tag=a&page=3&tag=b&utm[source]=mail");
        apply_view_state(&mut current, "Books", 1, &[]);
        assert_eq!(
            current,
            params(&[
                ("tag", "a"),
                ("tag", "b"),
                ("utm[source]", "mail"),
                ("category", "Books"),
            ])
        );
    }

    #[test]
    fn sentinel_and_unknown_categories() {
        let all = ProductsQueryParams::from_params(&params(&[("category", "all")]));
        assert_eq!(all.initial_category, ALL_CATEGORIES);

        let unknown = ProductsQueryParams::from_params(&params(&[("category", "Nonexistent")]));
        assert_eq!(unknown.initial_category, "Nonexistent");
    }

    #[test]
    fn apply_view_state_omits_defaults_and_keeps_foreign_params() {
        let mut current = params(&[("utm", "mail"), ("page", "4"), ("category", "Books")]);
        apply_view_state(&mut current, ALL_CATEGORIES, 1, &[]);
        assert_eq!(current, params(&[("utm", "mail")]));

        let sorts = [SortDirective::new(ProductSortColumn::Stock, SortDirection::Desc, 1)];
        apply_view_state(&mut current, "Sports", 2, &sorts);
        assert_eq!(
            current,
            params(&[
                ("utm", "mail"),
                ("category", "Sports"),
                ("page", "2"),
                ("sort", "stock.desc"),
            ])
        );
    }
}
