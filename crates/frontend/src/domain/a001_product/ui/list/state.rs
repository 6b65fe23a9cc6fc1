use super::query::{apply_view_state, ProductsQueryParams};
use crate::domain::a001_product::data::category_options;
use crate::shared::config::ProductsListConfig;
use crate::shared::url_state::UrlStatePort;
use contracts::domain::a001_product::aggregate::{
    is_all_categories, Product, ProductSortColumn, ALL_CATEGORIES,
};
use contracts::shared::list_query::{
    sort_multi_data, MultiSort, Pagination, PaginationOptions, SortDirection, SortDirective,
};

/// Сбрасывает страницу при смене фильтра или сортировки, кроме самого
/// первого прохода: страница из URL должна сохраниться.
#[derive(Debug, Clone, Copy, Default)]
struct PageResetGuard {
    initialized: bool,
}

impl PageResetGuard {
    fn should_reset(&mut self) -> bool {
        if !self.initialized {
            self.initialized = true;
            return false;
        }
        true
    }
}

/// Состояние списка товаров: фильтр по категории -> сортировка -> страница.
///
/// Every mutation writes the resulting view state back to the URL port.
#[derive(Debug)]
pub struct ProductListState<U> {
    products: Vec<Product>,
    categories: Vec<String>,
    selected_category: String,
    sort: MultiSort<ProductSortColumn>,
    /// Filtered and sorted rows, before pagination
    rows: Vec<Product>,
    pagination: Pagination,
    is_loading: bool,
    page_reset: PageResetGuard,
    url: U,
}

impl<U: UrlStatePort> ProductListState<U> {
    /// Builds the list from the current URL and performs the first URL sync
    pub fn mount(products: Vec<Product>, config: &ProductsListConfig, url: U) -> Self {
        let query = ProductsQueryParams::from_params(&url.read());
        log::debug!("Products list mounted with {:?}", query);

        let categories = category_options(&products);
        let sort = MultiSort::with_initial(query.initial_sorts);
        let rows = filter_and_sort(&products, &query.initial_category, sort.directives());
        let pagination = Pagination::new(PaginationOptions {
            total_items: rows.len(),
            page_size: config.page_size,
            initial_page: query.initial_page,
        });

        let mut state = Self {
            products,
            categories,
            selected_category: query.initial_category,
            sort,
            rows,
            pagination,
            is_loading: true,
            page_reset: PageResetGuard::default(),
            url,
        };
        state.on_view_inputs_changed();
        state.sync_url();
        state
    }

    // ------------------------------------------------------------------
    // Read side
    // ------------------------------------------------------------------

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    /// Filter options, sentinel first
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn all_products(&self) -> &[Product] {
        &self.products
    }

    /// Rows after filter and sort, all pages
    pub fn filtered_products(&self) -> &[Product] {
        &self.rows
    }

    /// Rows of the current page
    pub fn visible_products(&self) -> &[Product] {
        self.pagination.page_slice(&self.rows)
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn sorts(&self) -> &[SortDirective<ProductSortColumn>] {
        self.sort.directives()
    }

    pub fn get_sort_direction(&self, column: ProductSortColumn) -> Option<SortDirection> {
        self.sort.get_sort_direction(column)
    }

    pub fn get_sort_priority(&self, column: ProductSortColumn) -> Option<u32> {
        self.sort.get_sort_priority(column)
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn url(&self) -> &U {
        &self.url
    }

    // ------------------------------------------------------------------
    // Filter / sort
    // ------------------------------------------------------------------

    pub fn set_selected_category(&mut self, category: impl Into<String>) {
        let mut category = category.into();
        if category.is_empty() || is_all_categories(&category) {
            category = ALL_CATEGORIES.to_string();
        }
        if category == self.selected_category {
            return;
        }

        log::debug!("Category: '{}' -> '{}'", self.selected_category, category);
        self.selected_category = category;
        self.recompute_rows();
        self.on_view_inputs_changed();
        self.sync_url();
    }

    pub fn handle_sort(&mut self, column: ProductSortColumn) {
        self.sort.handle_sort(column);
        log::debug!("Sort after click on {:?}: {:?}", column, self.sort.directives());
        self.after_sort_change();
    }

    pub fn clear_sort(&mut self) {
        if self.sort.is_empty() {
            return;
        }
        self.sort.clear_sort();
        self.after_sort_change();
    }

    pub fn clear_column(&mut self, column: ProductSortColumn) {
        if self.sort.get_sort_direction(column).is_none() {
            return;
        }
        self.sort.clear_column(column);
        self.after_sort_change();
    }

    // ------------------------------------------------------------------
    // Pagination
    // ------------------------------------------------------------------

    pub fn go_to_page(&mut self, page: usize) {
        self.pagination.go_to_page(page);
        self.sync_url();
    }

    pub fn go_to_next_page(&mut self) {
        self.pagination.go_to_next_page();
        self.sync_url();
    }

    pub fn go_to_previous_page(&mut self) {
        self.pagination.go_to_previous_page();
        self.sync_url();
    }

    pub fn finish_loading(&mut self) {
        self.is_loading = false;
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn after_sort_change(&mut self) {
        self.recompute_rows();
        self.on_view_inputs_changed();
        self.sync_url();
    }

    fn recompute_rows(&mut self) {
        self.rows = filter_and_sort(&self.products, &self.selected_category, self.sort.directives());
        self.pagination.set_total_items(self.rows.len());
    }

    fn on_view_inputs_changed(&mut self) {
        if self.page_reset.should_reset() {
            self.pagination.go_to_page(1);
        }
    }

    fn sync_url(&self) {
        let mut params = self.url.read();
        apply_view_state(
            &mut params,
            &self.selected_category,
            self.pagination.current_page(),
            self.sort.directives(),
        );
        if let Err(e) = self.url.write(&params) {
            log::warn!("Failed to sync products list state to URL: {}", e);
        }
    }
}

fn filter_and_sort(
    products: &[Product],
    category: &str,
    directives: &[SortDirective<ProductSortColumn>],
) -> Vec<Product> {
    let filtered: Vec<Product> = products
        .iter()
        .filter(|p| p.matches_category(category))
        .cloned()
        .collect();
    sort_multi_data(&filtered, directives).into_owned()
}
