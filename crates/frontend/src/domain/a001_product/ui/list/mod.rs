pub mod query;
pub mod state;
pub mod widgets;

use crate::domain::a001_product::data::load_products;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::skeleton::{SkeletonCards, SkeletonRows};
use crate::shared::components::sort_controls::{ClearSortButton, SortButton};
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::config::load_config;
use crate::shared::url_state::BrowserUrlState;
use contracts::domain::a001_product::aggregate::ProductSortColumn;
use leptos::prelude::*;
use state::ProductListState;
use thaw::*;
use widgets::{
    EmptyProducts, ProductCard, ProductTableRow, ProductsFilters, ProductsHeader, ViewMode,
};

const TABLE_COLUMNS: usize = 4;

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let config = load_config();
    let products = load_products().unwrap_or_else(|e| {
        log::error!("Failed to parse embedded products: {}", e);
        Vec::new()
    });

    let state = RwSignal::new(ProductListState::mount(products, &config, BrowserUrlState));
    let category = RwSignal::new(state.with_untracked(|s| s.selected_category().to_string()));
    let view_mode = RwSignal::new(ViewMode::Table);

    // Select -> состояние списка (повторный выбор той же категории ничего не меняет)
    Effect::new(move |_| {
        let selected = category.get();
        state.update(|s| s.set_selected_category(selected));
    });

    // Имитация загрузки: после задержки показываем данные
    let delay_ms = config.loading_delay_ms;
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(delay_ms).await;
        if state.try_update(|s| s.finish_loading()).is_none() {
            log::debug!("Products list disposed before loading finished");
        }
    });

    let is_loading = Signal::derive(move || state.with(|s| s.is_loading()));
    let total_count = Signal::derive(move || state.with(|s| s.all_products().len()));
    let categories = Signal::derive(move || state.with(|s| s.categories().to_vec()));
    let active_sorts = Signal::derive(move || state.with(|s| s.sorts().len()));
    let selected_category = Signal::derive(move || state.with(|s| s.selected_category().to_string()));
    let visible = move || state.with(|s| s.visible_products().to_vec());

    let sort_direction = move |column: ProductSortColumn| {
        Signal::derive(move || state.with(|s| s.get_sort_direction(column)))
    };
    let sort_priority = move |column: ProductSortColumn| {
        Signal::derive(move || state.with(|s| s.get_sort_priority(column)))
    };
    let on_sort = move |column: ProductSortColumn| {
        Callback::new(move |_| state.update(|s| s.handle_sort(column)))
    };

    let sortable_header = move |column: ProductSortColumn, min_width: f64| {
        view! {
            <SortableHeaderCell
                label=column.label()
                kind=column.kind()
                direction=sort_direction(column)
                priority=sort_priority(column)
                active_sorts=active_sorts
                on_sort=on_sort(column)
                min_width=min_width
            />
        }
    };

    let sort_button = move |column: ProductSortColumn| {
        view! {
            <SortButton
                label=column.label()
                kind=column.kind()
                direction=sort_direction(column)
                priority=sort_priority(column)
                active_sorts=active_sorts
                on_sort=on_sort(column)
            />
        }
    };

    let table_view = move || {
        view! {
            <div style="width: 100%; overflow-x: auto;">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {sortable_header(ProductSortColumn::Name, 240.0)}
                            <TableHeaderCell resizable=true min_width=140.0>"Category"</TableHeaderCell>
                            {sortable_header(ProductSortColumn::Price, 120.0)}
                            {sortable_header(ProductSortColumn::Stock, 120.0)}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            if is_loading.get() {
                                return view! { <SkeletonRows columns=TABLE_COLUMNS /> }.into_any();
                            }
                            let rows = visible();
                            if rows.is_empty() {
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan=TABLE_COLUMNS.to_string()>
                                            <TableCellLayout>
                                                <EmptyProducts category=selected_category />
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .map(|product| view! { <ProductTableRow product=product /> })
                                .collect_view()
                                .into_any()
                        }}
                    </TableBody>
                </Table>
            </div>
        }
    };

    let cards_view = move || {
        view! {
            <div class="sort-controls">
                <Space>
                    {sort_button(ProductSortColumn::Price)}
                    {sort_button(ProductSortColumn::Stock)}
                    <ClearSortButton
                        active_sorts=active_sorts
                        on_clear=Callback::new(move |_| state.update(|s| s.clear_sort()))
                    />
                </Space>
            </div>
            <div class="product-cards">
                {move || {
                    if is_loading.get() {
                        return view! { <SkeletonCards /> }.into_any();
                    }
                    let rows = visible();
                    if rows.is_empty() {
                        return view! { <EmptyProducts category=selected_category /> }.into_any();
                    }
                    rows.into_iter()
                        .map(|product| view! { <ProductCard product=product /> })
                        .collect_view()
                        .into_any()
                }}
            </div>
        }
    };

    view! {
        <div class="page">
            <ProductsHeader total_count=total_count />

            <ProductsFilters category=category categories=categories view_mode=view_mode />

            <div class="page-content">
                {move || match view_mode.get() {
                    ViewMode::Table => table_view().into_any(),
                    ViewMode::Cards => cards_view().into_any(),
                }}

                <Show when=move || !is_loading.get()>
                    <PaginationControls
                        current_page=Signal::derive(move || state.with(|s| s.pagination().current_page()))
                        total_pages=Signal::derive(move || state.with(|s| s.pagination().total_pages()))
                        total_items=Signal::derive(move || state.with(|s| s.pagination().total_items()))
                        page_range=Signal::derive(move || state.with(|s| s.pagination().page_range()))
                        on_page_change=Callback::new(move |page| state.update(|s| s.go_to_page(page)))
                    />
                </Show>
            </div>
        </div>
    }
}
