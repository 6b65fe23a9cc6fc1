use crate::shared::components::table::{format_price, format_stock};
use crate::shared::icons::icon;
use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;
use thaw::*;

/// Режим отображения списка
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Table,
    Cards,
}

/// Модификатор CSS-класса для остатка: ноль и малый остаток подсвечиваются
pub fn stock_class(stock: i64) -> &'static str {
    match stock {
        s if s <= 0 => "stock stock--out",
        s if s < 10 => "stock stock--low",
        _ => "stock",
    }
}

#[component]
pub fn ProductsHeader(#[prop(into)] total_count: Signal<usize>) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                {icon("products")}
                <h1 class="page__title">"Products"</h1>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                    <span>{move || total_count.get().to_string()}</span>
                </Badge>
            </div>
            <p class="page__subtitle">"Manage your product inventory"</p>
        </div>
    }
}

/// Фильтр по категории и переключатель вида
#[component]
pub fn ProductsFilters(
    category: RwSignal<String>,
    #[prop(into)] categories: Signal<Vec<String>>,
    view_mode: RwSignal<ViewMode>,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <div style="min-width: 240px;">
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Category:"</Label>
                        <Select value=category>
                            <For
                                each=move || categories.get()
                                key=|c| c.clone()
                                children=move |c| view! { <option value=c.clone()>{c.clone()}</option> }
                            />
                        </Select>
                    </Flex>
                </div>

                <Space>
                    <Button
                        appearance=Signal::derive(move || {
                            if view_mode.get() == ViewMode::Table {
                                ButtonAppearance::Primary
                            } else {
                                ButtonAppearance::Secondary
                            }
                        })
                        attr:aria-label="Table view"
                        on_click=move |_| view_mode.set(ViewMode::Table)
                    >
                        {icon("monitor")}
                    </Button>
                    <Button
                        appearance=Signal::derive(move || {
                            if view_mode.get() == ViewMode::Cards {
                                ButtonAppearance::Primary
                            } else {
                                ButtonAppearance::Secondary
                            }
                        })
                        attr:aria-label="Card view"
                        on_click=move |_| view_mode.set(ViewMode::Cards)
                    >
                        {icon("smartphone")}
                    </Button>
                </Space>
            </Flex>
        </div>
    }
}

#[component]
pub fn ProductTableRow(product: Product) -> impl IntoView {
    view! {
        <TableRow>
            <TableCell><TableCellLayout truncate=true>{product.name}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{product.category}</TableCellLayout></TableCell>
            <TableCell class="table__cell--right">
                <TableCellLayout>{format_price(product.price)}</TableCellLayout>
            </TableCell>
            <TableCell class="table__cell--right">
                <TableCellLayout>
                    <span class=stock_class(product.stock)>{format_stock(product.stock)}</span>
                </TableCellLayout>
            </TableCell>
        </TableRow>
    }
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    view! {
        <article class="product-card">
            <header class="product-card__header">
                <h3 class="product-card__title">{product.name}</h3>
                <span class="product-card__category">{product.category}</span>
            </header>
            <dl class="product-card__details">
                <dt>"Price"</dt>
                <dd>{format_price(product.price)}</dd>
                <dt>"Stock"</dt>
                <dd class=stock_class(product.stock)>{format_stock(product.stock)}</dd>
            </dl>
        </article>
    }
}

/// Пустой список: показывается выбранная категория
#[component]
pub fn EmptyProducts(#[prop(into)] category: Signal<String>) -> impl IntoView {
    view! {
        <div class="empty-state" role="status">
            <p class="empty-state__title">"No products found"</p>
            <p class="empty-state__text">
                {move || format!("There are no products in \"{}\".", category.get())}
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_class_marks_low_and_empty_stock() {
        assert_eq!(stock_class(0), "stock stock--out");
        assert_eq!(stock_class(3), "stock stock--low");
        assert_eq!(stock_class(10), "stock");
    }
}
