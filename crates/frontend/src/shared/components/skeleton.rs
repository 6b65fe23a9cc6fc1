//! Заглушки, которые показываются, пока список загружается

use leptos::prelude::*;
use thaw::*;

/// Строки-заглушки для табличного вида
#[component]
pub fn SkeletonRows(
    #[prop(optional, default = 5)] rows: usize,
    #[prop(optional, default = 4)] columns: usize,
) -> impl IntoView {
    (0..rows)
        .map(|_| {
            view! {
                <TableRow attr:aria-hidden="true">
                    {(0..columns)
                        .map(|_| {
                            view! {
                                <TableCell>
                                    <TableCellLayout>
                                        <span class="skeleton skeleton--text"></span>
                                    </TableCellLayout>
                                </TableCell>
                            }
                        })
                        .collect_view()}
                </TableRow>
            }
        })
        .collect_view()
}

/// Карточки-заглушки для мобильного вида
#[component]
pub fn SkeletonCards(#[prop(optional, default = 3)] count: usize) -> impl IntoView {
    (0..count)
        .map(|_| {
            view! {
                <div class="product-card product-card--skeleton" aria-hidden="true">
                    <span class="skeleton skeleton--title"></span>
                    <span class="skeleton skeleton--text"></span>
                    <span class="skeleton skeleton--text"></span>
                </div>
            }
        })
        .collect_view()
}
