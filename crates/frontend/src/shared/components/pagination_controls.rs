use crate::shared::icons::icon;
use contracts::shared::list_query::PageRange;
use leptos::prelude::*;

/// Подпись над кнопками: диапазон строк или сообщение о пустом списке
pub fn pagination_summary(range: PageRange, total_items: usize) -> String {
    if total_items == 0 {
        return "No products to display".to_string();
    }
    format!(
        "Showing {}-{} of {} products",
        range.start, range.end, total_items
    )
}

/// PaginationControls component - reusable pagination controls
///
/// Pages are 1-based. The component only reports clicks; clamping is up to
/// the owner of the pagination state.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages (at least 1)
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_items: Signal<usize>,

    /// Rows shown on the current page
    #[prop(into)]
    page_range: Signal<PageRange>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let has_previous = move || current_page.get() > 1;
    let has_next = move || current_page.get() < total_pages.get();

    view! {
        <nav class="pagination-controls" aria-label="Pagination">
            <p class="pagination-info">
                {move || pagination_summary(page_range.get(), total_items.get())}
            </p>
            <div class="pagination-buttons">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1))
                    disabled=move || !has_previous()
                    aria-label="Previous page"
                >
                    {icon("chevron-left")}
                    "Previous"
                </button>
                <div class="pagination-pages">
                    {move || {
                        (1..=total_pages.get())
                            .map(|page| {
                                let is_current = move || current_page.get() == page;
                                view! {
                                    <button
                                        class=move || {
                                            if is_current() {
                                                "pagination-page pagination-page--current"
                                            } else {
                                                "pagination-page"
                                            }
                                        }
                                        aria-current=move || is_current().then_some("page")
                                        on:click=move |_| on_page_change.run(page)
                                    >
                                        {page.to_string()}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(current_page.get() + 1)
                    disabled=move || !has_next()
                    aria-label="Next page"
                >
                    "Next"
                    {icon("chevron-right")}
                </button>
            </div>
        </nav>
    }
}
