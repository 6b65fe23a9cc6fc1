//! Компонент сортируемой ячейки заголовка таблицы с поддержкой
//! сортировки по нескольким колонкам
//!
//! # Примеры
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Цена"
//!     kind=SortKind::Number
//!     direction=Signal::derive(move || state.with(|s| s.get_sort_direction(ProductSortColumn::Price)))
//!     priority=Signal::derive(move || state.with(|s| s.get_sort_priority(ProductSortColumn::Price)))
//!     active_sorts=Signal::derive(move || state.with(|s| s.sorts().len()))
//!     on_sort=Callback::new(move |_| state.update(|s| s.handle_sort(ProductSortColumn::Price)))
//! />
//! ```

use crate::shared::icons::icon;
use crate::shared::list_utils::{
    aria_sort, get_priority_badge, get_sort_class, get_sort_icon_name, sort_button_label,
};
use contracts::shared::list_query::{SortDirection, SortKind};
use leptos::prelude::*;
use thaw::*;

/// Компонент сортируемой ячейки заголовка таблицы
///
/// Автоматически:
/// - Показывает иконку направления сортировки с учётом типа колонки
/// - Показывает номер приоритета, если активно несколько сортировок
/// - Выставляет `aria-sort` и подпись кнопки для скринридеров
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Тип значений колонки (текст / число)
    #[prop(optional, default = SortKind::Text)]
    kind: SortKind,

    /// Текущее направление сортировки колонки
    #[prop(into)]
    direction: Signal<Option<SortDirection>>,

    /// Приоритет колонки (1 = основная сортировка)
    #[prop(into)]
    priority: Signal<Option<u32>>,

    /// Сколько колонок сейчас участвует в сортировке
    #[prop(into)]
    active_sorts: Signal<usize>,

    /// Callback при клике на заголовок
    on_sort: Callback<()>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    let label_for_aria = label.clone();

    view! {
        <TableHeaderCell min_width=min_width attr:aria-sort=move || aria_sort(direction.get())>
            <button
                type="button"
                class="table__sortable-header"
                aria-label=move || sort_button_label(&label_for_aria, direction.get())
                on:click=move |_| on_sort.run(())
            >
                <span>{label}</span>
                <span class=move || get_sort_class(direction.get())>
                    {move || icon(get_sort_icon_name(direction.get(), kind))}
                </span>
                {move || {
                    get_priority_badge(priority.get(), active_sorts.get())
                        .map(|badge| view! { <span class="sort-priority">{badge}</span> })
                }}
            </button>
        </TableHeaderCell>
    }
}
