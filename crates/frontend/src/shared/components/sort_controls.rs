use crate::shared::icons::icon;
use crate::shared::list_utils::{get_priority_badge, get_sort_icon_name, sort_button_label};
use contracts::shared::list_query::{SortDirection, SortKind};
use leptos::prelude::*;
use thaw::*;

/// Кнопка сортировки для мобильного вида (карточки без заголовков таблицы)
#[component]
pub fn SortButton(
    #[prop(into)] label: String,
    #[prop(optional, default = SortKind::Text)] kind: SortKind,
    #[prop(into)] direction: Signal<Option<SortDirection>>,
    #[prop(into)] priority: Signal<Option<u32>>,
    #[prop(into)] active_sorts: Signal<usize>,
    on_sort: Callback<()>,
) -> impl IntoView {
    let label_for_aria = label.clone();
    let appearance = Signal::derive(move || {
        if direction.get().is_some() {
            ButtonAppearance::Primary
        } else {
            ButtonAppearance::Secondary
        }
    });

    view! {
        <Button
            appearance=appearance
            attr:aria-label=move || sort_button_label(&label_for_aria, direction.get())
            on_click=move |_| on_sort.run(())
        >
            {move || icon(get_sort_icon_name(direction.get(), kind))}
            " "
            {label}
            {move || {
                get_priority_badge(priority.get(), active_sorts.get())
                    .map(|badge| view! { <span class="sort-priority">{badge}</span> })
            }}
        </Button>
    }
}

/// Сброс всех сортировок; скрыт, пока сортировка не задана
#[component]
pub fn ClearSortButton(
    #[prop(into)] active_sorts: Signal<usize>,
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || { active_sorts.get() > 0 }>
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| on_clear.run(())
            >
                "Clear sort"
            </Button>
        </Show>
    }
}
