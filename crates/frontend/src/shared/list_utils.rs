/// Универсальные утилиты для сортируемых списков (индикаторы, подписи для доступности)
use contracts::shared::list_query::{SortDirection, SortKind};

/// CSS-класс индикатора: активная колонка подсвечивается
pub fn get_sort_class(direction: Option<SortDirection>) -> &'static str {
    if direction.is_some() {
        "sort-indicator sort-indicator--active"
    } else {
        "sort-indicator"
    }
}

/// Имя иконки из [`crate::shared::icons::icon`] для направления и типа колонки
pub fn get_sort_icon_name(direction: Option<SortDirection>, kind: SortKind) -> &'static str {
    match (direction, kind) {
        (None, _) => "arrow-down-up",
        (Some(SortDirection::Asc), SortKind::Number) => "arrow-down-0-1",
        (Some(SortDirection::Desc), SortKind::Number) => "arrow-up-1-0",
        (Some(SortDirection::Asc), SortKind::Text) => "arrow-down-a-z",
        (Some(SortDirection::Desc), SortKind::Text) => "arrow-up-z-a",
    }
}

/// Значение атрибута `aria-sort`
pub fn aria_sort(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Asc) => "ascending",
        Some(SortDirection::Desc) => "descending",
        None => "none",
    }
}

/// `aria-label` кнопки сортировки
pub fn sort_button_label(label: &str, direction: Option<SortDirection>) -> String {
    let status = match direction {
        Some(SortDirection::Asc) => "sorted ascending",
        Some(SortDirection::Desc) => "sorted descending",
        None => "not sorted",
    };
    format!("{}, {}. Activate to change sort order.", label, status)
}

/// Номер приоритета показываем, только когда активно больше одной сортировки
pub fn get_priority_badge(priority: Option<u32>, active_sorts: usize) -> Option<String> {
    match priority {
        Some(priority) if active_sorts > 1 => Some(priority.to_string()),
        _ => None,
    }
}
