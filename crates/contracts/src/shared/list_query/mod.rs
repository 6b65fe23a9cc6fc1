//! Client-side list state: multi-column sorting, pagination and the URL
//! encoding of sort state.

pub mod multi_sort;
pub mod pagination;
pub mod query_params;
pub mod single_sort;
pub mod sort;

pub use multi_sort::MultiSort;
pub use pagination::{PageChangeHook, PageRange, Pagination, PaginationOptions, DEFAULT_PAGE_SIZE};
pub use query_params::{parse_multi_sort_param, serialize_multi_sort_param};
pub use single_sort::SingleSort;
pub use sort::{
    locale_compare, sort_data, sort_multi_data, SortColumn, SortDirection, SortDirective, SortKey,
    SortKind, SortValue,
};
