use super::sort::{SortColumn, SortDirection, SortDirective};
use serde::{Deserialize, Serialize};

/// Sort state for tables that order by one column at a time.
///
/// A new column starts ascending; clicking it again flips to descending and
/// a third click clears the sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleSort<C> {
    active: Option<(C, SortDirection)>,
}

impl<C: SortColumn> Default for SingleSort<C> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<C: SortColumn> SingleSort<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_sort(&mut self, column: C) {
        self.active = match self.active {
            Some((current, SortDirection::Asc)) if current == column => {
                Some((column, SortDirection::Desc))
            }
            Some((current, SortDirection::Desc)) if current == column => None,
            _ => Some((column, SortDirection::Asc)),
        };
    }

    pub fn reset(&mut self) {
        self.active = None;
    }

    pub fn column(&self) -> Option<C> {
        self.active.map(|(column, _)| column)
    }

    pub fn direction(&self) -> Option<SortDirection> {
        self.active.map(|(_, direction)| direction)
    }

    /// The state as a one-element directive list for [`super::sort::sort_multi_data`]
    pub fn as_directive(&self) -> Option<SortDirective<C>> {
        self.active
            .map(|(column, direction)| SortDirective::new(column, direction, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::sort::tests::Col;

    #[test]
    fn cycles_asc_desc_none() {
        let mut state = SingleSort::new();
        state.handle_sort(Col::Name);
        assert_eq!(state.direction(), Some(SortDirection::Asc));
        state.handle_sort(Col::Name);
        assert_eq!(state.direction(), Some(SortDirection::Desc));
        state.handle_sort(Col::Name);
        assert_eq!(state.column(), None);
        assert_eq!(state.direction(), None);
    }

    #[test]
    fn switching_column_restarts_ascending() {
        let mut state = SingleSort::new();
        state.handle_sort(Col::Name);
        state.handle_sort(Col::Name);
        state.handle_sort(Col::Price);
        assert_eq!(state.column(), Some(Col::Price));
        assert_eq!(state.direction(), Some(SortDirection::Asc));
        assert_eq!(
            state.as_directive(),
            Some(SortDirective::new(Col::Price, SortDirection::Asc, 1))
        );

        state.reset();
        assert_eq!(state.as_directive(), None);
    }
}
