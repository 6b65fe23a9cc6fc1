use super::sort::{SortColumn, SortDirection, SortDirective};
use serde::{Deserialize, Serialize};

/// Active sort directives of a table, clicked column first.
///
/// Every click on a column promotes it to priority 1. A column cycles
/// `unsorted -> desc -> asc -> unsorted`; the other columns keep their
/// relative order. Priorities always form `1..=N` with one directive per column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiSort<C> {
    /// Kept ordered by priority; `directives[i].priority == i + 1`
    directives: Vec<SortDirective<C>>,
}

impl<C: SortColumn> Default for MultiSort<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: SortColumn> MultiSort<C> {
    pub fn new() -> Self {
        Self {
            directives: Vec::new(),
        }
    }

    /// Seeds the state, e.g. from URL params.
    ///
    /// Directives are ordered by priority, only the first directive of a
    /// column survives, and priorities are renumbered densely.
    pub fn with_initial(initial: Vec<SortDirective<C>>) -> Self {
        let mut initial = initial;
        initial.sort_by_key(|directive| directive.priority);

        let mut directives: Vec<SortDirective<C>> = Vec::with_capacity(initial.len());
        for directive in initial {
            if !directives.iter().any(|d| d.column == directive.column) {
                directives.push(directive);
            }
        }

        let mut state = Self { directives };
        state.renumber();
        state
    }

    /// Directives ordered by priority
    pub fn directives(&self) -> &[SortDirective<C>] {
        &self.directives
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn handle_sort(&mut self, column: C) {
        let existing = self.position(column).map(|idx| self.directives.remove(idx));

        match existing.map(|directive| directive.direction) {
            None => self.promote(column, SortDirection::Desc),
            Some(SortDirection::Desc) => self.promote(column, SortDirection::Asc),
            Some(SortDirection::Asc) => self.renumber(),
        }
    }

    pub fn clear_sort(&mut self) {
        self.directives.clear();
    }

    pub fn clear_column(&mut self, column: C) {
        if let Some(idx) = self.position(column) {
            self.directives.remove(idx);
            self.renumber();
        }
    }

    pub fn get_sort_direction(&self, column: C) -> Option<SortDirection> {
        self.find(column).map(|directive| directive.direction)
    }

    pub fn get_sort_priority(&self, column: C) -> Option<u32> {
        self.find(column).map(|directive| directive.priority)
    }

    fn find(&self, column: C) -> Option<&SortDirective<C>> {
        self.directives.iter().find(|d| d.column == column)
    }

    fn position(&self, column: C) -> Option<usize> {
        self.directives.iter().position(|d| d.column == column)
    }

    /// Puts `column` in front; everybody else moves one priority down.
    fn promote(&mut self, column: C, direction: SortDirection) {
        self.directives
            .insert(0, SortDirective::new(column, direction, 1));
        self.renumber();
    }

    fn renumber(&mut self) {
        for (idx, directive) in self.directives.iter_mut().enumerate() {
            directive.priority = idx as u32 + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::sort::tests::Col;
    use pretty_assertions::assert_eq;

    fn priorities(state: &MultiSort<Col>) -> Vec<(Col, SortDirection, u32)> {
        state
            .directives()
            .iter()
            .map(|d| (d.column, d.direction, d.priority))
            .collect()
    }

    #[test]
    fn first_click_sorts_descending_as_primary() {
        let mut state = MultiSort::new();
        state.handle_sort(Col::Price);
        assert_eq!(state.get_sort_direction(Col::Price), Some(SortDirection::Desc));
        assert_eq!(state.get_sort_priority(Col::Price), Some(1));
    }

    #[test]
    fn three_clicks_return_to_unsorted() {
        let mut state = MultiSort::new();
        state.handle_sort(Col::Name);
        let before = state.len();

        state.handle_sort(Col::Price);
        assert_eq!(state.get_sort_direction(Col::Price), Some(SortDirection::Desc));
        state.handle_sort(Col::Price);
        assert_eq!(state.get_sort_direction(Col::Price), Some(SortDirection::Asc));
        state.handle_sort(Col::Price);

        assert_eq!(state.get_sort_direction(Col::Price), None);
        assert_eq!(state.get_sort_priority(Col::Price), None);
        assert_eq!(state.len(), before);
        assert_eq!(state.get_sort_priority(Col::Name), Some(1));
    }

    #[test]
    fn last_clicked_column_becomes_primary() {
        let mut state = MultiSort::new();
        state.handle_sort(Col::Price);
        state.handle_sort(Col::Category);
        assert_eq!(state.get_sort_priority(Col::Category), Some(1));
        assert_eq!(state.get_sort_priority(Col::Price), Some(2));
    }

    #[test]
    fn desc_click_repromotes_to_primary() {
        let mut state = MultiSort::new();
        state.handle_sort(Col::Price);
        state.handle_sort(Col::Name);
        state.handle_sort(Col::Category);
        // price sits at priority 3, still desc
        state.handle_sort(Col::Price);

        assert_eq!(
            priorities(&state),
            vec![
                (Col::Price, SortDirection::Asc, 1),
                (Col::Category, SortDirection::Desc, 2),
                (Col::Name, SortDirection::Desc, 3),
            ]
        );
    }

    #[test]
    fn removal_renumbers_densely() {
        let mut state = MultiSort::new();
        state.handle_sort(Col::Price);
        state.handle_sort(Col::Name);
        state.handle_sort(Col::Category);
        state.handle_sort(Col::Name);
        state.handle_sort(Col::Name);

        assert_eq!(
            priorities(&state),
            vec![
                (Col::Category, SortDirection::Desc, 1),
                (Col::Price, SortDirection::Desc, 2),
            ]
        );
    }

    #[test]
    fn clear_column_and_clear_sort() {
        let mut state = MultiSort::new();
        state.handle_sort(Col::Price);
        state.handle_sort(Col::Name);
        state.handle_sort(Col::Category);

        state.clear_column(Col::Name);
        assert_eq!(state.get_sort_priority(Col::Category), Some(1));
        assert_eq!(state.get_sort_priority(Col::Price), Some(2));

        state.clear_column(Col::Mixed);
        assert_eq!(state.len(), 2);

        state.clear_sort();
        assert!(state.is_empty());
    }

    #[test]
    fn seeding_orders_dedupes_and_renumbers() {
        let state = MultiSort::with_initial(vec![
            SortDirective::new(Col::Price, SortDirection::Asc, 4),
            SortDirective::new(Col::Name, SortDirection::Desc, 2),
            SortDirective::new(Col::Name, SortDirection::Asc, 3),
        ]);

        assert_eq!(
            priorities(&state),
            vec![
                (Col::Name, SortDirection::Desc, 1),
                (Col::Price, SortDirection::Asc, 2),
            ]
        );
    }
}
