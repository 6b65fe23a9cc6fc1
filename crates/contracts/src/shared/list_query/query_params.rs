//! Compact URL encoding of multi-column sort state.
//!
//! Format: `column.direction,column.direction`, e.g. `name.asc,price.desc`.
//! Both functions are total: anything that does not parse is skipped.

use super::sort::{SortColumn, SortDirection, SortDirective};

/// Serializes directives in ascending priority order. Empty input gives `""`.
pub fn serialize_multi_sort_param<C: SortColumn>(directives: &[SortDirective<C>]) -> String {
    let mut ordered: Vec<&SortDirective<C>> = directives.iter().collect();
    ordered.sort_by_key(|directive| directive.priority);

    ordered
        .iter()
        .map(|directive| format!("{}.{}", directive.column.key(), directive.direction.as_str()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Parses a raw `sort` param against a column whitelist.
///
/// Segments with an unknown column or a direction other than `asc`/`desc`
/// are dropped. Priorities follow the order of the accepted segments.
/// Repeated columns are kept as they are.
pub fn parse_multi_sort_param<C: SortColumn>(
    raw: Option<&str>,
    allowed_columns: &[C],
) -> Vec<SortDirective<C>> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    let mut result: Vec<SortDirective<C>> = Vec::new();

    for part in raw.split(',').map(str::trim).filter(|part| !part.is_empty()) {
        let mut pieces = part.split('.');
        let raw_column = pieces.next().unwrap_or_default();
        let Some(direction) = pieces.next().and_then(SortDirection::parse) else {
            continue;
        };
        let Some(column) = allowed_columns
            .iter()
            .copied()
            .find(|column| column.key() == raw_column)
        else {
            continue;
        };

        let priority = result.len() as u32 + 1;
        result.push(SortDirective::new(column, direction, priority));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::sort::tests::Col;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_in_priority_order() {
        let directives = [
            SortDirective::new(Col::Price, SortDirection::Desc, 2),
            SortDirective::new(Col::Name, SortDirection::Asc, 1),
        ];
        assert_eq!(serialize_multi_sort_param(&directives), "name.asc,price.desc");
        assert_eq!(serialize_multi_sort_param::<Col>(&[]), "");
    }

    #[test]
    fn parses_well_formed_param() {
        let parsed = parse_multi_sort_param(Some("name.asc,price.desc"), Col::ALL);
        assert_eq!(
            parsed,
            vec![
                SortDirective::new(Col::Name, SortDirection::Asc, 1),
                SortDirective::new(Col::Price, SortDirection::Desc, 2),
            ]
        );
    }

    #[test]
    fn missing_or_empty_param_is_empty() {
        assert!(parse_multi_sort_param::<Col>(None, Col::ALL).is_empty());
        assert!(parse_multi_sort_param::<Col>(Some(""), Col::ALL).is_empty());
        assert!(parse_multi_sort_param::<Col>(Some(" , ,"), Col::ALL).is_empty());
    }

    #[test]
    fn invalid_segments_are_dropped_and_priorities_stay_dense() {
        let parsed = parse_multi_sort_param(
            Some("bogus.asc,name.up,price,stock.desc, category.DESC ,price.desc"),
            &[Col::Name, Col::Price, Col::Category],
        );
        assert_eq!(parsed, vec![SortDirective::new(Col::Price, SortDirection::Desc, 1)]);
    }

    #[test]
    fn whitelist_excludes_known_but_disallowed_columns() {
        let parsed = parse_multi_sort_param(Some("mixed.asc,name.desc"), &[Col::Name]);
        assert_eq!(parsed, vec![SortDirective::new(Col::Name, SortDirection::Desc, 1)]);
    }

    #[test]
    fn duplicate_columns_are_not_deduplicated() {
        let parsed = parse_multi_sort_param(Some("name.asc,name.desc"), Col::ALL);
        assert_eq!(
            parsed,
            vec![
                SortDirective::new(Col::Name, SortDirection::Asc, 1),
                SortDirective::new(Col::Name, SortDirection::Desc, 2),
            ]
        );
    }

    #[test]
    fn parse_reverses_serialize() {
        let directives = vec![
            SortDirective::new(Col::Category, SortDirection::Asc, 1),
            SortDirective::new(Col::Price, SortDirection::Desc, 2),
            SortDirective::new(Col::Name, SortDirection::Desc, 3),
        ];
        let raw = serialize_multi_sort_param(&directives);
        assert_eq!(parse_multi_sort_param(Some(raw.as_str()), Col::ALL), directives);
    }
}
