/// Active-filter chips
///
/// Projects a `FilterState` into a flat list of removable tokens and
/// applies chip removals back onto the state.

use super::filter::{FilterKey, FilterState};

/// One removable token representing a single active filter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub key: FilterKey,
    pub value: String,
    pub label: String,
}

/// Derive the chips for every active filter, in display order:
/// styles, body parts, colors, artists, search, AI-only.
pub fn project(filters: &FilterState) -> Vec<Chip> {
    let mut chips = Vec::new();

    for key in FilterKey::LISTS {
        if let Some(values) = filters.list(key) {
            for value in values {
                chips.push(Chip {
                    key,
                    value: value.clone(),
                    label: format!("{}: {}", key.singular_name(), value),
                });
            }
        }
    }

    if !filters.search_query.is_empty() {
        chips.push(Chip {
            key: FilterKey::SearchQuery,
            value: filters.search_query.clone(),
            label: format!("Search: \"{}\"", filters.search_query),
        });
    }

    if filters.is_ai_only {
        chips.push(Chip {
            key: FilterKey::IsAiOnly,
            value: "true".to_string(),
            label: "AI Enhanced Only".to_string(),
        });
    }

    chips
}

/// Remove the filter a chip stands for.
///
/// The caller (the gallery view) resets pagination alongside this.
pub fn remove_chip(filters: &mut FilterState, key: FilterKey, value: &str) {
    match key {
        FilterKey::SearchQuery => filters.search_query.clear(),
        FilterKey::IsAiOnly => filters.is_ai_only = false,
        _ => {
            if let Some(values) = filters.list_mut(key) {
                values.retain(|v| v != value);
            }
        }
    }
}

/// Reset every field, sort mode included, in a single assignment
pub fn clear_all(filters: &mut FilterState) {
    *filters = FilterState::default();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::filter::SortMode;

    fn busy_filters() -> FilterState {
        FilterState {
            styles: vec!["Japanese".into(), "Abstract".into()],
            body_parts: vec!["Arm".into()],
            colors: vec!["red".into()],
            artists: vec!["Mike Chen".into()],
            search_query: "dragon".into(),
            is_ai_only: true,
            sort_by: SortMode::default(),
        }
    }

    #[test]
    fn test_project_labels_and_order() {
        let labels: Vec<String> = project(&busy_filters()).into_iter().map(|c| c.label).collect();

        assert_eq!(
            labels,
            vec![
                "style: Japanese",
                "style: Abstract",
                "bodyPart: Arm",
                "color: red",
                "artist: Mike Chen",
                "Search: \"dragon\"",
                "AI Enhanced Only",
            ]
        );
    }

    #[test]
    fn test_project_empty_state() {
        assert!(project(&FilterState::default()).is_empty());
    }

    #[test]
    fn test_removing_every_chip_yields_default() {
        let mut filters = busy_filters();
        for chip in project(&filters) {
            remove_chip(&mut filters, chip.key, &chip.value);
        }
        assert_eq!(filters, FilterState::default());
    }

    #[test]
    fn test_remove_single_value_keeps_others() {
        let mut filters = busy_filters();
        remove_chip(&mut filters, FilterKey::Styles, "Japanese");
        assert_eq!(filters.styles, vec!["Abstract"]);
        assert_eq!(filters.body_parts, vec!["Arm"]);
        assert!(filters.is_ai_only);
    }

    #[test]
    fn test_clear_all_resets_sort() {
        let mut filters = busy_filters();
        filters.sort_by = SortMode::Popular;
        clear_all(&mut filters);
        assert_eq!(filters, FilterState::default());
        assert_eq!(filters.sort_by, SortMode::Recent);
    }
}
