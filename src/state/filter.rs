/// Filter selections, predicate and sort engines for the gallery
///
/// Everything in here is pure: no I/O, no shared state. The gallery view
/// owns a `FilterState` and recomputes `apply` whenever it renders.

use super::data::GalleryItem;
use std::fmt;

/// Sort criterion chosen in the sort picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Newest first
    #[default]
    Recent,
    /// Most liked first
    Popular,
    /// Most viewed first. There is no rating field; views stand in for it.
    Rating,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Recent, SortMode::Popular, SortMode::Rating];
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortMode::Recent => "Most Recent",
            SortMode::Popular => "Most Popular",
            SortMode::Rating => "Highest Rated",
        };
        f.write_str(label)
    }
}

/// Identifies one field of the filter state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    Styles,
    BodyParts,
    Colors,
    Artists,
    SearchQuery,
    IsAiOnly,
}

impl FilterKey {
    /// The list-valued keys, in chip display order
    pub const LISTS: [FilterKey; 4] = [
        FilterKey::Styles,
        FilterKey::BodyParts,
        FilterKey::Colors,
        FilterKey::Artists,
    ];

    /// Field name as shown to the user (camelCase, plural)
    pub fn field_name(self) -> &'static str {
        match self {
            FilterKey::Styles => "styles",
            FilterKey::BodyParts => "bodyParts",
            FilterKey::Colors => "colors",
            FilterKey::Artists => "artists",
            FilterKey::SearchQuery => "searchQuery",
            FilterKey::IsAiOnly => "isAiOnly",
        }
    }

    /// Field name with the trailing plural marker removed
    pub fn singular_name(self) -> &'static str {
        let name = self.field_name();
        name.strip_suffix('s').unwrap_or(name)
    }
}

/// Current narrowing criteria plus sort mode
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub styles: Vec<String>,
    pub body_parts: Vec<String>,
    pub colors: Vec<String>,
    pub artists: Vec<String>,
    pub search_query: String,
    pub is_ai_only: bool,
    pub sort_by: SortMode,
}

impl FilterState {
    /// Borrow one of the list-valued fields.
    /// Returns `None` for `SearchQuery` and `IsAiOnly`.
    pub fn list(&self, key: FilterKey) -> Option<&Vec<String>> {
        match key {
            FilterKey::Styles => Some(&self.styles),
            FilterKey::BodyParts => Some(&self.body_parts),
            FilterKey::Colors => Some(&self.colors),
            FilterKey::Artists => Some(&self.artists),
            FilterKey::SearchQuery | FilterKey::IsAiOnly => None,
        }
    }

    pub fn list_mut(&mut self, key: FilterKey) -> Option<&mut Vec<String>> {
        match key {
            FilterKey::Styles => Some(&mut self.styles),
            FilterKey::BodyParts => Some(&mut self.body_parts),
            FilterKey::Colors => Some(&mut self.colors),
            FilterKey::Artists => Some(&mut self.artists),
            FilterKey::SearchQuery | FilterKey::IsAiOnly => None,
        }
    }

    /// Add `value` to a list field if absent, remove it if present.
    /// Has no effect on non-list keys.
    pub fn toggle_value(&mut self, key: FilterKey, value: &str) {
        if let Some(values) = self.list_mut(key) {
            if let Some(pos) = values.iter().position(|v| v == value) {
                values.remove(pos);
            } else {
                values.push(value.to_string());
            }
        }
    }

    /// Whether any narrowing criterion is set (sort mode does not count)
    pub fn has_active_filters(&self) -> bool {
        !self.styles.is_empty()
            || !self.body_parts.is_empty()
            || !self.colors.is_empty()
            || !self.artists.is_empty()
            || !self.search_query.is_empty()
            || self.is_ai_only
    }
}

/// Decide whether `item` passes every active criterion in `filters`.
///
/// Selected colors are shown as chips but do not narrow the result set.
pub fn matches(item: &GalleryItem, filters: &FilterState) -> bool {
    if !filters.styles.is_empty() && !filters.styles.contains(&item.style) {
        return false;
    }
    if !filters.body_parts.is_empty() && !filters.body_parts.contains(&item.body_part) {
        return false;
    }
    if !filters.artists.is_empty() && !filters.artists.contains(&item.artist) {
        return false;
    }
    if filters.is_ai_only && !item.is_ai_enhanced {
        return false;
    }
    if !filters.search_query.is_empty() {
        let query = filters.search_query.to_lowercase();
        let haystack = item.searchable_text().to_lowercase();
        if !haystack.contains(&query) {
            return false;
        }
    }
    true
}

/// Order items in place, descending by the selected criterion.
/// `sort_by` is stable, so ties keep their relative order.
pub fn sort_items(items: &mut [&GalleryItem], mode: SortMode) {
    match mode {
        SortMode::Recent => items.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortMode::Popular => items.sort_by(|a, b| b.likes.cmp(&a.likes)),
        SortMode::Rating => items.sort_by(|a, b| b.views.cmp(&a.views)),
    }
}

/// Filter then sort: the sequence the grid renders and the modal walks
pub fn apply<'a>(items: &'a [GalleryItem], filters: &FilterState) -> Vec<&'a GalleryItem> {
    let mut visible: Vec<&GalleryItem> = items.iter().filter(|item| matches(item, filters)).collect();
    sort_items(&mut visible, filters.sort_by);
    visible
}
