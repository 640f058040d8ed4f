/// Gallery view state
///
/// Owns the filter state, the pagination cursor, the loaded pages and the
/// modal. Every filter mutation resets the cursor in the same call and
/// hands back the ticket of the page-1 fetch the caller must issue, so a
/// response from before the reset can never be applied after it.

use iced::widget::image;
use std::collections::{HashMap, HashSet};

use super::catalog::Page;
use super::chips;
use super::data::GalleryItem;
use super::filter::{self, FilterKey, FilterState, SortMode};
use super::modal::{Direction, Modal, ModalCommand};
use super::pagination::{self, FetchTicket, PageCursor};
use crate::error::FetchError;

/// Distinguishes waiting, data and failure, so "no results" is never
/// confused with "still loading" or "the source failed"
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Default)]
pub struct Gallery {
    filters: FilterState,
    cursor: PageCursor,
    /// Pages received so far for the current cursor generation, in order
    items: Vec<GalleryItem>,
    total_count: usize,
    load: LoadState,
    in_flight: bool,
    /// Decoded thumbnails by item id. Missing entries render a placeholder.
    thumbnails: HashMap<String, image::Handle>,
    /// Ids whose thumbnail has been requested once already
    requested_thumbnails: HashSet<String>,
    pub modal: Modal,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn loaded_count(&self) -> usize {
        self.items.len()
    }

    /// The filtered and sorted sequence the grid renders
    pub fn visible(&self) -> Vec<&GalleryItem> {
        filter::apply(&self.items, &self.filters)
    }

    /// Ready, filters applied, every page fetched, nothing to show
    pub fn is_empty_after_filtering(&self) -> bool {
        matches!(self.load_state(), LoadState::Ready)
            && !self.cursor.has_next_page()
            && self.visible().is_empty()
    }

    /// Start over at page 1 with the current filters
    pub fn reload(&mut self) -> FetchTicket {
        self.cursor.reset();
        self.items.clear();
        self.total_count = 0;
        self.load = LoadState::Loading;
        self.in_flight = true;
        self.modal.close();
        self.cursor.ticket()
    }

    /// Mutate the filters and reset pagination in one step
    pub fn update_filters(&mut self, f: impl FnOnce(&mut FilterState)) -> FetchTicket {
        f(&mut self.filters);
        tracing::debug!(filters = ?self.filters, "filters changed");
        self.reload()
    }

    pub fn toggle_filter(&mut self, key: FilterKey, value: &str) -> FetchTicket {
        self.update_filters(|filters| filters.toggle_value(key, value))
    }

    pub fn set_search(&mut self, query: String) -> FetchTicket {
        self.update_filters(|filters| filters.search_query = query)
    }

    pub fn set_ai_only(&mut self, ai_only: bool) -> FetchTicket {
        self.update_filters(|filters| filters.is_ai_only = ai_only)
    }

    pub fn set_sort(&mut self, mode: SortMode) -> FetchTicket {
        self.update_filters(|filters| filters.sort_by = mode)
    }

    pub fn remove_chip(&mut self, key: FilterKey, value: &str) -> FetchTicket {
        self.update_filters(|filters| chips::remove_chip(filters, key, value))
    }

    pub fn clear_all(&mut self) -> FetchTicket {
        self.update_filters(chips::clear_all)
    }

    /// React to the sentinel's visibility.
    /// Returns the ticket of the next page when a fetch should be issued.
    pub fn on_sentinel(&mut self, visible_fraction: f32) -> Option<FetchTicket> {
        if self.in_flight {
            return None;
        }
        if !pagination::should_load_more(visible_fraction, self.cursor.has_next_page()) {
            return None;
        }
        self.load_more()
    }

    /// Advance to the next page if the source has one
    pub fn load_more(&mut self) -> Option<FetchTicket> {
        if self.in_flight || !self.cursor.advance() {
            return None;
        }
        self.in_flight = true;
        self.load = LoadState::Loading;
        tracing::debug!(page = self.cursor.page(), "loading next page");
        Some(self.cursor.ticket())
    }

    /// Fetch the next page when the loaded pages hold no match for the
    /// filters. With nothing rendered the sentinel cannot become visible.
    pub fn load_more_if_starved(&mut self) -> Option<FetchTicket> {
        if !matches!(self.load, LoadState::Ready) || !self.visible().is_empty() {
            return None;
        }
        self.load_more()
    }

    /// Re-issue the fetch for the current page after a failure
    pub fn retry(&mut self) -> Option<FetchTicket> {
        if !matches!(self.load_state(), LoadState::Failed(_)) {
            return None;
        }
        self.load = LoadState::Loading;
        self.in_flight = true;
        Some(self.cursor.ticket())
    }

    /// Apply a page response. Returns `false` if the response was stale and
    /// discarded.
    pub fn on_page(&mut self, ticket: FetchTicket, result: Result<Page, FetchError>) -> bool {
        if !self.cursor.accepts(ticket) {
            tracing::debug!(?ticket, current = ?self.cursor.ticket(), "stale page discarded");
            return false;
        }
        self.in_flight = false;

        match result {
            Ok(page) => {
                if ticket.page == 1 {
                    self.items.clear();
                }
                for item in page.items {
                    if !self.items.iter().any(|existing| existing.id == item.id) {
                        self.items.push(item);
                    }
                }
                self.cursor.set_has_next_page(page.has_next_page);
                self.total_count = page.total_count;
                self.load = LoadState::Ready;

                let visible = filter::apply(&self.items, &self.filters);
                self.modal.sync(&visible);

                tracing::info!(
                    page = ticket.page,
                    loaded = self.items.len(),
                    total = self.total_count,
                    "📥 page loaded"
                );
            }
            Err(e) => {
                tracing::warn!(page = ticket.page, error = %e, "⚠️  page fetch failed");
                self.load = LoadState::Failed(e.to_string());
            }
        }
        true
    }

    /// Open the modal on an item from the visible sequence
    pub fn select(&mut self, item_id: &str) {
        let visible = filter::apply(&self.items, &self.filters);
        self.modal = Modal::open(&visible, item_id);
    }

    pub fn navigate(&mut self, direction: Direction) {
        let visible = filter::apply(&self.items, &self.filters);
        self.modal.navigate(direction, &visible);
    }

    pub fn modal_command(&mut self, command: ModalCommand) {
        let visible = filter::apply(&self.items, &self.filters);
        self.modal.handle(command, &visible);
    }

    /// The item the modal is showing, if open
    pub fn selected(&self) -> Option<&GalleryItem> {
        let viewing = self.modal.viewing()?;
        self.items.iter().find(|item| item.id == viewing.item_id)
    }

    pub fn thumbnail(&self, item_id: &str) -> Option<&image::Handle> {
        self.thumbnails.get(item_id)
    }

    pub fn is_thumbnail_loaded(&self, item_id: &str) -> bool {
        self.thumbnails.contains_key(item_id)
    }

    /// Record a decoded thumbnail. Only affects the placeholder transition.
    pub fn thumbnail_loaded(&mut self, item_id: String, handle: image::Handle) {
        self.thumbnails.insert(item_id, handle);
    }

    /// Thumbnails to request for newly loaded items.
    /// Each id is handed out once; a failed read keeps its placeholder.
    pub fn take_pending_thumbnails(&mut self) -> Vec<(String, String)> {
        let pending: Vec<(String, String)> = self
            .items
            .iter()
            .filter(|item| {
                !item.thumbnail_url.is_empty() && !self.requested_thumbnails.contains(&item.id)
            })
            .map(|item| (item.id.clone(), item.thumbnail_url.clone()))
            .collect();
        for (id, _) in &pending {
            self.requested_thumbnails.insert(id.clone());
        }
        pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::{mock_items, sample_item};

    fn page(items: Vec<GalleryItem>, has_next_page: bool) -> Result<Page, FetchError> {
        let total_count = items.len();
        Ok(Page {
            items,
            has_next_page,
            total_count,
        })
    }

    fn loaded_gallery() -> Gallery {
        let mut gallery = Gallery::new();
        let ticket = gallery.reload();
        assert!(gallery.on_page(ticket, page(mock_items(12), true)));
        gallery
    }

    #[test]
    fn test_starts_loading() {
        let gallery = Gallery::new();
        assert_eq!(gallery.load_state(), &LoadState::Loading);
        assert!(!gallery.is_empty_after_filtering());
    }

    #[test]
    fn test_every_filter_mutation_resets_cursor() {
        let mut gallery = loaded_gallery();

        let mutations: Vec<Box<dyn Fn(&mut Gallery) -> FetchTicket>> = vec![
            Box::new(|g: &mut Gallery| g.toggle_filter(FilterKey::Styles, "Japanese")),
            Box::new(|g: &mut Gallery| g.set_search("dragon".into())),
            Box::new(|g: &mut Gallery| g.set_ai_only(true)),
            Box::new(|g: &mut Gallery| g.set_sort(SortMode::Popular)),
            Box::new(|g: &mut Gallery| g.remove_chip(FilterKey::IsAiOnly, "true")),
            Box::new(|g: &mut Gallery| g.clear_all()),
        ];

        for mutate in mutations {
            // Walk forward a couple of pages first
            let ticket = gallery.load_more().unwrap();
            gallery.on_page(ticket, page(vec![], true));
            assert!(gallery.cursor().page() > 1);

            let ticket = mutate(&mut gallery);
            assert_eq!(gallery.cursor().page(), 1);
            assert_eq!(ticket.page, 1);
            gallery.on_page(ticket, page(mock_items(12), true));
        }
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut gallery = Gallery::new();
        let old = gallery.reload();
        let current = gallery.set_search("koi".into());

        assert!(!gallery.on_page(old, page(vec![sample_item("stale")], false)));
        assert_eq!(gallery.loaded_count(), 0);
        assert_eq!(gallery.load_state(), &LoadState::Loading);

        assert!(gallery.on_page(current, page(vec![sample_item("fresh")], false)));
        assert_eq!(gallery.loaded_count(), 1);
    }

    #[test]
    fn test_sentinel_triggers_next_page_once() {
        let mut gallery = loaded_gallery();

        assert_eq!(gallery.on_sentinel(0.05), None);
        let ticket = gallery.on_sentinel(0.5).unwrap();
        assert_eq!(ticket.page, 2);

        // Already fetching page 2
        assert_eq!(gallery.on_sentinel(1.0), None);

        let mut second = mock_items(24);
        let second = second.split_off(12);
        assert!(gallery.on_page(ticket, page(second, false)));
        assert_eq!(gallery.loaded_count(), 24);

        // Source said there is nothing more
        assert_eq!(gallery.on_sentinel(1.0), None);
        assert_eq!(gallery.cursor().page(), 2);
    }

    #[test]
    fn test_failure_is_distinct_and_retryable() {
        let mut gallery = Gallery::new();
        let ticket = gallery.reload();
        gallery.on_page(ticket, Err(FetchError::Unavailable));

        assert!(matches!(gallery.load_state(), LoadState::Failed(_)));
        assert!(!gallery.is_empty_after_filtering());

        let retry = gallery.retry().unwrap();
        assert_eq!(retry, ticket);
        assert_eq!(gallery.load_state(), &LoadState::Loading);
        assert_eq!(gallery.retry(), None);
    }

    #[test]
    fn test_empty_after_filtering() {
        let mut gallery = loaded_gallery();
        let ticket = gallery.set_search("no design has this text".into());
        gallery.on_page(ticket, page(mock_items(12), false));
        assert!(gallery.is_empty_after_filtering());
    }

    #[test]
    fn test_filtered_out_page_keeps_paging() {
        let dataset = mock_items(50);
        let serve = |page_number: u32| {
            let start = (page_number as usize - 1) * 12;
            let end = (start + 12).min(dataset.len());
            page(dataset[start..end].to_vec(), end < dataset.len())
        };

        let mut gallery = Gallery::new();
        gallery.toggle_filter(FilterKey::Styles, "Realistic");
        let ticket = gallery.toggle_filter(FilterKey::Artists, "Emma Davis");
        assert!(gallery.on_page(ticket, serve(ticket.page)));

        // Page 1 holds no match but the source has more
        assert!(gallery.visible().is_empty());
        assert!(gallery.cursor().has_next_page());
        assert!(!gallery.is_empty_after_filtering());

        while let Some(ticket) = gallery.load_more_if_starved() {
            assert!(gallery.on_page(ticket, serve(ticket.page)));
        }

        let found = gallery.visible();
        assert!(!found.is_empty());
        assert!(found
            .iter()
            .all(|item| item.style == "Realistic" && item.artist == "Emma Davis"));
        // Stops at the first page that produced a match
        assert!(gallery.load_more_if_starved().is_none());
    }

    #[test]
    fn test_no_match_anywhere_ends_in_empty_state() {
        let mut gallery = Gallery::new();
        let ticket = gallery.set_search("no design has this text".into());
        gallery.on_page(ticket, page(mock_items(12), true));
        assert!(!gallery.is_empty_after_filtering());

        let next = gallery.load_more_if_starved().unwrap();
        assert_eq!(next.page, 2);
        assert_eq!(gallery.load_state(), &LoadState::Loading);
        assert_eq!(gallery.load_more_if_starved(), None);

        gallery.on_page(next, page(vec![], false));
        assert!(gallery.is_empty_after_filtering());
        assert_eq!(gallery.load_more_if_starved(), None);
    }

    #[test]
    fn test_modal_walks_visible_sequence() {
        let mut gallery = Gallery::new();
        let ticket = gallery.set_sort(SortMode::Popular);
        let mut low = sample_item("low");
        low.likes = 1;
        let mut high = sample_item("high");
        high.likes = 99;
        gallery.on_page(ticket, page(vec![low, high], false));

        gallery.select("high");
        assert_eq!(gallery.modal.viewing().unwrap().index, 0);

        gallery.navigate(Direction::Next);
        assert_eq!(gallery.selected().unwrap().id, "low");

        gallery.modal_command(ModalCommand::Navigate(Direction::Next));
        assert_eq!(gallery.selected().unwrap().id, "low");

        gallery.modal_command(ModalCommand::Close);
        assert!(gallery.selected().is_none());
    }

    #[test]
    fn test_filter_change_closes_modal() {
        let mut gallery = loaded_gallery();
        gallery.select("1");
        assert!(gallery.modal.is_open());
        gallery.set_ai_only(true);
        assert!(!gallery.modal.is_open());
    }

    #[test]
    fn test_thumbnails_requested_once() {
        let mut gallery = Gallery::new();
        let ticket = gallery.reload();
        let mut with_thumb = sample_item("t");
        with_thumb.thumbnail_url = "/tmp/t.png".into();
        gallery.on_page(ticket, page(vec![with_thumb, sample_item("n")], false));

        assert_eq!(
            gallery.take_pending_thumbnails(),
            vec![("t".to_string(), "/tmp/t.png".to_string())]
        );
        assert!(gallery.take_pending_thumbnails().is_empty());
        assert!(!gallery.is_thumbnail_loaded("t"));

        gallery.thumbnail_loaded("t".into(), image::Handle::from_bytes(vec![0u8; 4]));
        assert!(gallery.is_thumbnail_loaded("t"));
        assert!(gallery.thumbnail("t").is_some());
    }
}
