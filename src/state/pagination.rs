/// Pagination cursor and infinite-scroll trigger
///
/// The cursor tracks which page the grid has asked for. Every reset bumps
/// a generation counter, and each fetch is tagged with a `FetchTicket` so
/// that responses issued before the reset can be recognised and dropped.

/// Minimum visible fraction of the sentinel that triggers a load
pub const LOAD_MORE_THRESHOLD: f32 = 0.1;

/// Height in logical pixels of the sentinel row at the end of the grid
pub const SENTINEL_HEIGHT: f32 = 48.0;

/// Identifies the request a page response belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    /// Current page number, starts at 1
    page: u32,
    /// Supplied by the data source with each page
    has_next_page: bool,
    /// Incremented on every reset
    generation: u64,
}

impl PageCursor {
    pub fn new() -> Self {
        Self {
            page: 1,
            has_next_page: false,
            generation: 0,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    /// Ticket for a fetch of the current page
    pub fn ticket(&self) -> FetchTicket {
        FetchTicket {
            generation: self.generation,
            page: self.page,
        }
    }

    /// Back to page 1 and invalidate every outstanding ticket
    pub fn reset(&mut self) {
        self.page = 1;
        self.has_next_page = false;
        self.generation += 1;
    }

    /// Move to the next page. No-op when the source reported no more pages.
    /// Returns whether the cursor moved.
    pub fn advance(&mut self) -> bool {
        if !self.has_next_page {
            return false;
        }
        self.page += 1;
        // Unknown until the next page arrives
        self.has_next_page = false;
        true
    }

    /// Record the data source's verdict for the page that just arrived
    pub fn set_has_next_page(&mut self, has_next_page: bool) {
        self.has_next_page = has_next_page;
    }

    /// Whether a response tagged `ticket` still belongs to this cursor
    pub fn accepts(&self, ticket: FetchTicket) -> bool {
        ticket == self.ticket()
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the sentinel's visibility should trigger loading the next page
pub fn should_load_more(visible_fraction: f32, has_next_page: bool) -> bool {
    has_next_page && visible_fraction >= LOAD_MORE_THRESHOLD
}

/// Fraction (0.0 to 1.0) of the sentinel visible in the scroll viewport.
///
/// The sentinel occupies the last `SENTINEL_HEIGHT` pixels of the content.
pub fn sentinel_visibility(offset_y: f32, viewport_height: f32, content_height: f32) -> f32 {
    let sentinel_top = (content_height - SENTINEL_HEIGHT).max(0.0);
    let sentinel_height = content_height.min(SENTINEL_HEIGHT);
    if sentinel_height <= 0.0 {
        return 0.0;
    }

    let viewport_bottom = offset_y + viewport_height;
    let visible = (viewport_bottom.min(content_height) - sentinel_top.max(offset_y)).max(0.0);

    (visible / sentinel_height).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor_starts_at_page_one() {
        let cursor = PageCursor::new();
        assert_eq!(cursor.page(), 1);
        assert!(!cursor.has_next_page());
    }

    #[test]
    fn test_advance_requires_next_page() {
        let mut cursor = PageCursor::new();
        assert!(!cursor.advance());
        assert_eq!(cursor.page(), 1);

        cursor.set_has_next_page(true);
        assert!(cursor.advance());
        assert_eq!(cursor.page(), 2);

        // Flag is cleared until the source answers again
        assert!(!cursor.advance());
        assert_eq!(cursor.page(), 2);
    }

    #[test]
    fn test_reset_returns_to_page_one_from_anywhere() {
        let mut cursor = PageCursor::new();
        for _ in 0..4 {
            cursor.set_has_next_page(true);
            cursor.advance();
        }
        assert_eq!(cursor.page(), 5);

        cursor.reset();
        assert_eq!(cursor.page(), 1);
        cursor.reset();
        assert_eq!(cursor.page(), 1);
    }

    #[test]
    fn test_reset_invalidates_old_tickets() {
        let mut cursor = PageCursor::new();
        let stale = cursor.ticket();
        assert!(cursor.accepts(stale));

        cursor.reset();
        assert!(!cursor.accepts(stale));
        assert!(cursor.accepts(cursor.ticket()));
    }

    #[test]
    fn test_ticket_for_previous_page_is_rejected() {
        let mut cursor = PageCursor::new();
        let first = cursor.ticket();
        cursor.set_has_next_page(true);
        cursor.advance();
        assert!(!cursor.accepts(first));
    }

    #[test]
    fn test_should_load_more() {
        assert!(should_load_more(0.1, true));
        assert!(should_load_more(1.0, true));
        assert!(!should_load_more(0.05, true));
        assert!(!should_load_more(1.0, false));
    }

    #[test]
    fn test_sentinel_visibility() {
        // Content 1000px, viewport 400px
        assert_eq!(sentinel_visibility(0.0, 400.0, 1000.0), 0.0);
        assert_eq!(sentinel_visibility(600.0, 400.0, 1000.0), 1.0);

        // Half of the sentinel scrolled into view
        let half = sentinel_visibility(600.0 - SENTINEL_HEIGHT / 2.0, 400.0, 1000.0);
        assert!((half - 0.5).abs() < 1e-4);

        // Content shorter than the viewport: sentinel fully visible
        assert_eq!(sentinel_visibility(0.0, 400.0, 200.0), 1.0);
    }
}
