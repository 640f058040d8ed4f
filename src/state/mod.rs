/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - Filter selections, predicate and sort engines (filter.rs)
/// - Active-filter chips (chips.rs)
/// - Pagination cursor and infinite-scroll trigger (pagination.rs)
/// - Gallery view state and the lightbox (gallery.rs, modal.rs)
/// - Persisted favorites and the key-value library (favorites.rs, library.rs)
/// - Data source and option catalog (catalog.rs)
/// - Homepage timers (home.rs)

pub mod catalog;
pub mod chips;
pub mod data;
pub mod favorites;
pub mod filter;
pub mod gallery;
pub mod home;
pub mod library;
pub mod modal;
pub mod pagination;
