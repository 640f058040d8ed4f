use iced::keyboard::{self, Key};
use iced::widget::{column, image, scrollable};
use iced::{Element, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::Config;
use crate::error::FetchError;
use crate::state::catalog::{self, AvailableOptions, MockSource, Page};
use crate::state::data::GalleryItem;
use crate::state::favorites::Favorites;
use crate::state::filter::{FilterKey, SortMode};
use crate::state::gallery::Gallery;
use crate::state::home::Homepage;
use crate::state::library::{KeyValueStore, Library, MemoryStore};
use crate::state::modal::{self, Direction, InfoTab, ModalCommand};
use crate::state::pagination::{self, FetchTicket};
use crate::ui;

/// Interval of the homepage animation clock
pub const TICK: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Gallery,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    ShowScreen(Screen),
    /// Homepage animation clock
    Tick,
    CarouselHovered(bool),
    CarouselSelected(usize),

    SearchChanged(String),
    FilterToggled(FilterKey, String),
    AiOnlyToggled(bool),
    SortSelected(SortMode),
    ChipRemoved(FilterKey, String),
    ClearAll,
    GridScrolled(scrollable::Viewport),
    LoadMore,
    Retry,
    PageLoaded(FetchTicket, Result<Page, FetchError>),
    ThumbnailLoaded(String, Option<image::Handle>),
    FavoriteToggled(String),
    ItemOpened(String),

    ModalClosed,
    ModalNavigated(Direction),
    InfoToggled,
    TabSelected(InfoTab),
    ZoomIn,
    ZoomOut,
    ImageClicked,
    Share,
    KeyPressed(Key),
    /// Press inside the modal content, swallowed so it does not reach the backdrop
    Noop,

    /// User clicked "Import Folder"
    ImportFolder,
    /// Background catalog import finished
    CatalogLoaded(PathBuf, Vec<GalleryItem>),
}

/// Main application state
pub struct App {
    config: Config,
    screen: Screen,
    pub home: Homepage,
    pub gallery: Gallery,
    /// Single owner of the persisted favorites; grid and modal read through it
    pub favorites: Favorites,
    pub options: AvailableOptions,
    source: MockSource,
    /// Status message to display to the user
    pub status: String,
}

impl App {
    /// Create the application from loaded settings
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let favorites = Favorites::load(open_store(&config));

        let items = match &config.catalog_path {
            Some(path) => load_catalog(path),
            None => catalog::mock_items(config.mock_items),
        };
        let options = if config.catalog_path.is_some() {
            AvailableOptions::from_items(&items)
        } else {
            AvailableOptions::default()
        };
        let status = format!("{} designs available. {} favorites.", items.len(), favorites.len());
        tracing::info!(designs = items.len(), favorites = favorites.len(), "🎨 gallery initialized");

        let source = MockSource::new(items, config.page_size, config.fetch_latency());

        let mut app = App {
            config,
            screen: Screen::Home,
            home: Homepage::new(),
            gallery: Gallery::new(),
            favorites,
            options,
            source,
            status,
        };
        let ticket = app.gallery.reload();
        let task = app.fetch(ticket);

        (app, task)
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Issue the page fetch a ticket stands for
    fn fetch(&self, ticket: FetchTicket) -> Task<Message> {
        let future = self
            .source
            .clone()
            .fetch_page(self.gallery.filters().clone(), ticket.page);
        Task::perform(future, move |result| Message::PageLoaded(ticket, result))
    }

    fn load_thumbnails(&mut self) -> Task<Message> {
        let tasks = self
            .gallery
            .take_pending_thumbnails()
            .into_iter()
            .map(|(id, path)| {
                Task::perform(
                    async move {
                        let bytes = tokio::fs::read(&path).await.ok();
                        (id, bytes.map(image::Handle::from_bytes))
                    },
                    |(id, handle)| Message::ThumbnailLoaded(id, handle),
                )
            });
        Task::batch(tasks)
    }

    /// Handle application messages and update state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ShowScreen(screen) => {
                if screen == Screen::Home && self.screen != Screen::Home {
                    self.home.restart_stats();
                }
                self.screen = screen;
                Task::none()
            }
            Message::Tick => {
                self.home.tick(TICK);
                Task::none()
            }
            Message::CarouselHovered(hovered) => {
                self.home.carousel.set_auto_playing(!hovered);
                Task::none()
            }
            Message::CarouselSelected(index) => {
                self.home.carousel.select(index);
                Task::none()
            }

            Message::SearchChanged(query) => {
                let ticket = self.gallery.set_search(query);
                self.fetch(ticket)
            }
            Message::FilterToggled(key, value) => {
                let ticket = self.gallery.toggle_filter(key, &value);
                self.fetch(ticket)
            }
            Message::AiOnlyToggled(ai_only) => {
                let ticket = self.gallery.set_ai_only(ai_only);
                self.fetch(ticket)
            }
            Message::SortSelected(mode) => {
                let ticket = self.gallery.set_sort(mode);
                self.fetch(ticket)
            }
            Message::ChipRemoved(key, value) => {
                let ticket = self.gallery.remove_chip(key, &value);
                self.fetch(ticket)
            }
            Message::ClearAll => {
                let ticket = self.gallery.clear_all();
                self.fetch(ticket)
            }
            Message::GridScrolled(viewport) => {
                let visibility = pagination::sentinel_visibility(
                    viewport.absolute_offset().y,
                    viewport.bounds().height,
                    viewport.content_bounds().height,
                );
                match self.gallery.on_sentinel(visibility) {
                    Some(ticket) => self.fetch(ticket),
                    None => Task::none(),
                }
            }
            Message::LoadMore => match self.gallery.load_more() {
                Some(ticket) => self.fetch(ticket),
                None => Task::none(),
            },
            Message::Retry => match self.gallery.retry() {
                Some(ticket) => self.fetch(ticket),
                None => Task::none(),
            },
            Message::PageLoaded(ticket, result) => {
                if !self.gallery.on_page(ticket, result) {
                    return Task::none();
                }
                let thumbnails = self.load_thumbnails();
                match self.gallery.load_more_if_starved() {
                    Some(next) => Task::batch([thumbnails, self.fetch(next)]),
                    None => thumbnails,
                }
            }
            Message::ThumbnailLoaded(id, handle) => {
                match handle {
                    Some(handle) => self.gallery.thumbnail_loaded(id, handle),
                    None => tracing::debug!(id = %id, "thumbnail unavailable, keeping placeholder"),
                }
                Task::none()
            }
            Message::FavoriteToggled(id) => {
                self.favorites.toggle(&id);
                Task::none()
            }
            Message::ItemOpened(id) => {
                self.favorites.refresh();
                self.gallery.select(&id);
                Task::none()
            }

            Message::ModalClosed => {
                self.gallery.modal_command(ModalCommand::Close);
                Task::none()
            }
            Message::ModalNavigated(direction) => {
                self.gallery.navigate(direction);
                Task::none()
            }
            Message::InfoToggled => {
                self.gallery.modal.toggle_info();
                Task::none()
            }
            Message::TabSelected(tab) => {
                self.gallery.modal.select_tab(tab);
                Task::none()
            }
            Message::ZoomIn => {
                self.gallery.modal.zoom_in();
                Task::none()
            }
            Message::ZoomOut => {
                self.gallery.modal.zoom_out();
                Task::none()
            }
            Message::ImageClicked => {
                self.gallery.modal.toggle_click_zoom();
                Task::none()
            }
            Message::Share => match self.gallery.selected() {
                Some(item) => {
                    let text = share_text(item);
                    self.status = "Link copied to clipboard.".to_string();
                    iced::clipboard::write(text)
                }
                None => Task::none(),
            },
            Message::KeyPressed(key) => {
                if self.gallery.modal.is_open() {
                    if let Some(command) = modal::command_for_key(&key) {
                        self.gallery.modal_command(command);
                    }
                }
                Task::none()
            }
            Message::Noop => Task::none(),

            Message::ImportFolder => {
                // Show the native folder picker dialog
                let folder = FileDialog::new()
                    .set_title("Select Folder with Design Catalogs")
                    .pick_folder();

                if let Some(folder_path) = folder {
                    self.status = format!("Importing from {}...", folder_path.display());
                    return Task::perform(
                        async move {
                            let items = catalog::load_catalog_dir(&folder_path);
                            (folder_path, items)
                        },
                        |(path, items)| Message::CatalogLoaded(path, items),
                    );
                }

                Task::none()
            }
            Message::CatalogLoaded(path, items) => {
                if items.is_empty() {
                    self.status = format!("No designs found in {}.", path.display());
                    return Task::none();
                }

                self.status = format!("✅ Imported {} designs from {}.", items.len(), path.display());
                tracing::info!(path = %path.display(), count = items.len(), "catalog imported");

                self.options = AvailableOptions::from_items(&items);
                self.source = MockSource::new(items, self.config.page_size, self.config.fetch_latency());
                let ticket = self.gallery.reload();
                self.fetch(ticket)
            }
        }
    }

    /// Build the user interface
    pub fn view(&self) -> Element<Message> {
        let content = match self.screen {
            Screen::Home => ui::home::view(&self.home),
            Screen::Gallery => ui::gallery::view(self),
        };

        column![ui::chrome::navigation(self.screen), content].into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = Vec::new();

        if self.screen == Screen::Home {
            subscriptions.push(iced::time::every(TICK).map(|_| Message::Tick));
        }
        if self.gallery.modal.is_open() {
            subscriptions.push(keyboard::on_key_press(|key, _modifiers| {
                Some(Message::KeyPressed(key))
            }));
        }

        Subscription::batch(subscriptions)
    }

    /// Set the application theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Open the favorites database, falling back to memory if that fails
fn open_store(config: &Config) -> Box<dyn KeyValueStore> {
    let opened = match &config.data_dir {
        Some(dir) => Library::open(&Library::db_path_in(dir)),
        None => Library::new(),
    };
    match opened {
        Ok(library) => Box::new(library),
        Err(e) => {
            tracing::warn!(error = %e, "⚠️  favorites will not persist this session");
            Box::new(MemoryStore::new())
        }
    }
}

/// Load a catalog file or folder; an unreadable file yields no designs
fn load_catalog(path: &Path) -> Vec<GalleryItem> {
    if path.is_dir() {
        return catalog::load_catalog_dir(path);
    }
    catalog::load_catalog_file(path).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), error = %e, "⚠️  could not load catalog");
        Vec::new()
    })
}

/// Text placed on the clipboard by the share control
pub fn share_text(item: &GalleryItem) -> String {
    format!(
        "Check out this tattoo design by {}: {} ({})",
        item.artist, item.title, item.image_url
    )
}
