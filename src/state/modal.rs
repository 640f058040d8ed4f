/// Lightbox state for the gallery
///
/// The modal is either closed or viewing one item of the current
/// filtered and sorted sequence. Zoom and the info panel only exist while
/// viewing, so an open info panel on a closed modal cannot be expressed.

use iced::keyboard::{key::Named, Key};

use super::data::GalleryItem;

pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 3.0;
pub const ZOOM_STEP: f32 = 0.25;
/// Zoom applied when the image itself is clicked at 100%
pub const CLICK_ZOOM: f32 = 2.0;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Viewing(Viewing),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Viewing {
    /// Id of the displayed item, used to re-anchor when the list changes
    pub item_id: String,
    /// Position of the item in the filtered and sorted sequence
    pub index: usize,
    pub zoom: f32,
    pub info_open: bool,
    pub tab: InfoTab,
}

/// Tabs of the info panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InfoTab {
    #[default]
    Details,
    Process,
    Similar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// What a key press means to an open modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalCommand {
    Close,
    Navigate(Direction),
    ToggleInfo,
}

/// Map a key to a modal command. Unlisted keys are ignored.
pub fn command_for_key(key: &Key) -> Option<ModalCommand> {
    match key.as_ref() {
        Key::Named(Named::Escape) => Some(ModalCommand::Close),
        Key::Named(Named::ArrowLeft) => Some(ModalCommand::Navigate(Direction::Prev)),
        Key::Named(Named::ArrowRight) => Some(ModalCommand::Navigate(Direction::Next)),
        Key::Character("i") | Key::Character("I") => Some(ModalCommand::ToggleInfo),
        _ => None,
    }
}

impl Modal {
    /// Open on the item with `item_id`. Stays closed if it is not in `items`.
    pub fn open(items: &[&GalleryItem], item_id: &str) -> Self {
        match items.iter().position(|item| item.id == item_id) {
            Some(index) => Modal::Viewing(Viewing {
                item_id: item_id.to_string(),
                index,
                zoom: 1.0,
                info_open: false,
                tab: InfoTab::default(),
            }),
            None => Modal::Closed,
        }
    }

    pub fn close(&mut self) {
        *self = Modal::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Modal::Viewing(_))
    }

    pub fn viewing(&self) -> Option<&Viewing> {
        match self {
            Modal::Viewing(viewing) => Some(viewing),
            Modal::Closed => None,
        }
    }

    pub fn can_navigate(&self, direction: Direction, len: usize) -> bool {
        match (self, direction) {
            (Modal::Viewing(v), Direction::Prev) => v.index > 0,
            (Modal::Viewing(v), Direction::Next) => v.index + 1 < len,
            (Modal::Closed, _) => false,
        }
    }

    /// Step the cursor by one, clamped to the ends of `items`.
    /// Zoom goes back to 100% whenever the image changes.
    pub fn navigate(&mut self, direction: Direction, items: &[&GalleryItem]) {
        if !self.can_navigate(direction, items.len()) {
            return;
        }
        if let Modal::Viewing(viewing) = self {
            viewing.index = match direction {
                Direction::Prev => viewing.index - 1,
                Direction::Next => viewing.index + 1,
            };
            viewing.item_id = items[viewing.index].id.clone();
            viewing.zoom = 1.0;
        }
    }

    pub fn toggle_info(&mut self) {
        if let Modal::Viewing(viewing) = self {
            viewing.info_open = !viewing.info_open;
        }
    }

    pub fn select_tab(&mut self, tab: InfoTab) {
        if let Modal::Viewing(viewing) = self {
            viewing.tab = tab;
        }
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(|zoom| zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(|zoom| zoom - ZOOM_STEP);
    }

    /// Clicking the image flips between 100% and `CLICK_ZOOM`
    pub fn toggle_click_zoom(&mut self) {
        self.set_zoom(|zoom| if zoom == 1.0 { CLICK_ZOOM } else { 1.0 });
    }

    fn set_zoom(&mut self, f: impl FnOnce(f32) -> f32) {
        if let Modal::Viewing(viewing) = self {
            viewing.zoom = f(viewing.zoom).clamp(MIN_ZOOM, MAX_ZOOM);
        }
    }

    /// Apply a keyboard command
    pub fn handle(&mut self, command: ModalCommand, items: &[&GalleryItem]) {
        match command {
            ModalCommand::Close => self.close(),
            ModalCommand::Navigate(direction) => self.navigate(direction, items),
            ModalCommand::ToggleInfo => self.toggle_info(),
        }
    }

    /// Re-find the displayed item after the sequence changed.
    /// Closes the modal if the item is no longer present.
    pub fn sync(&mut self, items: &[&GalleryItem]) {
        let position = match self {
            Modal::Viewing(viewing) => items.iter().position(|item| item.id == viewing.item_id),
            Modal::Closed => return,
        };
        match position {
            Some(index) => {
                if let Modal::Viewing(viewing) = self {
                    viewing.index = index;
                }
            }
            None => self.close(),
        }
    }
}
