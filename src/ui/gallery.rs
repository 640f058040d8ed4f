use iced::widget::{
    button, checkbox, column, container, horizontal_space, image, mouse_area, pick_list, row,
    scrollable, stack, text, text_input, Column,
};
use iced::{Alignment, ContentFit, Element, Length};
use iced_aw::Wrap;

use super::modal;
use crate::app::{App, Message};
use crate::state::catalog::AvailableOptions;
use crate::state::chips;
use crate::state::data::GalleryItem;
use crate::state::favorites::Favorites;
use crate::state::filter::{FilterKey, FilterState, SortMode};
use crate::state::gallery::{Gallery, LoadState};
use crate::state::pagination::SENTINEL_HEIGHT;

const CARD_WIDTH: f32 = 240.0;
const THUMB_HEIGHT: f32 = 320.0;
/// Skeleton cards shown while the first page loads
const SKELETON_CARDS: usize = 8;

/// The gallery page, with the lightbox stacked on top when open
pub fn view(app: &App) -> Element<'_, Message> {
    let gallery = &app.gallery;

    let body = row![
        sidebar(gallery.filters(), &app.options),
        column![results(gallery, &app.favorites), text(&app.status).size(13)]
            .spacing(8)
            .width(Length::Fill),
    ]
    .spacing(24)
    .padding([16, 24])
    .height(Length::Fill);

    let page = column![header(gallery), body].height(Length::Fill);

    match gallery.selected() {
        Some(item) => stack![page, modal::view(gallery, item, &app.favorites)].into(),
        None => page.into(),
    }
}

fn header(gallery: &Gallery) -> Element<'_, Message> {
    let filters = gallery.filters();

    let controls = row![
        text_input("Search designs, artists, styles...", &filters.search_query)
            .on_input(Message::SearchChanged)
            .padding(10)
            .width(Length::Fill),
        pick_list(SortMode::ALL, Some(filters.sort_by), Message::SortSelected),
        button("Import Folder")
            .on_press(Message::ImportFolder)
            .padding(10),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let mut content = column![text("Design Gallery").size(32), controls].spacing(12);
    if filters.has_active_filters() {
        content = content.push(chip_row(filters));
    }

    container(content)
        .padding([16, 24])
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}

fn chip_row(filters: &FilterState) -> Element<'_, Message> {
    let mut elements: Vec<Element<'_, Message>> = vec![text("Active filters:").size(14).into()];

    for chip in chips::project(filters) {
        elements.push(
            button(text(format!("{}  ✕", chip.label)).size(12))
                .style(button::secondary)
                .padding([4, 10])
                .on_press(Message::ChipRemoved(chip.key, chip.value))
                .into(),
        );
    }

    elements.push(
        button(text("Clear All").size(12))
            .style(button::text)
            .padding([4, 10])
            .on_press(Message::ClearAll)
            .into(),
    );

    Wrap::with_elements(elements)
        .spacing(8.0)
        .line_spacing(8.0)
        .into()
}

fn sidebar<'a>(filters: &'a FilterState, options: &'a AvailableOptions) -> Element<'a, Message> {
    let sections = [
        ("Style", FilterKey::Styles, &options.styles),
        ("Body Part", FilterKey::BodyParts, &options.body_parts),
        ("Colors", FilterKey::Colors, &options.colors),
        ("Artist", FilterKey::Artists, &options.artists),
    ];

    let mut content = column![
        text("Filters").size(20),
        checkbox("AI Enhanced Only", filters.is_ai_only).on_toggle(Message::AiOnlyToggled),
    ]
    .spacing(12);

    for (title, key, values) in sections {
        let selected = filters.list(key);
        let boxes = values.iter().fold(Column::new().spacing(6), |boxes, value| {
            let checked = selected.is_some_and(|s| s.contains(value));
            boxes.push(
                checkbox(value.as_str(), checked)
                    .on_toggle(move |_| Message::FilterToggled(key, value.clone()))
                    .size(16)
                    .text_size(14),
            )
        });
        content = content.push(column![text(title).size(16), boxes].spacing(8));
    }

    scrollable(container(content).padding(12).width(220))
        .height(Length::Fill)
        .into()
}

fn results<'a>(gallery: &'a Gallery, favorites: &'a Favorites) -> Element<'a, Message> {
    let visible = gallery.visible();

    match gallery.load_state() {
        LoadState::Loading if visible.is_empty() => return skeleton(),
        LoadState::Failed(error) if visible.is_empty() => return failure(error),
        _ => {}
    }

    if gallery.is_empty_after_filtering() {
        return empty_state(gallery.filters().has_active_filters());
    }

    let cards: Vec<Element<'a, Message>> = visible
        .into_iter()
        .map(|item| card(gallery, item, favorites.contains(&item.id)))
        .collect();

    let summary = text(format!(
        "Showing {} of {} designs",
        cards.len(),
        gallery.total_count()
    ))
    .size(13);

    let content = column![
        summary,
        Wrap::with_elements(cards).spacing(16.0).line_spacing(16.0),
        sentinel(gallery),
    ]
    .spacing(16)
    .width(Length::Fill);

    scrollable(content)
        .on_scroll(Message::GridScrolled)
        .height(Length::Fill)
        .width(Length::Fill)
        .into()
}

/// Row at the end of the grid whose visibility drives infinite scroll
fn sentinel(gallery: &Gallery) -> Element<'_, Message> {
    let content: Element<'_, Message> = match gallery.load_state() {
        LoadState::Loading => text("Loading more designs...").size(13).into(),
        LoadState::Failed(error) => row![
            text(format!("Could not load more: {}", error)).size(13),
            button("Retry").on_press(Message::Retry),
        ]
        .spacing(12)
        .align_y(Alignment::Center)
        .into(),
        LoadState::Ready if gallery.cursor().has_next_page() => button(text("Load more").size(13))
            .style(button::text)
            .on_press(Message::LoadMore)
            .into(),
        LoadState::Ready => text("You've seen every design").size(13).into(),
    };

    container(content)
        .height(SENTINEL_HEIGHT)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .center_y(SENTINEL_HEIGHT)
        .into()
}

fn card<'a>(gallery: &'a Gallery, item: &'a GalleryItem, is_favorite: bool) -> Element<'a, Message> {
    let thumbnail: Element<'a, Message> = match gallery.thumbnail(&item.id) {
        Some(handle) => image(handle.clone())
            .width(CARD_WIDTH)
            .height(THUMB_HEIGHT)
            .content_fit(ContentFit::Cover)
            .into(),
        None => placeholder(item, CARD_WIDTH, THUMB_HEIGHT),
    };

    let heart = if is_favorite { "♥" } else { "♡" };
    let favorite = button(text(heart).size(18))
        .style(button::text)
        .on_press(Message::FavoriteToggled(item.id.clone()));

    let mut badges = row![].spacing(6);
    if item.is_ai_enhanced {
        badges = badges.push(text("✨ AI").size(12));
    }
    badges = badges.push(text(&item.style).size(12));

    let details = column![
        row![text(&item.title).size(16).width(Length::Fill), favorite].align_y(Alignment::Center),
        text(format!("by {}", item.artist)).size(13),
        row![
            badges,
            horizontal_space(),
            text(format!("♥ {}  👁 {}", item.likes, item.views)).size(12),
        ],
    ]
    .spacing(4)
    .padding([8, 10]);

    let body = container(column![thumbnail, details])
        .width(CARD_WIDTH)
        .style(container::rounded_box);

    mouse_area(body)
        .on_press(Message::ItemOpened(item.id.clone()))
        .into()
}

/// Stand-in for an image that has not loaded (or has no file)
pub fn placeholder<'a>(item: &'a GalleryItem, width: f32, height: f32) -> Element<'a, Message> {
    container(text(&item.title).size(14))
        .width(width)
        .height(height)
        .center_x(width)
        .center_y(height)
        .style(container::dark)
        .into()
}

fn skeleton<'a>() -> Element<'a, Message> {
    let cards = (0..SKELETON_CARDS)
        .map(|_| {
            container(text(""))
                .width(CARD_WIDTH)
                .height(THUMB_HEIGHT)
                .style(container::dark)
                .into()
        })
        .collect();

    container(Wrap::with_elements(cards).spacing(16.0).line_spacing(16.0))
        .width(Length::Fill)
        .into()
}

fn failure(error: &str) -> Element<'_, Message> {
    container(
        column![
            text("Could not load designs").size(20),
            text(error).size(14),
            button("Retry").on_press(Message::Retry),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(48)
    .center_x(Length::Fill)
    .into()
}

fn empty_state<'a>(has_active_filters: bool) -> Element<'a, Message> {
    let mut content = column![
        text("No designs match your filters").size(20),
        text("Try adjusting your search criteria").size(14),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    if has_active_filters {
        content = content.push(button("Clear All Filters").on_press(Message::ClearAll));
    }

    container(content)
        .width(Length::Fill)
        .padding(48)
        .center_x(Length::Fill)
        .into()
}
