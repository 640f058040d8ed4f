use iced::widget::{
    button, column, container, horizontal_space, image, mouse_area, row, scrollable, stack, text,
    Column,
};
use iced::{Alignment, Color, ContentFit, Element, Length};
use iced_aw::Wrap;
use std::path::Path;

use super::gallery::placeholder;
use crate::app::Message;
use crate::state::data::{format_file_size, GalleryItem};
use crate::state::favorites::Favorites;
use crate::state::gallery::Gallery;
use crate::state::modal::{Direction, InfoTab, Viewing};

/// Width of the image at 100% zoom
const BASE_WIDTH: f32 = 640.0;
const INFO_WIDTH: f32 = 380.0;

/// Lightbox overlay for the selected item
pub fn view<'a>(
    gallery: &'a Gallery,
    item: &'a GalleryItem,
    favorites: &'a Favorites,
) -> Element<'a, Message> {
    let Some(viewing) = gallery.modal.viewing() else {
        return horizontal_space().into();
    };
    let len = gallery.visible().len();

    let backdrop = mouse_area(
        container(horizontal_space())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.9).into()),
                ..container::Style::default()
            }),
    )
    .on_press(Message::ModalClosed);

    let nav = |direction: Direction, label: &'a str| -> Element<'a, Message> {
        if gallery.modal.can_navigate(direction, len) {
            button(text(label).size(28))
                .style(button::secondary)
                .padding([12, 16])
                .on_press(Message::ModalNavigated(direction))
                .into()
        } else {
            horizontal_space().width(56).into()
        }
    };

    let mut main = row![
        nav(Direction::Prev, "‹"),
        picture(gallery, item, viewing),
        nav(Direction::Next, "›"),
    ]
    .spacing(16)
    .align_y(Alignment::Center)
    .height(Length::Fill);

    if viewing.info_open {
        main = main.push(info_panel(item, viewing.tab));
    }

    let content = column![controls(item, viewing, favorites), main]
        .spacing(16)
        .padding(16);

    stack![backdrop, content].into()
}

fn controls<'a>(
    item: &'a GalleryItem,
    viewing: &Viewing,
    favorites: &'a Favorites,
) -> Element<'a, Message> {
    let control = |label: &'a str, message: Message| {
        button(text(label).size(16))
            .style(button::secondary)
            .padding([8, 12])
            .on_press(message)
    };

    let heart = if favorites.contains(&item.id) { "♥" } else { "♡" };

    row![
        control("ⓘ Info", Message::InfoToggled),
        horizontal_space(),
        text(format!("{:.0}%", viewing.zoom * 100.0)).size(14),
        control("−", Message::ZoomOut),
        control("+", Message::ZoomIn),
        control(heart, Message::FavoriteToggled(item.id.clone())),
        control("Share", Message::Share),
        control("✕", Message::ModalClosed),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

/// The zoomable image. Clicking toggles between 100% and the click zoom.
fn picture<'a>(gallery: &'a Gallery, item: &'a GalleryItem, viewing: &Viewing) -> Element<'a, Message> {
    let width = BASE_WIDTH * viewing.zoom;
    let height = width * 1.25;

    let handle = if Path::new(&item.image_url).is_file() {
        Some(image::Handle::from_path(&item.image_url))
    } else {
        gallery.thumbnail(&item.id).cloned()
    };

    let picture: Element<'a, Message> = match handle {
        Some(handle) => image(handle)
            .width(width)
            .content_fit(ContentFit::Contain)
            .into(),
        None => placeholder(item, width, height),
    };

    let zoomable = mouse_area(picture).on_press(Message::ImageClicked);

    container(
        scrollable(zoomable).direction(scrollable::Direction::Both {
            vertical: scrollable::Scrollbar::default(),
            horizontal: scrollable::Scrollbar::default(),
        }),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

fn info_panel(item: &GalleryItem, tab: InfoTab) -> Element<'_, Message> {
    let mut heading = row![
        column![
            text(&item.title).size(20),
            text(format!("👁 {}   ♥ {}", item.views, item.likes)).size(13),
        ]
        .spacing(6)
        .width(Length::Fill),
    ];
    if item.is_ai_enhanced {
        heading = heading.push(text("✨ AI Enhanced").size(12));
    }

    let tabs = [
        (InfoTab::Details, "Details"),
        (InfoTab::Process, "Process"),
        (InfoTab::Similar, "Similar"),
    ]
    .into_iter()
    .fold(row![].spacing(4), |tabs, (value, label)| {
        let style = if value == tab {
            button::primary
        } else {
            button::text
        };
        tabs.push(
            button(text(label).size(14))
                .style(style)
                .width(Length::Fill)
                .on_press(Message::TabSelected(value)),
        )
    });

    let body = match tab {
        InfoTab::Details => details(item),
        InfoTab::Process => process(item),
        InfoTab::Similar => text("Similar designs coming soon...").size(14).into(),
    };

    let panel = container(scrollable(column![heading, tabs, body].spacing(16).padding(20)))
        .width(INFO_WIDTH)
        .height(Length::Fill)
        .style(container::rounded_box);

    // Presses on the panel must not reach the backdrop
    mouse_area(panel).on_press(Message::Noop).into()
}

fn details(item: &GalleryItem) -> Element<'_, Message> {
    let badges = |values: Vec<String>| {
        Wrap::with_elements(
            values
                .into_iter()
                .map(|value| {
                    container(text(value).size(12))
                        .padding([2, 8])
                        .style(container::bordered_box)
                        .into()
                })
                .collect(),
        )
        .spacing(6.0)
        .line_spacing(6.0)
    };

    let metadata = &item.metadata;
    let mut technical = column![
        text(format!(
            "Dimensions: {} × {}",
            metadata.dimensions.width, metadata.dimensions.height
        ))
        .size(12),
        text(format!("File Size: {}", format_file_size(metadata.file_size))).size(12),
    ]
    .spacing(4);
    if let Some(seconds) = metadata.process_time {
        technical = technical.push(text(format!("Process Time: {}s", seconds)).size(12));
    }

    column![
        text(format!("Artist: {}", item.artist)).size(14),
        text(format!("Style: {}", item.style)).size(14),
        text(format!("Created: {}", item.created_at.format("%B %-d, %Y"))).size(14),
        column![text("Body Part:").size(13), badges(vec![item.body_part.clone()])].spacing(6),
        column![text("Colors:").size(13), badges(item.colors.clone())].spacing(6),
        column![
            text("Tags:").size(13),
            badges(item.tags.iter().map(|tag| format!("#{}", tag)).collect()),
        ]
        .spacing(6),
        technical,
    ]
    .spacing(12)
    .into()
}

fn process(item: &GalleryItem) -> Element<'_, Message> {
    let steps = item
        .process_steps
        .iter()
        .enumerate()
        .fold(Column::new().spacing(10), |steps, (index, step)| {
            steps.push(
                container(
                    column![
                        text(format!("{}. {}", index + 1, step.name)).size(15),
                        text(&step.description).size(13),
                    ]
                    .spacing(4),
                )
                .padding(10)
                .width(Length::Fill)
                .style(container::bordered_box),
            )
        });

    let mut content = column![steps].spacing(16);

    if let Some(model) = &item.metadata.ai_model {
        let mut enhancement = column![
            text("✨ AI Enhancement").size(15),
            text(format!("Model: {}", model)).size(13),
        ]
        .spacing(6);
        if let Some(prompts) = &item.metadata.prompts {
            enhancement = enhancement.push(text("Prompts used:").size(12));
            enhancement = enhancement.push(text(prompts.join(", ")).size(12));
        }
        content = content.push(
            container(enhancement)
                .padding(10)
                .width(Length::Fill)
                .style(container::rounded_box),
        );
    }

    content.into()
}
