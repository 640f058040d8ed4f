use iced::widget::{button, column, container, mouse_area, row, scrollable, text, Row};
use iced::{Alignment, Element, Length};

use super::chrome;
use crate::app::{Message, Screen};
use crate::state::home::{Homepage, Typewriter, FEATURES, TESTIMONIALS};

/// Homepage: hero, stats, features and testimonials
pub fn view(home: &Homepage) -> Element<'_, Message> {
    let content = column![
        hero(home),
        stats(home),
        features(),
        testimonials(home),
        chrome::footer(),
    ]
    .spacing(56)
    .width(Length::Fill);

    scrollable(content).height(Length::Fill).into()
}

fn headline_line(line: &Typewriter) -> Element<'_, Message> {
    text(line.line()).size(52).into()
}

fn hero(home: &Homepage) -> Element<'_, Message> {
    let actions = row![
        button(text("Start Creating").size(18))
            .padding([12, 28])
            .on_press(Message::ShowScreen(Screen::Gallery)),
        button(text("View Gallery").size(18))
            .padding([12, 28])
            .style(button::secondary)
            .on_press(Message::ShowScreen(Screen::Gallery)),
    ]
    .spacing(16);

    container(
        column![
            text("✨ AI-Powered Tattoo Design").size(14),
            headline_line(&home.headline[0]),
            headline_line(&home.headline[1]),
            text(
                "Transform your tattoo vision into reality with our revolutionary AI design studio. \
                 Collaborate with master artists and cutting-edge technology."
            )
            .size(18),
            actions,
        ]
        .spacing(18)
        .max_width(720),
    )
    .padding([64, 48])
    .into()
}

fn stats(home: &Homepage) -> Element<'_, Message> {
    let cells = home.stats.iter().map(|stat| {
        column![text(stat.display()).size(40), text(stat.label).size(14)]
            .align_x(Alignment::Center)
            .width(Length::Fill)
            .into()
    });

    container(Row::with_children(cells).spacing(24))
        .padding([0, 48])
        .into()
}

fn features<'a>() -> Element<'a, Message> {
    let cards = FEATURES.iter().map(|feature| {
        container(
            column![
                text(feature.title).size(20),
                text(feature.description).size(14),
            ]
            .spacing(10),
        )
        .padding(20)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
    });

    column![
        text("Why Choose InkAI Studio").size(36),
        Row::with_children(cards).spacing(24),
    ]
    .spacing(24)
    .padding([0, 48])
    .into()
}

fn testimonials(home: &Homepage) -> Element<'_, Message> {
    let current = home.testimonial();
    let stars: String = (0..5)
        .map(|i| if i < current.rating { '★' } else { '☆' })
        .collect();

    let card = container(
        column![
            text(stars).size(20),
            text(format!("\"{}\"", current.content)).size(20),
            column![text(current.name).size(16), text(current.role).size(13)].spacing(2),
        ]
        .spacing(16),
    )
    .padding(32)
    .max_width(800)
    .style(container::rounded_box);

    let indicators = Row::with_children((0..TESTIMONIALS.len()).map(|index| {
        let style = if index == home.carousel.index() {
            button::primary
        } else {
            button::secondary
        };
        button(text("").size(4))
            .width(14)
            .height(14)
            .style(style)
            .on_press(Message::CarouselSelected(index))
            .into()
    }))
    .spacing(8);

    let carousel = mouse_area(column![card, indicators].spacing(16).align_x(Alignment::Center))
        .on_enter(Message::CarouselHovered(true))
        .on_exit(Message::CarouselHovered(false));

    column![
        text("What Our Clients Say").size(36),
        text("Real stories from our satisfied customers").size(16),
        carousel,
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}
