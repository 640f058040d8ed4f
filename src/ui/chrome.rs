use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length};

use crate::app::{Message, Screen};

const BRAND: &str = "InkAI Studio";

/// Top navigation bar
pub fn navigation<'a>(current: Screen) -> Element<'a, Message> {
    let link = |label: &'a str, screen: Screen| {
        let style = if screen == current {
            button::primary
        } else {
            button::text
        };
        button(text(label).size(16))
            .on_press(Message::ShowScreen(screen))
            .style(style)
            .padding([6, 14])
    };

    container(
        row![
            text(BRAND).size(22),
            horizontal_space(),
            link("Home", Screen::Home),
            link("Gallery", Screen::Gallery),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .padding([12, 24])
    .width(Length::Fill)
    .style(container::bordered_box)
    .into()
}

/// Footer link columns with the copyright line
pub fn footer<'a>() -> Element<'a, Message> {
    let sections: [(&str, [&str; 4]); 3] = [
        ("Product", ["Design Generator", "Gallery", "Artists", "Pricing"]),
        ("Support", ["Help Center", "Contact Us", "FAQ", "Safety"]),
        ("Legal", ["Privacy Policy", "Terms of Service", "Cookie Policy", "GDPR"]),
    ];

    let columns = sections.into_iter().fold(row![].spacing(48), |columns, (title, links)| {
        let list = links
            .into_iter()
            .fold(column![text(title).size(16)].spacing(6), |list, link| {
                list.push(text(link).size(13))
            });
        columns.push(list)
    });

    container(
        column![
            row![
                column![
                    text(BRAND).size(20),
                    text("Where art meets artificial intelligence.").size(13),
                    text("Instagram · Twitter · Facebook · Email").size(12),
                ]
                .spacing(8),
                horizontal_space(),
                columns,
            ],
            text("© 2024 InkAI Studio. All rights reserved.").size(12),
        ]
        .spacing(24),
    )
    .padding(32)
    .width(Length::Fill)
    .style(container::bordered_box)
    .into()
}
