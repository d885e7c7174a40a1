// SPDX-License-Identifier: MPL-2.0
//! Navigation bar with one link per route.

use crate::app::Screen;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext {
    pub current: Screen,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Open(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Screen),
}

/// Process a navbar message and return the corresponding event.
///
/// Selecting the screen that is already shown is not a navigation.
#[must_use]
pub fn update(message: Message, current: Screen) -> Event {
    match message {
        Message::Open(screen) if screen == current => Event::None,
        Message::Open(screen) => Event::Navigate(screen),
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext) -> Element<'static, Message> {
    let links = Screen::ALL.into_iter().fold(
        Row::new().spacing(spacing::XS).align_y(Vertical::Center),
        |row, screen| row.push(link(screen, screen == ctx.current)),
    );

    Container::new(links)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .into()
}

fn link(screen: Screen, active: bool) -> Element<'static, Message> {
    button(Text::new(screen.label()).size(typography::BODY))
        .on_press(Message::Open(screen))
        .padding([spacing::XXS, spacing::SM])
        .style(move |theme: &Theme, status| link_style(theme, status, active))
        .into()
}

fn link_style(theme: &Theme, status: button::Status, active: bool) -> button::Style {
    let base = theme.extended_palette().background.base;
    let background = match (active, status) {
        (true, _) => Some(iced::Background::Color(palette::PRIMARY_500)),
        (false, button::Status::Hovered | button::Status::Pressed) => {
            Some(iced::Background::Color(theme.extended_palette().background.weak.color))
        }
        (false, _) => None,
    };

    button::Style {
        background,
        text_color: if active { palette::WHITE } else { base.text },
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}
