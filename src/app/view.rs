// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The active screen sits below the navbar; the toast overlay is stacked on
//! top of everything so notifications stay visible across navigation.

use super::{Message, Screen};
use crate::media::ImageData;
use crate::ui::about;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, TaskScheduler, Toast};
use crate::ui::playground;
use iced::{
    widget::{button, Column, Container, Image, Stack, Text},
    ContentFit, Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub playground: &'a playground::State,
    pub preview: Option<&'a ImageData>,
    pub notifications: &'a Manager<TaskScheduler>,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Home => view_home(ctx.notifications.len(), ctx.preview),
        Screen::Playground => ctx.playground.view().map(Message::Playground),
        Screen::About => about::view(),
    };

    let navbar_view = navbar::view(NavbarViewContext {
        current: ctx.screen,
    })
    .map(Message::Navbar);

    let page = Column::new()
        .push(navbar_view)
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications).map(Message::Notification);

    Stack::new()
        .push(page)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_home<'a>(active: usize, preview: Option<&'a ImageData>) -> Element<'a, Message> {
    let status = match active {
        0 => "No notifications on screen.".to_string(),
        1 => "1 notification on screen.".to_string(),
        n => format!("{n} notifications on screen."),
    };

    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new("Welcome").size(typography::TITLE_LG))
        .push(Text::new("Open the playground to try out toasts.").size(typography::BODY))
        .push(Text::new(status).size(typography::BODY_SM))
        .push(
            button(Text::new("Open image…").size(typography::BODY))
                .on_press(Message::OpenImage)
                .style(button::secondary),
        );

    let content = match preview {
        Some(data) => content.push(
            Image::new(data.handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill),
        ),
        None => content,
    };

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .into()
}
