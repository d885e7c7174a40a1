// SPDX-License-Identifier: MPL-2.0
//! About screen displaying application information.

use crate::ui::design_tokens::{spacing, typography};
use iced::{
    widget::{Column, Container, Text},
    Element, Length,
};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application license from Cargo.toml.
const APP_LICENSE: &str = env!("CARGO_PKG_LICENSE");

/// Render the about screen.
#[must_use]
pub fn view<'a, Message: 'a>() -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new("Toastline").size(typography::TITLE_LG))
        .push(Text::new(format!("Version {APP_VERSION}")).size(typography::BODY))
        .push(Text::new(format!("Licensed under {APP_LICENSE}")).size(typography::BODY_SM))
        .push(Text::new("How toasts behave").size(typography::TITLE_MD))
        .push(
            Text::new(
                "Toasts disappear after their duration elapses or when dismissed, \
                 whichever happens first.",
            )
            .size(typography::BODY_SM),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .into()
}
