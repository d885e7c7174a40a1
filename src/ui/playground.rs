// SPDX-License-Identifier: MPL-2.0
//! Playground screen for composing and firing toasts.
//!
//! The form collects a message, a category and an optional duration. An
//! empty duration field means "use the default"; any integer (negative
//! included) is forwarded to the manager unchanged.

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::notifications::{Category, Request};
use iced::{
    alignment::Vertical,
    widget::{button, text_input, Column, Container, Row, Text},
    Element, Length, Theme,
};

/// Playground form state.
#[derive(Debug, Clone, Default)]
pub struct State {
    message: String,
    category: Category,
    duration: String,
}

/// Messages emitted by the playground form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    MessageChanged(String),
    CategorySelected(Category),
    DurationChanged(String),
    Submit,
}

/// Effects propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Create(Request),
    /// The duration field does not hold a whole number.
    InvalidDuration(String),
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Applies a form message.
    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::MessageChanged(value) => {
                self.message = value;
                Effect::None
            }
            Message::CategorySelected(category) => {
                self.category = category;
                Effect::None
            }
            Message::DurationChanged(value) => {
                self.duration = value;
                Effect::None
            }
            Message::Submit => self.build_request(),
        }
    }

    fn build_request(&self) -> Effect {
        let mut request = Request::new(self.message.clone()).category(self.category);

        let duration = self.duration.trim();
        if !duration.is_empty() {
            match duration.parse::<i64>() {
                Ok(ms) => request = request.duration_ms(ms),
                Err(_) => return Effect::InvalidDuration(duration.to_string()),
            }
        }

        Effect::Create(request)
    }

    /// Render the playground form.
    pub fn view(&self) -> Element<'_, Message> {
        let title = Text::new("Playground").size(typography::TITLE_LG);
        let hint = Text::new("Leave the duration empty to use the default lifetime.")
            .size(typography::CAPTION)
            .style(|_theme: &Theme| iced::widget::text::Style {
                color: Some(palette::GRAY_700),
            });

        let message_input = text_input("Message", &self.message)
            .on_input(Message::MessageChanged)
            .on_submit(Message::Submit)
            .width(Length::Fixed(sizing::INPUT_WIDTH));

        let duration_input = text_input("Duration (ms)", &self.duration)
            .on_input(Message::DurationChanged)
            .on_submit(Message::Submit)
            .width(Length::Fixed(sizing::DURATION_INPUT_WIDTH));

        let categories = Category::ALL.into_iter().fold(
            Row::new().spacing(spacing::XS),
            |row, category| {
                let label = Text::new(category.label()).size(typography::BODY_SM);
                let choice = button(label).on_press(Message::CategorySelected(category));
                let choice = if category == self.category {
                    choice.style(button::primary)
                } else {
                    choice.style(button::secondary)
                };
                row.push(choice)
            },
        );

        let submit = button(Text::new("Show toast").size(typography::BODY))
            .on_press(Message::Submit)
            .style(button::success);

        let content = Column::new()
            .spacing(spacing::MD)
            .push(title)
            .push(message_input)
            .push(categories)
            .push(
                Row::new()
                    .spacing(spacing::SM)
                    .align_y(Vertical::Center)
                    .push(duration_input)
                    .push(submit),
            )
            .push(hint);

        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::LG)
            .into()
    }
}
