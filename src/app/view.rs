// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo window: two action buttons with the popup
//! stacked on top.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{Controller, NotificationKind};
use crate::ui::styles;
use iced::widget::{button, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub popup: &'a Controller,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let actions = Row::new()
        .spacing(spacing::MD)
        .push(action_button(
            ctx.i18n,
            "demo-save-button",
            NotificationKind::Success,
        ))
        .push(action_button(
            ctx.i18n,
            "demo-remove-button",
            NotificationKind::Error,
        ));

    let content = Container::new(actions)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    Stack::new()
        .push(content)
        .push(ctx.popup.view(ctx.i18n).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn action_button<'a>(
    i18n: &I18n,
    label_key: &str,
    kind: NotificationKind,
) -> Element<'a, Message> {
    button(
        Container::new(Text::new(i18n.tr(label_key)).size(typography::BODY))
            .height(Length::Fill)
            .align_y(alignment::Vertical::Center),
    )
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding([0.0, spacing::LG])
    .style(styles::button_action(kind))
    .on_press(Message::Trigger(kind))
    .into()
}
