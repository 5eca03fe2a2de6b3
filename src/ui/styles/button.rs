// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::notifications::NotificationKind;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled button tinted with the accent of `kind`, used by the demo actions
/// that trigger each popup.
pub fn action(kind: NotificationKind) -> impl Fn(&Theme, button::Status) -> button::Style {
    let content = kind.content();
    move |_theme: &Theme, status: button::Status| {
        let (background, shadow) = match status {
            button::Status::Hovered => (content.timer, shadow::MD),
            button::Status::Disabled => (palette::GRAY_200, shadow::NONE),
            button::Status::Active | button::Status::Pressed => (content.accent, shadow::NONE),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::WHITE,
            border: Border {
                color: content.text,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow,
            snap: true,
        }
    }
}

/// Borderless close button inside the popup card.
pub fn dismiss(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = palette::GRAY_700;

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: palette::GRAY_900,
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: palette::GRAY_900,
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        _ => button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
