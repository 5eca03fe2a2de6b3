// SPDX-License-Identifier: MPL-2.0
//! Iced widgets for the popup.
//!
//! Takes a [`Presentation`] and lays it out: a white circle holding the icon
//! badge while collapsed, a card with icon, message, dismiss button and
//! countdown bar while expanded.

use super::controller::Message;
use super::presenter::{Entrance, Frame, IconVisual, Presentation, TimerBar};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, tooltip, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Padding, Shadow, Theme};

/// Popup widget builder.
pub struct Popup;

impl Popup {
    /// Renders the popup itself, or an empty element when hidden.
    pub fn view<'a>(presentation: Presentation, i18n: &'a I18n) -> Element<'a, Message> {
        match presentation {
            Presentation::Hidden => Column::new().into(),
            Presentation::Badge {
                frame,
                icon,
                entrance,
            } => surface(
                Container::new(icon_badge(icon))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(alignment::Horizontal::Center)
                    .align_y(alignment::Vertical::Center),
                frame,
                entrance,
            ),
            Presentation::Card {
                frame,
                icon,
                message,
                text_color,
                timer,
                entrance,
            } => {
                let message_widget = Container::new(
                    Text::new(message)
                        .size(typography::BODY)
                        .color(text_color),
                )
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center);

                let dismiss_button = tooltip(
                    button(Text::new("\u{2715}").size(typography::CAPTION))
                        .on_press(Message::Dismiss)
                        .padding(spacing::XXS)
                        .style(styles::dismiss_button),
                    Text::new(i18n.tr("notification-dismiss")).size(typography::CAPTION),
                    tooltip::Position::Top,
                );

                // Layout: [icon] [message] [dismiss]
                let content = Row::new()
                    .spacing(spacing::SM)
                    .padding([0.0, spacing::MD])
                    .height(Length::Fill)
                    .align_y(alignment::Vertical::Center)
                    .push(icon_badge(icon))
                    .push(message_widget)
                    .push(dismiss_button);

                let mut card = Column::new().push(content);
                if let Some(bar) = timer {
                    card = card.push(timer_bar(bar, frame.width));
                }

                surface(card, frame, entrance)
            }
        }
    }

    /// Renders the popup anchored to the bottom centre of the available
    /// space, for stacking over the host's content. The entrance offset
    /// lowers the popup towards the window edge.
    pub fn view_overlay<'a>(presentation: Presentation, i18n: &'a I18n) -> Element<'a, Message> {
        let Some(entrance) = presentation.entrance() else {
            // Takes no space
            return Column::new().into();
        };

        Container::new(Self::view(presentation, i18n))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Bottom)
            .padding(overlay_padding(entrance))
            .into()
    }
}

/// Resting margin of `spacing::XL`, shrunk by the entrance offset. The
/// popup cannot be pushed past the window edge, so the start of the rise is
/// clamped there.
fn overlay_padding(entrance: Entrance) -> Padding {
    Padding {
        bottom: (spacing::XL - entrance.offset).max(0.0),
        ..Padding::new(spacing::XL)
    }
}

/// White rounded surface sized to `frame`, faded by the entrance.
fn surface<'a>(
    content: impl Into<Element<'a, Message>>,
    frame: Frame,
    entrance: Entrance,
) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fixed(frame.width))
        .height(Length::Fixed(frame.height))
        .clip(true)
        .style(move |_theme: &Theme| surface_style(frame.radius, entrance.opacity))
        .into()
}

/// Round accent badge with the kind's glyph, scaled and faded by the icon
/// entrance.
fn icon_badge<'a>(icon: IconVisual) -> Element<'a, Message> {
    let diameter = sizing::ICON_BADGE * icon.scale;
    let glyph = Text::new(icon.glyph.to_string())
        .size(typography::ICON * icon.scale)
        .color(Color {
            a: icon.opacity,
            ..palette::WHITE
        });

    Container::new(glyph)
        .width(Length::Fixed(diameter))
        .height(Length::Fixed(diameter))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_theme: &Theme| badge_style(icon.accent, icon.opacity, diameter))
        .into()
}

/// Countdown bar: a gray track with the remaining fraction filled from the
/// left.
fn timer_bar<'a>(bar: TimerBar, width: f32) -> Element<'a, Message> {
    let fill = Container::new(Column::new())
        .width(Length::Fixed(width * bar.remaining))
        .height(Length::Fill)
        .style(move |_theme: &Theme| fill_style(bar.color));

    Container::new(fill)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TIMER_BAR_HEIGHT))
        .style(|_theme: &Theme| fill_style(palette::GRAY_100))
        .into()
}

fn surface_style(corner_radius: f32, alpha: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::WHITE
        })),
        border: Border {
            radius: corner_radius.into(),
            ..Border::default()
        },
        shadow: Shadow {
            color: Color {
                a: shadow::XL.color.a * alpha,
                ..shadow::XL.color
            },
            ..shadow::XL
        },
        text_color: Some(palette::GRAY_900),
        ..Default::default()
    }
}

fn badge_style(accent: Color, opacity: f32, diameter: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color { a: opacity, ..accent })),
        border: Border {
            radius: (diameter / 2.0).into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

fn fill_style(color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::NONE.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}
