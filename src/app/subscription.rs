// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::notifications::Controller;
use iced::{event, Subscription};

/// Routes window close requests so the popup can be torn down first.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }
        None
    })
}

/// Animation frames for the popup, only while it is moving.
pub fn create_popup_subscription(popup: &Controller) -> Subscription<Message> {
    popup.subscription().map(Message::Notification)
}
