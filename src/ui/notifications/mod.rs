// SPDX-License-Identifier: MPL-2.0
//! Two-kind popup notification with a timed reveal.
//!
//! A trigger runs the popup through a fixed sequence: a round badge appears,
//! morphs into a card carrying the message, a countdown bar drains, and the
//! card collapses back to the badge before disappearing. A new trigger at any
//! point restarts the sequence from scratch for the requested kind.
//!
//! # Components
//!
//! - [`kind`] - The two kinds and their fixed content (icon, colors, message)
//! - [`timeline`] - Pure state machine stepping through the sequence
//! - [`presenter`] - Maps the state and animation clocks to a `Presentation`
//! - [`popup`] - Iced widgets rendering a `Presentation`
//! - [`controller`] - Drives the timeline with abortable delay tasks
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Controller, NotificationKind, NotificationMessage};
//!
//! let mut popup = Controller::new(config.timeline_config());
//!
//! // In update, forward popup messages and trigger on user actions
//! let task = popup
//!     .update(NotificationMessage::Trigger { kind: NotificationKind::Success, message: None })
//!     .map(Message::Notification);
//!
//! // In view, stack the overlay above the content
//! let overlay = popup.view(&i18n).map(Message::Notification);
//! ```
//!
//! # Cancellation
//!
//! Every trigger and dismiss bumps a generation counter. Delayed steps carry
//! the generation they were scheduled under and are dropped on arrival when
//! it is no longer current, so a superseded sequence can never touch the
//! state of the one that replaced it.

mod controller;
mod kind;
mod popup;
mod presenter;
mod timeline;

pub use controller::{Controller, Message as NotificationMessage};
pub use kind::{NotificationContent, NotificationKind};
pub use popup::Popup;
pub use presenter::{
    present, AnimationClocks, Entrance, Frame, IconVisual, Presentation, Snapshot, TimerBar,
};
pub use timeline::{
    Generation, Phase, Scheduled, Step, Timeline, TimelineConfig, TimelineState,
};
