// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for UI components.

pub mod button;

pub use button::{action as button_action, dismiss as dismiss_button};
