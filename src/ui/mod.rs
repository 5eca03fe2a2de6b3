// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Follows the Elm-style "state down, messages up" pattern: components own
//! their state, expose `update`/`view`, and the application maps their
//! messages into its own.
//!
//! - [`notifications`] - The popup notification and the timeline driving it
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing, motion)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod notifications;
pub mod styles;
pub mod theming;
