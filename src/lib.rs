// SPDX-License-Identifier: MPL-2.0
//! `iced_popup` is an animated popup notification for the Iced GUI framework.
//!
//! A popup comes in two kinds, success and error. Each trigger plays a timed
//! sequence (badge, expanded card, countdown, collapse) that a newer trigger
//! or a dismiss can cut short at any point. A small demo application hosts
//! the popup and shows Fluent internationalization and user preference
//! management around it.

#![doc(html_root_url = "https://docs.rs/iced_popup/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
