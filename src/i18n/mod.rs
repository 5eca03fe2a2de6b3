// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the popup and the demo host.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Embedded `.ftl` bundles, optionally overridden from a directory on disk
//! - Fallback to `en-US` when a locale cannot be resolved

pub mod fluent;
