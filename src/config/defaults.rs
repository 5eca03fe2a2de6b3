// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate.
//!
//! # Categories
//!
//! - **Timeline**: Delays between the popup's state transitions
//! - **Bounds**: Accepted range for any configured delay

// ==========================================================================
// Timeline Defaults
// ==========================================================================

/// Trigger until the badge appears.
pub const DEFAULT_APPEAR_DELAY_MS: u64 = 100;

/// Badge until the card expands.
pub const DEFAULT_EXPAND_DELAY_MS: u64 = 300;

/// Card until the countdown starts.
pub const DEFAULT_TIMER_START_DELAY_MS: u64 = 1000;

/// Length of the countdown.
pub const DEFAULT_TIMER_DURATION_MS: u64 = 4000;

/// Collapse animation before hiding (also the dismiss grace period).
pub const DEFAULT_COLLAPSE_DELAY_MS: u64 = 300;

// ==========================================================================
// Bounds
// ==========================================================================

/// Smallest accepted delay.
pub const MIN_DELAY_MS: u64 = 0;

/// Largest accepted delay (one minute).
pub const MAX_DELAY_MS: u64 = 60_000;

const _: () = {
    assert!(DEFAULT_APPEAR_DELAY_MS <= MAX_DELAY_MS);
    assert!(DEFAULT_EXPAND_DELAY_MS <= MAX_DELAY_MS);
    assert!(DEFAULT_TIMER_START_DELAY_MS <= MAX_DELAY_MS);
    assert!(DEFAULT_TIMER_DURATION_MS <= MAX_DELAY_MS);
    assert!(DEFAULT_COLLAPSE_DELAY_MS <= MAX_DELAY_MS);
};
