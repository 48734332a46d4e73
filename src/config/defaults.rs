// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Display**: How long a snackbar stays on screen
//! - **Animation**: Enter/exit animation lengths and the tick cadence
//! - **Diagnostics**: Event buffer sizing

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Default on-screen duration for snackbars built from the config (seconds).
pub const DEFAULT_SNACKBAR_DURATION_SECS: f64 = 4.0;

/// Longest on-screen duration accepted (seconds). Zero means indefinite.
pub const MAX_SNACKBAR_DURATION_SECS: f64 = 600.0;

/// Whether tapping the body dismisses the snackbar by default.
pub const DEFAULT_CAN_TAP_TO_DISMISS: bool = false;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default slide-in duration (milliseconds).
pub const DEFAULT_ENTER_ANIMATION_MS: u64 = 250;

/// Default slide-out duration (milliseconds).
pub const DEFAULT_EXIT_ANIMATION_MS: u64 = 200;

/// Maximum animation duration (milliseconds). Zero disables the animation.
pub const MAX_ANIMATION_MS: u64 = 2_000;

/// Interval between ticks while a snackbar is on screen (milliseconds).
/// Roughly one frame at 60 Hz so animations stay smooth.
pub const TICK_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 50;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 5_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_SNACKBAR_DURATION_SECS > 0.0);
    assert!(DEFAULT_SNACKBAR_DURATION_SECS <= MAX_SNACKBAR_DURATION_SECS);
    assert!(DEFAULT_ENTER_ANIMATION_MS <= MAX_ANIMATION_MS);
    assert!(DEFAULT_EXIT_ANIMATION_MS <= MAX_ANIMATION_MS);
    assert!(TICK_INTERVAL_MS > 0);
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY <= DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
