// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.
//!
//! # Categories
//!
//! - **Autoplay**: automatic advancement timing
//! - **Transition**: slide transition timing
//! - **Input**: which input adapters are enabled out of the box

// ==========================================================================
// Autoplay Defaults
// ==========================================================================

/// Whether autoplay is enabled when no preference is stored.
pub const DEFAULT_AUTOPLAY: bool = true;

/// Full-cycle duration before an automatic advance (in milliseconds).
/// A stored value of 0 disables autoplay; that is a normal configuration
/// state, not an error.
pub const DEFAULT_AUTOPLAY_DELAY_MS: u64 = 7000;

/// Maximum accepted autoplay delay (in milliseconds). Larger stored
/// values are clamped so a corrupted settings file cannot freeze the
/// progress indicator for hours.
pub const MAX_AUTOPLAY_DELAY_MS: u64 = 120_000;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Visual duration of a slide transition (in milliseconds). Also the
/// delay before autoplay is allowed to restart its cycle after any
/// transition completes.
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 1000;

/// Maximum accepted transition duration (in milliseconds).
pub const MAX_ANIMATION_DURATION_MS: u64 = 10_000;

// ==========================================================================
// Input Adapter Defaults
// ==========================================================================

/// Whether hovering the slider pauses autoplay.
pub const DEFAULT_PAUSE_ON_HOVER: bool = true;

/// Whether the global Left/Right arrow keys navigate the slider.
pub const DEFAULT_KEYBOARD: bool = true;

/// Whether pointer/touch swipes navigate the slider.
pub const DEFAULT_SWIPE: bool = true;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_AUTOPLAY_DELAY_MS > 0);
    assert!(DEFAULT_AUTOPLAY_DELAY_MS <= MAX_AUTOPLAY_DELAY_MS);
    assert!(DEFAULT_ANIMATION_DURATION_MS > 0);
    assert!(DEFAULT_ANIMATION_DURATION_MS <= MAX_ANIMATION_DURATION_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autoplay_defaults_are_valid() {
        assert!(DEFAULT_AUTOPLAY);
        assert_eq!(DEFAULT_AUTOPLAY_DELAY_MS, 7000);
        assert!(DEFAULT_AUTOPLAY_DELAY_MS <= MAX_AUTOPLAY_DELAY_MS);
    }

    #[test]
    fn transition_defaults_are_valid() {
        assert_eq!(DEFAULT_ANIMATION_DURATION_MS, 1000);
        assert!(DEFAULT_ANIMATION_DURATION_MS <= MAX_ANIMATION_DURATION_MS);
    }

    #[test]
    fn input_adapters_enabled_by_default() {
        assert!(DEFAULT_PAUSE_ON_HOVER);
        assert!(DEFAULT_KEYBOARD);
        assert!(DEFAULT_SWIPE);
    }
}
