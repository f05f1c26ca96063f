// SPDX-License-Identifier: MPL-2.0
//! `layer_slider` is a hero "layer slider" built with the Iced GUI framework:
//! a circular slide deck with autoplay, manual navigation, swipe and keyboard
//! input, hover/visibility pausing, and scroll parallax.
//!
//! The slider core (`slider`) is a pure state machine driven by host ticks;
//! the Iced layers (`app`, `ui`) only translate events and render.

pub mod app;
pub mod config;
pub mod deck;
pub mod error;
pub mod i18n;
pub mod slider;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
