// SPDX-License-Identifier: MPL-2.0
//! Localization of user-facing strings with Fluent.
//!
//! Translations are embedded `.ftl` resources; the locale is resolved
//! from the CLI flag, the settings file, and the OS locale, in that
//! order, falling back to `en-US`.

pub mod fluent;

pub use fluent::I18n;
