// SPDX-License-Identifier: MPL-2.0
//! UI components built on Iced widgets.

pub mod hero;
