// SPDX-License-Identifier: MPL-2.0
//! `iced_snackbar` is a transient notification bar for Iced applications.
//!
//! A snackbar shows a short message with an optional action along the bottom
//! of its container, dismisses itself after a configurable duration, and
//! reports action presses and dismissals through callbacks. The crate also
//! ships a small demo application with Fluent translations and TOML settings.

#![doc(html_root_url = "https://docs.rs/iced_snackbar/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod ui;
