// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the demo application.
//!
//! This module provides localization using the Fluent localization system.
//! Snackbar messages themselves are plain strings supplied by the host; the
//! host decides whether to translate them before building a snackbar.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation files
//! - Fallback to `en-US` when translations are missing

pub mod fluent;
