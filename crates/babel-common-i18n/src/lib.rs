// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution and locale-prefixed URL routing for Babel.
//!
//! Every front-end needs the same small amount of locale logic: decide which
//! supported locale is current, strip or insert the locale prefix of a path,
//! and build the URL for switching to another locale. This crate does that
//! over an immutable [`LocaleCatalog`].
//!
//! # URL Convention
//!
//! The catalog's default locale is served unprefixed at the origin root.
//! Every other locale is served under `/{code}/...`:
//!
//! - `https://example.com/about` (default, e.g. English)
//! - `https://example.com/fr/about`
//! - `https://example.com/zh-TW/about`
//!
//! # Example
//!
//! ```
//! use babel_common_i18n::{Locale, LocaleCatalog, LocaleResolver, RouteState};
//!
//! let catalog = LocaleCatalog::new([
//! 	Locale::new("en", "English").with_flag("🇺🇸"),
//! 	Locale::new("fr", "Français").with_flag("🇫🇷"),
//! 	Locale::new("zh", "中文"),
//! 	Locale::new("zh-TW", "繁體中文").exact_match_only(),
//! ])
//! .unwrap();
//! let resolver = LocaleResolver::new(catalog);
//!
//! // Resolve the user's effective locale
//! let route = resolver.resolve_route(
//! 	&RouteState::new("/products/42").with_preferences(["fr-CA", "en-US"]),
//! );
//! assert_eq!(route.locale.code(), "fr");
//!
//! // Build the URL for the language switcher
//! let url = resolver
//! 	.build_switch_url("https://example.com", "zh-TW", "/fr/products/42")
//! 	.unwrap();
//! assert_eq!(url, "https://example.com/zh-TW/products/42");
//! ```

mod accept;
mod error;
mod locale;
mod messages;
mod resolve;
mod route;

pub use accept::parse_accept_language;
pub use error::{CatalogError, LocaleError};
pub use locale::{primary_subtag, Locale, LocaleCatalog, LocaleCatalogBuilder};
pub use messages::{interpolate, LocalizedMessages, MessageLookup, StaticMessages};
pub use resolve::{map_preference, LocaleResolver};
pub use route::{ResolvedRoute, RouteState, SwitchOption};
