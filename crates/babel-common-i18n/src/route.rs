// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale-prefixed URL routing.
//!
//! The default locale is served unprefixed from the origin root; every other
//! locale lives under `/{code}/...`. All path arithmetic for switching
//! locales goes through [`LocaleResolver::strip_locale_prefix`] and
//! [`LocaleResolver::build_switch_url`].

use tracing::trace;

use crate::error::LocaleError;
use crate::locale::Locale;
use crate::resolve::LocaleResolver;

/// Per-navigation input owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteState {
	pub current_path: String,
	/// Explicit locale signal, e.g. parsed from a route parameter.
	pub requested_locale: Option<String>,
	/// Raw browser tags, most preferred first.
	pub browser_preferences: Vec<String>,
}

impl RouteState {
	pub fn new(current_path: impl Into<String>) -> Self {
		Self {
			current_path: current_path.into(),
			..Default::default()
		}
	}

	pub fn with_requested_locale(mut self, locale: impl Into<String>) -> Self {
		self.requested_locale = Some(locale.into());
		self
	}

	pub fn with_preferences<I, S>(mut self, preferences: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.browser_preferences = preferences.into_iter().map(Into::into).collect();
		self
	}
}

/// Outcome of [`LocaleResolver::resolve_route`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute<'a> {
	pub locale: &'a Locale,
	/// The navigated path with its locale prefix removed.
	pub path: String,
}

/// One entry of a language switcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchOption<'a> {
	pub locale: &'a Locale,
	pub url: String,
	pub active: bool,
}

/// Length of the first path segment of `rest` (the path without its leading
/// `/`). Segments end at `/`, `?` or `#`.
fn first_segment(rest: &str) -> &str {
	let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
	&rest[..end]
}

impl LocaleResolver {
	/// Remove any leading locale segments from `path`.
	///
	/// The result always starts with `/`; a path consisting only of a locale
	/// collapses to `"/"`. Query strings and fragments are preserved.
	///
	/// ```
	/// use babel_common_i18n::{Locale, LocaleCatalog, LocaleResolver};
	///
	/// let catalog = LocaleCatalog::new([
	/// 	Locale::new("en", "English"),
	/// 	Locale::new("fr", "Français"),
	/// ])
	/// .unwrap();
	/// let resolver = LocaleResolver::new(catalog);
	///
	/// assert_eq!(resolver.strip_locale_prefix("/fr/products/42"), "/products/42");
	/// assert_eq!(resolver.strip_locale_prefix("/products/42"), "/products/42");
	/// assert_eq!(resolver.strip_locale_prefix("/fr"), "/");
	/// ```
	pub fn strip_locale_prefix(&self, path: &str) -> String {
		let mut rest = path.strip_prefix('/').unwrap_or(path);

		loop {
			let segment = first_segment(rest);
			if segment.is_empty() || !self.catalog().contains(segment) {
				break;
			}
			trace!(segment, "stripping locale prefix");
			rest = &rest[segment.len()..];
			rest = rest.strip_prefix('/').unwrap_or(rest);
		}

		format!("/{rest}")
	}

	/// The locale from the path's prefix, if it has one.
	pub fn locale_from_path(&self, path: &str) -> Option<&Locale> {
		let rest = path.strip_prefix('/').unwrap_or(path);
		self.catalog().find(first_segment(rest))
	}

	/// Path prefix for a locale: empty for the default, `/{code}` otherwise.
	pub fn locale_prefix(&self, code: &str) -> Result<String, LocaleError> {
		let locale = self
			.catalog()
			.find(code)
			.ok_or_else(|| LocaleError::invalid_locale(code))?;
		if locale == self.catalog().default_locale() {
			Ok(String::new())
		} else {
			Ok(format!("/{}", locale.code()))
		}
	}

	/// Rewrite `path` so that it is served under locale `code`.
	pub fn localize_path(&self, code: &str, path: &str) -> Result<String, LocaleError> {
		let prefix = self.locale_prefix(code)?;
		Ok(format!("{prefix}{}", self.strip_locale_prefix(path)))
	}

	/// Compute the URL to navigate to when switching to `target_code`.
	///
	/// Fails with [`LocaleError::InvalidLocale`] if the catalog does not
	/// contain `target_code`.
	///
	/// ```
	/// use babel_common_i18n::{Locale, LocaleCatalog, LocaleResolver};
	///
	/// let catalog = LocaleCatalog::new([
	/// 	Locale::new("en", "English"),
	/// 	Locale::new("fr", "Français"),
	/// ])
	/// .unwrap();
	/// let resolver = LocaleResolver::new(catalog);
	///
	/// assert_eq!(
	/// 	resolver.build_switch_url("https://x.test", "fr", "/en/about").unwrap(),
	/// 	"https://x.test/fr/about"
	/// );
	/// assert_eq!(
	/// 	resolver.build_switch_url("https://x.test", "en", "/fr/about").unwrap(),
	/// 	"https://x.test/about"
	/// );
	/// assert!(resolver.build_switch_url("https://x.test", "de", "/").is_err());
	/// ```
	pub fn build_switch_url(
		&self,
		origin: &str,
		target_code: &str,
		current_path: &str,
	) -> Result<String, LocaleError> {
		let path = self.localize_path(target_code, current_path)?;
		Ok(format!("{}{path}", origin.trim_end_matches('/')))
	}

	/// Determine the active locale for a navigation.
	///
	/// An explicit requested locale wins, then a locale prefix in the path,
	/// then the browser preferences (which fall back to the default).
	pub fn resolve_route(&self, state: &RouteState) -> ResolvedRoute<'_> {
		let locale = match &state.requested_locale {
			Some(requested) => self.resolve_current_locale(requested),
			None => match self.locale_from_path(&state.current_path) {
				Some(locale) => locale,
				None => self.detect_preferred_locale(&state.browser_preferences),
			},
		};

		ResolvedRoute {
			locale,
			path: self.strip_locale_prefix(&state.current_path),
		}
	}

	/// Switcher entries for every catalog locale, in catalog order.
	pub fn switch_options(
		&self,
		origin: &str,
		current_path: &str,
		active_code: &str,
	) -> Vec<SwitchOption<'_>> {
		let origin = origin.trim_end_matches('/');
		let stripped = self.strip_locale_prefix(current_path);
		let default = self.catalog().default_locale();

		self
			.catalog()
			.locales()
			.iter()
			.map(|locale| {
				let url = if locale == default {
					format!("{origin}{stripped}")
				} else {
					format!("{origin}/{}{stripped}", locale.code())
				};
				SwitchOption {
					locale,
					url,
					active: locale.code() == active_code,
				}
			})
			.collect()
	}
}
