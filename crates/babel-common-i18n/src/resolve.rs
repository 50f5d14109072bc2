// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::accept::parse_accept_language;
use crate::locale::{primary_subtag, Locale, LocaleCatalog};

/// Browser tags the detector understands, keyed in lowercase.
const PREFERENCE_TABLE: &[(&str, &str)] = &[
	("en", "en"),
	("en-us", "en"),
	("en-gb", "en"),
	("es", "es"),
	("es-es", "es"),
	("es-mx", "es"),
	("fr", "fr"),
	("fr-fr", "fr"),
	("fr-ca", "fr"),
	("ms", "my"),
	("ms-my", "my"),
	("zh", "zh"),
	("zh-cn", "zh"),
	("zh-tw", "zh-TW"),
	("zh-hk", "zh-TW"),
];

/// Map a raw browser tag to a catalog code using the fixed preference table.
pub fn map_preference(tag: &str) -> Option<&'static str> {
	let tag = tag.trim();
	PREFERENCE_TABLE
		.iter()
		.find(|(raw, _)| raw.eq_ignore_ascii_case(tag))
		.map(|(_, code)| *code)
}

/// Turns ambient locale signals into a single supported [`Locale`] and
/// performs the URL arithmetic for switching between locales.
///
/// The resolver is stateless apart from the shared, immutable catalog, so it
/// can be cloned freely and used from any number of threads.
#[derive(Debug, Clone)]
pub struct LocaleResolver {
	catalog: Arc<LocaleCatalog>,
}

impl LocaleResolver {
	pub fn new(catalog: impl Into<Arc<LocaleCatalog>>) -> Self {
		Self {
			catalog: catalog.into(),
		}
	}

	pub fn catalog(&self) -> &LocaleCatalog {
		&self.catalog
	}

	/// Resolve a raw locale signal (a tag such as `"en-US"` or a path segment).
	///
	/// Resolution order:
	/// 1. Exact match against a catalog code
	/// 2. The primary subtag (`"en-US"` -> `"en"`), unless the signal is
	///    region-significant for this catalog
	/// 3. The catalog default
	///
	/// Catalog codes match case-sensitively while region-significant tags do
	/// not, so `"zh-tw"` is never folded to `"zh"`: unless the catalog serves
	/// exactly that code it resolves to the default.
	///
	/// # Example
	///
	/// ```
	/// use babel_common_i18n::{Locale, LocaleCatalog, LocaleResolver};
	///
	/// let catalog = LocaleCatalog::new([
	/// 	Locale::new("en", "English"),
	/// 	Locale::new("zh", "中文"),
	/// 	Locale::new("zh-TW", "繁體中文").exact_match_only(),
	/// ])
	/// .unwrap();
	/// let resolver = LocaleResolver::new(catalog);
	///
	/// assert_eq!(resolver.resolve_current_locale("en-US").code(), "en");
	/// assert_eq!(resolver.resolve_current_locale("zh-TW").code(), "zh-TW");
	/// assert_eq!(resolver.resolve_current_locale("zh-CN").code(), "zh");
	/// assert_eq!(resolver.resolve_current_locale("xx-XX").code(), "en");
	/// ```
	pub fn resolve_current_locale(&self, raw_signal: &str) -> &Locale {
		let signal = raw_signal.trim();

		if let Some(locale) = self.catalog.find(signal) {
			return locale;
		}

		if self.catalog.requires_exact_match(signal) {
			debug!(signal, "region-significant locale not served, using default");
			return self.catalog.default_locale();
		}

		let primary = primary_subtag(signal);
		if primary != signal {
			if let Some(locale) = self.catalog.find(primary) {
				trace!(signal, code = locale.code(), "matched primary subtag");
				return locale;
			}
		}

		let default = self.catalog.default_locale();
		debug!(signal, code = default.code(), "unsupported locale signal, using default");
		default
	}

	/// Pick the best supported locale from browser preferences, most
	/// preferred first. The first preference that maps to a catalog locale
	/// wins even if a later one would map more precisely.
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
	/// assert_eq!(resolver.detect_preferred_locale(&["fr-CA", "en-US"]).code(), "fr");
	/// assert_eq!(resolver.detect_preferred_locale(&["de-DE"]).code(), "en");
	/// ```
	pub fn detect_preferred_locale<S: AsRef<str>>(&self, preferences: &[S]) -> &Locale {
		for preference in preferences {
			let preference = preference.as_ref();
			let Some(code) = map_preference(preference) else {
				trace!(preference, "preference not in mapping table");
				continue;
			};
			if let Some(locale) = self.catalog.find(code) {
				trace!(preference, code, "preference matched");
				return locale;
			}
			trace!(preference, code, "mapped locale not in catalog");
		}

		let default = self.catalog.default_locale();
		debug!(
			preference_count = preferences.len(),
			code = default.code(),
			"no preferred locale supported, using default"
		);
		default
	}

	/// Detect the preferred locale from an `Accept-Language` header value.
	pub fn detect_from_accept_language(&self, header: &str) -> &Locale {
		let preferences = parse_accept_language(header);
		self.detect_preferred_locale(&preferences)
	}
}
