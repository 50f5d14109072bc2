// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Message lookup capability.
//!
//! Translation catalogs are owned by whatever library a front-end uses. The
//! routing core only ever talks to them through [`MessageLookup`].

use std::collections::HashMap;

/// Opaque key -> string resolver bound to a single locale.
pub trait MessageLookup {
	/// Resolve `key`, substituting `{name}` placeholders from `params`.
	fn lookup(&self, key: &str, params: &[(&str, &str)]) -> String;
}

impl<F> MessageLookup for F
where
	F: Fn(&str, &[(&str, &str)]) -> String,
{
	fn lookup(&self, key: &str, params: &[(&str, &str)]) -> String {
		self(key, params)
	}
}

/// Replace `{name}` placeholders in a single pass.
///
/// Placeholders without a matching parameter are left untouched, and
/// substituted values are never re-scanned.
///
/// ```
/// use babel_common_i18n::interpolate;
///
/// assert_eq!(
/// 	interpolate("Welcome {name}! You have {count} notifications", &[
/// 		("name", "Sarah"),
/// 		("count", "5"),
/// 	]),
/// 	"Welcome Sarah! You have 5 notifications"
/// );
/// ```
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
	let mut result = String::with_capacity(template.len());
	let mut rest = template;

	while let Some(open) = rest.find('{') {
		result.push_str(&rest[..open]);
		let after = &rest[open + 1..];
		match after.find('}') {
			Some(close) => {
				let name = &after[..close];
				match params.iter().find(|(k, _)| *k == name) {
					Some((_, value)) => result.push_str(value),
					None => {
						result.push('{');
						result.push_str(name);
						result.push('}');
					}
				}
				rest = &after[close + 1..];
			}
			None => {
				result.push_str(&rest[open..]);
				rest = "";
			}
		}
	}

	result.push_str(rest);
	result
}

/// In-memory messages keyed by locale code, filled by the caller.
///
/// Lookups fall back from the requested locale to the default locale and
/// finally to the key itself.
#[derive(Debug, Clone, Default)]
pub struct StaticMessages {
	default_locale: String,
	messages: HashMap<String, HashMap<String, String>>,
}

impl StaticMessages {
	pub fn new(default_locale: impl Into<String>) -> Self {
		Self {
			default_locale: default_locale.into(),
			messages: HashMap::new(),
		}
	}

	/// Add or replace a message.
	pub fn insert(
		&mut self,
		locale: impl Into<String>,
		key: impl Into<String>,
		message: impl Into<String>,
	) {
		self
			.messages
			.entry(locale.into())
			.or_default()
			.insert(key.into(), message.into());
	}

	pub fn with(
		mut self,
		locale: impl Into<String>,
		key: impl Into<String>,
		message: impl Into<String>,
	) -> Self {
		self.insert(locale, key, message);
		self
	}

	fn raw(&self, locale: &str, key: &str) -> Option<&str> {
		self
			.messages
			.get(locale)
			.and_then(|m| m.get(key))
			.map(String::as_str)
	}

	/// Translate `key` for `locale` with fallback.
	pub fn translate(&self, locale: &str, key: &str, params: &[(&str, &str)]) -> String {
		let template = self
			.raw(locale, key)
			.or_else(|| self.raw(&self.default_locale, key));

		match template {
			Some(template) => interpolate(template, params),
			None => {
				tracing::trace!(locale, key, "message not found, returning key");
				key.to_string()
			}
		}
	}

	/// A [`MessageLookup`] bound to one locale.
	pub fn localized<'a>(&'a self, locale: &'a str) -> LocalizedMessages<'a> {
		LocalizedMessages {
			messages: self,
			locale,
		}
	}
}

/// [`StaticMessages`] viewed through a single locale.
#[derive(Debug, Clone, Copy)]
pub struct LocalizedMessages<'a> {
	messages: &'a StaticMessages,
	locale: &'a str,
}

impl LocalizedMessages<'_> {
	pub fn locale(&self) -> &str {
		self.locale
	}
}

impl MessageLookup for LocalizedMessages<'_> {
	fn lookup(&self, key: &str, params: &[(&str, &str)]) -> String {
		self.messages.translate(self.locale, key, params)
	}
}
