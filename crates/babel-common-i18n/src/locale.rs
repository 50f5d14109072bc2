// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale metadata and the immutable catalog of supported locales.

use std::collections::HashSet;

use crate::error::CatalogError;

/// A supported language/region variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
	code: String,
	display_name: String,
	flag: Option<String>,
	exact_match_only: bool,
}

impl Locale {
	pub fn new(code: impl Into<String>, display_name: impl Into<String>) -> Self {
		Self {
			code: code.into(),
			display_name: display_name.into(),
			flag: None,
			exact_match_only: false,
		}
	}

	/// Attach a decorative flag glyph.
	pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
		self.flag = Some(flag.into());
		self
	}

	/// Mark the code as region-significant: signals naming it are never
	/// collapsed to their primary subtag.
	pub fn exact_match_only(mut self) -> Self {
		self.exact_match_only = true;
		self
	}

	/// Locale code, e.g. `"en"` or `"zh-TW"`.
	pub fn code(&self) -> &str {
		&self.code
	}

	/// Human readable name, usually in the locale's own language.
	pub fn display_name(&self) -> &str {
		&self.display_name
	}

	pub fn flag(&self) -> Option<&str> {
		self.flag.as_deref()
	}

	pub fn is_exact_match_only(&self) -> bool {
		self.exact_match_only
	}
}

/// Portion of a tag before the first `-` (`"en"` for `"en-US"`).
pub fn primary_subtag(tag: &str) -> &str {
	tag.split('-').next().unwrap_or(tag)
}

/// The ordered, non-empty set of locales a deployment supports.
///
/// Insertion order is significant: it is the order switchers list locales
/// in, and the first locale is the default unless one is marked explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCatalog {
	locales: Vec<Locale>,
	default_index: usize,
	exact_match_tags: Vec<String>,
}

impl LocaleCatalog {
	/// Build a catalog whose default is the first locale.
	pub fn new(locales: impl IntoIterator<Item = Locale>) -> Result<Self, CatalogError> {
		Self::builder().locales(locales).build()
	}

	pub fn builder() -> LocaleCatalogBuilder {
		LocaleCatalogBuilder::default()
	}

	/// All locales in catalog order.
	pub fn locales(&self) -> &[Locale] {
		&self.locales
	}

	/// Exact, case-sensitive lookup by code.
	pub fn find(&self, code: &str) -> Option<&Locale> {
		self.locales.iter().find(|l| l.code == code)
	}

	pub fn contains(&self, code: &str) -> bool {
		self.find(code).is_some()
	}

	pub fn default_locale(&self) -> &Locale {
		&self.locales[self.default_index]
	}

	pub fn codes(&self) -> impl Iterator<Item = &str> {
		self.locales.iter().map(Locale::code)
	}

	/// Whether `tag` is region-significant and must only ever match exactly.
	pub fn requires_exact_match(&self, tag: &str) -> bool {
		self.exact_match_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
	}

	/// Region-significant tags, including ones the catalog does not serve.
	pub fn exact_match_tags(&self) -> &[String] {
		&self.exact_match_tags
	}
}

/// Builder for [`LocaleCatalog`]; validation happens in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct LocaleCatalogBuilder {
	locales: Vec<Locale>,
	default_locale: Option<String>,
	exact_match_tags: Vec<String>,
}

impl LocaleCatalogBuilder {
	pub fn locale(mut self, locale: Locale) -> Self {
		self.locales.push(locale);
		self
	}

	pub fn locales(mut self, locales: impl IntoIterator<Item = Locale>) -> Self {
		self.locales.extend(locales);
		self
	}

	/// Mark an explicit default instead of the first locale.
	pub fn default_locale(mut self, code: impl Into<String>) -> Self {
		self.default_locale = Some(code.into());
		self
	}

	/// Declare a region-significant tag the catalog does not necessarily serve.
	pub fn exact_match_tag(mut self, tag: impl Into<String>) -> Self {
		self.exact_match_tags.push(tag.into());
		self
	}

	pub fn build(self) -> Result<LocaleCatalog, CatalogError> {
		if self.locales.is_empty() {
			return Err(CatalogError::Empty);
		}

		let mut seen = HashSet::with_capacity(self.locales.len());
		for locale in &self.locales {
			if locale.code.trim().is_empty() {
				return Err(CatalogError::EmptyCode);
			}
			if !seen.insert(locale.code.as_str()) {
				return Err(CatalogError::DuplicateCode(locale.code.clone()));
			}
		}

		let default_index = match &self.default_locale {
			Some(code) => self
				.locales
				.iter()
				.position(|l| &l.code == code)
				.ok_or_else(|| CatalogError::UnknownDefault(code.clone()))?,
			None => 0,
		};

		let mut exact_match_tags: Vec<String> = Vec::new();
		let declared = self
			.locales
			.iter()
			.filter(|l| l.exact_match_only)
			.map(|l| l.code.clone())
			.chain(self.exact_match_tags.into_iter().map(|t| t.trim().to_string()));
		for tag in declared {
			if !tag.is_empty() && !exact_match_tags.iter().any(|t| t.eq_ignore_ascii_case(&tag)) {
				exact_match_tags.push(tag);
			}
		}

		Ok(LocaleCatalog {
			locales: self.locales,
			default_index,
			exact_match_tags,
		})
	}
}
