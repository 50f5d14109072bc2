// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for catalog construction and locale switching.

/// A locale catalog could not be built from the supplied configuration.
///
/// These are fatal at startup; a running process never produces them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
	#[error("locale catalog must contain at least one locale")]
	Empty,

	#[error("locale code must not be empty")]
	EmptyCode,

	#[error("duplicate locale code in catalog: {0}")]
	DuplicateCode(String),

	#[error("default locale '{0}' is not in the catalog")]
	UnknownDefault(String),
}

/// Errors surfaced by locale operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
	#[error("invalid locale configuration: {0}")]
	Configuration(#[from] CatalogError),

	#[error("locale '{code}' is not supported")]
	InvalidLocale { code: String },
}

impl LocaleError {
	pub fn invalid_locale(code: impl Into<String>) -> Self {
		Self::InvalidLocale { code: code.into() }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_catalog_error_messages() {
		assert_eq!(
			CatalogError::DuplicateCode("en".to_string()).to_string(),
			"duplicate locale code in catalog: en"
		);
		assert_eq!(
			CatalogError::UnknownDefault("de".to_string()).to_string(),
			"default locale 'de' is not in the catalog"
		);
	}

	#[test]
	fn test_catalog_error_converts_to_configuration() {
		let err: LocaleError = CatalogError::Empty.into();
		assert_eq!(err, LocaleError::Configuration(CatalogError::Empty));
	}

	#[test]
	fn test_invalid_locale_message() {
		let err = LocaleError::invalid_locale("xx");
		assert_eq!(err.to_string(), "locale 'xx' is not supported");
	}
}
