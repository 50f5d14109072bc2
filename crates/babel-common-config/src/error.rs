// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration error types.

use std::path::PathBuf;

use babel_common_i18n::CatalogError;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("Failed to read config file {path}: {source}")]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse TOML config at {path}: {source}")]
	TomlParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid value for {key}: {message}")]
	InvalidValue { key: String, message: String },

	#[error("Invalid locale catalog: {0}")]
	Catalog(#[from] CatalogError),
}

impl ConfigError {
	pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
		Self::InvalidValue {
			key: key.into(),
			message: message.into(),
		}
	}
}
