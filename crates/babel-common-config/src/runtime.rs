// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Runtime configuration types with resolved defaults.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use babel_common_i18n::{LocaleCatalog, LocaleResolver};
use serde::Deserialize;

use crate::defaults::{default_locales, DEFAULT_ORIGIN};
use crate::layer::{CatalogLayer, ConfigLayer, LoggingLayer, RoutingLayer};
use crate::ConfigError;

/// The final, validated configuration.
#[derive(Debug, Clone)]
pub struct BabelConfig {
	pub catalog: Arc<LocaleCatalog>,
	pub routing: RoutingConfig,
	pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingConfig {
	/// Scheme and host switch URLs are built against, without a trailing `/`.
	pub origin: String,
}

impl Default for RoutingConfig {
	fn default() -> Self {
		Self {
			origin: DEFAULT_ORIGIN.to_string(),
		}
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoggingConfig {
	pub level: LogLevel,
	pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
	Error,
	Warn,
	#[default]
	Info,
	Debug,
	Trace,
}

impl LogLevel {
	pub fn as_str(&self) -> &'static str {
		match self {
			LogLevel::Error => "error",
			LogLevel::Warn => "warn",
			LogLevel::Info => "info",
			LogLevel::Debug => "debug",
			LogLevel::Trace => "trace",
		}
	}
}

impl fmt::Display for LogLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for LogLevel {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"error" => Ok(LogLevel::Error),
			"warn" | "warning" => Ok(LogLevel::Warn),
			"info" => Ok(LogLevel::Info),
			"debug" => Ok(LogLevel::Debug),
			"trace" => Ok(LogLevel::Trace),
			other => Err(format!("unknown log level '{other}'")),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	#[default]
	Pretty,
	Compact,
	Json,
}

impl FromStr for LogFormat {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"pretty" => Ok(LogFormat::Pretty),
			"compact" => Ok(LogFormat::Compact),
			"json" => Ok(LogFormat::Json),
			other => Err(format!("unknown log format '{other}'")),
		}
	}
}

impl BabelConfig {
	/// Build runtime config from a merged layer.
	pub fn from_layer(layer: ConfigLayer) -> Result<Self, ConfigError> {
		Ok(Self {
			catalog: Arc::new(build_catalog(layer.catalog.unwrap_or_default())?),
			routing: build_routing_config(layer.routing.unwrap_or_default())?,
			logging: build_logging_config(layer.logging.unwrap_or_default()),
		})
	}

	/// A resolver over the configured catalog.
	pub fn resolver(&self) -> LocaleResolver {
		LocaleResolver::new(Arc::clone(&self.catalog))
	}
}

fn build_catalog(layer: CatalogLayer) -> Result<LocaleCatalog, ConfigError> {
	let locales = match layer.locales {
		Some(entries) => entries.into_iter().map(|e| e.into_locale()).collect(),
		None => default_locales(),
	};

	let mut builder = LocaleCatalog::builder().locales(locales);
	if let Some(code) = layer.default_locale {
		builder = builder.default_locale(code);
	}
	for tag in layer.exact_match_tags.unwrap_or_default() {
		builder = builder.exact_match_tag(tag);
	}
	Ok(builder.build()?)
}

fn build_routing_config(layer: RoutingLayer) -> Result<RoutingConfig, ConfigError> {
	let Some(origin) = layer.origin else {
		return Ok(RoutingConfig::default());
	};

	let origin = origin.trim().trim_end_matches('/');
	let valid_scheme = origin
		.split_once("://")
		.is_some_and(|(scheme, host)| !scheme.is_empty() && !host.is_empty());
	if !valid_scheme {
		return Err(ConfigError::invalid_value(
			"routing.origin",
			format!("'{origin}' is not an absolute origin such as https://example.com"),
		));
	}

	Ok(RoutingConfig {
		origin: origin.to_string(),
	})
}

fn build_logging_config(layer: LoggingLayer) -> LoggingConfig {
	LoggingConfig {
		level: layer.level.unwrap_or_default(),
		format: layer.format.unwrap_or_default(),
	}
}
