// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: defaults, TOML files and environment variables.

use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::defaults::DEFAULT_CONFIG_PATH;
use crate::layer::{CatalogLayer, ConfigLayer, LoggingLayer, RoutingLayer};
use crate::ConfigError;

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
	Cli = 60,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	/// Name for logging
	fn name(&self) -> &'static str;

	fn precedence(&self) -> Precedence;

	/// Load configuration layer from this source
	fn load(&self) -> Result<ConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading defaults");
		// Return empty layer - defaults applied during finalization
		Ok(ConfigLayer::default())
	}
}

/// TOML file configuration source. A missing file yields an empty layer.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// System config: /etc/babel/locales.toml
	pub fn system() -> Self {
		Self::new(DEFAULT_CONFIG_PATH)
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ConfigLayer = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
			path: self.path.clone(),
			source: e,
		})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: BABEL_<FIELD>. Empty values are ignored.
pub struct EnvSource {
	vars: Option<HashMap<String, String>>,
}

impl EnvSource {
	/// Read from the process environment.
	pub fn new() -> Self {
		Self { vars: None }
	}

	/// Read from a fixed set of variables instead of the process environment.
	pub fn from_vars<I, K, V>(vars: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			vars: Some(
				vars
					.into_iter()
					.map(|(k, v)| (k.into(), v.into()))
					.collect(),
			),
		}
	}

	fn var(&self, name: &str) -> Option<String> {
		let value = match &self.vars {
			Some(vars) => vars.get(name).cloned(),
			None => std::env::var(name).ok(),
		};
		value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
	}

	fn parsed<T>(&self, name: &str) -> Result<Option<T>, ConfigError>
	where
		T: FromStr<Err = String>,
	{
		match self.var(name) {
			Some(v) => v
				.parse()
				.map(Some)
				.map_err(|message| ConfigError::invalid_value(name, message)),
			None => Ok(None),
		}
	}

	fn list(&self, name: &str) -> Option<Vec<String>> {
		self.var(name).map(|v| {
			v.split(',')
				.map(str::trim)
				.filter(|s| !s.is_empty())
				.map(str::to_string)
				.collect()
		})
	}
}

impl Default for EnvSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(ConfigLayer {
			catalog: Some(CatalogLayer {
				locales: None,
				default_locale: self.var("BABEL_DEFAULT_LOCALE"),
				exact_match_tags: self.list("BABEL_EXACT_MATCH_TAGS"),
			}),
			routing: Some(RoutingLayer {
				origin: self.var("BABEL_ORIGIN"),
			}),
			logging: Some(LoggingLayer {
				level: self.parsed("BABEL_LOG_LEVEL")?,
				format: self.parsed("BABEL_LOG_FORMAT")?,
			}),
		})
	}
}

/// Command-line argument overrides.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
	pub origin: Option<String>,
}

/// CLI override source.
pub struct CliSource {
	overrides: CliOverrides,
}

impl CliSource {
	pub fn new(overrides: CliOverrides) -> Self {
		Self { overrides }
	}
}

impl ConfigSource for CliSource {
	fn name(&self) -> &'static str {
		"cli"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Cli
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading CLI overrides");
		let mut layer = ConfigLayer::default();

		if let Some(ref origin) = self.overrides.origin {
			layer
				.routing
				.get_or_insert_with(RoutingLayer::default)
				.origin = Some(origin.clone());
		}

		Ok(layer)
	}
}
