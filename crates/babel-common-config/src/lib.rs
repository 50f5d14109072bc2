// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration management for Babel.
//!
//! This crate provides:
//! - Layered configuration from multiple sources
//! - TOML configuration file parsing
//! - Environment variable overrides
//! - Construction of the validated [`LocaleCatalog`](babel_common_i18n::LocaleCatalog)

pub mod defaults;
pub mod error;
pub mod layer;
pub mod registry;
pub mod runtime;
pub mod sources;

use std::path::Path;

pub use defaults::{DEFAULT_CONFIG_PATH, DEFAULT_CONFIG_TEMPLATE, DEFAULT_ORIGIN};
pub use error::ConfigError;
pub use layer::ConfigLayer;
pub use registry::ConfigRegistry;
pub use runtime::{BabelConfig, LogFormat, LogLevel, LoggingConfig, RoutingConfig};
pub use sources::{CliOverrides, ConfigSource, EnvSource, Precedence};

/// Load configuration from defaults, a TOML file and the process environment.
///
/// `path` overrides the system config file at [`DEFAULT_CONFIG_PATH`].
pub fn load_config(path: Option<&Path>) -> Result<BabelConfig, ConfigError> {
	load_config_from(path, EnvSource::new(), CliOverrides::default())
}

/// Load configuration with an explicit environment source and command-line
/// overrides, which take precedence over every other source.
pub fn load_config_from(
	path: Option<&Path>,
	env: EnvSource,
	overrides: CliOverrides,
) -> Result<BabelConfig, ConfigError> {
	let mut registry = ConfigRegistry::new();

	registry.register(Box::new(sources::DefaultsSource));
	match path {
		Some(path) => registry.register(Box::new(sources::TomlSource::new(path))),
		None => registry.register(Box::new(sources::TomlSource::system())),
	}
	registry.register(Box::new(env));
	registry.register(Box::new(sources::CliSource::new(overrides)));

	registry.load()
}
