// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration registry - manages sources and merges layers.

use tracing::{debug, info};

use crate::layer::ConfigLayer;
use crate::runtime::BabelConfig;
use crate::sources::ConfigSource;
use crate::ConfigError;

/// Registry that manages configuration sources and merges them.
pub struct ConfigRegistry {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl ConfigRegistry {
	pub fn new() -> Self {
		Self {
			sources: Vec::new(),
		}
	}

	/// Register a configuration source.
	pub fn register(&mut self, source: Box<dyn ConfigSource>) {
		debug!(source = source.name(), precedence = ?source.precedence(), "registering config source");
		self.sources.push(source);
	}

	/// Load configuration from all sources, merge, and validate.
	///
	/// Sources are sorted by precedence (lowest first) and merged so higher
	/// precedence sources override lower ones. Any source error fails the load.
	pub fn load(&self) -> Result<BabelConfig, ConfigError> {
		let mut sorted_sources: Vec<_> = self.sources.iter().collect();
		sorted_sources.sort_by_key(|s| s.precedence());

		info!(
			source_count = sorted_sources.len(),
			"loading configuration from sources"
		);

		let mut merged = ConfigLayer::default();
		for source in &sorted_sources {
			let layer = source.load()?;
			debug!(source = source.name(), "merging config layer");
			merged.merge(layer);
		}

		let config = BabelConfig::from_layer(merged)?;

		info!(
			default_locale = config.catalog.default_locale().code(),
			locale_count = config.catalog.locales().len(),
			origin = %config.routing.origin,
			"configuration loaded successfully"
		);

		Ok(config)
	}

	pub fn source_count(&self) -> usize {
		self.sources.len()
	}
}

impl Default for ConfigRegistry {
	fn default() -> Self {
		Self::new()
	}
}
