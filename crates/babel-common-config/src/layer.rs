// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration layer for merging from multiple sources.

use babel_common_i18n::Locale;
use serde::Deserialize;

use crate::runtime::{LogFormat, LogLevel};

/// Partial configuration layer - all fields are Option for merging.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
	#[serde(default)]
	pub catalog: Option<CatalogLayer>,
	#[serde(default)]
	pub routing: Option<RoutingLayer>,
	#[serde(default)]
	pub logging: Option<LoggingLayer>,
}

impl ConfigLayer {
	/// Merge another layer into this one. Other layer takes precedence.
	pub fn merge(&mut self, other: ConfigLayer) {
		merge_option(&mut self.catalog, other.catalog, CatalogLayer::merge);
		merge_option(&mut self.routing, other.routing, RoutingLayer::merge);
		merge_option(&mut self.logging, other.logging, LoggingLayer::merge);
	}
}

fn merge_option<T, F>(target: &mut Option<T>, source: Option<T>, merge_fn: F)
where
	F: FnOnce(&mut T, T),
{
	match (target.as_mut(), source) {
		(Some(t), Some(s)) => merge_fn(t, s),
		(None, Some(s)) => *target = Some(s),
		_ => {}
	}
}

/// One `[[catalog.locales]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocaleEntry {
	pub code: String,
	pub name: String,
	#[serde(default)]
	pub flag: Option<String>,
	#[serde(default)]
	pub exact_match_only: bool,
}

impl LocaleEntry {
	pub fn into_locale(self) -> Locale {
		let mut locale = Locale::new(self.code, self.name);
		if let Some(flag) = self.flag {
			locale = locale.with_flag(flag);
		}
		if self.exact_match_only {
			locale = locale.exact_match_only();
		}
		locale
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogLayer {
	/// Replaces the whole locale list when set; lists are never concatenated.
	#[serde(default)]
	pub locales: Option<Vec<LocaleEntry>>,
	#[serde(default)]
	pub default_locale: Option<String>,
	#[serde(default)]
	pub exact_match_tags: Option<Vec<String>>,
}

impl CatalogLayer {
	pub fn merge(&mut self, other: CatalogLayer) {
		if other.locales.is_some() {
			self.locales = other.locales;
		}
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
		if other.exact_match_tags.is_some() {
			self.exact_match_tags = other.exact_match_tags;
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingLayer {
	#[serde(default)]
	pub origin: Option<String>,
}

impl RoutingLayer {
	pub fn merge(&mut self, other: RoutingLayer) {
		if other.origin.is_some() {
			self.origin = other.origin;
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingLayer {
	#[serde(default)]
	pub level: Option<LogLevel>,
	#[serde(default)]
	pub format: Option<LogFormat>,
}

impl LoggingLayer {
	pub fn merge(&mut self, other: LoggingLayer) {
		if other.level.is_some() {
			self.level = other.level;
		}
		if other.format.is_some() {
			self.format = other.format;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_merge_empty_layers() {
		let mut base = ConfigLayer::default();
		base.merge(ConfigLayer::default());
		assert!(base.catalog.is_none());
		assert!(base.routing.is_none());
	}

	#[test]
	fn test_merge_other_overwrites() {
		let mut base = ConfigLayer {
			routing: Some(RoutingLayer {
				origin: Some("http://localhost:3000".to_string()),
			}),
			logging: Some(LoggingLayer {
				level: Some(LogLevel::Warn),
				format: Some(LogFormat::Json),
			}),
			..Default::default()
		};
		let other = ConfigLayer {
			logging: Some(LoggingLayer {
				level: Some(LogLevel::Debug),
				format: None,
			}),
			..Default::default()
		};
		base.merge(other);

		let logging = base.logging.unwrap();
		assert_eq!(logging.level, Some(LogLevel::Debug));
		assert_eq!(logging.format, Some(LogFormat::Json));
		assert_eq!(
			base.routing.unwrap().origin.as_deref(),
			Some("http://localhost:3000")
		);
	}

	#[test]
	fn test_merge_replaces_locale_list() {
		let mut base = CatalogLayer {
			locales: Some(vec![
				LocaleEntry {
					code: "en".to_string(),
					name: "English".to_string(),
					flag: None,
					exact_match_only: false,
				},
				LocaleEntry {
					code: "fr".to_string(),
					name: "Français".to_string(),
					flag: None,
					exact_match_only: false,
				},
			]),
			default_locale: Some("en".to_string()),
			exact_match_tags: None,
		};
		base.merge(CatalogLayer {
			locales: Some(vec![LocaleEntry {
				code: "es".to_string(),
				name: "Español".to_string(),
				flag: None,
				exact_match_only: false,
			}]),
			..Default::default()
		});

		let codes: Vec<_> = base
			.locales
			.unwrap()
			.into_iter()
			.map(|l| l.code)
			.collect();
		assert_eq!(codes, vec!["es"]);
		assert_eq!(base.default_locale.as_deref(), Some("en"));
	}

	#[test]
	fn test_parse_toml_layer() {
		let layer: ConfigLayer = toml::from_str(
			r#"
			[catalog]
			default_locale = "en"
			exact_match_tags = ["pt-BR"]

			[[catalog.locales]]
			code = "en"
			name = "English"
			flag = "🇺🇸"

			[[catalog.locales]]
			code = "zh-TW"
			name = "繁體中文"
			exact_match_only = true

			[routing]
			origin = "https://example.com"

			[logging]
			level = "debug"
			format = "compact"
			"#,
		)
		.unwrap();

		let catalog = layer.catalog.unwrap();
		let locales = catalog.locales.unwrap();
		assert_eq!(locales.len(), 2);
		assert_eq!(locales[0].flag.as_deref(), Some("🇺🇸"));
		assert!(locales[1].exact_match_only);
		assert_eq!(catalog.exact_match_tags.unwrap(), vec!["pt-BR"]);
		assert_eq!(layer.logging.unwrap().format, Some(LogFormat::Compact));
	}

	#[test]
	fn test_unknown_keys_rejected() {
		let result: Result<ConfigLayer, _> = toml::from_str("[catalog]\ndefault = \"en\"\n");
		assert!(result.is_err());
	}

	#[test]
	fn test_locale_entry_into_locale() {
		let locale = LocaleEntry {
			code: "zh-TW".to_string(),
			name: "繁體中文".to_string(),
			flag: Some("🇹🇼".to_string()),
			exact_match_only: true,
		}
		.into_locale();
		assert_eq!(locale.code(), "zh-TW");
		assert_eq!(locale.flag(), Some("🇹🇼"));
		assert!(locale.is_exact_match_only());
	}

	proptest! {
		/// The later layer wins for every field it sets and leaves the rest alone.
		#[test]
		fn merge_prefers_later_values(
			base_origin in proptest::option::of("https://[a-z]{1,10}\\.test"),
			other_origin in proptest::option::of("https://[a-z]{1,10}\\.test"),
			base_default in proptest::option::of("[a-z]{2}"),
			other_default in proptest::option::of("[a-z]{2}"),
		) {
			let mut base = ConfigLayer {
				catalog: Some(CatalogLayer {
					default_locale: base_default.clone(),
					..Default::default()
				}),
				routing: Some(RoutingLayer { origin: base_origin.clone() }),
				..Default::default()
			};
			base.merge(ConfigLayer {
				catalog: Some(CatalogLayer {
					default_locale: other_default.clone(),
					..Default::default()
				}),
				routing: Some(RoutingLayer { origin: other_origin.clone() }),
				..Default::default()
			});

			prop_assert_eq!(base.routing.unwrap().origin, other_origin.or(base_origin));
			prop_assert_eq!(base.catalog.unwrap().default_locale, other_default.or(base_default));
		}
	}
}
