// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Built-in defaults applied during finalization.

use babel_common_i18n::Locale;

pub const DEFAULT_ORIGIN: &str = "http://localhost:3000";

/// System-wide config file read when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/babel/locales.toml";

/// The catalog used when no configuration source declares one.
pub fn default_locales() -> Vec<Locale> {
	vec![
		Locale::new("en", "English").with_flag("🇺🇸"),
		Locale::new("es", "Español").with_flag("🇪🇸"),
		Locale::new("fr", "Français").with_flag("🇫🇷"),
		Locale::new("my", "Bahasa Melayu").with_flag("🇲🇾"),
		Locale::new("zh", "中文 (简体)").with_flag("🇨🇳"),
		Locale::new("zh-TW", "中文 (繁體)")
			.with_flag("🇹🇼")
			.exact_match_only(),
	]
}

/// Annotated example written by `babel config --template`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Babel locale configuration
#
# Sources are merged in this order (later wins):
#   built-in defaults -> this file -> BABEL_* environment variables

[catalog]
# The default locale is served without a path prefix.
# Defaults to the first locale listed below.
default_locale = "en"

# Tags that must never be collapsed to their primary subtag even when the
# catalog does not serve them.
exact_match_tags = []

[[catalog.locales]]
code = "en"
name = "English"
flag = "🇺🇸"

[[catalog.locales]]
code = "es"
name = "Español"
flag = "🇪🇸"

[[catalog.locales]]
code = "fr"
name = "Français"
flag = "🇫🇷"

[[catalog.locales]]
code = "my"
name = "Bahasa Melayu"
flag = "🇲🇾"

[[catalog.locales]]
code = "zh"
name = "中文 (简体)"
flag = "🇨🇳"

[[catalog.locales]]
code = "zh-TW"
name = "中文 (繁體)"
flag = "🇹🇼"
exact_match_only = true

[routing]
origin = "http://localhost:3000"

[logging]
# error, warn, info, debug, trace
level = "info"
# pretty, compact, json
format = "pretty"
"#;

#[cfg(test)]
mod tests {
	use super::*;
	use crate::layer::ConfigLayer;
	use crate::runtime::BabelConfig;
	use babel_common_i18n::LocaleCatalog;

	#[test]
	fn test_default_locales_form_valid_catalog() {
		let catalog = LocaleCatalog::new(default_locales()).unwrap();
		assert_eq!(catalog.default_locale().code(), "en");
		assert!(catalog.requires_exact_match("zh-TW"));
		assert_eq!(catalog.locales().len(), 6);
	}

	#[test]
	fn test_template_matches_builtin_catalog() {
		let layer: ConfigLayer = toml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
		let from_template = BabelConfig::from_layer(layer).unwrap();
		let builtin = LocaleCatalog::new(default_locales()).unwrap();

		assert_eq!(from_template.catalog.locales(), builtin.locales());
		assert_eq!(from_template.catalog.default_locale().code(), "en");
		assert_eq!(
			from_template
				.resolver()
				.detect_preferred_locale(&["ms-MY"])
				.code(),
			"my"
		);
	}
}
