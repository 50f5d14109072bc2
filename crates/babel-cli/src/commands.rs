// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Subcommand implementations. Each returns the text printed to stdout.

use anyhow::{Context, Result};
use babel_common_config::BabelConfig;
use babel_common_i18n::{Locale, LocaleResolver, RouteState};
use tracing::debug;

fn describe(locale: &Locale) -> String {
	match locale.flag() {
		Some(flag) => format!("{} {} ({})", flag, locale.display_name(), locale.code()),
		None => format!("{} ({})", locale.display_name(), locale.code()),
	}
}

pub fn list(resolver: &LocaleResolver) -> String {
	let catalog = resolver.catalog();
	let default = catalog.default_locale();
	let mut out = String::new();
	for locale in catalog.locales() {
		let mut markers = Vec::new();
		if locale == default {
			markers.push("default");
		}
		if catalog.requires_exact_match(locale.code()) {
			markers.push("exact");
		}
		out.push_str(&describe(locale));
		if !markers.is_empty() {
			out.push_str(&format!(" [{}]", markers.join(", ")));
		}
		out.push('\n');
	}
	out
}

pub fn resolve(resolver: &LocaleResolver, signal: &str) -> String {
	resolver.resolve_current_locale(signal).code().to_string()
}

pub fn detect(
	resolver: &LocaleResolver,
	preferences: &[String],
	accept_language: Option<&str>,
) -> String {
	let locale = match accept_language {
		Some(header) => resolver.detect_from_accept_language(header),
		None => resolver.detect_preferred_locale(preferences),
	};
	locale.code().to_string()
}

pub fn strip(resolver: &LocaleResolver, path: &str) -> String {
	resolver.strip_locale_prefix(path)
}

pub fn switch(resolver: &LocaleResolver, origin: &str, target: &str, path: &str) -> Result<String> {
	resolver
		.build_switch_url(origin, target, path)
		.with_context(|| format!("cannot switch to locale '{target}'"))
}

pub fn route(resolver: &LocaleResolver, origin: &str, state: &RouteState) -> String {
	let resolved = resolver.resolve_route(state);
	debug!(
		locale = resolved.locale.code(),
		path = %resolved.path,
		"resolved route"
	);

	let mut out = String::new();
	out.push_str(&format!("locale: {}\n", describe(resolved.locale)));
	out.push_str(&format!("path: {}\n", resolved.path));
	for option in resolver.switch_options(origin, &state.current_path, resolved.locale.code()) {
		let marker = if option.active { "*" } else { " " };
		out.push_str(&format!(
			"{marker} {:<8} {}\n",
			option.locale.code(),
			option.url
		));
	}
	out
}

pub fn show_config(config: &BabelConfig) -> String {
	let codes: Vec<_> = config.catalog.codes().collect();
	[
		format!("origin: {}", config.routing.origin),
		format!("default_locale: {}", config.catalog.default_locale().code()),
		format!("locales: {}", codes.join(", ")),
		format!(
			"exact_match_tags: {}",
			config.catalog.exact_match_tags().join(", ")
		),
		format!("log_level: {}", config.logging.level),
	]
	.map(|line| line + "\n")
	.concat()
}

#[cfg(test)]
mod tests {
	use super::*;
	use babel_common_config::ConfigLayer;

	fn config() -> BabelConfig {
		BabelConfig::from_layer(ConfigLayer::default()).unwrap()
	}

	#[test]
	fn test_list_marks_default_and_exact() {
		let output = list(&config().resolver());
		let lines: Vec<_> = output.lines().collect();
		assert_eq!(lines.len(), 6);
		assert_eq!(lines[0], "🇺🇸 English (en) [default]");
		assert_eq!(lines[5], "🇹🇼 中文 (繁體) (zh-TW) [exact]");
	}

	#[test]
	fn test_resolve_and_detect() {
		let resolver = config().resolver();
		assert_eq!(resolve(&resolver, "zh-CN"), "zh");
		assert_eq!(resolve(&resolver, "zh-TW"), "zh-TW");
		assert_eq!(
			detect(&resolver, &["de".to_string(), "ms-MY".to_string()], None),
			"my"
		);
		assert_eq!(detect(&resolver, &[], Some("fr;q=0.4,es-MX;q=0.9")), "es");
	}

	#[test]
	fn test_strip_and_switch() {
		let resolver = config().resolver();
		assert_eq!(strip(&resolver, "/my/about"), "/about");
		assert_eq!(
			switch(&resolver, "http://localhost:3000", "fr", "/es/about").unwrap(),
			"http://localhost:3000/fr/about"
		);
		let err = switch(&resolver, "http://localhost:3000", "de", "/").unwrap_err();
		assert_eq!(err.to_string(), "cannot switch to locale 'de'");
	}

	#[test]
	fn test_route_lists_switch_targets() {
		let resolver = config().resolver();
		let output = route(
			&resolver,
			"https://x.test",
			&RouteState::new("/fr/about"),
		);
		assert!(output.starts_with("locale: 🇫🇷 Français (fr)\npath: /about\n"));
		assert!(output.contains("* fr       https://x.test/fr/about"));
		assert!(output.contains("  en       https://x.test/about"));
	}

	#[test]
	fn test_list_lines_have_no_trailing_markers_for_plain_locales() {
		let output = list(&config().resolver());
		assert!(output.contains("🇪🇸 Español (es)\n"));
		assert!(output.ends_with('\n'));
	}

	#[test]
	fn test_show_config() {
		let output = show_config(&config());
		assert!(output.contains("default_locale: en"));
		assert!(output.contains("locales: en, es, fr, my, zh, zh-TW"));
		assert!(output.contains("exact_match_tags: zh-TW"));
		assert!(output.starts_with("origin: http://localhost:3000\n"));
		assert!(output.ends_with("log_level: info\n"));
	}
}
