// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::io::Write;

use std::path::Path;

use babel_common_config::{
	load_config_from, BabelConfig, CliOverrides, ConfigError, EnvSource, LogFormat,
};

fn load_isolated(path: &Path) -> Result<BabelConfig, ConfigError> {
	load_config_from(
		Some(path),
		EnvSource::from_vars(Vec::<(String, String)>::new()),
		CliOverrides::default(),
	)
}

#[test]
fn test_load_config_from_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	write!(
		file,
		r#"
[catalog]
default_locale = "fr"

[[catalog.locales]]
code = "en"
name = "English"

[[catalog.locales]]
code = "fr"
name = "Français"

[logging]
format = "json"
"#
	)
	.unwrap();

	let config = load_isolated(file.path()).unwrap();
	assert_eq!(config.catalog.codes().collect::<Vec<_>>(), vec!["en", "fr"]);
	assert_eq!(config.catalog.default_locale().code(), "fr");
	assert_eq!(config.logging.format, LogFormat::Json);

	let resolver = config.resolver();
	assert_eq!(
		resolver
			.build_switch_url(&config.routing.origin, "en", "/fr/about")
			.unwrap(),
		format!("{}/en/about", config.routing.origin)
	);
}

#[test]
fn test_load_config_missing_file_uses_defaults() {
	let dir = tempfile::tempdir().unwrap();
	let config = load_isolated(&dir.path().join("absent.toml")).unwrap();
	assert!(config.catalog.contains("zh-TW"));
	assert!(config.catalog.requires_exact_match("zh-TW"));
}

#[test]
fn test_load_config_rejects_unknown_keys() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "[catalog]\nlocale = \"en\"").unwrap();

	let err = load_isolated(file.path()).unwrap_err();
	assert!(matches!(err, ConfigError::TomlParse { .. }));
}

#[test]
fn test_environment_overrides_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "[routing]\norigin = \"https://file.example\"").unwrap();

	let config = load_config_from(
		Some(file.path()),
		EnvSource::from_vars([("BABEL_ORIGIN", "https://env.example"), ("BABEL_DEFAULT_LOCALE", "es")]),
		CliOverrides::default(),
	)
	.unwrap();
	assert_eq!(config.routing.origin, "https://env.example");
	assert_eq!(config.catalog.default_locale().code(), "es");
}

#[test]
fn test_cli_origin_is_validated_like_configured_origin() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("absent.toml");
	let env = || EnvSource::from_vars([("BABEL_ORIGIN", "https://env.example")]);

	let config = load_config_from(
		Some(&path),
		env(),
		CliOverrides {
			origin: Some(" https://cli.example/ ".to_string()),
		},
	)
	.unwrap();
	assert_eq!(config.routing.origin, "https://cli.example");
	assert_eq!(
		config
			.resolver()
			.build_switch_url(&config.routing.origin, "fr", "/about")
			.unwrap(),
		"https://cli.example/fr/about"
	);

	let err = load_config_from(
		Some(&path),
		env(),
		CliOverrides {
			origin: Some("cli.example".to_string()),
		},
	)
	.unwrap_err();
	assert!(matches!(
		err,
		ConfigError::InvalidValue { key, .. } if key == "routing.origin"
	));
}
