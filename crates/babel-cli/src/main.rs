// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Babel CLI - inspect locale resolution and switch URLs
//!
//! Loads the locale catalog from the layered configuration and exposes the
//! resolver operations as subcommands, so routing behaviour can be checked
//! from a shell or a script.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use babel_common_config::{
	load_config_from, CliOverrides, EnvSource, LogFormat, LoggingConfig, DEFAULT_CONFIG_TEMPLATE,
};
use babel_common_i18n::RouteState;

#[derive(Parser, Debug)]
#[command(name = "babel", version, about, long_about = None)]
struct Args {
	/// Path to the locale configuration file
	#[arg(short, long, env = "BABEL_CONFIG")]
	config: Option<PathBuf>,

	/// Origin used for switch URLs (overrides configuration)
	#[arg(long)]
	origin: Option<String>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// List the supported locales
	List,

	/// Resolve a raw locale signal such as "en-US" to a supported locale
	Resolve { signal: String },

	/// Detect the preferred locale from browser language tags
	Detect {
		/// Language tags, most preferred first
		preferences: Vec<String>,

		/// Read preferences from an Accept-Language header value instead
		#[arg(long, conflicts_with = "preferences")]
		accept_language: Option<String>,
	},

	/// Remove the locale prefix from a path
	Strip { path: String },

	/// Build the URL for switching the current path to another locale
	Switch { target: String, path: String },

	/// Resolve the active locale for a navigation and list switch targets
	Route {
		path: String,

		/// Explicitly requested locale
		#[arg(long)]
		locale: Option<String>,

		/// Browser preferences, most preferred first
		#[arg(long = "prefer", value_delimiter = ',')]
		preferences: Vec<String>,
	},

	/// Show the effective configuration
	Config {
		/// Print an annotated configuration file instead
		#[arg(long)]
		template: bool,
	},
}

fn init_tracing(logging: &LoggingConfig) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(format!("babel={}", logging.level)));

	match logging.format {
		LogFormat::Json => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().json().with_writer(std::io::stderr))
				.init();
		}
		LogFormat::Compact => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().compact().with_writer(std::io::stderr))
				.init();
		}
		LogFormat::Pretty => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().with_writer(std::io::stderr))
				.init();
		}
	}
}

fn main() -> Result<()> {
	let args = Args::parse();

	if let Command::Config { template: true } = args.command {
		print!("{DEFAULT_CONFIG_TEMPLATE}");
		return Ok(());
	}

	let overrides = CliOverrides {
		origin: args.origin.clone(),
	};
	let config = load_config_from(args.config.as_deref(), EnvSource::new(), overrides)
		.context("failed to load configuration")?;

	init_tracing(&config.logging);

	let origin = config.routing.origin.as_str();
	let resolver = config.resolver();

	info!(
		default_locale = resolver.catalog().default_locale().code(),
		origin,
		"starting babel"
	);

	let output = match args.command {
		Command::List => commands::list(&resolver),
		Command::Resolve { signal } => commands::resolve(&resolver, &signal),
		Command::Detect {
			preferences,
			accept_language,
		} => commands::detect(&resolver, &preferences, accept_language.as_deref()),
		Command::Strip { path } => commands::strip(&resolver, &path),
		Command::Switch { target, path } => commands::switch(&resolver, origin, &target, &path)?,
		Command::Route {
			path,
			locale,
			preferences,
		} => {
			let mut state = RouteState::new(path).with_preferences(preferences);
			state.requested_locale = locale;
			commands::route(&resolver, origin, &state)
		}
		Command::Config { .. } => commands::show_config(&config),
	};

	println!("{}", output.trim_end());
	Ok(())
}
