use std::path::PathBuf;

use anyhow::{Result, anyhow, ensure};
use config::{Config, ConfigError, File};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::cli::CliArgs;

/// Resource types inspected when neither configuration nor CLI names any.
const DEFAULT_RESOURCE_TYPES: &[&str] = &["system", "manager"];

/// Raw configuration as deserialized from files and the environment.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawSettings {
	pub(crate) resource_types: Vec<String>,
	pub(crate) log: Option<String>,
}

/// Effective settings after merging files, environment and CLI overrides.
#[derive(Debug)]
pub(crate) struct ResolvedSettings {
	pub(crate) resource_types: Vec<String>,
	pub(crate) log: String,
}

/// Load settings by combining CLI arguments, config files and environment
/// variables.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedSettings> {
	let config = build_config(cli)?;
	let raw: RawSettings = config
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	resolve(raw, cli)
}

/// Apply CLI overrides and defaults, then validate.
fn resolve(raw: RawSettings, cli: &CliArgs) -> Result<ResolvedSettings> {
	let mut resource_types = if cli.resource_types.is_empty() {
		raw.resource_types
	} else {
		cli.resource_types.clone()
	};
	if resource_types.is_empty() {
		resource_types = DEFAULT_RESOURCE_TYPES
			.iter()
			.map(ToString::to_string)
			.collect();
	}

	for resource_type in &resource_types {
		ensure!(
			!resource_type.is_empty()
				&& resource_type
					.chars()
					.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
			"invalid resource type {resource_type:?}: expected a lowercase identifier like \"system\""
		);
	}

	let log = cli
		.log
		.clone()
		.or(raw.log)
		.unwrap_or_else(|| "warn".to_owned());

	Ok(ResolvedSettings {
		resource_types,
		log,
	})
}

/// Build a [`Config`] instance by combining default locations with CLI
/// overrides.
fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("redfin")
			.separator("__")
			.try_parsing(true)
			.list_separator(","),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Discover the default configuration file locations that should be
/// consulted.
fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Some(dirs) = ProjectDirs::from("", "", "redfin") {
		files.push(dirs.config_dir().join("config.toml"));
	}

	if let Ok(current_dir) = std::env::current_dir() {
		files.push(current_dir.join(".redfin.toml"));
		files.push(current_dir.join("redfin.toml"));
	}

	files
}
