use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use serde::Serialize;

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
	name = "redfin",
	version,
	about = "Inspect the OEM vendor extensions available for Redfish resource types"
)]
/// Command-line arguments accepted by the `redfin` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "REDFIN_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'r',
		long = "resource-type",
		value_name = "TYPE",
		action = ArgAction::Append,
		help = "Resource type to inspect; repeatable (default: from configuration)"
	)]
	pub(crate) resource_types: Vec<String>,
	#[arg(
		short = 'o',
		long,
		value_enum,
		default_value = "plain",
		help = "Output format"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		long,
		value_name = "FILTER",
		env = "REDFIN_LOG",
		help = "Log filter directive (default: warn)"
	)]
	pub(crate) log: Option<String>,
}

/// Output format for listing results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

/// One resource type's discovered vendors, as reported by the listing flow.
#[derive(Debug, Serialize)]
pub(crate) struct ListingEntry {
	pub(crate) resource_type: String,
	pub(crate) namespace: String,
	pub(crate) vendors: Vec<String>,
}

/// Print listing entries as indented plain text.
pub(crate) fn print_plain(entries: &[ListingEntry]) {
	for entry in entries {
		println!("{} ({})", entry.resource_type, entry.namespace);
		if entry.vendors.is_empty() {
			println!("  (no extensions)");
		}
		for vendor in &entry.vendors {
			println!("  {vendor}");
		}
	}
}

/// Print listing entries as pretty JSON.
pub(crate) fn print_json(entries: &[ListingEntry]) -> Result<()> {
	let rendered = serde_json::to_string_pretty(entries)?;
	println!("{rendered}");
	Ok(())
}
