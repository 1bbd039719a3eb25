mod cli;
mod logging;
mod settings;

use anyhow::Result;
use cli::{ListingEntry, OutputFormat, parse_cli, print_json, print_plain};
use redfin::{OemError, OemResolver, oem_namespace};
use settings::ResolvedSettings;

fn main() -> Result<()> {
	let cli = parse_cli();
	let resolved = settings::load(&cli)?;
	logging::init(&resolved.log);

	run_listing(cli.output, &resolved)
}

/// Build the built-in registry for each configured resource type and print
/// the discovered vendors in the chosen format.
fn run_listing(format: OutputFormat, settings: &ResolvedSettings) -> Result<()> {
	let resolver = OemResolver::with_builtins();
	let mut entries = Vec::new();

	for resource_type in &settings.resource_types {
		let vendors = match resolver.registry(resource_type) {
			Ok(registry) => registry.names().map(ToString::to_string).collect(),
			Err(err @ OemError::NoExtensionsFound { .. }) => {
				tracing::warn!(resource_type = %resource_type, "{err}");
				Vec::new()
			}
			Err(err) => return Err(err.into()),
		};
		entries.push(ListingEntry {
			resource_type: resource_type.clone(),
			namespace: oem_namespace(resource_type),
			vendors,
		});
	}

	match format {
		OutputFormat::Plain => print_plain(&entries),
		OutputFormat::Json => print_json(&entries)?,
	}

	Ok(())
}
