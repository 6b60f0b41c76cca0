use anyhow::Result;

use guestbind_lib::options::{OptionCatalog, OptionSpec};

use crate::output::{OutputFormat, print_json};

/// List the option catalog with kinds and defaults.
pub fn cmd_options(output: OutputFormat) -> Result<()> {
  let catalog = OptionCatalog::bindfs();

  if output.is_json() {
    let specs: Vec<&OptionSpec> = catalog.iter().collect();
    return print_json(&specs);
  }

  for spec in catalog.iter() {
    let default = if spec.default.is_null() {
      "-".to_string()
    } else {
      spec.default.to_string()
    };
    println!("  {:<20} {:<7} {}", spec.name, spec.kind, default);
  }
  println!();
  println!("Keys outside this list are passed through as --key=value.");

  Ok(())
}
