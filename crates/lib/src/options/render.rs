//! Turning effective options into command-line arguments.

use tracing::warn;

use super::catalog::{OptionCatalog, OptionClass, OptionKind};
use super::merge::EffectiveOptions;

/// Render merged options as bind utility arguments, in map order.
///
/// Flags become `--key` when truthy. Valued options become `--key=value` when
/// not null. Keys missing from the catalog are passed through as valued
/// options.
pub fn render_args(catalog: &OptionCatalog, options: &EffectiveOptions) -> Vec<String> {
  let mut args = Vec::new();

  for (key, value) in options.iter() {
    if catalog.classify(key) == OptionClass::Unknown {
      warn!(option = %key, "option not in catalog, passing it through as --key=value");
    }

    match catalog.kind_for_render(key) {
      OptionKind::Flag => {
        if value.is_truthy() {
          args.push(format!("--{}", key));
        }
      }
      OptionKind::Valued => {
        if !value.is_null() {
          args.push(format!("--{}={}", key, value));
        }
      }
    }
  }

  args
}
