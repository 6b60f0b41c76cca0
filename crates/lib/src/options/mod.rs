//! Bind utility options: catalog, layered merge and argument rendering.

mod catalog;
mod merge;
mod render;
mod value;

pub use catalog::{CatalogError, OptionCatalog, OptionClass, OptionKind, OptionSpec};
pub use merge::EffectiveOptions;
pub use render::render_args;
pub use value::{OptionMap, OptionValue};
