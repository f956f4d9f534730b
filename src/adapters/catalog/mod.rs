//! Catalog Adapters
//!
//! Implementations of the CatalogSource port.
//!
//! - **BuiltinCatalogSource** - The eight questions bundled with the binary
//! - **YamlCatalogSource** - An administrator-maintained YAML file

mod builtin_catalog_source;
mod yaml_catalog_source;

pub use builtin_catalog_source::{BuiltinCatalogSource, BUILTIN_CATALOG_YAML};
pub use yaml_catalog_source::YamlCatalogSource;
