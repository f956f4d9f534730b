//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `catalog` - Question catalog sources (bundled, YAML file)
//! - `session` - Session stores (in-memory, file)
//! - `http` - axum router, handlers and views

pub mod catalog;
pub mod http;
pub mod session;

pub use catalog::{BuiltinCatalogSource, YamlCatalogSource};
pub use session::{FileSessionStore, InMemorySessionStore};
