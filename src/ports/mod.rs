//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionStore` - Per-session answer accumulator storage
//! - `CatalogSource` - Loads the question catalog at startup

mod catalog_source;
mod survey_session_store;

pub use catalog_source::CatalogSource;
pub use survey_session_store::SessionStore;
