//! Catalog source port.
//!
//! The question bank is maintained outside the running service; this port
//! loads it once at startup.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::survey::QuestionCatalog;

/// Port for loading the question catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load and validate the full catalog.
    ///
    /// # Errors
    ///
    /// - `CatalogUnavailable` if the source cannot be read
    /// - `ValidationFailed` if the questions break the page invariants
    async fn load(&self) -> Result<QuestionCatalog, DomainError>;
}
