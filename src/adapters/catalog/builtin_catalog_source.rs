//! Bundled question catalog.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::survey::QuestionCatalog;
use crate::ports::CatalogSource;

/// Catalog document compiled into the binary.
pub const BUILTIN_CATALOG_YAML: &str = include_str!("../../../data/questions.yaml");

/// Serves the bundled eight-question catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalogSource;

impl BuiltinCatalogSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CatalogSource for BuiltinCatalogSource {
    async fn load(&self) -> Result<QuestionCatalog, DomainError> {
        Ok(QuestionCatalog::from_yaml(BUILTIN_CATALOG_YAML)?)
    }
}
