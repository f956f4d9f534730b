//! YAML file catalog source.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::survey::QuestionCatalog;
use crate::ports::CatalogSource;

/// Loads the catalog from a YAML file of the form
///
/// ```yaml
/// questions:
///   - page_number: 1
///     prompt: Date style
///     description: ...
///     option_a_label: ...
///     option_b_label: ...
/// ```
#[derive(Debug, Clone)]
pub struct YamlCatalogSource {
    path: PathBuf,
}

impl YamlCatalogSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl CatalogSource for YamlCatalogSource {
    async fn load(&self) -> Result<QuestionCatalog, DomainError> {
        let yaml = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::new(
                ErrorCode::CatalogUnavailable,
                format!("Failed to read catalog: {}", e),
            )
            .with_detail("path", self.path.display().to_string())
        })?;

        let catalog = QuestionCatalog::from_yaml(&yaml).map_err(|e| {
            DomainError::from(e).with_detail("path", self.path.display().to_string())
        })?;

        tracing::info!(
            path = %self.path.display(),
            questions = catalog.len(),
            "Loaded question catalog"
        );
        Ok(catalog)
    }
}
