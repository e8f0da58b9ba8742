//! Landmark catalog loaded from a JSON file on disk.

use std::path::{Path, PathBuf};

use treasurehunt_domain::{CatalogError, LandmarkCatalog};

/// Reads the landmark catalog document from a file.
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the catalog.
    ///
    /// # Errors
    ///
    /// - `CatalogError::Io` if the file cannot be read
    /// - `CatalogError::Malformed` if the document fails validation
    pub async fn load(&self) -> Result<LandmarkCatalog, CatalogError> {
        let path = self.path.display();
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::io(format!("{}: {}", path, e)))?;

        let catalog = LandmarkCatalog::load(&contents)?;

        tracing::info!(
            path = %self.path.display(),
            landmarks = catalog.size(),
            "Loaded landmark catalog"
        );
        for landmark in &catalog {
            tracing::debug!(
                landmark_id = %landmark.id(),
                coordinate = %landmark.coordinate(),
                "Landmark"
            );
        }

        Ok(catalog)
    }
}
