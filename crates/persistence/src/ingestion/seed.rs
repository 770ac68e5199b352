//! Seed document sources.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::error::{IngestionError, StorageResult};
use crate::types::CourseDocument;

const EMBEDDED_SEED: &str = include_str!("../../data/sample-courses.json");

/// Where seed documents are read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SeedSource {
    /// The sample catalog bundled with the crate.
    #[default]
    Embedded,
    /// A JSON file on disk holding a list of course documents.
    File(PathBuf),
}

impl SeedSource {
    /// Returns a description of the source for logs and errors.
    pub fn origin(&self) -> String {
        match self {
            SeedSource::Embedded => "embedded:sample-courses.json".to_string(),
            SeedSource::File(path) => path.display().to_string(),
        }
    }

    /// Reads, parses, and validates the seed documents.
    ///
    /// # Errors
    ///
    /// * `IngestionError::SeedUnreadable` - the file could not be read
    /// * `IngestionError::SeedMalformed` - the content is not a list of courses
    /// * `IngestionError::InvalidSeed` - a document has an empty or duplicate id
    pub async fn load(&self) -> StorageResult<Vec<CourseDocument>> {
        let content = match self {
            SeedSource::Embedded => EMBEDDED_SEED.to_string(),
            SeedSource::File(path) => {
                tokio::fs::read_to_string(path).await.map_err(|source| {
                    IngestionError::SeedUnreadable {
                        path: path.clone(),
                        source,
                    }
                })?
            }
        };

        let documents = parse_seed(&content, &self.origin())?;
        validate_seed(&documents)?;
        Ok(documents)
    }
}

fn parse_seed(content: &str, origin: &str) -> Result<Vec<CourseDocument>, IngestionError> {
    serde_json::from_str(content).map_err(|source| IngestionError::SeedMalformed {
        origin: origin.to_string(),
        source,
    })
}

fn validate_seed(documents: &[CourseDocument]) -> Result<(), IngestionError> {
    let mut seen = HashSet::with_capacity(documents.len());
    for (position, doc) in documents.iter().enumerate() {
        if doc.id.trim().is_empty() {
            return Err(IngestionError::InvalidSeed {
                message: format!("document at position {} has an empty id", position),
            });
        }
        if !seen.insert(doc.id.as_str()) {
            return Err(IngestionError::InvalidSeed {
                message: format!("duplicate id '{}'", doc.id),
            });
        }
    }
    Ok(())
}
