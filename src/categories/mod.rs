//! Labels for report kinds, resolved asynchronously the same way the app resolves them from its
//! catalog tables.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;


#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown category `{0}`")]
    UnknownCategory(String),
    #[error("failed to read the categories file: {0}")]
    Io(#[from] io::Error),
    #[error("line {line} of the categories file is not a valid category: {source}")]
    InvalidLine {
        line: usize,
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub label: String,
}

#[async_trait]
pub trait CategoryCatalog: Send + Sync {
    async fn label(&self, category_id: &str) -> Result<String, CatalogError>;

    async fn contains(&self, category_id: &str) -> bool {
        self.label(category_id).await.is_ok()
    }
}

#[derive(Clone, Debug, Default)]
pub struct InMemoryCategoryCatalog {
    labels: HashMap<String, String>,
}

impl InMemoryCategoryCatalog {
    pub fn new(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            labels: categories
                .into_iter()
                .map(|category| (category.id, category.label))
                .collect(),
        }
    }

    /// Reads one JSON category per line, skipping blank lines.
    pub fn from_ndjson(reader: impl BufRead) -> Result<Self, CatalogError> {
        let mut categories = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let category = serde_json::from_str(&line).map_err(|source| {
                CatalogError::InvalidLine {
                    line: index + 1,
                    source,
                }
            })?;
            categories.push(category);
        }
        Ok(Self::new(categories))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[async_trait]
impl CategoryCatalog for InMemoryCategoryCatalog {
    async fn label(&self, category_id: &str) -> Result<String, CatalogError> {
        self.labels
            .get(category_id)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownCategory(category_id.to_string()))
    }
}

pub fn init(path: &Path) -> InMemoryCategoryCatalog {
    let categories_file = File::open(path).expect("Failed to open the categories file.");
    let catalog = InMemoryCategoryCatalog::from_ndjson(BufReader::new(categories_file))
        .expect("Failed to load the categories file.");
    if catalog.is_empty() {
        tracing::warn!("The categories file is empty, every new report will be rejected.");
    } else {
        tracing::info!("Loaded {} report categories.", catalog.len());
    }
    catalog
}
