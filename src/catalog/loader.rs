use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::candidate::{Candidate, CandidatePool};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Duplicate candidate ID: {0}")]
    DuplicateCandidateId(String),
}

/// Read a catalog file: a JSON array of candidates, in ranking tie-break order.
pub fn load_catalog(path: &Path) -> Result<CandidatePool, CatalogError> {
    let f = fs::File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let candidates: Vec<Candidate> = serde_json::from_reader(BufReader::new(f))?;

    let pool = into_pool(candidates)?;
    let version = pool.version()?;
    tracing::debug!(
        path = %path.display(),
        candidates = pool.len(),
        version = version.as_str(),
        "catalog loaded"
    );
    Ok(pool)
}

/// Parse an in-memory catalog document.
pub fn parse_catalog(raw: &str) -> Result<CandidatePool, CatalogError> {
    let candidates: Vec<Candidate> = serde_json::from_str(raw)?;
    into_pool(candidates)
}

fn into_pool(candidates: Vec<Candidate>) -> Result<CandidatePool, CatalogError> {
    let pool = CandidatePool::new(candidates);
    if let Some(id) = pool.first_duplicate() {
        return Err(CatalogError::DuplicateCandidateId(id.as_str().to_string()));
    }
    Ok(pool)
}
