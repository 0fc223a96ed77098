use crate::domain::models::Ayah;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    #[error("data file not found: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read data file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed data file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads and decodes the whole dataset. The file handle does not outlive this call.
pub fn load_dataset(path: &Path) -> Result<Vec<Ayah>, DatasetError> {
    log::debug!("loading dataset from {}", path.display());
    let raw = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            DatasetError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            DatasetError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let ayahs: Vec<Ayah> = serde_json::from_str(&raw).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("loaded {} ayahs from {}", ayahs.len(), path.display());
    Ok(ayahs)
}
