//! # JSON
//!
//! a bridge to load block sequences exported as JSON by a node

use crate::blockchain::BlockSequence;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The result type returned by the json loader
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Describe an error while loading a block sequence
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{} is not a valid block sequence: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// a bridge to read block sequences out of JSON documents
pub struct JsonBridge;

impl JsonBridge {
    /// Load the block sequence stored at `path`.
    ///
    /// The document must be an array of arrays of transaction identifiers
    pub fn load<P>(path: P) -> LoaderResult<BlockSequence>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        debug!("opening {}", path.display());
        let file = File::open(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            if source.is_io() {
                LoaderError::Io {
                    path: path.to_path_buf(),
                    source: source.into(),
                }
            } else {
                LoaderError::Json {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })
    }
}
