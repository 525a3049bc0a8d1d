//! Decoded snapshot loading.
//!
//! Binary columnar decoding is an upstream concern; this crate consumes the
//! decoded form serialized as JSON: the file's raw schema plus row-major
//! value pages. A snapshot is loaded fresh on every invocation — nothing is
//! cached across view switches.

use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{data::RawValue, schema::RawColumnDescriptor};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("reading snapshot file")]
    Io(#[from] std::io::Error),
    #[error("parsing snapshot JSON")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub schema: Vec<RawColumnDescriptor>,
    #[serde(default)]
    pub rows: Vec<Vec<RawValue>>,
}

impl Snapshot {
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let snapshot = serde_json::from_reader(reader)?;
        Ok(snapshot)
    }
}
