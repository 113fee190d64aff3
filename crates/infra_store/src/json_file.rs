//! JSON file backend
//!
//! Stores each collection in its own file inside a data directory:
//!
//! ```text
//! <data_dir>/policyholders.json   { "PH001": { "policyholder_id": "PH001", ... }, ... }
//! <data_dir>/claims.json          { "CL001": { "claim_id": "CL001", ... }, ... }
//! ```
//!
//! Every save rewrites both files completely. Each file is written to a
//! temporary sibling first and then renamed over the original.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use core_kernel::{ClaimId, PolicyholderId};
use domain_claims::Claim;
use domain_policyholder::Policyholder;

use crate::backend::{Records, StorageBackend};
use crate::error::StorageError;

pub const POLICYHOLDERS_FILE: &str = "policyholders.json";
pub const CLAIMS_FILE: &str = "claims.json";

/// Backend persisting records as JSON files in a directory
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    dir: PathBuf,
}

impl JsonFileBackend {
    /// Creates a backend rooted at `dir`
    ///
    /// The directory is created on the first save if it does not exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn policyholders_path(&self) -> PathBuf {
        self.dir.join(POLICYHOLDERS_FILE)
    }

    pub fn claims_path(&self) -> PathBuf {
        self.dir.join(CLAIMS_FILE)
    }
}

impl StorageBackend for JsonFileBackend {
    fn load(&self) -> Result<Records, StorageError> {
        let policyholders: BTreeMap<PolicyholderId, Policyholder> =
            read_collection(&self.policyholders_path())?;
        let claims: BTreeMap<ClaimId, Claim> = read_collection(&self.claims_path())?;

        // Records carry their own id; the map key is only an index
        Ok(Records {
            policyholders: policyholders
                .into_values()
                .map(|holder| (holder.id(), holder))
                .collect(),
            claims: claims.into_values().map(|claim| (claim.id(), claim)).collect(),
        })
    }

    fn save(&self, records: &Records) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|e| StorageError::io(&self.dir, e))?;
        write_collection(&self.policyholders_path(), &records.policyholders)?;
        write_collection(&self.claims_path(), &records.claims)?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("json files in '{}'", self.dir.display())
    }
}

fn read_collection<K, V>(path: &Path) -> Result<BTreeMap<K, V>, StorageError>
where
    K: Ord + DeserializeOwned,
    V: DeserializeOwned,
{
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "Data file not found, starting empty");
            return Ok(BTreeMap::new());
        }
        Err(e) => return Err(StorageError::io(path, e)),
    };

    serde_json::from_slice(&bytes).map_err(|e| StorageError::serialization(path, e))
}

fn write_collection<K, V>(path: &Path, collection: &BTreeMap<K, V>) -> Result<(), StorageError>
where
    K: Serialize,
    V: Serialize,
{
    let json =
        serde_json::to_vec_pretty(collection).map_err(|e| StorageError::serialization(path, e))?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).map_err(|e| StorageError::io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| StorageError::io(path, e))?;
    Ok(())
}
