//! Reading and writing manifest files.
//!
//! The on-disk format is YAML: registry name at the top level, with the
//! optional `images`, `images-by-tag-regex` and `images-by-semver`
//! mappings underneath. Shard files are written with all three mappings
//! present (empty where a shard received nothing) so every file decodes
//! back into a structurally complete manifest.

use crate::error::{Error, Result};
use crate::manifest::Manifest;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name for the shard with the given index.
pub fn shard_file_name(index: usize) -> String {
    format!("sync-shard-{}.yaml", index)
}

/// Read and decode a manifest from a YAML file.
pub fn read_manifest(path: &Path) -> Result<Manifest> {
    let raw = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let manifest: Manifest = serde_yaml::from_str(&raw).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        registries = manifest.registries.len(),
        entries = manifest.entry_count(),
        "loaded manifest"
    );
    Ok(manifest)
}

/// Encode each shard to YAML and write one file per shard into `dir`,
/// named by shard index. The directory is created if absent.
///
/// Returns the written paths in shard order.
pub fn write_shards(dir: &Path, shards: &[Manifest]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|source| Error::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(shards.len());
    for (index, shard) in shards.iter().enumerate() {
        let path = dir.join(shard_file_name(index));
        let yaml = serde_yaml::to_string(shard).map_err(|source| Error::Encode {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, yaml).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), entries = shard.entry_count(), "wrote shard");
        written.push(path);
    }
    Ok(written)
}
