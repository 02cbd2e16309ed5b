//! Data model for image-sync manifests.
//!
//! A manifest maps registry names to the images to copy from that
//! registry. Each registry carries three independent collections:
//! exact image/tag lists, tag-regex rules, and semver-range rules.
//! The regex and semver expressions are carried verbatim; evaluating
//! them against real registry tags is the sync workers' job.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Image references to synchronize from a single registry.
///
/// The three collections are independent of one another: a repository
/// listed under `images` may also appear under `images_by_semver`, and
/// the two entries are partitioned separately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryBundle {
    /// Image repository mapped to the exact tags to copy.
    #[serde(default)]
    pub images: BTreeMap<String, Vec<String>>,

    /// Image repository mapped to a tag-matching regex pattern.
    #[serde(default, rename = "images-by-tag-regex")]
    pub images_by_tag_regex: BTreeMap<String, String>,

    /// Image repository mapped to semver range expressions.
    #[serde(default, rename = "images-by-semver")]
    pub images_by_semver: BTreeMap<String, Vec<String>>,
}

impl RegistryBundle {
    /// Total number of entries across the three collections.
    pub fn len(&self) -> usize {
        self.images.len() + self.images_by_tag_regex.len() + self.images_by_semver.len()
    }

    /// Check whether the bundle holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A full sync manifest: registry name mapped to its [`RegistryBundle`].
///
/// Registries and image repositories are kept in `BTreeMap`s so that key
/// enumeration is sorted. Shard membership of a given key therefore stays
/// stable across runs instead of depending on hash-map iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Registry name mapped to the images to pull from it.
    #[serde(flatten)]
    pub registries: BTreeMap<String, RegistryBundle>,
}

impl Manifest {
    /// Total number of entries across all registries and collections.
    pub fn entry_count(&self) -> usize {
        self.registries.values().map(RegistryBundle::len).sum()
    }
}
