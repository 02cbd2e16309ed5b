//! Deterministic splitter for image-sync manifests.
//!
//! This crate takes one sync manifest (registry name → image collections)
//! and divides it into N shard manifests so that a large registry
//! mirroring job can be run by N workers, each on a disjoint slice of
//! the total work.
//!
//! # Example
//!
//! ```rust
//! use syncsplit::{partition, Manifest, RegistryBundle};
//!
//! let mut bundle = RegistryBundle::default();
//! bundle.images.insert("org/a".to_string(), vec!["v1".to_string(), "v2".to_string()]);
//! bundle.images.insert("org/b".to_string(), vec!["v1".to_string()]);
//!
//! let mut manifest = Manifest::default();
//! manifest.registries.insert("quay.io".to_string(), bundle);
//!
//! let shards = partition(&manifest, 2)?;
//! assert_eq!(shards.len(), 2);
//! assert!(shards[0].registries["quay.io"].images.contains_key("org/a"));
//! assert!(shards[1].registries["quay.io"].images.contains_key("org/b"));
//! # Ok::<(), syncsplit::Error>(())
//! ```
//!
//! # How entries are divided
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │ quay.io:                                   │
//! │   images: a, b, c, d        (sorted keys)  │
//! │   images-by-tag-regex: x, y                │
//! └────────────────────────────────────────────┘
//!           │ round-robin per collection, N=2
//!           ▼
//! shard 0: images: a, c   regex: x
//! shard 1: images: b, d   regex: y
//! ```
//!
//! Each collection of each registry is dealt out independently, so a
//! repository listed under both `images` and `images-by-semver` may end
//! up in different shards for the two rules. Every registry name appears
//! in every shard, which keeps each shard file valid on its own and
//! mergeable back into a whole.

pub mod codec;
pub mod error;
pub mod manifest;
pub mod partition;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use manifest::{Manifest, RegistryBundle};
pub use partition::partition;
