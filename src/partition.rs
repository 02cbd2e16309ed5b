//! Round-robin partitioning of sync manifests.
//!
//! Splits one manifest into N disjoint shard manifests so that a large
//! sync job can run on N workers in parallel. Each collection of each
//! registry is dealt out independently: the i-th key (in sorted order)
//! goes to shard `i % N`. The counter restarts for every collection, so
//! balance holds per collection per registry rather than globally.

use crate::error::{Error, Result};
use crate::manifest::{Manifest, RegistryBundle};
use std::collections::BTreeMap;

/// Split a manifest into `shards` disjoint manifests.
///
/// Every key of every collection lands in exactly one output shard, and
/// every registry name appears in every shard (with empty collections
/// where a shard received nothing), so each shard file stands on its own
/// as a valid manifest.
///
/// A collection of size `k` contributes `k / shards` or `k / shards + 1`
/// entries to each shard. An empty manifest yields `shards` empty
/// manifests.
///
/// Returns [`Error::Config`] when `shards` is zero.
pub fn partition(manifest: &Manifest, shards: usize) -> Result<Vec<Manifest>> {
    if shards == 0 {
        return Err(Error::Config("shard count must be at least 1".to_string()));
    }

    let mut outputs = vec![Manifest::default(); shards];

    for (registry, bundle) in &manifest.registries {
        // Per-shard slots for this registry, filled independently per
        // collection, then installed into the outputs in shard order.
        let mut slots = vec![RegistryBundle::default(); shards];

        deal(&bundle.images, &mut slots, |b| &mut b.images);
        deal(&bundle.images_by_tag_regex, &mut slots, |b| {
            &mut b.images_by_tag_regex
        });
        deal(&bundle.images_by_semver, &mut slots, |b| {
            &mut b.images_by_semver
        });

        for (output, slot) in outputs.iter_mut().zip(slots) {
            output.registries.insert(registry.clone(), slot);
        }
    }

    Ok(outputs)
}

/// Deal a collection's entries round-robin across the shard slots.
fn deal<V: Clone>(
    collection: &BTreeMap<String, V>,
    slots: &mut [RegistryBundle],
    select: impl Fn(&mut RegistryBundle) -> &mut BTreeMap<String, V>,
) {
    for (i, (key, value)) in collection.iter().enumerate() {
        select(&mut slots[i % slots.len()]).insert(key.clone(), value.clone());
    }
}
