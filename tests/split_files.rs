//! End-to-end test: read a manifest file, split it, write the shard
//! files, and check that the shards together reconstruct the input.

use std::collections::BTreeMap;
use std::fs;
use syncsplit::{codec, partition, Manifest};
use tempfile::tempdir;

const SOURCE: &str = r#"
quay.io:
  images:
    org/alpha:
      - v1.0
      - v1.1
    org/bravo:
      - latest
    org/charlie:
      - v2.0
  images-by-tag-regex:
    org/nightly: "^nightly-.*"
  images-by-semver:
    org/lib:
      - ">=1.0 <2.0"
registry.example.com:
  images:
    team/tool:
      - stable
"#;

#[test]
fn split_round_trip() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("sync.yaml");
    fs::write(&source, SOURCE).unwrap();

    let manifest = codec::read_manifest(&source).unwrap();
    assert_eq!(manifest.registries.len(), 2);
    assert_eq!(manifest.entry_count(), 6);

    let shards = partition(&manifest, 3).unwrap();
    let dest = dir.path().join("out");
    let written = codec::write_shards(&dest, &shards).unwrap();
    assert_eq!(written.len(), 3);

    // Decode every shard file and merge the entries back together.
    let mut merged = Manifest::default();
    for (index, path) in written.iter().enumerate() {
        assert_eq!(*path, dest.join(format!("sync-shard-{}.yaml", index)));
        let shard = codec::read_manifest(path).unwrap();

        // Every registry appears in every shard file.
        for registry in manifest.registries.keys() {
            assert!(shard.registries.contains_key(registry));
        }

        for (registry, bundle) in shard.registries {
            let target = merged.registries.entry(registry).or_default();
            merge_disjoint(&mut target.images, bundle.images);
            merge_disjoint(&mut target.images_by_tag_regex, bundle.images_by_tag_regex);
            merge_disjoint(&mut target.images_by_semver, bundle.images_by_semver);
        }
    }

    assert_eq!(merged, manifest);
}

#[test]
fn single_shard_file_matches_source() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("sync.yaml");
    fs::write(&source, SOURCE).unwrap();

    let manifest = codec::read_manifest(&source).unwrap();
    let shards = partition(&manifest, 1).unwrap();
    let written = codec::write_shards(dir.path(), &shards).unwrap();

    let decoded = codec::read_manifest(&written[0]).unwrap();
    assert_eq!(decoded, manifest);
}

fn merge_disjoint<V>(target: &mut BTreeMap<String, V>, source: BTreeMap<String, V>) {
    for (key, value) in source {
        assert!(
            target.insert(key.clone(), value).is_none(),
            "key {} appeared in more than one shard",
            key
        );
    }
}
