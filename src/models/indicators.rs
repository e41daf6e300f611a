// file: src/models/indicators.rs
// description: indicator categories and the per-article extraction result
// reference: threat intelligence ioc standards

use crate::extractor::patterns;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IndicatorCategory {
    Ipv4,
    Ipv6,
    Url,
    Domain,
    Email,
    HashMd5,
    HashSha1,
    HashSha256,
    HashSha512,
    Cve,
    AttackTechnique,
    BtcAddress,
}

impl IndicatorCategory {
    pub const ALL: [IndicatorCategory; 12] = [
        IndicatorCategory::Ipv4,
        IndicatorCategory::Ipv6,
        IndicatorCategory::Url,
        IndicatorCategory::Domain,
        IndicatorCategory::Email,
        IndicatorCategory::HashMd5,
        IndicatorCategory::HashSha1,
        IndicatorCategory::HashSha256,
        IndicatorCategory::HashSha512,
        IndicatorCategory::Cve,
        IndicatorCategory::AttackTechnique,
        IndicatorCategory::BtcAddress,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorCategory::Ipv4 => "ipv4",
            IndicatorCategory::Ipv6 => "ipv6",
            IndicatorCategory::Url => "url",
            IndicatorCategory::Domain => "domain",
            IndicatorCategory::Email => "email",
            IndicatorCategory::HashMd5 => "md5",
            IndicatorCategory::HashSha1 => "sha1",
            IndicatorCategory::HashSha256 => "sha256",
            IndicatorCategory::HashSha512 => "sha512",
            IndicatorCategory::Cve => "cve",
            IndicatorCategory::AttackTechnique => "attack_technique",
            IndicatorCategory::BtcAddress => "btc_address",
        }
    }

    /// One compiled matcher per variant; the extractor iterates `ALL` and
    /// dispatches here instead of looking patterns up by name.
    pub fn pattern(&self) -> &'static Regex {
        match self {
            IndicatorCategory::Ipv4 => &patterns::IPV4,
            IndicatorCategory::Ipv6 => &patterns::IPV6,
            IndicatorCategory::Url => &patterns::URL,
            IndicatorCategory::Domain => &patterns::DOMAIN,
            IndicatorCategory::Email => &patterns::EMAIL,
            IndicatorCategory::HashMd5 => &patterns::MD5_HASH,
            IndicatorCategory::HashSha1 => &patterns::SHA1_HASH,
            IndicatorCategory::HashSha256 => &patterns::SHA256_HASH,
            IndicatorCategory::HashSha512 => &patterns::SHA512_HASH,
            IndicatorCategory::Cve => &patterns::CVE,
            IndicatorCategory::AttackTechnique => &patterns::ATTACK_TECHNIQUE,
            IndicatorCategory::BtcAddress => &patterns::BTC_ADDRESS,
        }
    }
}

/// Per-category match sets before cross-category resolution. Values dedupe
/// within their category; categories are not mutually exclusive here.
#[derive(Debug, Clone, Default)]
pub struct RawMatches {
    matches: BTreeMap<IndicatorCategory, BTreeSet<String>>,
}

impl RawMatches {
    pub fn insert(&mut self, category: IndicatorCategory, value: String) {
        self.matches.entry(category).or_default().insert(value);
    }

    pub fn get(&self, category: IndicatorCategory) -> Option<&BTreeSet<String>> {
        self.matches.get(&category)
    }

    pub fn take(&mut self, category: IndicatorCategory) -> BTreeSet<String> {
        self.matches.remove(&category).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.values().all(BTreeSet::is_empty)
    }
}

/// Hash indicators keyed by algorithm. Empty buckets are omitted from the
/// serialized form, and the whole structure is omitted by `ExtractionResult`
/// when every bucket is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashBuckets {
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub md5: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub sha1: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub sha256: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub sha512: BTreeSet<String>,
}

impl HashBuckets {
    pub fn is_empty(&self) -> bool {
        self.md5.is_empty() && self.sha1.is_empty() && self.sha256.is_empty() && self.sha512.is_empty()
    }

    pub fn len(&self) -> usize {
        self.md5.len() + self.sha1.len() + self.sha256.len() + self.sha512.len()
    }
}

/// Final per-article indicator mapping. Every key present after
/// serialization has a non-empty value; `domains` is the only category with
/// a guaranteed order (lexicographic ascending).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub ipv4: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub ipv6: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub urls: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub emails: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub cve: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub attack_techniques: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub btc_addresses: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub domains: Vec<String>,
    #[serde(default, skip_serializing_if = "HashBuckets::is_empty")]
    pub hashes: HashBuckets,
}

impl ExtractionResult {
    /// Total indicator values across all categories and hash buckets.
    pub fn indicator_count(&self) -> usize {
        self.ipv4.len()
            + self.ipv6.len()
            + self.urls.len()
            + self.emails.len()
            + self.cve.len()
            + self.attack_techniques.len()
            + self.btc_addresses.len()
            + self.domains.len()
            + self.hashes.len()
    }

    /// Number of top-level keys a serialized result carries; `hashes`
    /// counts once regardless of how many buckets are populated.
    pub fn category_count(&self) -> usize {
        [
            !self.ipv4.is_empty(),
            !self.ipv6.is_empty(),
            !self.urls.is_empty(),
            !self.emails.is_empty(),
            !self.cve.is_empty(),
            !self.attack_techniques.is_empty(),
            !self.btc_addresses.is_empty(),
            !self.domains.is_empty(),
            !self.hashes.is_empty(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.indicator_count() == 0
    }

    pub fn summary(&self) -> String {
        format!(
            "{} indicators across {} categories",
            self.indicator_count(),
            self.category_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_result_serializes_to_empty_object() {
        let result = ExtractionResult::default();
        assert_eq!(serde_json::to_string(&result).unwrap(), "{}");
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_hash_buckets_are_omitted() {
        let mut result = ExtractionResult::default();
        result.hashes.md5.insert("d41d8cd98f00b204e9800998ecf8427e".to_string());

        let json = serde_json::to_value(&result).unwrap();
        let hashes = json.get("hashes").unwrap();

        assert!(hashes.get("md5").is_some());
        assert!(hashes.get("sha1").is_none());
        assert!(hashes.get("sha256").is_none());
        assert!(hashes.get("sha512").is_none());
    }

    #[test]
    fn test_counts_and_summary() {
        let mut result = ExtractionResult::default();
        result.ipv4.insert("8.8.8.8".to_string());
        result.urls.insert("http://evil-c2.com/gate.php".to_string());
        result.hashes.md5.insert("d41d8cd98f00b204e9800998ecf8427e".to_string());
        result.hashes.sha512.insert("ab".repeat(64));
        result.domains.push("attacker.net".to_string());

        assert_eq!(result.indicator_count(), 5);
        assert_eq!(result.category_count(), 4);
        assert_eq!(result.summary(), "5 indicators across 4 categories");
    }

    #[test]
    fn test_round_trip() {
        let mut result = ExtractionResult::default();
        result.cve.insert("CVE-2023-12345".to_string());
        result.domains.push("attacker.net".to_string());

        let json = serde_json::to_string(&result).unwrap();
        let back: ExtractionResult = serde_json::from_str(&json).unwrap();

        assert_eq!(result, back);
    }

    #[test]
    fn test_raw_matches_dedupe() {
        let mut raw = RawMatches::default();
        raw.insert(IndicatorCategory::Ipv4, "1.2.3.4".to_string());
        raw.insert(IndicatorCategory::Ipv4, "1.2.3.4".to_string());

        assert_eq!(raw.get(IndicatorCategory::Ipv4).unwrap().len(), 1);
        assert!(raw.get(IndicatorCategory::Domain).is_none());
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(IndicatorCategory::Ipv4.as_str(), "ipv4");
        assert_eq!(IndicatorCategory::HashSha256.as_str(), "sha256");
        assert_eq!(IndicatorCategory::AttackTechnique.as_str(), "attack_technique");
        assert_eq!(IndicatorCategory::ALL.len(), 12);
    }
}
