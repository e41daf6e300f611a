// file: src/extractor/patterns.rs
// description: compiled regex patterns for indicator extraction
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Network indicators
    pub static ref IPV4: Regex = Regex::new(
        r"(?i)\b(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\b"
    ).expect("IPV4 regex is valid");

    pub static ref IPV6: Regex = Regex::new(
        r"(?i)\b(?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}\b|\b(?:(?:[0-9a-fA-F]{1,4}(?::[0-9a-fA-F]{1,4})*)?)::(?:(?:[0-9a-fA-F]{1,4}(?::[0-9a-fA-F]{1,4})*)?)\b"
    ).expect("IPV6 regex is valid");

    pub static ref URL: Regex = Regex::new(
        r#"(?i)https?://[^\s/$.?#].[^\s"]*"#
    ).expect("URL regex is valid");

    // Broad on purpose: over-matches are refined by the domain filter.
    pub static ref DOMAIN: Regex = Regex::new(
        r"(?i)\b(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}\b"
    ).expect("DOMAIN regex is valid");

    pub static ref EMAIL: Regex = Regex::new(
        r"(?i)\b[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}\b"
    ).expect("EMAIL regex is valid");

    // File hashes, length-exact and word-bounded
    pub static ref MD5_HASH: Regex = Regex::new(
        r"(?i)\b[a-fA-F0-9]{32}\b"
    ).expect("MD5_HASH regex is valid");

    pub static ref SHA1_HASH: Regex = Regex::new(
        r"(?i)\b[a-fA-F0-9]{40}\b"
    ).expect("SHA1_HASH regex is valid");

    pub static ref SHA256_HASH: Regex = Regex::new(
        r"(?i)\b[a-fA-F0-9]{64}\b"
    ).expect("SHA256_HASH regex is valid");

    pub static ref SHA512_HASH: Regex = Regex::new(
        r"(?i)\b[a-fA-F0-9]{128}\b"
    ).expect("SHA512_HASH regex is valid");

    // Vulnerability and technique identifiers
    pub static ref CVE: Regex = Regex::new(
        r"(?i)\bCVE-\d{4}-\d{4,7}\b"
    ).expect("CVE regex is valid");

    pub static ref ATTACK_TECHNIQUE: Regex = Regex::new(
        r"(?i)\bT\d{4}(?:\.\d{3})?\b"
    ).expect("ATTACK_TECHNIQUE regex is valid");

    // Cryptocurrency addresses: legacy Base58 or Bech32
    pub static ref BTC_ADDRESS: Regex = Regex::new(
        r"(?i)\b(?:[13][a-km-zA-HJ-NP-Z1-9]{25,34}|bc1[ac-hj-np-z02-9]{11,71})\b"
    ).expect("BTC_ADDRESS regex is valid");
}
