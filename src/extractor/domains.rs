// file: src/extractor/domains.rs
// description: domain candidate filtering against urls, allowlist and ip literals
// reference: threat intelligence ioc standards

use std::collections::{BTreeSet, HashSet};
use tracing::debug;
use url::Url;

/// Domains that show up in nearly every article without being indicators.
pub const DEFAULT_ALLOWLIST: &[&str] = &[
    "google.com",
    "www.google.com",
    "github.com",
    "microsoft.com",
    "twitter.com",
    "facebook.com",
    "linkedin.com",
    "apple.com",
    "schemas.android.com",
    "www.w3.org",
    "purl.org",
    "xmlns.com",
    "example.com",
    "tools.ietf.org",
    "www.recordedfuture.com",
    "bleepingcomputer.com",
    "krebsonsecurity.com",
    "thehackernews.com",
];

pub fn default_allowlist() -> HashSet<String> {
    DEFAULT_ALLOWLIST.iter().map(|d| d.to_string()).collect()
}

/// Refines the broad domain matches: a candidate survives only when it is
/// not the netloc of an extracted URL, not allowlisted, and no extracted
/// IPv4 literal appears inside it as a substring. The IP check is literal
/// string containment, not a host comparison. Output is sorted ascending.
pub fn filter_domains(
    candidates: BTreeSet<String>,
    urls: &BTreeSet<String>,
    ipv4: &BTreeSet<String>,
    allowlist: &HashSet<String>,
) -> Vec<String> {
    let mut url_domains = HashSet::new();
    for url in urls {
        match suppression_key(url) {
            Some(netloc) => {
                url_domains.insert(netloc);
            }
            None => debug!("Unparseable URL skipped for domain suppression: {}", url),
        }
    }

    // BTreeSet iteration keeps the survivors lexicographically sorted
    candidates
        .into_iter()
        .filter(|d| {
            let lower = d.to_ascii_lowercase();
            !url_domains.contains(&lower)
                && !allowlist.contains(&lower)
                && !ipv4.iter().any(|ip| d.contains(ip.as_str()))
        })
        .collect()
}

/// Lowercased netloc of a URL with a leading `www.` removed; None when the
/// URL does not parse.
fn suppression_key(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;

    let mut netloc = host.to_string();
    if let Some(port) = parsed.port() {
        netloc.push(':');
        netloc.push_str(&port.to_string());
    }

    let netloc = match netloc.strip_prefix("www.") {
        Some(stripped) => stripped.to_string(),
        None => netloc,
    };
    Some(netloc.to_ascii_lowercase())
}
