// file: src/extractor/ioc.rs
// description: indicator extraction engine over normalized article text
// reference: threat intelligence ioc standards

use crate::extractor::{domains, hashes};
use crate::models::{ExtractionResult, IndicatorCategory, RawMatches};
use crate::parser::TextNormalizer;
use regex::Match;
use std::collections::HashSet;

/// Stateless extraction engine. The allowlist is fixed at construction and
/// never mutated afterwards, so one extractor can serve many documents from
/// concurrent callers. `extract` is total: any input string, including the
/// empty string, yields a result rather than an error.
pub struct IocExtractor {
    normalizer: TextNormalizer,
    allowlist: HashSet<String>,
}

impl IocExtractor {
    pub fn new() -> Self {
        Self::with_allowlist(domains::default_allowlist())
    }

    pub fn with_allowlist(allowlist: HashSet<String>) -> Self {
        let allowlist = allowlist.into_iter().map(|d| d.to_ascii_lowercase()).collect();

        Self {
            normalizer: TextNormalizer::new(),
            allowlist,
        }
    }

    /// Full pipeline over one document: markup strip and defang reversal,
    /// category matching, hash overlap resolution, domain filtering,
    /// assembly of the final mapping.
    pub fn extract(&self, raw_content: &str) -> ExtractionResult {
        let text = self.normalizer.normalize(raw_content);
        let mut raw = Self::raw_matches(&text);

        let urls = raw.take(IndicatorCategory::Url);
        let ipv4 = raw.take(IndicatorCategory::Ipv4);

        let hashes = hashes::classify(
            raw.take(IndicatorCategory::HashMd5),
            raw.take(IndicatorCategory::HashSha1),
            raw.take(IndicatorCategory::HashSha256),
            raw.take(IndicatorCategory::HashSha512),
        );

        let domains = domains::filter_domains(
            raw.take(IndicatorCategory::Domain),
            &urls,
            &ipv4,
            &self.allowlist,
        );

        ExtractionResult {
            ipv4,
            ipv6: raw.take(IndicatorCategory::Ipv6),
            urls,
            emails: raw.take(IndicatorCategory::Email),
            cve: raw.take(IndicatorCategory::Cve),
            attack_techniques: raw.take(IndicatorCategory::AttackTechnique),
            btc_addresses: raw.take(IndicatorCategory::BtcAddress),
            domains,
            hashes,
        }
    }

    /// Runs every category matcher over the whole text independently;
    /// categories are not mutually exclusive at this stage, matches dedupe
    /// within their category.
    pub fn raw_matches(text: &str) -> RawMatches {
        let mut raw = RawMatches::default();

        for category in IndicatorCategory::ALL {
            for m in category.pattern().find_iter(text) {
                if let Some(value) = refine_match(category, text, &m) {
                    raw.insert(category, value);
                }
            }
        }

        raw
    }
}

impl Default for IocExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-occurrence cleanup of the broad patterns: a domain match directly
/// preceded by `@` is the remainder of an email address, not a standalone
/// domain, and URL matches shed the trailing prose punctuation the pattern
/// drags in.
fn refine_match(category: IndicatorCategory, text: &str, m: &Match) -> Option<String> {
    match category {
        IndicatorCategory::Domain if m.start() > 0 && text.as_bytes()[m.start() - 1] == b'@' => None,
        IndicatorCategory::Url => {
            Some(m.as_str().trim_end_matches(['.', ',', ';', ':', '!', '?', ')']).to_string())
        }
        _ => Some(m.as_str().to_string()),
    }
}
