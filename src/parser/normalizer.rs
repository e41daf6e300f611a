// file: src/parser/normalizer.rs
// description: plain-text normalization and defang reversal
// reference: common ioc defanging conventions

use crate::parser::html::HtmlStripper;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BRACKETED_AT: Regex = Regex::new(r"(?i)\[(at|@)\]").expect("BRACKETED_AT regex is valid");
    static ref BRACKETED_COLON: Regex =
        Regex::new(r"(?i)\[(colon|:)\]").expect("BRACKETED_COLON regex is valid");
}

/// Turns raw article content into text the pattern catalog can match:
/// markup is stripped first, then common defanging obfuscations are
/// reversed. The markup-stripping half is exposed separately because the
/// summarizer needs the identical plain text without refanging.
pub struct TextNormalizer {
    stripper: HtmlStripper,
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self {
            stripper: HtmlStripper::new(),
        }
    }

    /// Markup-stripped plain text only.
    pub fn plain_text(&self, raw: &str) -> String {
        self.stripper.strip(raw)
    }

    /// Markup-stripped plain text with defanging reversed.
    pub fn normalize(&self, raw: &str) -> String {
        Self::refang(&self.plain_text(raw))
    }

    /// Substitution order matters: bracketed dots first, then the scheme
    /// rewrites (case-sensitive literals), then bracketed at-signs and
    /// colons (case-insensitive). Re-running this on its own output is a
    /// no-op.
    pub fn refang(text: &str) -> String {
        let text = text.replace("[.]", ".").replace("(.)", ".").replace("[dot]", ".");
        let text = text.replace("hxxp://", "http://").replace("hxxps://", "https://");
        let text = text.replace("fxp://", "ftp://").replace("fxps://", "ftps://");
        let text = BRACKETED_AT.replace_all(&text, "@").into_owned();
        BRACKETED_COLON.replace_all(&text, ":").into_owned()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracketed_dots() {
        assert_eq!(TextNormalizer::refang("8[.]8[.]8[.]8"), "8.8.8.8");
        assert_eq!(TextNormalizer::refang("evil(.)com"), "evil.com");
        assert_eq!(TextNormalizer::refang("evil[dot]com"), "evil.com");
    }

    #[test]
    fn test_scheme_rewrites() {
        assert_eq!(
            TextNormalizer::refang("hxxp://evil-c2[.]com/gate.php"),
            "http://evil-c2.com/gate.php"
        );
        assert_eq!(TextNormalizer::refang("hxxps://a.b"), "https://a.b");
        assert_eq!(TextNormalizer::refang("fxp://a.b fxps://c.d"), "ftp://a.b ftps://c.d");
        // scheme rewrites are case-sensitive literals
        assert_eq!(TextNormalizer::refang("HXXP://a.b"), "HXXP://a.b");
    }

    #[test]
    fn test_bracketed_at_and_colon() {
        assert_eq!(TextNormalizer::refang("victim[at]corp[dot]com"), "victim@corp.com");
        assert_eq!(TextNormalizer::refang("victim[AT]corp.com"), "victim@corp.com");
        assert_eq!(TextNormalizer::refang("victim[@]corp.com"), "victim@corp.com");
        assert_eq!(TextNormalizer::refang("http[colon]//a.b"), "http://a.b");
        assert_eq!(TextNormalizer::refang("http[:]//a.b"), "http://a.b");
    }

    #[test]
    fn test_refang_is_idempotent() {
        let samples = [
            "8[.]8[.]8[.]8 hxxp://evil-c2[.]com victim[at]corp[dot]com http[:]//x.y",
            "already clean text with http://a.b and user@host.com",
        ];
        for sample in samples {
            let once = TextNormalizer::refang(sample);
            assert_eq!(TextNormalizer::refang(&once), once);
        }
    }

    #[test]
    fn test_normalize_strips_and_refangs() {
        let normalizer = TextNormalizer::new();
        let raw = "<p>C2 at <b>8[.]8[.]8[.]8</b> via hxxp://evil-c2[.]com/gate.php</p>";
        assert_eq!(
            normalizer.normalize(raw),
            "C2 at 8.8.8.8 via http://evil-c2.com/gate.php"
        );
    }

    #[test]
    fn test_plain_text_keeps_defanging() {
        let normalizer = TextNormalizer::new();
        let raw = "<p>seen at 8[.]8[.]8[.]8</p>";
        assert_eq!(normalizer.plain_text(raw), "seen at 8[.]8[.]8[.]8");
    }
}
