// file: src/parser/html.rs
// description: best-effort html tag stripping for feed content
// reference: whatwg html syntax

/// Reduces HTML-formatted feed content to readable plain text: tags,
/// comments and script/style bodies are dropped, common entities decoded,
/// and whitespace between text chunks collapsed to single spaces.
///
/// Total over its input: malformed markup degrades to whatever text can be
/// salvaged, never to an error.
pub struct HtmlStripper;

impl HtmlStripper {
    pub fn new() -> Self {
        Self
    }

    pub fn strip(&self, raw: &str) -> String {
        let mut text = String::with_capacity(raw.len());
        let mut rest = raw;

        while let Some(pos) = rest.find('<') {
            text.push_str(&rest[..pos]);
            let tail = &rest[pos..];

            match skip_markup(tail) {
                Some(consumed) => {
                    // tag boundaries separate words in the rendered text
                    text.push(' ');
                    rest = &tail[consumed..];
                }
                None => {
                    // a bare '<' that opens no tag stays literal text
                    text.push('<');
                    rest = &tail[1..];
                }
            }
        }
        text.push_str(rest);

        collapse_whitespace(&decode_entities(&text))
    }
}

impl Default for HtmlStripper {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the number of bytes of markup starting at `tail` (which begins
/// with '<'), or None when the '<' does not open markup.
fn skip_markup(tail: &str) -> Option<usize> {
    if tail.starts_with("<!--") {
        // comment: runs to `-->`, or to the end when unterminated
        return Some(match tail.find("-->") {
            Some(end) => end + 3,
            None => tail.len(),
        });
    }

    let next = tail[1..].chars().next()?;
    if !(next.is_ascii_alphanumeric() || next == '/' || next == '!' || next == '?') {
        return None;
    }

    let close = match tail.find('>') {
        Some(close) => close,
        // unterminated tag at end of input: drop the remainder
        None => return Some(tail.len()),
    };

    let tag_body = &tail[1..close];
    for container in ["script", "style"] {
        if is_opening_tag(tag_body, container) {
            // skip the element body through its closing tag
            let closing = format!("</{}", container);
            return match find_ascii_ci(&tail[close..], &closing) {
                Some(rel) => {
                    let after = close + rel;
                    match tail[after..].find('>') {
                        Some(end) => Some(after + end + 1),
                        None => Some(tail.len()),
                    }
                }
                None => Some(tail.len()),
            };
        }
    }

    Some(close + 1)
}

fn is_opening_tag(tag_body: &str, name: &str) -> bool {
    if tag_body.len() < name.len() || !tag_body.as_bytes()[..name.len()].eq_ignore_ascii_case(name.as_bytes()) {
        return false;
    }
    match tag_body.as_bytes().get(name.len()) {
        None => true,
        Some(b) => b.is_ascii_whitespace() && !tag_body.trim_end().ends_with('/'),
    }
}

/// ASCII case-insensitive substring search. The needle is ASCII, so every
/// match position falls on a char boundary of the haystack.
fn find_ascii_ci(haystack: &str, needle: &str) -> Option<usize> {
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.is_empty() || h.len() < n.len() {
        return None;
    }
    (0..=h.len() - n.len()).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}

fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        match decode_entity(tail) {
            Some((decoded, consumed)) => {
                out.push(decoded);
                rest = &tail[consumed..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Decodes a single entity at the start of `tail` (which begins with '&'),
/// returning the character and the bytes consumed.
fn decode_entity(tail: &str) -> Option<(char, usize)> {
    let semi = tail.find(';')?;
    if semi < 2 || semi > 10 {
        return None;
    }
    let body = &tail[1..semi];
    if !body.is_ascii() {
        return None;
    }

    let decoded = match body {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => ' ',
        _ => {
            let code = body.strip_prefix('#')?;
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse::<u32>().ok()?,
            };
            char::from_u32(value)?
        }
    };

    Some((decoded, semi + 1))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_stripped() {
        let stripper = HtmlStripper::new();
        let html = "<p>Malware <b>reaches</b> out to the C2.</p>";
        assert_eq!(stripper.strip(html), "Malware reaches out to the C2.");
    }

    #[test]
    fn test_inter_tag_whitespace_collapsed() {
        let stripper = HtmlStripper::new();
        let html = "<div>\n  <span>first</span>\n  <span>second</span>\n</div>";
        assert_eq!(stripper.strip(html), "first second");
    }

    #[test]
    fn test_script_and_style_dropped() {
        let stripper = HtmlStripper::new();
        let html = "before<script>var x = 'evil.com';</script>middle<style>p { color: red }</style>after";
        assert_eq!(stripper.strip(html), "before middle after");
    }

    #[test]
    fn test_comment_dropped() {
        let stripper = HtmlStripper::new();
        let html = "keep<!-- drop > this -->me";
        assert_eq!(stripper.strip(html), "keep me");
    }

    #[test]
    fn test_entities_decoded() {
        let stripper = HtmlStripper::new();
        let html = "a &amp; b &lt;c&gt; &quot;d&quot; &#39;e&#39; &#x41;";
        assert_eq!(stripper.strip(html), "a & b <c> \"d\" 'e' A");
    }

    #[test]
    fn test_unknown_entity_kept_literal() {
        let stripper = HtmlStripper::new();
        assert_eq!(stripper.strip("ms &bogus; q&a"), "ms &bogus; q&a");
    }

    #[test]
    fn test_bare_less_than_is_text() {
        let stripper = HtmlStripper::new();
        assert_eq!(stripper.strip("x < y and y > z"), "x < y and y > z");
    }

    #[test]
    fn test_malformed_markup_salvaged() {
        let stripper = HtmlStripper::new();
        // unterminated tag swallows the remainder, earlier text survives
        assert_eq!(stripper.strip("visible<p attr=\"oops"), "visible");
        // stray closing tags and empty input do not error
        assert_eq!(stripper.strip("</div>text</div>"), "text");
        assert_eq!(stripper.strip(""), "");
    }

    #[test]
    fn test_plain_text_unchanged() {
        let stripper = HtmlStripper::new();
        assert_eq!(
            stripper.strip("C2 at 8[.]8[.]8[.]8 was seen."),
            "C2 at 8[.]8[.]8[.]8 was seen."
        );
    }
}
