use std::borrow::Cow;

use super::scanner::MatchSpan;

/// Default replacement unit
pub const DEFAULT_REPLACE_CODE: &str = "*";

/// Replace every span of `text` with `replace_code` repeated once per
/// matched character.
///
/// Spans must be ordered and non-overlapping, as produced by the scanner.
/// Returns the input untouched when there is nothing to replace.
pub fn redact<'t>(text: &'t str, spans: &[MatchSpan], replace_code: &str) -> Cow<'t, str> {
    if spans.is_empty() {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut spans = spans.iter().peekable();

    for (idx, ch) in text.chars().enumerate() {
        while spans.peek().is_some_and(|span| span.end() <= idx) {
            spans.next();
        }

        match spans.peek() {
            Some(span) if span.start <= idx => {
                if span.start == idx {
                    out.push_str(&replace_code.repeat(span.len));
                }
            }
            _ => out.push(ch),
        }
    }

    Cow::Owned(out)
}
