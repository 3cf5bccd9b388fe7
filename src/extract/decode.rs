//! String-literal escape decoding and markup-to-text conversion.
//!
//! Two separate passes: escapes are decoded before the frame heuristic runs,
//! markup is converted only for payloads the heuristic accepted.

/// Decode script string-literal escapes.
///
/// `\n`, `\r` and `\t` decode to their control characters; any other escaped
/// character decodes to itself (which covers `\\`, `\"` and `\'`). A lone
/// trailing backslash is dropped.
pub fn decode_escapes(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len());
    let mut chars = literal.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => {}
        }
    }

    out
}

/// Entities converted during markup-to-text. Single pass, so an already
/// escaped `&amp;nbsp;` comes out as the literal text `&nbsp;`.
const ENTITIES: &[(&str, char)] = &[("&nbsp;", ' '), ("&lt;", '<'), ("&gt;", '>'), ("&amp;", '&')];

/// Convert the HTML-ish markup found in frame payloads to plain text.
///
/// `<br>`-style tags (case-insensitive) become newlines, the entities above
/// become their characters, carriage returns are dropped, everything else is
/// kept verbatim.
pub fn markup_to_text(payload: &str) -> String {
    let mut out = String::with_capacity(payload.len());
    let mut rest = payload;

    'scan: while let Some(c) = rest.chars().next() {
        match c {
            '<' => {
                if let Some(len) = leading_br_len(rest) {
                    out.push('\n');
                    rest = &rest[len..];
                    continue;
                }
            }
            '&' => {
                for (entity, replacement) in ENTITIES {
                    if rest.starts_with(entity) {
                        out.push(*replacement);
                        rest = &rest[entity.len()..];
                        continue 'scan;
                    }
                }
            }
            '\r' => {
                rest = &rest[1..];
                continue;
            }
            _ => {}
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    out
}

/// True if the payload contains a `<br>`-style tag anywhere.
pub(crate) fn contains_br_tag(payload: &str) -> bool {
    payload
        .char_indices()
        .filter(|(_, c)| *c == '<')
        .any(|(i, _)| leading_br_len(&payload[i..]).is_some())
}

/// Length of a leading `<br>`, `<br/>` or `<br />` tag, case-insensitive.
fn leading_br_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.len() < 4 || bytes[0] != b'<' {
        return None;
    }
    if !bytes[1].eq_ignore_ascii_case(&b'b') || !bytes[2].eq_ignore_ascii_case(&b'r') {
        return None;
    }
    match &bytes[3..] {
        [b'>', ..] => Some(4),
        [b'/', b'>', ..] => Some(5),
        [b' ', b'/', b'>', ..] => Some(6),
        _ => None,
    }
}
