//! Minimal HTML text helpers for the fragments the widgets emit.

/// Escape text for safe insertion into element content or a quoted attribute.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Remove every `<...>` tag. `<br>` variants become newlines so that
/// adjacent lines of a tooltip do not run together.
///
/// An unterminated `<` is kept as literal text.
pub fn strip_tags(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let after = &rest[open..];
        match after.find('>') {
            Some(close) => {
                let tag = &after[1..close];
                if is_line_break(tag) {
                    out.push('\n');
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(after);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

fn is_line_break(tag: &str) -> bool {
    let name = tag.trim().trim_end_matches('/').trim();
    name.eq_ignore_ascii_case("br")
}
