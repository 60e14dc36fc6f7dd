//! Decoding of Go string literals into their values.
//!
//! Decode failure is an expected, per-literal outcome: the caller skips the
//! literal and moves on, so the whole module speaks `Option`, not `Result`.

/// Decode the verbatim source text of a string literal.
///
/// `"..."` interpreted strings get the full escape set; `` `...` `` raw
/// strings are taken as-is except that carriage returns are discarded.
/// Returns `None` for anything that is not a well-formed literal.
pub(crate) fn unquote(raw: &str) -> Option<String> {
    if let Some(inner) = raw.strip_prefix('`') {
        let inner = inner.strip_suffix('`')?;
        if inner.contains('`') {
            return None;
        }
        return Some(inner.chars().filter(|&c| c != '\r').collect());
    }

    let inner = raw.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\n' {
            return None;
        }
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            'a' => out.push('\u{07}'),
            'b' => out.push('\u{08}'),
            'f' => out.push('\u{0c}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\u{0b}'),
            '\\' => out.push('\\'),
            '"' => out.push('"'),
            'x' => out.push(char::from_u32(hex(&mut chars, 2)?)?),
            'u' => out.push(char::from_u32(hex(&mut chars, 4)?)?),
            'U' => out.push(char::from_u32(hex(&mut chars, 8)?)?),
            d @ '0'..='7' => {
                let mut value = d.to_digit(8)?;
                for _ in 0..2 {
                    value = value * 8 + chars.next()?.to_digit(8)?;
                }
                if value > 255 {
                    return None;
                }
                out.push(char::from_u32(value)?);
            }
            // \' is only legal in rune literals
            _ => return None,
        }
    }
    Some(out)
}

fn hex(chars: &mut std::str::Chars<'_>, digits: usize) -> Option<u32> {
    let mut value = 0u32;
    for _ in 0..digits {
        value = value.checked_mul(16)? + chars.next()?.to_digit(16)?;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_interpreted_string() {
        assert_eq!(unquote("\"hello\"").as_deref(), Some("hello"));
        assert_eq!(unquote("\"\"").as_deref(), Some(""));
        assert_eq!(unquote("\"no，data！\"").as_deref(), Some("no，data！"));
    }

    #[test]
    fn simple_escapes() {
        assert_eq!(unquote(r#""a\tb\nc""#).as_deref(), Some("a\tb\nc"));
        assert_eq!(unquote(r#""\"quoted\"""#).as_deref(), Some("\"quoted\""));
        assert_eq!(unquote(r#""back\\slash""#).as_deref(), Some("back\\slash"));
    }

    #[test]
    fn numeric_escapes() {
        assert_eq!(unquote(r#""\x41\101""#).as_deref(), Some("AA"));
        assert_eq!(unquote("\"\\u4e2d\\u6587\"").as_deref(), Some("中文"));
        assert_eq!(unquote(r#""\U0001F601""#).as_deref(), Some("😁"));
    }

    #[test]
    fn raw_string_keeps_backslashes_and_drops_carriage_returns() {
        assert_eq!(unquote("`a\\nb`").as_deref(), Some("a\\nb"));
        assert_eq!(unquote("`a\rb`").as_deref(), Some("ab"));
        assert_eq!(unquote("`multi\nline`").as_deref(), Some("multi\nline"));
    }

    #[test]
    fn malformed_literals_fail_the_decode() {
        assert_eq!(unquote("\"unterminated"), None);
        assert_eq!(unquote("`unterminated"), None);
        assert_eq!(unquote(r#""\q""#), None);
        assert_eq!(unquote(r#""\'""#), None);
        assert_eq!(unquote(r#""\x4""#), None);
        assert_eq!(unquote(r#""\777""#), None);
        assert_eq!(unquote(r#""\ud800""#), None);
        assert_eq!(unquote(r#""\U00110000""#), None);
        assert_eq!(unquote("\"raw\nnewline\""), None);
        assert_eq!(unquote("42"), None);
    }
}
