#[inline]
pub fn strip_surrounding_quotes(s: &str) -> &str {
    let b = s.as_bytes();
    if b.len() >= 2 {
        let first = b[0];
        let last = b[b.len() - 1];
        if (first == b'\'' && last == b'\'') || (first == b'"' && last == b'"') {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Splits one CSV record into trimmed, unquoted fields.
///
/// Commas inside single or double quotes do not split. A trailing comma
/// yields a trailing empty field so column counts stay aligned.
pub fn split_csv_record(line: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut in_quotes: Option<char> = None;

    for ch in line.chars() {
        match in_quotes {
            Some(q) => {
                if ch == q {
                    in_quotes = None;
                }
                cur.push(ch);
            }
            None => {
                if ch == '"' || ch == '\'' {
                    in_quotes = Some(ch);
                    cur.push(ch);
                } else if ch == ',' {
                    out.push(strip_surrounding_quotes(cur.trim()).to_string());
                    cur.clear();
                } else {
                    cur.push(ch);
                }
            }
        }
    }
    out.push(strip_surrounding_quotes(cur.trim()).to_string());
    out
}

/// Parses a binary label cell. Accepts `0`/`1` (also as floats),
/// `true`/`false` and `yes`/`no`, ignoring case.
pub fn parse_binary_label(raw: &str) -> Option<usize> {
    let s = raw.trim();
    if s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("yes") {
        return Some(1);
    }
    if s.eq_ignore_ascii_case("false") || s.eq_ignore_ascii_case("no") {
        return Some(0);
    }
    match s.parse::<f64>() {
        Ok(v) if v == 0.0 => Some(0),
        Ok(v) if v == 1.0 => Some(1),
        _ => None,
    }
}
