/// Renders an upstream view count with thousands separators.
///
/// The count arrives as a decimal string. Anything that does not parse as an
/// unsigned integer is returned unchanged rather than guessed at.
pub fn format_views(raw: &str) -> String {
    match raw.trim().parse::<u64>() {
        Ok(n) => group_thousands(n),
        Err(_) => raw.to_string(),
    }
}

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
