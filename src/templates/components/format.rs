/// Groups digits in threes: 1234567 -> "1,234,567".
pub fn format_thousands(n: u64) -> String {
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

pub fn format_usd(n: u64) -> String {
    format!("${}", format_thousands(n))
}

/// Like `format_usd` but for amounts that can go negative.
pub fn format_signed_usd(n: i64) -> String {
    if n < 0 {
        format!("-{}", format_usd(n.unsigned_abs()))
    } else {
        format_usd(n.unsigned_abs())
    }
}
