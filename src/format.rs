//! Currency rendering in Indian digit grouping.

/// Formats `amount` the way an `en-IN` locale does: the last three integer
/// digits form one group and the rest are grouped in pairs. Up to three
/// fraction digits are kept, trailing zeros trimmed.
///
/// # Examples
///
/// ```
/// use power_advisor::format::format_inr;
///
/// assert_eq!(format_inr(5000.0), "5,000");
/// assert_eq!(format_inr(150000.0), "1,50,000");
/// assert_eq!(format_inr(1234.5), "1,234.5");
/// ```
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let fixed = format!("{:.3}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if amount < 0.0 && (int_part != "0" || !frac.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_indian(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (h, t) = rest.split_at(rest.len() - 2);
        groups.push(t);
        rest = h;
    }
    groups.push(rest);
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}
