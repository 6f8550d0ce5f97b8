use std::cmp::Ordering;

/// Compare two strings case-insensitively. ASCII input is compared without allocating.
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    let lower = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<Vec<_>>();
    if a.is_ascii() && b.is_ascii() {
        a.bytes()
            .map(|c| c.to_ascii_lowercase())
            .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
    } else {
        lower(a).cmp(&lower(b))
    }
}

/// Check whether `haystack` contains `needle_lower`, ignoring case.
///
/// `needle_lower` must already be lowercased; callers lowercase the search
/// query once and reuse it across every row.
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    if haystack.is_ascii() && needle_lower.is_ascii() {
        let needle = needle_lower.as_bytes();
        haystack
            .as_bytes()
            .windows(needle.len())
            .any(|window| window.eq_ignore_ascii_case(needle))
    } else {
        haystack.to_lowercase().contains(needle_lower)
    }
}

/// Truncate a string to a maximum length, adding ellipsis if needed
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Format a whole-dollar amount as `$3,200,000`
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("${}", out)
}

/// Format a dollar amount in millions for compact cards, e.g. `$3.45M`
pub fn format_millions(amount: u64) -> String {
    let millions = amount as f64 / 1_000_000.0;
    let text = format!("{:.2}", millions);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("${}M", text)
}

/// Up to two uppercase initials from a display name
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmp_ignore_case() {
        assert_eq!(cmp_ignore_case("apple", "Banana"), Ordering::Less);
        assert_eq!(cmp_ignore_case("VetCorp", "vetcorp"), Ordering::Equal);
        assert_eq!(cmp_ignore_case("Zoo", "alpha"), Ordering::Greater);
        assert_eq!(cmp_ignore_case("Émile", "émile"), Ordering::Equal);
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Nashville, TN", "nash"));
        assert!(contains_ignore_case("Private Equity", "equity"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("Chicago", "denver"));
        assert!(!contains_ignore_case("ab", "abc"));
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Hello", 10), "Hello");
        assert_eq!(truncate_string("Hello World", 8), "Hello...");
        assert_eq!(truncate_string("Hi", 2), "Hi");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(3_200_000), "$3,200,000");
        assert_eq!(format_currency(640_000), "$640,000");
        assert_eq!(format_currency(1_000), "$1,000");
        assert_eq!(format_currency(999), "$999");
        assert_eq!(format_currency(0), "$0");
    }

    #[test]
    fn test_format_millions() {
        assert_eq!(format_millions(3_450_000), "$3.45M");
        assert_eq!(format_millions(3_200_000), "$3.2M");
        assert_eq!(format_millions(2_000_000), "$2M");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Dr. Emily Chen"), "DE");
        assert_eq!(initials("Sarah Williams"), "SW");
        assert_eq!(initials(""), "");
    }
}
