//! Irreversible redaction of sensitive matches before they are reported.

/// Keep the first two characters of the local part and the full domain:
/// `ab12345@school.com` becomes `ab***@school.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((name, domain)) => {
            let visible: String = name.chars().take(2).collect();
            format!("{visible}***@{domain}")
        }
        None => email.to_string(),
    }
}

/// Drop separators and show only the last four digits, whatever the
/// original grouping was.
pub fn mask_card(card: &str) -> String {
    let digits: Vec<char> = card
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect();
    let last4: String = digits[digits.len().saturating_sub(4)..].iter().collect();
    format!("****-****-****-{last4}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("ab12345@school.com"), "ab***@school.com");
        assert_eq!(mask_email("jo@x.com"), "jo***@x.com");
    }

    #[test]
    fn test_mask_email_short_local_part() {
        assert_eq!(mask_email("a@x.com"), "a***@x.com");
    }

    #[test]
    fn test_mask_card_any_separator() {
        for card in ["1234-5678-9012-3456", "1234 5678 9012 3456", "1234567890123456"] {
            assert_eq!(mask_card(card), "****-****-****-3456", "card: {}", card);
        }
    }

    #[test]
    fn test_mask_card_mixed_whitespace() {
        assert_eq!(mask_card("4111\t1111 1111-0042"), "****-****-****-0042");
    }
}
