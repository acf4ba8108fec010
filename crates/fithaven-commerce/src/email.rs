//! E-mail address checks shared by the support hand-off and contact form.

use std::sync::OnceLock;

use regex::Regex;

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot inside the
/// domain with something on both sides.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// Check an address has the shape `local@domain.tld`.
pub fn is_valid_email(address: &str) -> bool {
    email_regex().is_match(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_simple_address() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("jane.doe@mail.example.com"));
        assert!(is_valid_email("x@y.z."));
    }

    #[test]
    fn test_pattern_compiles() {
        assert!(Regex::new(EMAIL_PATTERN).is_ok());
    }

    #[test]
    fn test_rejects_malformed() {
        for address in [
            "not-an-email",
            "",
            "a@b",
            "@b.co",
            "a@.co",
            "a@b.",
            "a@@b.co",
            "a@b@c.co",
            "a b@c.co",
            "a@b.co ",
        ] {
            assert!(!is_valid_email(address), "{address:?} should be rejected");
        }
    }
}
