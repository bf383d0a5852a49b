use std::sync::OnceLock;

use regex::Regex;

/// Whether the text calls out to Bill ("oh bill", "OOOHHH  BILL", "ohbill")
pub fn is_oh_bill(text: &str) -> bool {
    fn pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| Regex::new(r"(?i)o+h+\s*bill").expect("must be valid regex"))
    }

    pattern().is_match(text)
}
