//! The fixed redaction rules, in application order

use regex::Regex;
use std::sync::LazyLock;

/// A compiled redaction rule.
pub struct Rule {
    pub name: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
    pub placeholder: &'static str,
}

macro_rules! rule_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

pub const NAME_PLACEHOLDER: &str = "[REDACTED_NAME]";
pub const DATE_PLACEHOLDER: &str = "[REDACTED_DATE]";
pub const PHONE_PLACEHOLDER: &str = "[REDACTED_PHONE]";
pub const EMAIL_PLACEHOLDER: &str = "[REDACTED_EMAIL]";

// Two capitalized words. Also hits "New York", "Monday Morning" and friends.
rule_pattern!(RE_NAME, r"\b[A-Z][a-z]+\s[A-Z][a-z]+\b");

// d/m/yy through dd/mm/yyyy
rule_pattern!(RE_DATE, r"\d{1,2}/\d{1,2}/\d{2,4}");

// (555) 123-4567, 555.123.4567, 5551234567
rule_pattern!(RE_PHONE, r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}");

rule_pattern!(RE_EMAIL, r"[\w.-]+@[\w.-]+");

/// All rules in the order they must be applied.
pub fn all_rules() -> Vec<Rule> {
    vec![
        Rule {
            name: "name",
            regex: &RE_NAME,
            placeholder: NAME_PLACEHOLDER,
        },
        Rule {
            name: "date",
            regex: &RE_DATE,
            placeholder: DATE_PLACEHOLDER,
        },
        Rule {
            name: "phone",
            regex: &RE_PHONE,
            placeholder: PHONE_PLACEHOLDER,
        },
        Rule {
            name: "email",
            regex: &RE_EMAIL,
            placeholder: EMAIL_PLACEHOLDER,
        },
    ]
}
