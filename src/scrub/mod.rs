//! Pattern-based PII scrubbing
//!
//! Four regex rules run one after another, each over the output of the
//! previous one, replacing every match with a fixed placeholder. Later rules
//! never see the original text, so a placeholder is never re-matched as PII,
//! but a later pattern may still match across a placeholder boundary.

pub mod rules;

use regex::NoExpand;
use rules::Rule;

/// How many replacements one rule made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHits {
    pub rule: &'static str,
    pub count: usize,
}

/// Applies the redaction rules in order.
pub struct Scrubber {
    rules: Vec<Rule>,
}

impl Default for Scrubber {
    fn default() -> Self {
        Self::new()
    }
}

impl Scrubber {
    pub fn new() -> Self {
        Self {
            rules: rules::all_rules(),
        }
    }

    /// Names of rules whose pattern failed to compile. Such rules are skipped.
    pub fn failed_rules(&self) -> Vec<&'static str> {
        self.rules
            .iter()
            .filter(|r| r.regex.is_none())
            .map(|r| r.name)
            .collect()
    }

    /// Redact `text`.
    pub fn scrub(&self, text: &str) -> String {
        self.scrub_with_report(text).0
    }

    /// Redact `text` and report per-rule replacement counts.
    pub fn scrub_with_report(&self, text: &str) -> (String, Vec<RuleHits>) {
        let mut hits = Vec::with_capacity(self.rules.len());
        let scrubbed = self.rules.iter().fold(text.to_string(), |acc, rule| {
            let Some(re) = rule.regex.as_ref() else {
                tracing::warn!(rule = rule.name, "redaction pattern unavailable, skipping");
                return acc;
            };
            let count = re.find_iter(&acc).count();
            hits.push(RuleHits {
                rule: rule.name,
                count,
            });
            if count == 0 {
                return acc;
            }
            re.replace_all(&acc, NoExpand(rule.placeholder)).into_owned()
        });
        (scrubbed, hits)
    }
}

/// Redact `text` with the standard rule set.
pub fn scrub_text(text: &str) -> String {
    Scrubber::new().scrub(text)
}

#[cfg(test)]
mod tests {
    use super::rules::*;
    use super::*;

    #[test]
    fn all_rules_compile() {
        assert!(Scrubber::new().failed_rules().is_empty());
        assert_eq!(all_rules().len(), 4);
    }

    #[test]
    fn mixed_pii_is_redacted_in_place() {
        let input = "Call John Smith at 555-123-4567 or john@example.com on 4/5/2023";
        let out = scrub_text(input);

        for placeholder in [
            NAME_PLACEHOLDER,
            PHONE_PLACEHOLDER,
            EMAIL_PLACEHOLDER,
            DATE_PLACEHOLDER,
        ] {
            assert_eq!(out.matches(placeholder).count(), 1, "{placeholder} in {out}");
        }

        let name = out.find(NAME_PLACEHOLDER).unwrap();
        let phone = out.find(PHONE_PLACEHOLDER).unwrap();
        let email = out.find(EMAIL_PLACEHOLDER).unwrap();
        let date = out.find(DATE_PLACEHOLDER).unwrap();
        assert!(name < phone && phone < email && email < date);

        // "Call John" is the first capitalized pair; "Smith" is left alone.
        assert_eq!(
            out,
            "[REDACTED_NAME] Smith at [REDACTED_PHONE] or [REDACTED_EMAIL] on [REDACTED_DATE]"
        );
    }

    #[test]
    fn capitalized_phrases_are_over_redacted() {
        assert_eq!(scrub_text("I moved to New York."), "I moved to [REDACTED_NAME].");
    }

    #[test]
    fn single_capitalized_word_is_kept() {
        assert_eq!(scrub_text("Hello there"), "Hello there");
    }

    #[test]
    fn date_forms() {
        assert_eq!(scrub_text("on 4/5/23"), "on [REDACTED_DATE]");
        assert_eq!(scrub_text("on 12/31/2023"), "on [REDACTED_DATE]");
        assert_eq!(scrub_text("ratio 4/5"), "ratio 4/5");
    }

    #[test]
    fn phone_forms() {
        assert_eq!(scrub_text("(555) 123-4567"), "[REDACTED_PHONE]");
        assert_eq!(scrub_text("555.123.4567"), "[REDACTED_PHONE]");
        assert_eq!(scrub_text("5551234567"), "[REDACTED_PHONE]");
    }

    #[test]
    fn email_form() {
        assert_eq!(
            scrub_text("write to first.last@mail.example.org today"),
            "write to [REDACTED_EMAIL] today"
        );
    }

    #[test]
    fn dates_are_redacted_before_phones() {
        // The date rule consumes the slashes, so no ten-digit run remains.
        assert_eq!(scrub_text("12/12/2023"), "[REDACTED_DATE]");
    }

    #[test]
    fn later_rules_see_earlier_placeholders_as_plain_text() {
        // "]" is outside the email character class, so the placeholder stops the match.
        assert_eq!(scrub_text("Ann Lee@x.org"), "[REDACTED_NAME]@x.org");
        assert_eq!(
            scrub_text("Ann Lee.ann@x.org"),
            "[REDACTED_NAME][REDACTED_EMAIL]"
        );
    }

    #[test]
    fn report_counts_each_rule() {
        let (_, hits) = Scrubber::new().scrub_with_report("a@b.c and c@d.e on 1/2/2020");
        let email = hits.iter().find(|h| h.rule == "email").unwrap();
        let date = hits.iter().find(|h| h.rule == "date").unwrap();
        let name = hits.iter().find(|h| h.rule == "name").unwrap();
        assert_eq!(email.count, 2);
        assert_eq!(date.count, 1);
        assert_eq!(name.count, 0);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(scrub_text(""), "");
    }

    #[test]
    fn deterministic_and_idempotent_without_chains() {
        let input = "Met Jane Doe on 1/2/2020, reach her at jane@doe.org or 555 123 4567.";
        let once = scrub_text(input);
        assert_eq!(once, scrub_text(input));
        assert_eq!(scrub_text(&once), once);
    }

    #[test]
    fn replacement_text_is_literal() {
        // NoExpand keeps "$" sequences in placeholders from being treated as groups.
        let out = scrub_text("cost $1 to 555-123-4567");
        assert_eq!(out, "cost $1 to [REDACTED_PHONE]");
    }
}
