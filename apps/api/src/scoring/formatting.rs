//! ATS formatting compliance: bullet consistency, core sections, contact details,
//! strong verbs. Starts at 100 and subtracts a fixed penalty per failed check.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::catalog::KeywordCatalog;

pub const INCONSISTENT_BULLETS: &str = "Inconsistent bullet point usage";
pub const MISSING_SECTIONS: &str = "Missing essential resume sections";
pub const MISSING_EMAIL: &str = "Missing email address";
pub const MISSING_PHONE: &str = "Missing phone number";
pub const LACKS_ACTION_VERBS: &str = "Lacks strong action verbs";

const INCONSISTENT_BULLETS_PENALTY: u32 = 15;
const MISSING_SECTIONS_PENALTY: u32 = 20;
const MISSING_EMAIL_PENALTY: u32 = 10;
const MISSING_PHONE_PENALTY: u32 = 10;
const LACKS_ACTION_VERBS_PENALTY: u32 = 15;

/// Section names a compliant resume mentions; at least `MIN_CORE_SECTIONS` are expected.
pub const CORE_SECTIONS: &[&str] = &["experience", "education", "skills", "summary", "objective"];
const MIN_CORE_SECTIONS: usize = 3;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email regex")
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:\+?1[-. ]?)?\(?[0-9]{3}\)?[-. ]?[0-9]{3}[-. ]?[0-9]{4}\b")
        .expect("valid phone regex")
});

/// A line-leading list marker followed by whitespace: `•`, `*`, `-` or `1.`.
static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:(•)|(\*)|(-)|(\d+\.))\s").expect("valid bullet regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattingReport {
    pub score: u32,
    pub issues: Vec<String>,
}

pub fn has_email(text: &str) -> bool {
    EMAIL_RE.is_match(text)
}

pub fn has_phone(text: &str) -> bool {
    PHONE_RE.is_match(text)
}

/// Distinct list-marker styles opening lines of `text` (0 = `•`, 1 = `*`, 2 = `-`, 3 = numbered).
fn bullet_styles(text: &str) -> BTreeSet<usize> {
    text.lines()
        .filter_map(|line| BULLET_RE.captures(line.trim_start()))
        .filter_map(|caps| (1..=4).find(|&i| caps.get(i).is_some()))
        .collect()
}

/// More than one list-marker style is in use.
pub fn has_inconsistent_bullets(text: &str) -> bool {
    bullet_styles(text).len() > 1
}

/// Core section names mentioned anywhere in `text`.
pub fn core_sections_present(text: &str) -> usize {
    let lower = text.to_lowercase();
    CORE_SECTIONS.iter().filter(|s| lower.contains(*s)).count()
}

pub fn formatting_compliance(text: &str, catalog: &KeywordCatalog) -> FormattingReport {
    let checks = [
        (has_inconsistent_bullets(text), INCONSISTENT_BULLETS, INCONSISTENT_BULLETS_PENALTY),
        (
            core_sections_present(text) < MIN_CORE_SECTIONS,
            MISSING_SECTIONS,
            MISSING_SECTIONS_PENALTY,
        ),
        (!has_email(text), MISSING_EMAIL, MISSING_EMAIL_PENALTY),
        (!has_phone(text), MISSING_PHONE, MISSING_PHONE_PENALTY),
        (
            !catalog.contains_strong_verb(text),
            LACKS_ACTION_VERBS,
            LACKS_ACTION_VERBS_PENALTY,
        ),
    ];

    let mut score = 100u32;
    let mut issues = Vec::new();
    for (failed, issue, penalty) in checks {
        if failed {
            score = score.saturating_sub(penalty);
            issues.push(issue.to_string());
        }
    }

    FormattingReport { score, issues }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPLIANT: &str = "Jane Doe\n\
        jane.doe@example.com | (555) 123-4567\n\
        SUMMARY\n\
        Backend engineer.\n\
        EXPERIENCE\n\
        • Led the payments team\n\
        • Built a ledger in Rust\n\
        EDUCATION\n\
        B.S. Computer Science\n\
        SKILLS\n\
        Rust, Go, PostgreSQL";

    fn check(text: &str) -> FormattingReport {
        formatting_compliance(text, KeywordCatalog::builtin())
    }

    #[test]
    fn test_compliant_resume_scores_full_marks() {
        let report = check(COMPLIANT);
        assert_eq!(report.score, 100, "issues: {:?}", report.issues);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_missing_contact_costs_twenty() {
        let text = "SUMMARY\nEngineer\nEXPERIENCE\n• Led the team\nEDUCATION\nBSc\nSKILLS\nRust";
        let report = check(text);
        assert_eq!(report.score, 80);
        assert_eq!(report.issues, vec![MISSING_EMAIL.to_string(), MISSING_PHONE.to_string()]);
    }

    #[test]
    fn test_every_check_failing_reports_issues_in_order() {
        let text = "• one\n- two\n* three";
        let report = check(text);
        assert_eq!(report.score, 30);
        assert_eq!(
            report.issues,
            vec![
                INCONSISTENT_BULLETS,
                MISSING_SECTIONS,
                MISSING_EMAIL,
                MISSING_PHONE,
                LACKS_ACTION_VERBS,
            ]
        );
    }

    #[test]
    fn test_inline_hyphens_are_not_bullets() {
        assert!(!has_inconsistent_bullets("• Shipped v2 in 2019-2020\n• Cut costs - by 30%"));
        assert!(has_inconsistent_bullets("• Shipped\n1. Cut costs"));
    }

    #[test]
    fn test_contact_detection() {
        assert!(has_email("reach me at a.b+c@mail.co.uk"));
        assert!(!has_email("reach me at jane at example"));
        assert!(has_phone("+1 555.123.4567"));
        assert!(has_phone("555-123-4567"));
        assert!(!has_phone("call 12345"));
    }

    #[test]
    fn test_empty_catalog_always_lacks_verbs() {
        let report = formatting_compliance(COMPLIANT, &KeywordCatalog::empty());
        assert_eq!(report.score, 85);
        assert_eq!(report.issues, vec![LACKS_ACTION_VERBS.to_string()]);
    }
}
