use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::KeywordCatalog;

use super::report::clamp_score;

/// Catalog keywords found in a job description, partitioned by presence in the resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobMatch {
    pub matched: BTreeSet<String>,
    pub missing: BTreeSet<String>,
}

impl JobMatch {
    pub fn job_keyword_count(&self) -> usize {
        self.matched.len() + self.missing.len()
    }
}

/// Every catalog literal present in `text`, deduplicated by literal.
pub fn extract_keywords(text: &str, catalog: &KeywordCatalog) -> BTreeSet<String> {
    catalog.extract(text)
}

/// Partitions the job description's keywords by case-insensitive substring presence
/// in the resume's words (whitespace collapsed to single spaces).
pub fn match_against_job_description(
    resume: &str,
    job_description: &str,
    catalog: &KeywordCatalog,
) -> JobMatch {
    let resume_words = resume
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ");

    let (matched, missing): (BTreeSet<String>, BTreeSet<String>) =
        extract_keywords(job_description, catalog)
            .into_iter()
            .partition(|keyword| resume_words.contains(&keyword.to_lowercase()));

    JobMatch { matched, missing }
}

/// Share of job keywords covered, 0 – 100. A job description with no catalog keywords
/// falls back to rewarding the resume's own keyword coverage (10 points each).
pub fn keyword_match_score(job_match: &JobMatch, resume_keyword_count: usize) -> u32 {
    let total = job_match.job_keyword_count();
    if total == 0 {
        return (resume_keyword_count.saturating_mul(10)).min(100) as u32;
    }
    clamp_score(100.0 * job_match.matched.len() as f64 / total as f64)
}
