use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Composite weights
// ────────────────────────────────────────────────────────────────────────────

pub const KEYWORD_WEIGHT: f64 = 0.40;
pub const FORMATTING_WEIGHT: f64 = 0.20;
pub const READABILITY_WEIGHT: f64 = 0.15;
pub const COMPLETENESS_WEIGHT: f64 = 0.15;
pub const ACTION_VERB_WEIGHT: f64 = 0.10;

/// Which analyzer produced a report or a rewrite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Heuristic,
    Llm,
}

/// Per-dimension scores, each 0 – 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubScores {
    #[serde(alias = "keyword_match")]
    pub keyword_match: u32,
    #[serde(alias = "formatting_compliance", alias = "formattingCompliance")]
    pub formatting: u32,
    pub readability: u32,
    pub completeness: u32,
    #[serde(alias = "action_verbs")]
    pub action_verbs: u32,
}

impl SubScores {
    /// Clamps every dimension into 0 – 100.
    pub fn clamped(self) -> Self {
        Self {
            keyword_match: self.keyword_match.min(100),
            formatting: self.formatting.min(100),
            readability: self.readability.min(100),
            completeness: self.completeness.min(100),
            action_verbs: self.action_verbs.min(100),
        }
    }
}

/// Weighted composite of the five sub-scores, rounded half away from zero and clamped.
///
/// `{75, 90, 80, 85, 70}` → 79.75 → 80.
pub fn composite_score(scores: &SubScores) -> u32 {
    let weighted = f64::from(scores.keyword_match) * KEYWORD_WEIGHT
        + f64::from(scores.formatting) * FORMATTING_WEIGHT
        + f64::from(scores.readability) * READABILITY_WEIGHT
        + f64::from(scores.completeness) * COMPLETENESS_WEIGHT
        + f64::from(scores.action_verbs) * ACTION_VERB_WEIGHT;
    clamp_score(weighted)
}

/// Rounds half away from zero and clamps into 0 – 100.
pub fn clamp_score(value: f64) -> u32 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u32
}

/// The compatibility assessment of a resume against a job description.
/// Produced identically in shape by the heuristic and the AI-backed analyzers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    #[serde(default)]
    pub composite_score: u32,
    #[serde(alias = "scores", default)]
    pub sub_scores: SubScores,
    #[serde(default)]
    pub matched_skills: BTreeSet<String>,
    #[serde(default)]
    pub missing_skills: BTreeSet<String>,
    #[serde(default)]
    pub suggested_skills: BTreeSet<String>,
    #[serde(default)]
    pub formatting_issues: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub backend: Backend,
}

impl ScoreReport {
    /// Builds a report whose composite is derived from `sub_scores`.
    pub fn new(sub_scores: SubScores, backend: Backend) -> Self {
        let sub_scores = sub_scores.clamped();
        Self {
            composite_score: composite_score(&sub_scores),
            sub_scores,
            matched_skills: BTreeSet::new(),
            missing_skills: BTreeSet::new(),
            suggested_skills: BTreeSet::new(),
            formatting_issues: Vec::new(),
            recommendations: Vec::new(),
            backend,
        }
    }

    /// Re-clamps the sub-scores and recomputes the composite from them.
    pub fn normalized(mut self) -> Self {
        self.sub_scores = self.sub_scores.clamped();
        self.composite_score = composite_score(&self.sub_scores);
        self
    }
}
