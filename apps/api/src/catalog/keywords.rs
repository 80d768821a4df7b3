//! Keyword catalog — static skill tables and action-verb lists with compiled matchers.
//!
//! Matching is case-insensitive on literal boundaries: a literal matches when it is not
//! glued to a neighbouring word character, so `Java` does not match inside `JavaScript`
//! while `C++` and `Node.js` still match next to punctuation.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Static tables
// ────────────────────────────────────────────────────────────────────────────

/// Skill categories recognised by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Language,
    Framework,
    Database,
    CloudDevops,
    Tool,
    SoftSkill,
}

const LANGUAGES: &[&str] = &[
    "JavaScript", "TypeScript", "Python", "Java", "C++", "C#", "PHP", "Ruby", "Go", "Rust",
    "Swift", "Kotlin",
];

const FRAMEWORKS: &[&str] = &[
    "React", "Angular", "Vue.js", "Node.js", "Express", "Django", "Flask", "Spring", "Laravel",
    "Ruby on Rails",
];

const DATABASES: &[&str] = &[
    "MySQL", "PostgreSQL", "MongoDB", "Redis", "SQLite", "Oracle", "SQL Server", "SQL",
];

const CLOUD_DEVOPS: &[&str] = &[
    "AWS", "Azure", "Google Cloud", "Docker", "Kubernetes", "Jenkins", "CI/CD", "DevOps",
];

const TOOLS: &[&str] = &[
    "Git", "GitHub", "GitLab", "Jira", "Slack", "Figma", "Adobe", "Photoshop",
];

const SOFT_SKILLS: &[&str] = &[
    "Leadership", "Communication", "Problem Solving", "Teamwork", "Project Management",
];

/// Verbs that open a strong, ownership-signalling bullet.
pub const STRONG_ACTION_VERBS: &[&str] = &[
    "managed", "led", "developed", "created", "implemented", "designed", "optimized",
    "achieved", "architected", "built", "delivered", "launched", "reduced", "increased",
    "improved", "automated", "spearheaded", "engineered", "streamlined", "executed",
    "established", "mentored", "migrated", "shipped", "owned", "drove",
];

/// Weak phrasings and the strong verb that replaces them, in replacement order.
pub const WEAK_PHRASES: &[(&str, &str)] = &[
    ("responsible for", "managed"),
    ("worked on", "developed"),
    ("helped with", "assisted in"),
    ("did", "executed"),
    ("made", "created"),
    ("handled", "managed"),
];

// ────────────────────────────────────────────────────────────────────────────
// Catalog
// ────────────────────────────────────────────────────────────────────────────

/// A single catalog literal with its compiled boundary matcher.
#[derive(Debug, Clone)]
pub struct SkillMatcher {
    pub literal: &'static str,
    pub category: SkillCategory,
    pattern: Regex,
}

impl SkillMatcher {
    fn new(literal: &'static str, category: SkillCategory) -> Self {
        Self {
            literal,
            category,
            pattern: boundary_regex(literal),
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Skill and verb tables. `KeywordCatalog::builtin()` is the shared default;
/// `KeywordCatalog::empty()` matches nothing.
#[derive(Debug, Clone, Default)]
pub struct KeywordCatalog {
    skills: Vec<SkillMatcher>,
    strong_verbs: Vec<(&'static str, Regex)>,
    weak_phrases: Vec<WeakPhrase>,
}

/// A weak phrasing, its replacement, and its word-bounded matcher.
#[derive(Debug, Clone)]
pub struct WeakPhrase {
    pub weak: &'static str,
    pub replacement: &'static str,
    pub pattern: Regex,
}

static BUILTIN: LazyLock<KeywordCatalog> = LazyLock::new(KeywordCatalog::build_builtin);

impl KeywordCatalog {
    pub fn builtin() -> &'static KeywordCatalog {
        &BUILTIN
    }

    pub fn empty() -> KeywordCatalog {
        KeywordCatalog::default()
    }

    fn build_builtin() -> KeywordCatalog {
        let tables: [(SkillCategory, &[&'static str]); 6] = [
            (SkillCategory::Language, LANGUAGES),
            (SkillCategory::Framework, FRAMEWORKS),
            (SkillCategory::Database, DATABASES),
            (SkillCategory::CloudDevops, CLOUD_DEVOPS),
            (SkillCategory::Tool, TOOLS),
            (SkillCategory::SoftSkill, SOFT_SKILLS),
        ];

        let skills = tables
            .iter()
            .flat_map(|(category, literals)| {
                literals
                    .iter()
                    .map(move |literal| SkillMatcher::new(*literal, *category))
            })
            .collect();

        let strong_verbs = STRONG_ACTION_VERBS
            .iter()
            .map(|verb| (*verb, boundary_regex(verb)))
            .collect();

        let weak_phrases = WEAK_PHRASES
            .iter()
            .map(|&(weak, replacement)| WeakPhrase {
                weak,
                replacement,
                pattern: Regex::new(&format!(r"(?i)\b{}\b", regex::escape(weak)))
                    .expect("escaped phrase always compiles"),
            })
            .collect();

        KeywordCatalog {
            skills,
            strong_verbs,
            weak_phrases,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn skills(&self) -> &[SkillMatcher] {
        &self.skills
    }

    /// Returns every catalog literal found in `text`, spelled as in the catalog.
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        self.skills
            .iter()
            .filter(|m| m.is_match(text))
            .map(|m| m.literal.to_string())
            .collect()
    }

    /// Literals of a single category, in catalog order.
    pub fn literals_in(&self, category: SkillCategory) -> impl Iterator<Item = &'static str> + '_ {
        self.skills
            .iter()
            .filter(move |m| m.category == category)
            .map(|m| m.literal)
    }

    pub fn contains_strong_verb(&self, text: &str) -> bool {
        self.strong_verbs.iter().any(|(_, re)| re.is_match(text))
    }

    pub fn is_strong_verb(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.strong_verbs.iter().any(|(verb, _)| *verb == word)
    }

    pub fn weak_phrases(&self) -> &[WeakPhrase] {
        &self.weak_phrases
    }

    /// Counts weak-phrase occurrences (word-bounded, case-insensitive).
    pub fn weak_phrase_count(&self, text: &str) -> usize {
        self.weak_phrases
            .iter()
            .map(|w| w.pattern.find_iter(text).count())
            .sum()
    }
}

/// Case-insensitive matcher for `literal` that refuses to match inside a longer word.
fn boundary_regex(literal: &str) -> Regex {
    let pattern = format!(r"(?i)(?:^|[^\w]){}(?:[^\w]|$)", regex::escape(literal));
    Regex::new(&pattern).expect("escaped literal always compiles")
}
