// LLM prompts for resume analysis.
// Reuses the JSON-only system prompt from llm_client::prompts.

pub use crate::llm_client::prompts::JSON_ONLY_SYSTEM as ANALYSIS_SYSTEM;

/// Analysis prompt template. Replace `{resume_text}` and `{job_description}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"As an ATS (Applicant Tracking System) expert, analyze this resume against the job description.

RESUME:
{resume_text}

JOB DESCRIPTION:
{job_description}

Return a JSON object with this EXACT schema (no extra fields):
{
  "compositeScore": 85,
  "scores": {
    "keywordMatch": 75,
    "formatting": 90,
    "readability": 80,
    "completeness": 85,
    "actionVerbs": 70
  },
  "matchedSkills": ["JavaScript", "React"],
  "missingSkills": ["Python", "AWS"],
  "suggestedSkills": ["TypeScript", "GraphQL"],
  "formattingIssues": ["Use consistent bullet points"],
  "recommendations": ["Add specific metrics to achievements"]
}

Score every dimension from 0 to 100:
- keywordMatch (40%): how many job requirements the resume mentions
- formatting (20%): professional structure, consistency, ATS-friendly layout
- readability (15%): clear language, short sentences
- completeness (15%): contact details, summary, experience, education, skills present
- actionVerbs (10%): bullets open with strong, specific verbs

Base every skill list on text that actually appears in the resume or the job description."#;

pub fn build_analysis_prompt(resume_text: &str, job_description: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description)
}
