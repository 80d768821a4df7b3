// LLM prompts for resume rewriting and generation.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::RESUME_FORMAT_INSTRUCTION;
use crate::scoring::ScoreReport;

use super::builder::ResumeForm;

pub use crate::llm_client::prompts::PLAIN_TEXT_SYSTEM as WRITER_SYSTEM;

/// Improvement prompt template. Replace every `{placeholder}` before sending.
pub const IMPROVE_PROMPT_TEMPLATE: &str = r#"Improve this resume based on the analysis results. Make it more ATS-friendly and compelling.

ORIGINAL RESUME:
{resume_text}

JOB DESCRIPTION:
{job_description}

ANALYSIS RESULTS:
Missing Skills: {missing_skills}
Formatting Issues: {formatting_issues}
Recommendations: {recommendations}

Provide an improved version that:
1. Uses stronger action verbs
2. Incorporates relevant missing skills only where the original supports them
3. Improves ATS keyword density
4. Keeps the same overall structure and sections

{format_instruction}"#;

/// Generation prompt template. Replace `{form_json}` and `{format_instruction}`.
pub const BUILD_PROMPT_TEMPLATE: &str = r#"Create a professional, ATS-optimized resume from this structured form data (JSON):

{form_json}

Use clean ATS-friendly formatting, strong action verbs, and a professional summary.
Skip any field that is empty.

{format_instruction}"#;

fn join_or_none<'a>(items: impl IntoIterator<Item = &'a String>) -> String {
    let joined = items
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        "none".to_string()
    } else {
        joined
    }
}

pub fn build_improve_prompt(resume_text: &str, job_description: &str, report: &ScoreReport) -> String {
    IMPROVE_PROMPT_TEMPLATE
        .replace("{missing_skills}", &join_or_none(&report.missing_skills))
        .replace("{formatting_issues}", &join_or_none(&report.formatting_issues))
        .replace("{recommendations}", &join_or_none(&report.recommendations))
        .replace("{format_instruction}", RESUME_FORMAT_INSTRUCTION)
        .replace("{job_description}", job_description)
        .replace("{resume_text}", resume_text)
}

pub fn build_generate_prompt(form: &ResumeForm) -> Result<String, serde_json::Error> {
    let form_json = serde_json::to_string_pretty(form)?;
    Ok(BUILD_PROMPT_TEMPLATE
        .replace("{format_instruction}", RESUME_FORMAT_INSTRUCTION)
        .replace("{form_json}", &form_json))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::score;

    #[test]
    fn test_improve_prompt_lists_missing_skills() {
        let report = score("Rust developer", "Rust and Kubernetes");
        let prompt = build_improve_prompt("Rust developer", "Rust and Kubernetes", &report);
        assert!(prompt.contains("Missing Skills: Kubernetes"));
        assert!(prompt.contains("--- SECTION NAME ---"));
        assert!(!prompt.contains("{resume_text}"));
    }

    #[test]
    fn test_generate_prompt_embeds_form() {
        let form = ResumeForm {
            name: "Jane Doe".into(),
            ..Default::default()
        };
        let prompt = build_generate_prompt(&form).unwrap();
        assert!(prompt.contains("\"name\": \"Jane Doe\""));
    }
}
