//! Template-based resume assembly from structured form data.
//!
//! Output uses the `--- SECTION ---` header convention so it parses back into the
//! matching sections. Empty fields and entries are skipped.

use serde::{Deserialize, Serialize};

const DEFAULT_SUMMARY: &str =
    "Dedicated professional with strong technical skills and proven track record of success.";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub degree: String,
    pub institute: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub tech_stack: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

/// Everything the resume builder form collects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeForm {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
    pub summary: String,
    pub skills: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<CertificationEntry>,
}

impl ResumeForm {
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

/// Joins the non-blank parts with `sep`, trimming each.
fn join_present(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

fn push_line(out: &mut String, line: &str) {
    if !line.trim().is_empty() {
        out.push_str(line.trim());
        out.push('\n');
    }
}

fn push_header(out: &mut String, title: &str) {
    out.push_str(&format!("\n--- {title} ---\n"));
}

/// Assembles plain resume text from `form`.
pub fn build_from_template(form: &ResumeForm) -> String {
    let mut out = String::new();

    push_line(&mut out, &form.name);
    push_line(&mut out, &form.title);
    push_line(&mut out, &join_present(&[&form.email, &form.phone, &form.location], " | "));
    for (label, value) in [
        ("LinkedIn", &form.linkedin),
        ("GitHub", &form.github),
        ("Portfolio", &form.portfolio),
    ] {
        if !value.trim().is_empty() {
            push_line(&mut out, &format!("{label}: {}", value.trim()));
        }
    }

    push_header(&mut out, "PROFESSIONAL SUMMARY");
    let summary = form.summary.trim();
    push_line(&mut out, if summary.is_empty() { DEFAULT_SUMMARY } else { summary });

    let skills = join_present(
        &form.skills.iter().map(String::as_str).collect::<Vec<_>>(),
        ", ",
    );
    if !skills.is_empty() {
        push_header(&mut out, "TECHNICAL SKILLS");
        push_line(&mut out, &skills);
    }

    let experience: Vec<&ExperienceEntry> =
        form.experience.iter().filter(|e| !e.role.trim().is_empty()).collect();
    if !experience.is_empty() {
        push_header(&mut out, "EXPERIENCE");
        for exp in experience {
            let dates = join_present(&[&exp.start_date, &exp.end_date], " - ");
            push_line(&mut out, &join_present(&[&exp.role, &exp.company, &dates], " | "));
            for bullet in exp.bullets.iter().filter(|b| !b.trim().is_empty()) {
                push_line(&mut out, &format!("• {}", bullet.trim()));
            }
        }
    }

    let education: Vec<&EducationEntry> =
        form.education.iter().filter(|e| !e.degree.trim().is_empty()).collect();
    if !education.is_empty() {
        push_header(&mut out, "EDUCATION");
        for edu in education {
            let dates = join_present(&[&edu.start_date, &edu.end_date], " - ");
            let gpa = if edu.gpa.trim().is_empty() {
                String::new()
            } else {
                format!("GPA: {}", edu.gpa.trim())
            };
            push_line(
                &mut out,
                &join_present(&[&edu.degree, &edu.institute, &dates, &gpa], " | "),
            );
        }
    }

    let projects: Vec<&ProjectEntry> =
        form.projects.iter().filter(|p| !p.title.trim().is_empty()).collect();
    if !projects.is_empty() {
        push_header(&mut out, "PROJECTS");
        for project in projects {
            push_line(&mut out, &join_present(&[&project.title, &project.tech_stack], " | "));
            if !project.description.trim().is_empty() {
                push_line(&mut out, &format!("• {}", project.description.trim()));
            }
            push_line(&mut out, &project.link);
        }
    }

    let certifications: Vec<&CertificationEntry> =
        form.certifications.iter().filter(|c| !c.name.trim().is_empty()).collect();
    if !certifications.is_empty() {
        push_header(&mut out, "CERTIFICATIONS");
        for cert in certifications {
            push_line(&mut out, &join_present(&[&cert.name, &cert.issuer, &cert.date], " | "));
        }
    }

    out.trim_end().to_string()
}
