use std::fmt::{self, Write};

use crate::content::{ResumeEntry, SiteContent};

pub const RESUME_PATH: &str = "/resume.txt";

pub fn file_name(content: &SiteContent) -> String {
    format!("{}.txt", content.name.to_lowercase().replace(' ', "_"))
}

/// Plain-text résumé built from the site content.
pub fn render(content: &SiteContent) -> String {
    let mut out = String::new();
    // writing into a String never fails
    write_resume(&mut out, content).map(|_| out).unwrap_or_default()
}

fn write_resume(out: &mut String, content: &SiteContent) -> fmt::Result {
    writeln!(out, "{}", content.name.to_uppercase())?;
    writeln!(out, "{}", content.title)?;
    writeln!(out)?;
    writeln!(out, "CONTACT INFORMATION")?;
    writeln!(out, "Email: {}", content.email)?;
    writeln!(out, "Location: {}", content.location)?;
    for social in content.socials.iter().filter(|s| !s.url.starts_with("mailto:")) {
        writeln!(out, "{}", social.url)?;
    }

    section(out, "EDUCATION", &content.resume.education)?;
    section(out, "EXPERIENCE", &content.resume.experience)?;
    section(out, "CERTIFICATIONS", &content.resume.certifications)?;

    writeln!(out)?;
    writeln!(out, "TECHNICAL SKILLS")?;
    for group in &content.resume.skill_groups {
        writeln!(out, "{}: {}", group.area, group.items.join(", "))?;
    }

    writeln!(out)?;
    writeln!(out, "PROJECTS")?;
    for project in &content.projects {
        writeln!(out, "- {}", project.title)?;
    }
    Ok(())
}

fn section(out: &mut String, title: &str, entries: &[ResumeEntry]) -> fmt::Result {
    if entries.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "{title}")?;
    for entry in entries {
        writeln!(out, "{} | {}", entry.heading, entry.period)?;
        for detail in &entry.details {
            writeln!(out, "- {detail}")?;
        }
    }
    Ok(())
}
