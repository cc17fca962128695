use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const SITE_FILE: &str = "site.json";

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("site content file {0} is missing")]
    Missing(&'static str),
    #[error("couldn't parse site content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid site content: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub email: String,
    pub location: String,
    pub phrases: Vec<String>,
    pub about: Vec<String>,
    pub stats: Vec<Stat>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub socials: Vec<Social>,
    pub resume: Resume,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub target: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub percent: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Social {
    pub url: String,
    /// Font Awesome classes, also used for the tooltip label.
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    pub education: Vec<ResumeEntry>,
    pub experience: Vec<ResumeEntry>,
    pub certifications: Vec<ResumeEntry>,
    pub skill_groups: Vec<SkillGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeEntry {
    pub heading: String,
    pub period: String,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub area: String,
    pub items: Vec<String>,
}

impl SiteContent {
    /// Parses the bundled site content.
    pub fn load() -> Result<Self, ContentError> {
        let file = Assets::get(SITE_FILE).ok_or(ContentError::Missing(SITE_FILE))?;
        Self::from_json(&file.data)
    }

    pub fn from_json(raw: &[u8]) -> Result<Self, ContentError> {
        let content = serde_json::from_slice::<Self>(raw)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.phrases.is_empty() || self.phrases.iter().any(|p| p.is_empty()) {
            return Err(ContentError::Invalid(
                "phrases must be a non-empty list of non-empty strings".to_string(),
            ));
        }
        if let Some(skill) = self.skills.iter().find(|s| s.percent > 100) {
            return Err(ContentError::Invalid(format!(
                "skill {} is above 100%",
                skill.name
            )));
        }
        if let Some(stat) = self.stats.iter().find(|s| s.target < 0) {
            return Err(ContentError::Invalid(format!(
                "stat {} has a negative target",
                stat.label
            )));
        }
        Ok(())
    }

    /// Distinct project categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories = Vec::<String>::new();
        for project in &self.projects {
            if !categories.contains(&project.category) {
                categories.push(project.category.clone());
            }
        }
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_content_loads() {
        let content = SiteContent::load().expect("bundled content should be valid");
        assert!(!content.phrases.is_empty());
        assert!(!content.projects.is_empty());
        assert!(content.stats.iter().any(|s| s.target > 0));
        let categories = content.categories();
        let mut deduped = categories.clone();
        deduped.dedup();
        assert_eq!(categories, deduped);
    }

    #[test]
    fn test_rejects_bad_content() {
        let mut value = serde_json::to_value(SiteContent::load().unwrap()).unwrap();
        value["phrases"] = serde_json::json!([]);
        let raw = serde_json::to_vec(&value).unwrap();
        assert!(matches!(
            SiteContent::from_json(&raw),
            Err(ContentError::Invalid(_))
        ));

        let mut value = serde_json::to_value(SiteContent::load().unwrap()).unwrap();
        value["skills"][0]["percent"] = serde_json::json!(120);
        let raw = serde_json::to_vec(&value).unwrap();
        assert!(matches!(
            SiteContent::from_json(&raw),
            Err(ContentError::Invalid(_))
        ));

        assert!(matches!(
            SiteContent::from_json(b"{ not json"),
            Err(ContentError::Parse(_))
        ));
    }
}
