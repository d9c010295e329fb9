use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

pub static CONTENT: LazyLock<Content> =
    LazyLock::new(|| Content::load().expect("Embedded content should be valid"));

/// Number of project cards shown before "View All Projects" is pressed.
pub const GALLERY_PREVIEW: usize = 3;

const PERSONAL_FILE: &str = "personal.json";
const PROJECTS_FILE: &str = "projects.json";
const SKILLS_FILE: &str = "skills.json";

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub images: Vec<String>,
    pub live_link: String,
    pub github_link: String,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    /// First image, used as the gallery card thumbnail.
    pub fn cover(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// The first `limit` technologies and how many were left out.
    pub fn technology_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = &self.technologies[..self.technologies.len().min(limit)];
        (shown, self.technologies.len() - shown.len())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

impl SocialLink {
    pub fn glyph(&self) -> &'static str {
        match self.platform.as_str() {
            "linkedin" => "💼",
            "github" => "🐙",
            "dribbble" => "🏀",
            "instagram" => "📸",
            _ => "🔗",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub resume_url: String,
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

impl PersonalInfo {
    /// File name offered to the browser when downloading the resume.
    pub fn resume_file_name(&self) -> &str {
        match self.resume_url.rsplit('/').next() {
            Some(name) if !name.is_empty() => name,
            _ => "resume.pdf",
        }
    }
}

/// Icons that are dark-on-transparent and need inverting on dark backgrounds.
const INVERTED_ICONS: [&str; 3] = ["Three.js", "Shadcn UI", "Photoshop"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillIcon<'a> {
    Image(&'a str),
    Glyph(&'a str),
}

impl Skill {
    pub fn icon(&self) -> SkillIcon<'_> {
        if self.icon.starts_with("http") {
            SkillIcon::Image(&self.icon)
        } else {
            SkillIcon::Glyph(&self.icon)
        }
    }

    pub fn invert_icon(&self) -> bool {
        INVERTED_ICONS.contains(&self.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<Skill>,
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content file {0} is missing")]
    Missing(&'static str),
    #[error("Couldn't parse {file}: {source}")]
    Parse {
        file: &'static str,
        source: serde_json::Error,
    },
    #[error("Project id {0} is used more than once")]
    DuplicateProjectId(u32),
    #[error("Project {0} has no images")]
    NoImages(u32),
    #[error("Skill {name} has level {level}, expected 0-100")]
    SkillLevel { name: String, level: u8 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub personal: PersonalInfo,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
}

impl Content {
    /// Loads and validates the documents embedded from `content/`.
    pub fn load() -> Result<Self, ContentError> {
        Self::parse(
            &read_asset(PERSONAL_FILE)?,
            &read_asset(PROJECTS_FILE)?,
            &read_asset(SKILLS_FILE)?,
        )
    }

    pub fn parse(personal: &str, projects: &str, skills: &str) -> Result<Self, ContentError> {
        let personal = parse_json(PERSONAL_FILE, personal)?;
        let projects = parse_json(PROJECTS_FILE, projects)?;
        let skills = parse_json(SKILLS_FILE, skills)?;
        Self::new(personal, projects, skills)
    }

    pub fn new(
        personal: PersonalInfo,
        projects: Vec<Project>,
        skills: Vec<SkillCategory>,
    ) -> Result<Self, ContentError> {
        let mut seen = HashSet::new();
        for project in &projects {
            if !seen.insert(project.id) {
                return Err(ContentError::DuplicateProjectId(project.id));
            }
            if project.images.is_empty() {
                return Err(ContentError::NoImages(project.id));
            }
        }
        for skill in skills.iter().flat_map(|c| &c.skills) {
            match skill.level {
                Some(level) if level > 100 => {
                    return Err(ContentError::SkillLevel {
                        name: skill.name.clone(),
                        level,
                    });
                }
                _ => {}
            }
        }
        Ok(Self {
            personal,
            projects,
            skills,
        })
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Projects shown in the gallery, collapsed to the first few unless expanded.
    pub fn gallery(&self, show_all: bool) -> &[Project] {
        if show_all {
            &self.projects
        } else {
            &self.projects[..self.projects.len().min(GALLERY_PREVIEW)]
        }
    }

    pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }

    pub fn skill_category(&self, name: &str) -> Option<&SkillCategory> {
        self.skills.iter().find(|c| c.category == name)
    }
}

fn read_asset(name: &'static str) -> Result<String, ContentError> {
    let file = Assets::get(name).ok_or(ContentError::Missing(name))?;
    Ok(String::from_utf8_lossy(&file.data).into_owned())
}

fn parse_json<T: serde::de::DeserializeOwned>(
    file: &'static str,
    raw: &str,
) -> Result<T, ContentError> {
    serde_json::from_str(raw).map_err(|source| ContentError::Parse { file, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u32, images: &[&str]) -> Project {
        Project {
            id,
            title: format!("Project {id}"),
            short_description: String::new(),
            description: String::new(),
            technologies: vec!["Rust".to_string()],
            images: images.iter().map(|s| s.to_string()).collect(),
            live_link: String::new(),
            github_link: String::new(),
            featured: false,
        }
    }

    #[test]
    fn test_embedded_content_loads() {
        let content = Content::load().expect("embedded content should load");
        let ids: Vec<u32> = content.projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert!(content.projects.iter().all(|p| !p.images.is_empty()));
        assert_eq!(content.personal.social.len(), 3);
        assert!(content.skill_category("Frontend").is_some());
        assert!(content.skill_category("Tools & Others").is_some());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let personal = CONTENT.personal.clone();
        let res = Content::new(personal, vec![project(1, &["/a.png"]), project(1, &["/b.png"])], vec![]);
        assert!(matches!(res, Err(ContentError::DuplicateProjectId(1))));
    }

    #[test]
    fn test_empty_images_rejected() {
        let personal = CONTENT.personal.clone();
        let res = Content::new(personal, vec![project(7, &[])], vec![]);
        assert!(matches!(res, Err(ContentError::NoImages(7))));
    }

    #[test]
    fn test_skill_level_out_of_range() {
        let skills = r#"[{"category": "X", "skills": [{"name": "Y", "level": 150, "icon": "*"}]}]"#;
        let res = Content::parse(
            &read_asset(PERSONAL_FILE).unwrap(),
            &read_asset(PROJECTS_FILE).unwrap(),
            skills,
        );
        assert!(matches!(res, Err(ContentError::SkillLevel { level: 150, .. })));
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = Content::parse("{", "[]", "[]").unwrap_err();
        assert!(err.to_string().contains("personal.json"));
    }

    #[test]
    fn test_technology_preview() {
        let p = CONTENT.project(1).unwrap();
        let (shown, more) = p.technology_preview(3);
        assert_eq!(shown, &p.technologies[..3]);
        assert_eq!(more, p.technologies.len() - 3);

        let p = project(9, &["/a.png"]);
        let (shown, more) = p.technology_preview(3);
        assert_eq!(shown.len(), 1);
        assert_eq!(more, 0);
    }

    #[test]
    fn test_cover_image() {
        let p = project(3, &["/one.png", "/two.png"]);
        assert_eq!(p.cover(), Some("/one.png"));
        assert_eq!(project(4, &[]).cover(), None);
        assert!(CONTENT.projects.iter().all(|p| p.cover().is_some()));
    }

    #[test]
    fn test_gallery_collapses() {
        assert_eq!(CONTENT.gallery(false).len(), GALLERY_PREVIEW);
        assert_eq!(CONTENT.gallery(true).len(), CONTENT.projects.len());
        let small = Content::new(CONTENT.personal.clone(), vec![project(1, &["/a.png"])], vec![])
            .unwrap();
        assert_eq!(small.gallery(false).len(), 1);
    }

    #[test]
    fn test_skill_icons() {
        let frontend = CONTENT.skill_category("Frontend").unwrap();
        let react = frontend.skills.iter().find(|s| s.name == "React").unwrap();
        assert_eq!(react.icon(), SkillIcon::Glyph("⚛️"));
        let three = frontend.skills.iter().find(|s| s.name == "Three.js").unwrap();
        assert!(matches!(three.icon(), SkillIcon::Image(_)));
        assert!(three.invert_icon());
        assert!(!react.invert_icon());
    }

    #[test]
    fn test_resume_file_name() {
        let mut info = CONTENT.personal.clone();
        assert_eq!(info.resume_file_name(), "LatestResume.png");
        info.resume_url = "/docs/".to_string();
        assert_eq!(info.resume_file_name(), "resume.pdf");
    }

    #[test]
    fn test_social_glyphs() {
        let link = SocialLink {
            platform: "mastodon".to_string(),
            url: "https://example.com".to_string(),
        };
        assert_eq!(link.glyph(), "🔗");
        assert_eq!(CONTENT.personal.social[0].glyph(), "💼");
    }
}
