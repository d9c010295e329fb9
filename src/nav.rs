use std::fmt;

use thiserror::Error;

use crate::content::{Content, Project, CONTENT};

/// Scroll offset past which the nav bar stops being transparent.
pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavBackground {
    Transparent,
    Opaque,
}

impl NavBackground {
    pub fn from_scroll(offset: f64) -> Self {
        if offset > SCROLL_THRESHOLD {
            Self::Opaque
        } else {
            Self::Transparent
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Opaque => "bg-gray-900/95 backdrop-blur-md border-b border-gray-800",
            Self::Transparent => "bg-transparent",
        }
    }
}

/// Open/closed state of the narrow-viewport menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Jumping to a section always leaves the menu closed.
    pub fn close(&mut self) {
        self.open = false;
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("invalid project id: {0:?}")]
    InvalidId(String),
    #[error("no project with id {0}")]
    UnknownProject(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    ProjectDetail(u32),
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::Home;
        }
        match trimmed.strip_prefix("/project/") {
            Some(raw) => match parse_id(raw) {
                Ok(id) => Self::ProjectDetail(id),
                Err(_) => Self::NotFound,
            },
            None => Self::NotFound,
        }
    }

    pub fn href(self) -> Option<String> {
        match self {
            Self::Home => Some("/".to_string()),
            Self::ProjectDetail(id) => Some(format!("/project/{id}")),
            Self::NotFound => None,
        }
    }
}

fn parse_id(raw: &str) -> Result<u32, RouteError> {
    raw.parse::<u32>()
        .map_err(|_| RouteError::InvalidId(raw.to_string()))
}

pub fn resolve_project_in<'a>(content: &'a Content, raw: &str) -> Result<&'a Project, RouteError> {
    let id = parse_id(raw)?;
    content.project(id).ok_or(RouteError::UnknownProject(id))
}

/// Resolves the `:id` segment of `/project/:id` against the content store.
pub fn resolve_project(raw: &str) -> Result<&'static Project, RouteError> {
    resolve_project_in(&CONTENT, raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_background_threshold() {
        assert_eq!(NavBackground::from_scroll(0.0), NavBackground::Transparent);
        assert_eq!(NavBackground::from_scroll(10.0), NavBackground::Transparent);
        assert_eq!(NavBackground::from_scroll(50.0), NavBackground::Transparent);
        assert_eq!(NavBackground::from_scroll(50.5), NavBackground::Opaque);
        assert_eq!(NavBackground::from_scroll(80.0), NavBackground::Opaque);
    }

    #[test]
    fn test_scroll_switches_once_at_threshold() {
        let states: Vec<_> = (10..=80)
            .map(|y| NavBackground::from_scroll(y as f64))
            .collect();
        let switches = states.windows(2).filter(|w| w[0] != w[1]).count();
        assert_eq!(switches, 1);
        // 10 + 41 = 51 is the first offset past 50
        assert_eq!(states[40], NavBackground::Transparent);
        assert_eq!(states[41], NavBackground::Opaque);
    }

    #[test]
    fn test_section_ids_and_labels() {
        let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["hero", "about", "projects", "skills", "contact"]);
        assert_eq!(Section::Hero.label(), "Home");
        assert_eq!(Section::Contact.to_string(), "contact");
    }

    #[test]
    fn test_mobile_menu_toggle_and_close() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_route_from_path() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/project/3"), Route::ProjectDetail(3));
        assert_eq!(Route::from_path("/project/3/"), Route::ProjectDetail(3));
        assert_eq!(Route::from_path("/project/3?ref=nav"), Route::ProjectDetail(3));
        assert_eq!(Route::from_path("/project/abc"), Route::NotFound);
        assert_eq!(Route::from_path("/project/-1"), Route::NotFound);
        assert_eq!(Route::from_path("/project/"), Route::NotFound);
        assert_eq!(Route::from_path("/blog"), Route::NotFound);
    }

    #[test]
    fn test_route_href() {
        assert_eq!(Route::Home.href().as_deref(), Some("/"));
        assert_eq!(Route::ProjectDetail(4).href().as_deref(), Some("/project/4"));
        assert_eq!(Route::NotFound.href(), None);
        for project in &CONTENT.projects {
            let href = Route::ProjectDetail(project.id).href().unwrap();
            assert_eq!(Route::from_path(&href), Route::ProjectDetail(project.id));
        }
    }

    #[test]
    fn test_known_projects_resolve() {
        for id in 1..=5 {
            let project = resolve_project(&id.to_string()).expect("project should exist");
            assert_eq!(project.id, id);
            assert!(!project.title.is_empty());
        }
    }

    #[test]
    fn test_unknown_projects_not_found() {
        assert_eq!(resolve_project("999"), Err(RouteError::UnknownProject(999)));
        assert_eq!(resolve_project("0"), Err(RouteError::UnknownProject(0)));
        assert_eq!(
            resolve_project("two"),
            Err(RouteError::InvalidId("two".to_string()))
        );
        assert!(resolve_project("").is_err());
    }
}
