//! Project Draft
//!
//! Typed edit buffer for the results view. All in-place editing mutates a
//! `ProjectDraft`; the cached `Project` is only touched when the draft is
//! applied and the merged record is PUT back.

use crate::models::Project;

/// Editable copy of a project's user-facing fields
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub features: Vec<String>,
    pub interactions: Vec<String>,
    pub palette: Vec<String>,
    pub logo_url: String,
    pub logo_font: String,
}

impl ProjectDraft {
    /// Deep copy of the editable fields; later draft mutation never reaches
    /// the source project.
    pub fn from_project(project: &Project) -> Self {
        let attrs = &project.attributes;
        Self {
            title: attrs.name.clone(),
            features: attrs.features.clone(),
            interactions: attrs.interactions.clone(),
            palette: attrs.colors.clone(),
            logo_url: attrs.logo_url.clone(),
            logo_font: attrs.logo_font.clone(),
        }
    }

    /// Merge the buffers onto a clone of `project`. The only path by which
    /// edits reach the wire.
    pub fn apply_to(&self, project: &Project) -> Project {
        let mut merged = project.clone();
        merged.attributes.name = self.title.clone();
        merged.attributes.features = self.features.clone();
        merged.attributes.interactions = self.interactions.clone();
        merged.attributes.colors = self.palette.clone();
        merged.attributes.logo_url = self.logo_url.clone();
        merged.attributes.logo_font = self.logo_font.clone();
        merged
    }

    /// True when any palette entry is not yet a real color (no `#` prefix),
    /// the API's placeholder for "palette still pending"
    pub fn needs_palette_repair(&self) -> bool {
        self.palette.iter().any(|color| !color.contains('#'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Project, ProjectAttributes};

    fn sample_project() -> Project {
        Project {
            id: "42".to_string(),
            attributes: ProjectAttributes {
                name: "RecipeBox".to_string(),
                description: "A recipe manager for busy cooks".to_string(),
                technologies: "React, Express".to_string(),
                collaborators: 3,
                time: "2 weeks".to_string(),
                saved: false,
                steps: vec!["Week 1: setup".to_string(), "Week 2: ship".to_string()],
                features: vec!["Search".to_string(), "Tagging".to_string()],
                interactions: vec!["Click a card".to_string()],
                colors: vec!["#111111".to_string(), "#222222".to_string()],
                logo_url: String::new(),
                logo_font: "Lobster".to_string(),
                user_id: 1,
            },
        }
    }

    #[test]
    fn draft_is_a_deep_copy() {
        let project = sample_project();
        let mut draft = ProjectDraft::from_project(&project);
        draft.title = "Renamed".to_string();
        draft.palette.push("#333333".to_string());
        assert_eq!(project.attributes.name, "RecipeBox");
        assert_eq!(project.attributes.colors.len(), 2);
    }

    #[test]
    fn apply_merges_buffers_and_keeps_the_rest() {
        let project = sample_project();
        let mut draft = ProjectDraft::from_project(&project);
        draft.title = "Renamed".to_string();
        draft.features.push("Export".to_string());
        draft.logo_url = "https://example.com/logo.png".to_string();

        let merged = draft.apply_to(&project);
        assert_eq!(merged.id, project.id);
        assert_eq!(merged.attributes.name, "Renamed");
        assert_eq!(merged.attributes.features.last().unwrap(), "Export");
        assert_eq!(merged.attributes.logo_url, "https://example.com/logo.png");
        // untouched fields carry over
        assert_eq!(merged.attributes.description, project.attributes.description);
        assert_eq!(merged.attributes.steps, project.attributes.steps);
        assert_eq!(merged.attributes.saved, project.attributes.saved);
        // the source project is unchanged
        assert_eq!(project.attributes.name, "RecipeBox");
    }

    #[test]
    fn palette_repair_keys_off_missing_hash() {
        let project = sample_project();
        let mut draft = ProjectDraft::from_project(&project);
        assert!(!draft.needs_palette_repair());

        draft.palette = vec![String::new()];
        assert!(draft.needs_palette_repair());

        draft.palette = vec!["#111111".to_string(), "pending".to_string()];
        assert!(draft.needs_palette_repair());
    }
}
