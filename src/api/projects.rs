//! Projects Collection API
//!
//! list/get/create/replace/patch/delete against the remote CRUD API. Nothing
//! here retries; every failure maps to `ApiError` for the caller to surface.

use serde::{Deserialize, Serialize};

use super::{check_status, ApiClient, Document};
use crate::error::ApiError;
use crate::models::{FormData, Project, ProjectAttributes};

/// Body of the saved-flag PATCH
#[derive(Debug, Serialize)]
struct SavedPatch {
    saved: bool,
}

/// Create response: 2xx bodies can still carry an API-level error message
#[derive(Debug, Deserialize)]
struct CreateEnvelope {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<Project>,
}

impl ApiClient {
    /// GET the full project collection
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        let response = self.http().get(self.projects_url()).send().await?;
        let document: Document<Vec<Project>> = check_status(response)?.json().await?;
        Ok(document.data)
    }

    /// GET one project by identifier
    pub async fn get_project(&self, id: &str) -> Result<Project, ApiError> {
        let response = self.http().get(self.project_url(id)).send().await?;
        let document: Document<Project> = check_status(response)?.json().await?;
        Ok(document.data)
    }

    /// POST the form payload; returns the freshly generated plan
    pub async fn create_project(&self, form: &FormData) -> Result<Project, ApiError> {
        let response = self
            .http()
            .post(self.projects_url())
            .json(form)
            .send()
            .await?;
        let envelope: CreateEnvelope = check_status(response)?.json().await?;
        unwrap_created(envelope)
    }

    /// PUT a full project record
    pub async fn replace_project(&self, project: &Project) -> Result<(), ApiError> {
        let response = self
            .http()
            .put(self.project_url(&project.id))
            .json(project)
            .send()
            .await?;
        check_status(response)?;
        Ok(())
    }

    /// PATCH only the saved flag; returns the updated record
    pub async fn patch_saved(&self, id: &str, saved: bool) -> Result<Project, ApiError> {
        let response = self
            .http()
            .patch(self.project_url(id))
            .json(&SavedPatch { saved })
            .send()
            .await?;
        let document: Document<Project> = check_status(response)?.json().await?;
        Ok(document.data)
    }

    /// DELETE by identifier
    pub async fn delete_project(&self, id: &str) -> Result<(), ApiError> {
        let response = self.http().delete(self.project_url(id)).send().await?;
        check_status(response)?;
        Ok(())
    }

    /// Upsert the full attribute block carrying a freshly generated logo
    pub async fn put_logo(&self, id: &str, attributes: &ProjectAttributes) -> Result<(), ApiError> {
        let response = self
            .http()
            .put(self.project_url(id))
            .json(attributes)
            .send()
            .await?;
        check_status(response)?;
        Ok(())
    }
}

fn unwrap_created(envelope: CreateEnvelope) -> Result<Project, ApiError> {
    if let Some(message) = envelope.message {
        if message.contains("Error") {
            return Err(ApiError::Api(format!("{message} -- Please try again")));
        }
    }
    envelope
        .data
        .ok_or_else(|| ApiError::Decode("create response carried no project".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_project() -> Project {
        let raw = serde_json::json!({
            "id": "42",
            "attributes": {
                "name": "RecipeBox",
                "description": "A recipe manager for busy cooks",
                "technologies": "React, Express",
                "collaborators": 3,
                "time": "2 weeks",
                "saved": false,
                "steps": "Week 1: setup\nWeek 2: ship",
                "features": "Search\nTagging",
                "interactions": "Click a card",
                "colors": "#111111\n#222222",
                "logo_url": "",
                "logo_font": "Lobster",
                "user_id": 1
            }
        });
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn saved_patch_body_is_just_the_flag() {
        let body = serde_json::to_value(SavedPatch { saved: true }).unwrap();
        assert_eq!(body, serde_json::json!({ "saved": true }));
    }

    #[test]
    fn create_with_error_message_fails() {
        let envelope = CreateEnvelope {
            message: Some("Error: generation failed".to_string()),
            data: Some(sample_project()),
        };
        match unwrap_created(envelope) {
            Err(ApiError::Api(message)) => {
                assert_eq!(message, "Error: generation failed -- Please try again")
            }
            other => panic!("expected ApiError::Api, got {other:?}"),
        }
    }

    #[test]
    fn create_with_benign_message_returns_the_project() {
        let envelope = CreateEnvelope {
            message: Some("Created".to_string()),
            data: Some(sample_project()),
        };
        assert_eq!(unwrap_created(envelope).unwrap().id, "42");
    }

    #[test]
    fn create_without_data_is_a_decode_failure() {
        let envelope = CreateEnvelope {
            message: None,
            data: None,
        };
        assert!(matches!(unwrap_created(envelope), Err(ApiError::Decode(_))));
    }
}
