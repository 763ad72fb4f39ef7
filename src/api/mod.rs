//! API Client
//!
//! One `ApiClient` shared through Leptos context. On wasm32 the reqwest
//! client is a thin handle over the browser fetch() API, so a fresh one per
//! request costs nothing and keeps `ApiClient` free of non-Send internals.

pub mod palette;
pub mod projects;

use serde::Deserialize;

use crate::error::ApiError;

const PROJECTS_ENDPOINT: &str = "https://8c3a0c1f-6f70-4e2c-82aa-c8e6de99ae51.mock.pstmn.io";
const PALETTE_ENDPOINT: &str = "https://www.thecolorapi.com";
const USER_ID: u32 = 1;

/// JSON envelope the projects API wraps every payload in
#[derive(Debug, Deserialize)]
pub struct Document<T> {
    pub data: T,
}

/// Client for the projects and palette APIs
#[derive(Debug, Clone)]
pub struct ApiClient {
    projects_endpoint: String,
    palette_endpoint: String,
    user_id: u32,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_endpoints(PROJECTS_ENDPOINT, PALETTE_ENDPOINT, USER_ID)
    }

    /// Endpoint-injectable constructor, used by tests
    pub fn with_endpoints(projects: &str, palette: &str, user_id: u32) -> Self {
        Self {
            projects_endpoint: projects.trim_end_matches('/').to_string(),
            palette_endpoint: palette.trim_end_matches('/').to_string(),
            user_id,
        }
    }

    fn http(&self) -> reqwest::Client {
        reqwest::Client::new()
    }

    /// `/api/v1/users/{user_id}/projects` collection URL
    fn projects_url(&self) -> String {
        format!(
            "{}/api/v1/users/{}/projects",
            self.projects_endpoint, self.user_id
        )
    }

    /// URL of one project record
    fn project_url(&self, id: &str) -> String {
        format!("{}/{}", self.projects_url(), id)
    }

    /// Palette scheme URL for a hex seed
    fn scheme_url(&self, seed: &str) -> String {
        format!(
            "{}/scheme?hex={}&mode=analogic&count=5",
            self.palette_endpoint, seed
        )
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a non-success status to `ApiError::Status` before touching the body
fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_follow_the_collection_layout() {
        let api = ApiClient::with_endpoints("https://api.test/", "https://palette.test", 7);
        assert_eq!(api.projects_url(), "https://api.test/api/v1/users/7/projects");
        assert_eq!(api.project_url("42"), "https://api.test/api/v1/users/7/projects/42");
    }

    #[test]
    fn scheme_url_carries_the_seed() {
        let api = ApiClient::with_endpoints("https://api.test", "https://palette.test", 1);
        assert_eq!(
            api.scheme_url("abc123"),
            "https://palette.test/scheme?hex=abc123&mode=analogic&count=5"
        );
    }
}
