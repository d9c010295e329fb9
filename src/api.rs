use axum::{
    extract::Path,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::content::{PersonalInfo, Project, SkillCategory, CONTENT};
use crate::nav::{resolve_project, RouteError};
use crate::ping::PingResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Project not found")]
    ProjectNotFound(#[from] RouteError),
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::ProjectNotFound(_) => StatusCode::NOT_FOUND,
        };
        tracing::debug!(error = ?self, "api request failed");
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Read-only JSON view of the content store, mounted next to the app routes.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/api/", get(root))
        .route("/api/projects", get(projects))
        .route("/api/projects/featured", get(featured_projects))
        .route("/api/projects/{id}", get(project))
        .route("/api/personal-info", get(personal_info))
        .route("/api/skills", get(skills))
}

async fn root() -> Json<PingResponse> {
    Json(PingResponse::default())
}

async fn projects() -> Json<&'static [Project]> {
    Json(CONTENT.projects.as_slice())
}

async fn featured_projects() -> Json<Vec<&'static Project>> {
    Json(CONTENT.featured_projects().collect())
}

async fn project(Path(id): Path<String>) -> Result<Json<&'static Project>, ApiError> {
    Ok(Json(resolve_project(&id)?))
}

async fn personal_info() -> Json<&'static PersonalInfo> {
    Json(&CONTENT.personal)
}

async fn skills() -> Json<&'static [SkillCategory]> {
    Json(CONTENT.skills.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use http::Request;
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let app: Router = router();
        let res = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_root_ping() {
        let (status, body) = get_json("/api/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Portfolio API is running!");
    }

    #[tokio::test]
    async fn test_list_projects() {
        let (status, body) = get_json("/api/projects").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(CONTENT.projects.len()));

        let (_, featured) = get_json("/api/projects/featured").await;
        let count = CONTENT.featured_projects().count();
        assert_eq!(featured.as_array().map(Vec::len), Some(count));
    }

    #[tokio::test]
    async fn test_single_project() {
        let (status, body) = get_json("/api/projects/2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 2);
        assert_eq!(body["title"], CONTENT.project(2).unwrap().title.as_str());
    }

    #[tokio::test]
    async fn test_missing_project_is_404() {
        for uri in ["/api/projects/999", "/api/projects/abc"] {
            let (status, body) = get_json(uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body["detail"], "Project not found");
        }
    }

    #[tokio::test]
    async fn test_personal_info_and_skills() {
        let (status, body) = get_json("/api/personal-info").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], CONTENT.personal.name.as_str());

        let (status, body) = get_json("/api/skills").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["category"], "Frontend");
    }
}
