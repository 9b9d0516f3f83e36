use chrono::{DateTime, Utc};
use serde::Serialize;
use ticketry_db::project::models::Project;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: Uuid,
    pub name: String,
    pub workspace_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            name: project.name,
            workspace_id: project.workspace_id,
            created_at: project.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListProjectsResponse {
    pub data: Vec<ProjectResponse>,
    pub count: usize,
}
