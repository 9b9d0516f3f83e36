use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
}
