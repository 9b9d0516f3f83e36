use serde::Deserialize;
use ticketry_db::authz::models::Role;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateWorkspaceRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct AddMemberRequest {
    pub user_id: Uuid,
    pub role: Role,
}
