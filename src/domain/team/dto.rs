use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Create/edit payload for a team. Edits are a full overwrite.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamSaveRequest {
    #[validate(length(min = 1, max = 100, message = "Team name must be 1-100 characters."))]
    pub name: String,

    #[validate(length(max = 500, message = "Logo path must not exceed 500 characters."))]
    pub logo_path: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    pub team_id: i64,
    pub name: String,
    pub logo_path: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessTeamResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: TeamResponse,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessTeamListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<TeamResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTeamResponse {
    pub team_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessDeleteTeamResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: DeleteTeamResponse,
}

/// Dropdown option entry for team pickers.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamOptionItem {
    pub team_id: i64,
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessTeamOptionsResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<TeamOptionItem>,
}
