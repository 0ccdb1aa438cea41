use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::ErrorResponse;
use crate::utils::BaseResponse;

use super::dto::{
    DeleteTeamResponse, SuccessDeleteTeamResponse, SuccessTeamListResponse,
    SuccessTeamOptionsResponse, SuccessTeamResponse, TeamOptionItem, TeamResponse, TeamSaveRequest,
};
use super::service::TeamService;

/// Team list, ordered by name.
#[utoipa::path(
    get,
    path = "/api/v1/teams",
    responses(
        (status = 200, description = "Team list", body = SuccessTeamListResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    ),
    tag = "Team"
)]
pub async fn list_teams(
    State(state): State<AppState>,
) -> Result<Json<BaseResponse<Vec<TeamResponse>>>, AppError> {
    let result = TeamService::list_teams(&state).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// Create a team.
#[utoipa::path(
    post,
    path = "/api/v1/teams",
    request_body = TeamSaveRequest,
    responses(
        (status = 200, description = "Team created", body = SuccessTeamResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 409, description = "Duplicate team name", body = ErrorResponse)
    ),
    tag = "Team"
)]
pub async fn create_team(
    State(state): State<AppState>,
    Json(req): Json<TeamSaveRequest>,
) -> Result<Json<BaseResponse<TeamResponse>>, AppError> {
    req.validate()?;

    let result = TeamService::create_team(&state, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// Edit a team (full overwrite).
#[utoipa::path(
    put,
    path = "/api/v1/teams/{team_id}",
    params(("team_id" = i64, Path, description = "Team id")),
    request_body = TeamSaveRequest,
    responses(
        (status = 200, description = "Team updated", body = SuccessTeamResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Team not found", body = ErrorResponse),
        (status = 409, description = "Duplicate team name", body = ErrorResponse)
    ),
    tag = "Team"
)]
pub async fn update_team(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
    Json(req): Json<TeamSaveRequest>,
) -> Result<Json<BaseResponse<TeamResponse>>, AppError> {
    req.validate()?;

    let result = TeamService::update_team(&state, team_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// Delete a team.
#[utoipa::path(
    delete,
    path = "/api/v1/teams/{team_id}",
    params(("team_id" = i64, Path, description = "Team id")),
    responses(
        (status = 200, description = "Team deleted", body = SuccessDeleteTeamResponse),
        (status = 400, description = "Team still referenced", body = ErrorResponse),
        (status = 404, description = "Team not found", body = ErrorResponse)
    ),
    tag = "Team"
)]
pub async fn delete_team(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
) -> Result<Json<BaseResponse<DeleteTeamResponse>>, AppError> {
    let result = TeamService::delete_team(&state, team_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// Dropdown options for team pickers.
#[utoipa::path(
    get,
    path = "/api/v1/teams/options",
    responses(
        (status = 200, description = "Team options", body = SuccessTeamOptionsResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    ),
    tag = "Team"
)]
pub async fn team_options(
    State(state): State<AppState>,
) -> Result<Json<BaseResponse<Vec<TeamOptionItem>>>, AppError> {
    let result = TeamService::team_options(&state).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// Dropdown options restricted to teams registered in a group.
#[utoipa::path(
    get,
    path = "/api/v1/groups/{group_id}/teams/options",
    params(("group_id" = i64, Path, description = "Group id")),
    responses(
        (status = 200, description = "Team options", body = SuccessTeamOptionsResponse),
        (status = 404, description = "Group not found", body = ErrorResponse)
    ),
    tag = "Team"
)]
pub async fn group_team_options(
    State(state): State<AppState>,
    Path(group_id): Path<i64>,
) -> Result<Json<BaseResponse<Vec<TeamOptionItem>>>, AppError> {
    let result = TeamService::group_team_options(&state, group_id).await?;

    Ok(Json(BaseResponse::success(result)))
}
