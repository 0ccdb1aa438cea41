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
    DeleteGroupResponse, DeleteMatchResponse, DeleteStandingResponse, DeleteTournamentResponse,
    GroupDetailViewResponse, GroupResponse, GroupSaveRequest, MatchResponse, MatchSaveRequest,
    StandingResponse, StandingSaveRequest, SuccessDeleteGroupResponse, SuccessDeleteMatchResponse,
    SuccessDeleteStandingResponse, SuccessDeleteTournamentResponse, SuccessGroupDetailViewResponse,
    SuccessGroupResponse, SuccessMatchResponse, SuccessStandingResponse,
    SuccessTournamentDetailResponse, SuccessTournamentListResponse, SuccessTournamentResponse,
    TournamentDetailResponse, TournamentListItem, TournamentResponse, TournamentSaveRequest,
};
use super::service::TournamentService;

/// Tournament list, ordered by start date.
#[utoipa::path(
    get,
    path = "/api/v1/tournaments",
    responses(
        (status = 200, description = "Tournament list", body = SuccessTournamentListResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    ),
    tag = "Tournament"
)]
pub async fn list_tournaments(
    State(state): State<AppState>,
) -> Result<Json<BaseResponse<Vec<TournamentListItem>>>, AppError> {
    let result = TournamentService::list_tournaments(&state).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// Create a tournament.
#[utoipa::path(
    post,
    path = "/api/v1/tournaments",
    request_body = TournamentSaveRequest,
    responses(
        (status = 200, description = "Tournament created", body = SuccessTournamentResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 409, description = "Duplicate tournament name", body = ErrorResponse)
    ),
    tag = "Tournament"
)]
pub async fn create_tournament(
    State(state): State<AppState>,
    Json(req): Json<TournamentSaveRequest>,
) -> Result<Json<BaseResponse<TournamentResponse>>, AppError> {
    req.validate()?;

    let result = TournamentService::create_tournament(&state, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// Tournament detail with groups, standings and matches.
#[utoipa::path(
    get,
    path = "/api/v1/tournaments/{tournament_id}",
    params(("tournament_id" = i64, Path, description = "Tournament id")),
    responses(
        (status = 200, description = "Tournament detail", body = SuccessTournamentDetailResponse),
        (status = 404, description = "Tournament not found", body = ErrorResponse)
    ),
    tag = "Tournament"
)]
pub async fn get_tournament_detail(
    State(state): State<AppState>,
    Path(tournament_id): Path<i64>,
) -> Result<Json<BaseResponse<TournamentDetailResponse>>, AppError> {
    let result = TournamentService::get_tournament_detail(&state, tournament_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// Edit a tournament (full overwrite).
#[utoipa::path(
    put,
    path = "/api/v1/tournaments/{tournament_id}",
    params(("tournament_id" = i64, Path, description = "Tournament id")),
    request_body = TournamentSaveRequest,
    responses(
        (status = 200, description = "Tournament updated", body = SuccessTournamentResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Tournament not found", body = ErrorResponse),
        (status = 409, description = "Duplicate tournament name", body = ErrorResponse)
    ),
    tag = "Tournament"
)]
pub async fn update_tournament(
    State(state): State<AppState>,
    Path(tournament_id): Path<i64>,
    Json(req): Json<TournamentSaveRequest>,
) -> Result<Json<BaseResponse<TournamentResponse>>, AppError> {
    req.validate()?;

    let result = TournamentService::update_tournament(&state, tournament_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// Delete a tournament with all of its groups, standings and matches.
#[utoipa::path(
    delete,
    path = "/api/v1/tournaments/{tournament_id}",
    params(("tournament_id" = i64, Path, description = "Tournament id")),
    responses(
        (status = 200, description = "Tournament deleted", body = SuccessDeleteTournamentResponse),
        (status = 404, description = "Tournament not found", body = ErrorResponse)
    ),
    tag = "Tournament"
)]
pub async fn delete_tournament(
    State(state): State<AppState>,
    Path(tournament_id): Path<i64>,
) -> Result<Json<BaseResponse<DeleteTournamentResponse>>, AppError> {
    let result = TournamentService::delete_tournament(&state, tournament_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// Add a group to a tournament.
#[utoipa::path(
    post,
    path = "/api/v1/tournaments/{tournament_id}/groups",
    params(("tournament_id" = i64, Path, description = "Tournament id")),
    request_body = GroupSaveRequest,
    responses(
        (status = 200, description = "Group created", body = SuccessGroupResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Tournament not found", body = ErrorResponse),
        (status = 409, description = "Duplicate group name", body = ErrorResponse)
    ),
    tag = "Group"
)]
pub async fn add_group(
    State(state): State<AppState>,
    Path(tournament_id): Path<i64>,
    Json(req): Json<GroupSaveRequest>,
) -> Result<Json<BaseResponse<GroupResponse>>, AppError> {
    req.validate()?;

    let result = TournamentService::add_group(&state, tournament_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// Group detail with standings and matches.
#[utoipa::path(
    get,
    path = "/api/v1/groups/{group_id}",
    params(("group_id" = i64, Path, description = "Group id")),
    responses(
        (status = 200, description = "Group detail", body = SuccessGroupDetailViewResponse),
        (status = 404, description = "Group not found", body = ErrorResponse)
    ),
    tag = "Group"
)]
pub async fn get_group_detail(
    State(state): State<AppState>,
    Path(group_id): Path<i64>,
) -> Result<Json<BaseResponse<GroupDetailViewResponse>>, AppError> {
    let result = TournamentService::get_group_detail(&state, group_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// Edit a group (full overwrite).
#[utoipa::path(
    put,
    path = "/api/v1/groups/{group_id}",
    params(("group_id" = i64, Path, description = "Group id")),
    request_body = GroupSaveRequest,
    responses(
        (status = 200, description = "Group updated", body = SuccessGroupResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 409, description = "Duplicate group name", body = ErrorResponse)
    ),
    tag = "Group"
)]
pub async fn update_group(
    State(state): State<AppState>,
    Path(group_id): Path<i64>,
    Json(req): Json<GroupSaveRequest>,
) -> Result<Json<BaseResponse<GroupResponse>>, AppError> {
    req.validate()?;

    let result = TournamentService::update_group(&state, group_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// Delete a group with its standings and matches.
#[utoipa::path(
    delete,
    path = "/api/v1/groups/{group_id}",
    params(("group_id" = i64, Path, description = "Group id")),
    responses(
        (status = 200, description = "Group deleted", body = SuccessDeleteGroupResponse),
        (status = 404, description = "Group not found", body = ErrorResponse)
    ),
    tag = "Group"
)]
pub async fn delete_group(
    State(state): State<AppState>,
    Path(group_id): Path<i64>,
) -> Result<Json<BaseResponse<DeleteGroupResponse>>, AppError> {
    let result = TournamentService::delete_group(&state, group_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// Register a team in a group (new standings row).
#[utoipa::path(
    post,
    path = "/api/v1/groups/{group_id}/standings",
    params(("group_id" = i64, Path, description = "Group id")),
    request_body = StandingSaveRequest,
    responses(
        (status = 200, description = "Standings row created", body = SuccessStandingResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Group or team not found", body = ErrorResponse),
        (status = 409, description = "Team already registered", body = ErrorResponse)
    ),
    tag = "Standing"
)]
pub async fn add_standing(
    State(state): State<AppState>,
    Path(group_id): Path<i64>,
    Json(req): Json<StandingSaveRequest>,
) -> Result<Json<BaseResponse<StandingResponse>>, AppError> {
    req.validate()?;

    let result = TournamentService::add_standing(&state, group_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// Edit a standings row (full overwrite).
#[utoipa::path(
    put,
    path = "/api/v1/standings/{group_detail_id}",
    params(("group_detail_id" = i64, Path, description = "Standings row id")),
    request_body = StandingSaveRequest,
    responses(
        (status = 200, description = "Standings row updated", body = SuccessStandingResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Standings row or team not found", body = ErrorResponse),
        (status = 409, description = "Team already registered", body = ErrorResponse)
    ),
    tag = "Standing"
)]
pub async fn update_standing(
    State(state): State<AppState>,
    Path(group_detail_id): Path<i64>,
    Json(req): Json<StandingSaveRequest>,
) -> Result<Json<BaseResponse<StandingResponse>>, AppError> {
    req.validate()?;

    let result = TournamentService::update_standing(&state, group_detail_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// Remove a team from a group's standings.
#[utoipa::path(
    delete,
    path = "/api/v1/standings/{group_detail_id}",
    params(("group_detail_id" = i64, Path, description = "Standings row id")),
    responses(
        (status = 200, description = "Standings row deleted", body = SuccessDeleteStandingResponse),
        (status = 404, description = "Standings row not found", body = ErrorResponse)
    ),
    tag = "Standing"
)]
pub async fn delete_standing(
    State(state): State<AppState>,
    Path(group_detail_id): Path<i64>,
) -> Result<Json<BaseResponse<DeleteStandingResponse>>, AppError> {
    let result = TournamentService::delete_standing(&state, group_detail_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// Schedule a match in a group.
#[utoipa::path(
    post,
    path = "/api/v1/groups/{group_id}/matches",
    params(("group_id" = i64, Path, description = "Group id")),
    request_body = MatchSaveRequest,
    responses(
        (status = 200, description = "Match created", body = SuccessMatchResponse),
        (status = 400, description = "Invalid payload or equal teams", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse)
    ),
    tag = "Match"
)]
pub async fn add_match(
    State(state): State<AppState>,
    Path(group_id): Path<i64>,
    Json(req): Json<MatchSaveRequest>,
) -> Result<Json<BaseResponse<MatchResponse>>, AppError> {
    req.validate()?;

    let result = TournamentService::add_match(&state, group_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// Edit a match (full overwrite, including score and closed flag).
#[utoipa::path(
    put,
    path = "/api/v1/matches/{match_id}",
    params(("match_id" = i64, Path, description = "Match id")),
    request_body = MatchSaveRequest,
    responses(
        (status = 200, description = "Match updated", body = SuccessMatchResponse),
        (status = 400, description = "Invalid payload or equal teams", body = ErrorResponse),
        (status = 404, description = "Match not found", body = ErrorResponse)
    ),
    tag = "Match"
)]
pub async fn update_match(
    State(state): State<AppState>,
    Path(match_id): Path<i64>,
    Json(req): Json<MatchSaveRequest>,
) -> Result<Json<BaseResponse<MatchResponse>>, AppError> {
    req.validate()?;

    let result = TournamentService::update_match(&state, match_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// Delete a match.
#[utoipa::path(
    delete,
    path = "/api/v1/matches/{match_id}",
    params(("match_id" = i64, Path, description = "Match id")),
    responses(
        (status = 200, description = "Match deleted", body = SuccessDeleteMatchResponse),
        (status = 404, description = "Match not found", body = ErrorResponse)
    ),
    tag = "Match"
)]
pub async fn delete_match(
    State(state): State<AppState>,
    Path(match_id): Path<i64>,
) -> Result<Json<BaseResponse<DeleteMatchResponse>>, AppError> {
    let result = TournamentService::delete_match(&state, match_id).await?;

    Ok(Json(BaseResponse::success(result)))
}
