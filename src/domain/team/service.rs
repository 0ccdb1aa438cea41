use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;

use crate::domain::tournament::entity::{group, group_detail};
use crate::state::AppState;
use crate::utils::error::{classify_db_err, AppError};

use super::dto::{DeleteTeamResponse, TeamOptionItem, TeamResponse, TeamSaveRequest};
use super::entity::team;

pub struct TeamService;

impl TeamService {
    /// Team list, ordered by name.
    pub async fn list_teams(state: &AppState) -> Result<Vec<TeamResponse>, AppError> {
        let teams = team::Entity::find()
            .order_by_asc(team::Column::Name)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(teams.into_iter().map(Self::team_response).collect())
    }

    /// Create a team.
    pub async fn create_team(
        state: &AppState,
        req: TeamSaveRequest,
    ) -> Result<TeamResponse, AppError> {
        let now = Utc::now().naive_utc();
        let model = team::ActiveModel {
            name: Set(req.name.clone()),
            logo_path: Set(req.logo_path.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = model
            .insert(&state.db)
            .await
            .map_err(|e| classify_db_err(e, format!("Team '{}' already exists.", req.name)))?;

        info!(team_id = inserted.team_id, name = %inserted.name, "team created");

        Ok(Self::team_response(inserted))
    }

    /// Full overwrite of a team.
    pub async fn update_team(
        state: &AppState,
        team_id: i64,
        req: TeamSaveRequest,
    ) -> Result<TeamResponse, AppError> {
        let team_model = Self::find_team(state, team_id).await?;

        let mut active: team::ActiveModel = team_model.into();
        active.name = Set(req.name.clone());
        active.logo_path = Set(req.logo_path.clone());
        active.updated_at = Set(Utc::now().naive_utc());

        let updated = active
            .update(&state.db)
            .await
            .map_err(|e| classify_db_err(e, format!("Team '{}' already exists.", req.name)))?;

        info!(team_id = team_id, "team updated");

        Ok(Self::team_response(updated))
    }

    /// Delete a team. Fails with a bad request while standings rows or
    /// matches still reference it.
    pub async fn delete_team(
        state: &AppState,
        team_id: i64,
    ) -> Result<DeleteTeamResponse, AppError> {
        let team_model = Self::find_team(state, team_id).await?;

        team_model
            .delete(&state.db)
            .await
            .map_err(|e| classify_db_err(e, "The team cannot be deleted."))?;

        info!(team_id = team_id, "team deleted");

        Ok(DeleteTeamResponse { team_id })
    }

    /// Dropdown options: every team, ordered by name.
    pub async fn team_options(state: &AppState) -> Result<Vec<TeamOptionItem>, AppError> {
        let teams = team::Entity::find()
            .order_by_asc(team::Column::Name)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(teams
            .into_iter()
            .map(|t| TeamOptionItem {
                team_id: t.team_id,
                name: t.name,
            })
            .collect())
    }

    /// Dropdown options restricted to the teams registered in a group.
    pub async fn group_team_options(
        state: &AppState,
        group_id: i64,
    ) -> Result<Vec<TeamOptionItem>, AppError> {
        let group_exists = group::Entity::find_by_id(group_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        if group_exists.is_none() {
            return Err(AppError::GroupNotFound("Group does not exist.".to_string()));
        }

        let team_ids: Vec<i64> = group_detail::Entity::find()
            .filter(group_detail::Column::GroupId.eq(group_id))
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .iter()
            .map(|d| d.team_id)
            .collect();

        if team_ids.is_empty() {
            return Ok(vec![]);
        }

        let teams = team::Entity::find()
            .filter(team::Column::TeamId.is_in(team_ids))
            .order_by_asc(team::Column::Name)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(teams
            .into_iter()
            .map(|t| TeamOptionItem {
                team_id: t.team_id,
                name: t.name,
            })
            .collect())
    }

    async fn find_team(state: &AppState, team_id: i64) -> Result<team::Model, AppError> {
        team::Entity::find_by_id(team_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .ok_or_else(|| AppError::TeamNotFound("Team does not exist.".to_string()))
    }

    fn team_response(model: team::Model) -> TeamResponse {
        TeamResponse {
            team_id: model.team_id,
            name: model.name,
            logo_path: model.logo_path,
        }
    }
}
