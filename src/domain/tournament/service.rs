use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, QuerySelect,
    Set, TransactionTrait,
};
use tracing::{info, warn};

use crate::domain::team::entity::team;
use crate::domain::tournament::entity::group;
use crate::domain::tournament::entity::group_detail;
use crate::domain::tournament::entity::soccer_match;
use crate::domain::tournament::entity::tournament;
use crate::state::AppState;
use crate::utils::error::{classify_db_err, AppError};

use super::dto::{
    standing_item, DeleteGroupResponse, DeleteMatchResponse, DeleteStandingResponse,
    DeleteTournamentResponse, GroupBlock, GroupDetailViewResponse, GroupResponse, GroupSaveRequest,
    GroupSummary, MatchItem, MatchResponse, MatchSaveRequest, StandingItem, StandingResponse,
    StandingSaveRequest, TournamentDetailResponse, TournamentListItem, TournamentResponse,
    TournamentSaveRequest, DATETIME_FORMAT, DATE_FORMAT,
};

pub struct TournamentService;

impl TournamentService {
    /// Tournament list, ordered by start date, each with its groups.
    pub async fn list_tournaments(state: &AppState) -> Result<Vec<TournamentListItem>, AppError> {
        let tournaments = tournament::Entity::find()
            .order_by_asc(tournament::Column::StartDate)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        if tournaments.is_empty() {
            return Ok(vec![]);
        }

        // Batch-load every group of the listed tournaments in one query.
        let tournament_ids: Vec<i64> = tournaments.iter().map(|t| t.tournament_id).collect();
        let groups = group::Entity::find()
            .filter(group::Column::TournamentId.is_in(tournament_ids))
            .order_by_asc(group::Column::GroupId)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let mut groups_by_tournament: HashMap<i64, Vec<GroupSummary>> = HashMap::new();
        for g in groups {
            groups_by_tournament
                .entry(g.tournament_id)
                .or_default()
                .push(GroupSummary {
                    group_id: g.group_id,
                    name: g.name,
                });
        }

        let items = tournaments
            .into_iter()
            .map(|t| TournamentListItem {
                groups: groups_by_tournament
                    .remove(&t.tournament_id)
                    .unwrap_or_default(),
                tournament_id: t.tournament_id,
                name: t.name,
                start_date: t.start_date.format(DATE_FORMAT).to_string(),
                end_date: t.end_date.format(DATE_FORMAT).to_string(),
                logo_path: t.logo_path,
            })
            .collect();

        Ok(items)
    }

    /// Create a tournament.
    pub async fn create_tournament(
        state: &AppState,
        req: TournamentSaveRequest,
    ) -> Result<TournamentResponse, AppError> {
        let (start_date, end_date) = Self::parse_period(&req.start_date, &req.end_date)?;

        let now = Utc::now().naive_utc();
        let model = tournament::ActiveModel {
            name: Set(req.name.clone()),
            start_date: Set(start_date),
            end_date: Set(end_date),
            logo_path: Set(req.logo_path.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = model.insert(&state.db).await.map_err(|e| {
            classify_db_err(e, format!("Tournament '{}' already exists.", req.name))
        })?;

        info!(
            tournament_id = inserted.tournament_id,
            name = %inserted.name,
            "tournament created"
        );

        Ok(Self::tournament_response(inserted))
    }

    /// Tournament detail with groups, standings and matches fully resolved.
    pub async fn get_tournament_detail(
        state: &AppState,
        tournament_id: i64,
    ) -> Result<TournamentDetailResponse, AppError> {
        let tournament_model = Self::find_tournament(state, tournament_id).await?;

        let groups = group::Entity::find()
            .filter(group::Column::TournamentId.eq(tournament_id))
            .order_by_asc(group::Column::GroupId)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let group_ids: Vec<i64> = groups.iter().map(|g| g.group_id).collect();
        let (details, matches) = Self::load_group_children(state, &group_ids).await?;
        let team_names = Self::load_team_names(state, &details, &matches).await?;

        let mut standings_by_group: HashMap<i64, Vec<StandingItem>> = HashMap::new();
        for detail in &details {
            if let Some(item) = Self::resolve_standing(detail, &team_names) {
                standings_by_group
                    .entry(detail.group_id)
                    .or_default()
                    .push(item);
            }
        }

        let mut matches_by_group: HashMap<i64, Vec<MatchItem>> = HashMap::new();
        for m in &matches {
            matches_by_group
                .entry(m.group_id)
                .or_default()
                .push(Self::match_item(m, &team_names));
        }

        let blocks = groups
            .into_iter()
            .map(|g| GroupBlock {
                standings: standings_by_group.remove(&g.group_id).unwrap_or_default(),
                matches: matches_by_group.remove(&g.group_id).unwrap_or_default(),
                group_id: g.group_id,
                name: g.name,
            })
            .collect();

        Ok(TournamentDetailResponse {
            tournament_id: tournament_model.tournament_id,
            name: tournament_model.name,
            start_date: tournament_model.start_date.format(DATE_FORMAT).to_string(),
            end_date: tournament_model.end_date.format(DATE_FORMAT).to_string(),
            logo_path: tournament_model.logo_path,
            groups: blocks,
        })
    }

    /// Full overwrite of a tournament.
    pub async fn update_tournament(
        state: &AppState,
        tournament_id: i64,
        req: TournamentSaveRequest,
    ) -> Result<TournamentResponse, AppError> {
        let (start_date, end_date) = Self::parse_period(&req.start_date, &req.end_date)?;
        let tournament_model = Self::find_tournament(state, tournament_id).await?;

        let mut active: tournament::ActiveModel = tournament_model.into();
        active.name = Set(req.name.clone());
        active.start_date = Set(start_date);
        active.end_date = Set(end_date);
        active.logo_path = Set(req.logo_path.clone());
        active.updated_at = Set(Utc::now().naive_utc());

        let updated = active.update(&state.db).await.map_err(|e| {
            classify_db_err(e, format!("Tournament '{}' already exists.", req.name))
        })?;

        info!(tournament_id = tournament_id, "tournament updated");

        Ok(Self::tournament_response(updated))
    }

    /// Delete a tournament and everything below it in one transaction.
    pub async fn delete_tournament(
        state: &AppState,
        tournament_id: i64,
    ) -> Result<DeleteTournamentResponse, AppError> {
        let tournament_model = Self::find_tournament(state, tournament_id).await?;

        let txn = state
            .db
            .begin()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let group_ids: Vec<i64> = group::Entity::find()
            .filter(group::Column::TournamentId.eq(tournament_id))
            .select_only()
            .column(group::Column::GroupId)
            .into_tuple()
            .all(&txn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let (matches_deleted, details_deleted) = if group_ids.is_empty() {
            (0, 0)
        } else {
            let matches_deleted = soccer_match::Entity::delete_many()
                .filter(soccer_match::Column::GroupId.is_in(group_ids.clone()))
                .exec(&txn)
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))?;

            let details_deleted = group_detail::Entity::delete_many()
                .filter(group_detail::Column::GroupId.is_in(group_ids.clone()))
                .exec(&txn)
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))?;

            (matches_deleted.rows_affected, details_deleted.rows_affected)
        };

        let groups_deleted = group::Entity::delete_many()
            .filter(group::Column::TournamentId.eq(tournament_id))
            .exec(&txn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        tournament_model
            .delete(&txn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        info!(
            tournament_id = tournament_id,
            groups_deleted = groups_deleted.rows_affected,
            standings_deleted = details_deleted,
            matches_deleted = matches_deleted,
            "tournament and related data deleted"
        );

        Ok(DeleteTournamentResponse { tournament_id })
    }

    /// Add a group to a tournament.
    pub async fn add_group(
        state: &AppState,
        tournament_id: i64,
        req: GroupSaveRequest,
    ) -> Result<GroupResponse, AppError> {
        Self::find_tournament(state, tournament_id).await?;

        let now = Utc::now().naive_utc();
        let model = group::ActiveModel {
            name: Set(req.name.clone()),
            tournament_id: Set(tournament_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = model.insert(&state.db).await.map_err(|e| {
            classify_db_err(
                e,
                format!("Group '{}' already exists in this tournament.", req.name),
            )
        })?;

        info!(
            group_id = inserted.group_id,
            tournament_id = tournament_id,
            "group created"
        );

        Ok(GroupResponse {
            group_id: inserted.group_id,
            tournament_id: inserted.tournament_id,
            name: inserted.name,
        })
    }

    /// Full overwrite of a group's name.
    pub async fn update_group(
        state: &AppState,
        group_id: i64,
        req: GroupSaveRequest,
    ) -> Result<GroupResponse, AppError> {
        let group_model = Self::find_group(state, group_id).await?;

        let mut active: group::ActiveModel = group_model.into();
        active.name = Set(req.name.clone());
        active.updated_at = Set(Utc::now().naive_utc());

        let updated = active.update(&state.db).await.map_err(|e| {
            classify_db_err(
                e,
                format!("Group '{}' already exists in this tournament.", req.name),
            )
        })?;

        info!(group_id = group_id, "group updated");

        Ok(GroupResponse {
            group_id: updated.group_id,
            tournament_id: updated.tournament_id,
            name: updated.name,
        })
    }

    /// Delete a group with its standings and matches; the response points back
    /// at the parent tournament.
    pub async fn delete_group(
        state: &AppState,
        group_id: i64,
    ) -> Result<DeleteGroupResponse, AppError> {
        let group_model = Self::find_group(state, group_id).await?;
        let tournament_id = group_model.tournament_id;

        let txn = state
            .db
            .begin()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let matches_deleted = soccer_match::Entity::delete_many()
            .filter(soccer_match::Column::GroupId.eq(group_id))
            .exec(&txn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let details_deleted = group_detail::Entity::delete_many()
            .filter(group_detail::Column::GroupId.eq(group_id))
            .exec(&txn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        group_model
            .delete(&txn)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        info!(
            group_id = group_id,
            tournament_id = tournament_id,
            standings_deleted = details_deleted.rows_affected,
            matches_deleted = matches_deleted.rows_affected,
            "group and related data deleted"
        );

        Ok(DeleteGroupResponse {
            group_id,
            tournament_id,
        })
    }

    /// Group detail view with parent tournament, standings and matches.
    pub async fn get_group_detail(
        state: &AppState,
        group_id: i64,
    ) -> Result<GroupDetailViewResponse, AppError> {
        let group_model = Self::find_group(state, group_id).await?;

        let tournament_name = tournament::Entity::find_by_id(group_model.tournament_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .map(|t| t.name)
            .unwrap_or_default();

        let group_ids = vec![group_id];
        let (details, matches) = Self::load_group_children(state, &group_ids).await?;
        let team_names = Self::load_team_names(state, &details, &matches).await?;

        let standings = details
            .iter()
            .filter_map(|d| Self::resolve_standing(d, &team_names))
            .collect();

        let match_items = matches
            .iter()
            .map(|m| Self::match_item(m, &team_names))
            .collect();

        Ok(GroupDetailViewResponse {
            group_id: group_model.group_id,
            name: group_model.name,
            tournament_id: group_model.tournament_id,
            tournament_name,
            standings,
            matches: match_items,
        })
    }

    /// Register a team in a group (new standings row, stats per request).
    pub async fn add_standing(
        state: &AppState,
        group_id: i64,
        req: StandingSaveRequest,
    ) -> Result<StandingResponse, AppError> {
        Self::find_group(state, group_id).await?;
        Self::find_team(state, req.team_id).await?;

        let now = Utc::now().naive_utc();
        let model = group_detail::ActiveModel {
            group_id: Set(group_id),
            team_id: Set(req.team_id),
            matches_played: Set(req.matches_played),
            matches_won: Set(req.matches_won),
            matches_tied: Set(req.matches_tied),
            matches_lost: Set(req.matches_lost),
            goals_for: Set(req.goals_for),
            goals_against: Set(req.goals_against),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = model
            .insert(&state.db)
            .await
            .map_err(|e| classify_db_err(e, "The team is already registered in this group."))?;

        info!(
            group_detail_id = inserted.group_detail_id,
            group_id = group_id,
            team_id = req.team_id,
            "standings row created"
        );

        Ok(StandingResponse {
            group_detail_id: inserted.group_detail_id,
            group_id: inserted.group_id,
            team_id: inserted.team_id,
        })
    }

    /// Full overwrite of a standings row.
    pub async fn update_standing(
        state: &AppState,
        group_detail_id: i64,
        req: StandingSaveRequest,
    ) -> Result<StandingResponse, AppError> {
        let detail_model = Self::find_standing(state, group_detail_id).await?;
        Self::find_team(state, req.team_id).await?;

        let mut active: group_detail::ActiveModel = detail_model.into();
        active.team_id = Set(req.team_id);
        active.matches_played = Set(req.matches_played);
        active.matches_won = Set(req.matches_won);
        active.matches_tied = Set(req.matches_tied);
        active.matches_lost = Set(req.matches_lost);
        active.goals_for = Set(req.goals_for);
        active.goals_against = Set(req.goals_against);
        active.updated_at = Set(Utc::now().naive_utc());

        let updated = active
            .update(&state.db)
            .await
            .map_err(|e| classify_db_err(e, "The team is already registered in this group."))?;

        info!(group_detail_id = group_detail_id, "standings row updated");

        Ok(StandingResponse {
            group_detail_id: updated.group_detail_id,
            group_id: updated.group_id,
            team_id: updated.team_id,
        })
    }

    /// Delete a standings row; the response points back at the parent group.
    pub async fn delete_standing(
        state: &AppState,
        group_detail_id: i64,
    ) -> Result<DeleteStandingResponse, AppError> {
        let detail_model = Self::find_standing(state, group_detail_id).await?;
        let group_id = detail_model.group_id;

        detail_model
            .delete(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        info!(
            group_detail_id = group_detail_id,
            group_id = group_id,
            "standings row deleted"
        );

        Ok(DeleteStandingResponse {
            group_detail_id,
            group_id,
        })
    }

    /// Schedule a match in a group. Equal teams are rejected before any write.
    pub async fn add_match(
        state: &AppState,
        group_id: i64,
        req: MatchSaveRequest,
    ) -> Result<MatchResponse, AppError> {
        Self::ensure_distinct_teams(req.local_team_id, req.visitor_team_id)?;
        let date = Self::parse_match_date(&req.date)?;
        Self::find_group(state, group_id).await?;

        let now = Utc::now().naive_utc();
        let model = soccer_match::ActiveModel {
            date: Set(date),
            group_id: Set(group_id),
            local_team_id: Set(req.local_team_id),
            visitor_team_id: Set(req.visitor_team_id),
            local_goals: Set(req.local_goals),
            visitor_goals: Set(req.visitor_goals),
            is_closed: Set(req.is_closed),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = model
            .insert(&state.db)
            .await
            .map_err(|e| classify_db_err(e, "The match cannot be saved."))?;

        info!(
            match_id = inserted.match_id,
            group_id = group_id,
            local_team_id = req.local_team_id,
            visitor_team_id = req.visitor_team_id,
            "match created"
        );

        Ok(Self::match_response(inserted))
    }

    /// Full overwrite of a match, including score and closed flag.
    pub async fn update_match(
        state: &AppState,
        match_id: i64,
        req: MatchSaveRequest,
    ) -> Result<MatchResponse, AppError> {
        Self::ensure_distinct_teams(req.local_team_id, req.visitor_team_id)?;
        let date = Self::parse_match_date(&req.date)?;
        let match_model = Self::find_match(state, match_id).await?;

        let mut active: soccer_match::ActiveModel = match_model.into();
        active.date = Set(date);
        active.local_team_id = Set(req.local_team_id);
        active.visitor_team_id = Set(req.visitor_team_id);
        active.local_goals = Set(req.local_goals);
        active.visitor_goals = Set(req.visitor_goals);
        active.is_closed = Set(req.is_closed);
        active.updated_at = Set(Utc::now().naive_utc());

        let updated = active
            .update(&state.db)
            .await
            .map_err(|e| classify_db_err(e, "The match cannot be saved."))?;

        info!(match_id = match_id, "match updated");

        Ok(Self::match_response(updated))
    }

    /// Delete a match; the response points back at the parent group.
    pub async fn delete_match(
        state: &AppState,
        match_id: i64,
    ) -> Result<DeleteMatchResponse, AppError> {
        let match_model = Self::find_match(state, match_id).await?;
        let group_id = match_model.group_id;

        match_model
            .delete(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        info!(match_id = match_id, group_id = group_id, "match deleted");

        Ok(DeleteMatchResponse { match_id, group_id })
    }

    // ============== Lookup helpers ==============

    async fn find_tournament(
        state: &AppState,
        tournament_id: i64,
    ) -> Result<tournament::Model, AppError> {
        tournament::Entity::find_by_id(tournament_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .ok_or_else(|| AppError::TournamentNotFound("Tournament does not exist.".to_string()))
    }

    async fn find_group(state: &AppState, group_id: i64) -> Result<group::Model, AppError> {
        group::Entity::find_by_id(group_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .ok_or_else(|| AppError::GroupNotFound("Group does not exist.".to_string()))
    }

    async fn find_standing(
        state: &AppState,
        group_detail_id: i64,
    ) -> Result<group_detail::Model, AppError> {
        group_detail::Entity::find_by_id(group_detail_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .ok_or_else(|| AppError::StandingNotFound("Standings row does not exist.".to_string()))
    }

    async fn find_match(state: &AppState, match_id: i64) -> Result<soccer_match::Model, AppError> {
        soccer_match::Entity::find_by_id(match_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .ok_or_else(|| AppError::MatchNotFound("Match does not exist.".to_string()))
    }

    async fn find_team(state: &AppState, team_id: i64) -> Result<team::Model, AppError> {
        team::Entity::find_by_id(team_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .ok_or_else(|| AppError::TeamNotFound("Team does not exist.".to_string()))
    }

    // ============== View assembly helpers ==============

    /// Standings rows and matches of the given groups, two batched queries.
    async fn load_group_children(
        state: &AppState,
        group_ids: &[i64],
    ) -> Result<(Vec<group_detail::Model>, Vec<soccer_match::Model>), AppError> {
        if group_ids.is_empty() {
            return Ok((vec![], vec![]));
        }

        let details = group_detail::Entity::find()
            .filter(group_detail::Column::GroupId.is_in(group_ids.to_vec()))
            .order_by_asc(group_detail::Column::GroupDetailId)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let matches = soccer_match::Entity::find()
            .filter(soccer_match::Column::GroupId.is_in(group_ids.to_vec()))
            .order_by_asc(soccer_match::Column::Date)
            .order_by_asc(soccer_match::Column::MatchId)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok((details, matches))
    }

    /// Name lookup for every team referenced by the given rows, one query.
    async fn load_team_names(
        state: &AppState,
        details: &[group_detail::Model],
        matches: &[soccer_match::Model],
    ) -> Result<HashMap<i64, String>, AppError> {
        let mut team_ids: Vec<i64> = details.iter().map(|d| d.team_id).collect();
        for m in matches {
            team_ids.push(m.local_team_id);
            team_ids.push(m.visitor_team_id);
        }
        team_ids.sort_unstable();
        team_ids.dedup();

        if team_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let teams = team::Entity::find()
            .filter(team::Column::TeamId.is_in(team_ids))
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(teams.into_iter().map(|t| (t.team_id, t.name)).collect())
    }

    fn resolve_standing(
        detail: &group_detail::Model,
        team_names: &HashMap<i64, String>,
    ) -> Option<StandingItem> {
        let name = team_names.get(&detail.team_id);
        if name.is_none() {
            warn!(
                group_detail_id = detail.group_detail_id,
                team_id = detail.team_id,
                "standings row references a team that no longer exists"
            );
        }
        name.map(|n| standing_item(detail, n.clone()))
    }

    fn match_item(m: &soccer_match::Model, team_names: &HashMap<i64, String>) -> MatchItem {
        MatchItem {
            match_id: m.match_id,
            date: m.date.format(DATETIME_FORMAT).to_string(),
            local_team_id: m.local_team_id,
            local_team_name: team_names.get(&m.local_team_id).cloned().unwrap_or_default(),
            visitor_team_id: m.visitor_team_id,
            visitor_team_name: team_names
                .get(&m.visitor_team_id)
                .cloned()
                .unwrap_or_default(),
            local_goals: m.local_goals,
            visitor_goals: m.visitor_goals,
            is_closed: m.is_closed,
        }
    }

    fn tournament_response(model: tournament::Model) -> TournamentResponse {
        TournamentResponse {
            tournament_id: model.tournament_id,
            name: model.name,
            start_date: model.start_date.format(DATE_FORMAT).to_string(),
            end_date: model.end_date.format(DATE_FORMAT).to_string(),
            logo_path: model.logo_path,
        }
    }

    fn match_response(model: soccer_match::Model) -> MatchResponse {
        MatchResponse {
            match_id: model.match_id,
            group_id: model.group_id,
            date: model.date.format(DATETIME_FORMAT).to_string(),
            local_team_id: model.local_team_id,
            visitor_team_id: model.visitor_team_id,
        }
    }

    // ============== Input parsing & invariants ==============

    /// Parse a YYYY-MM-DD date field.
    fn parse_date(value: &str, field: &str) -> Result<NaiveDate, AppError> {
        NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
            AppError::BadRequest(format!("The {} must use the YYYY-MM-DD format.", field))
        })
    }

    /// Parse and order-check the tournament period.
    fn parse_period(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate), AppError> {
        let start_date = Self::parse_date(start, "start date")?;
        let end_date = Self::parse_date(end, "end date")?;

        if end_date < start_date {
            return Err(AppError::BadRequest(
                "The end date must not be before the start date.".to_string(),
            ));
        }

        Ok((start_date, end_date))
    }

    /// Parse a match kick-off in YYYY-MM-DD HH:MM.
    fn parse_match_date(value: &str) -> Result<NaiveDateTime, AppError> {
        NaiveDateTime::parse_from_str(value, DATETIME_FORMAT).map_err(|_| {
            AppError::BadRequest("The match date must use the YYYY-MM-DD HH:MM format.".to_string())
        })
    }

    /// A match needs two different teams. Checked before any persistence.
    fn ensure_distinct_teams(local_team_id: i64, visitor_team_id: i64) -> Result<(), AppError> {
        if local_team_id == visitor_team_id {
            return Err(AppError::MatchTeamsEqual(
                "The local and visitor must be different teams.".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_match_with_equal_teams() {
        let result = TournamentService::ensure_distinct_teams(7, 7);

        assert!(matches!(result, Err(AppError::MatchTeamsEqual(_))));
    }

    #[test]
    fn should_accept_match_with_distinct_teams() {
        assert!(TournamentService::ensure_distinct_teams(7, 8).is_ok());
    }

    #[test]
    fn should_parse_valid_period() {
        let (start, end) = TournamentService::parse_period("2026-06-01", "2026-07-15").unwrap();

        assert!(start < end);
    }

    #[test]
    fn should_allow_single_day_period() {
        assert!(TournamentService::parse_period("2026-06-01", "2026-06-01").is_ok());
    }

    #[test]
    fn should_reject_period_ending_before_it_starts() {
        let result = TournamentService::parse_period("2026-07-15", "2026-06-01");

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn should_reject_malformed_date() {
        let result = TournamentService::parse_period("01/06/2026", "2026-07-15");

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn should_parse_match_datetime() {
        let parsed = TournamentService::parse_match_date("2026-06-13 18:30").unwrap();

        assert_eq!(parsed.format("%H:%M").to_string(), "18:30");
    }

    #[test]
    fn should_reject_match_date_without_time() {
        let result = TournamentService::parse_match_date("2026-06-13");

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
