use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::entity::group_detail;

/// Wire format for tournament start/end dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Wire format for match kick-off times.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

// ============== Tournaments ==============

/// Create/edit payload for a tournament. Edits are a full overwrite.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSaveRequest {
    #[validate(length(min = 1, max = 100, message = "Tournament name must be 1-100 characters."))]
    pub name: String,

    /// YYYY-MM-DD
    pub start_date: String,

    /// YYYY-MM-DD
    pub end_date: String,

    #[validate(length(max = 500, message = "Logo path must not exceed 500 characters."))]
    pub logo_path: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TournamentResponse {
    pub tournament_id: i64,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub logo_path: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessTournamentResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: TournamentResponse,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    pub group_id: i64,
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TournamentListItem {
    pub tournament_id: i64,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub logo_path: Option<String>,
    pub groups: Vec<GroupSummary>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessTournamentListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<TournamentListItem>,
}

/// One group inside the tournament detail view, with its standings and
/// matches fully resolved.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupBlock {
    pub group_id: i64,
    pub name: String,
    pub standings: Vec<StandingItem>,
    pub matches: Vec<MatchItem>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TournamentDetailResponse {
    pub tournament_id: i64,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub logo_path: Option<String>,
    pub groups: Vec<GroupBlock>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessTournamentDetailResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: TournamentDetailResponse,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTournamentResponse {
    pub tournament_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessDeleteTournamentResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: DeleteTournamentResponse,
}

// ============== Groups ==============

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupSaveRequest {
    #[validate(length(min = 1, max = 50, message = "Group name must be 1-50 characters."))]
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupResponse {
    pub group_id: i64,
    pub tournament_id: i64,
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessGroupResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: GroupResponse,
}

/// Group detail view: parent tournament plus resolved standings and matches.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupDetailViewResponse {
    pub group_id: i64,
    pub name: String,
    pub tournament_id: i64,
    pub tournament_name: String,
    pub standings: Vec<StandingItem>,
    pub matches: Vec<MatchItem>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessGroupDetailViewResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: GroupDetailViewResponse,
}

/// Deleting a group navigates back to the parent tournament.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteGroupResponse {
    pub group_id: i64,
    pub tournament_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessDeleteGroupResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: DeleteGroupResponse,
}

// ============== Standings (group details) ==============

/// Create/edit payload for a standings row. Stats default to zero on
/// registration; edits are a full overwrite.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StandingSaveRequest {
    #[validate(range(min = 1, message = "A team must be selected."))]
    pub team_id: i64,

    #[serde(default)]
    #[validate(range(min = 0, message = "Matches played must not be negative."))]
    pub matches_played: i32,

    #[serde(default)]
    #[validate(range(min = 0, message = "Matches won must not be negative."))]
    pub matches_won: i32,

    #[serde(default)]
    #[validate(range(min = 0, message = "Matches tied must not be negative."))]
    pub matches_tied: i32,

    #[serde(default)]
    #[validate(range(min = 0, message = "Matches lost must not be negative."))]
    pub matches_lost: i32,

    #[serde(default)]
    #[validate(range(min = 0, message = "Goals for must not be negative."))]
    pub goals_for: i32,

    #[serde(default)]
    #[validate(range(min = 0, message = "Goals against must not be negative."))]
    pub goals_against: i32,
}

/// One standings row with the derived columns the views show.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StandingItem {
    pub group_detail_id: i64,
    pub team_id: i64,
    pub team_name: String,
    pub matches_played: i32,
    pub matches_won: i32,
    pub matches_tied: i32,
    pub matches_lost: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub points: i32,
}

/// Resolve a standings row against its team name, computing the derived
/// columns (3 points per win, 1 per tie).
pub fn standing_item(detail: &group_detail::Model, team_name: String) -> StandingItem {
    StandingItem {
        group_detail_id: detail.group_detail_id,
        team_id: detail.team_id,
        team_name,
        matches_played: detail.matches_played,
        matches_won: detail.matches_won,
        matches_tied: detail.matches_tied,
        matches_lost: detail.matches_lost,
        goals_for: detail.goals_for,
        goals_against: detail.goals_against,
        goal_difference: detail.goals_for - detail.goals_against,
        points: detail.matches_won * 3 + detail.matches_tied,
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StandingResponse {
    pub group_detail_id: i64,
    pub group_id: i64,
    pub team_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessStandingResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: StandingResponse,
}

/// Deleting a standings row navigates back to the parent group.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteStandingResponse {
    pub group_detail_id: i64,
    pub group_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessDeleteStandingResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: DeleteStandingResponse,
}

// ============== Matches ==============

/// Create/edit payload for a match. Edits are a full overwrite, including
/// the recorded score and the closed flag.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchSaveRequest {
    /// YYYY-MM-DD HH:MM
    pub date: String,

    #[validate(range(min = 1, message = "A local team must be selected."))]
    pub local_team_id: i64,

    #[validate(range(min = 1, message = "A visitor team must be selected."))]
    pub visitor_team_id: i64,

    #[validate(range(min = 0, message = "Local goals must not be negative."))]
    pub local_goals: Option<i32>,

    #[validate(range(min = 0, message = "Visitor goals must not be negative."))]
    pub visitor_goals: Option<i32>,

    #[serde(default)]
    pub is_closed: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchItem {
    pub match_id: i64,
    pub date: String,
    pub local_team_id: i64,
    pub local_team_name: String,
    pub visitor_team_id: i64,
    pub visitor_team_name: String,
    pub local_goals: Option<i32>,
    pub visitor_goals: Option<i32>,
    pub is_closed: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub match_id: i64,
    pub group_id: i64,
    pub date: String,
    pub local_team_id: i64,
    pub visitor_team_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessMatchResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: MatchResponse,
}

/// Deleting a match navigates back to the parent group.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteMatchResponse {
    pub match_id: i64,
    pub group_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessDeleteMatchResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: DeleteMatchResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn detail(won: i32, tied: i32, goals_for: i32, goals_against: i32) -> group_detail::Model {
        let now = NaiveDateTime::default();
        group_detail::Model {
            group_detail_id: 1,
            group_id: 1,
            team_id: 7,
            matches_played: won + tied,
            matches_won: won,
            matches_tied: tied,
            matches_lost: 0,
            goals_for,
            goals_against,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn should_award_three_points_per_win_and_one_per_tie() {
        let item = standing_item(&detail(4, 2, 0, 0), "Aurora FC".to_string());

        assert_eq!(item.points, 14);
    }

    #[test]
    fn should_compute_goal_difference() {
        let item = standing_item(&detail(0, 0, 9, 4), "Aurora FC".to_string());

        assert_eq!(item.goal_difference, 5);
    }

    #[test]
    fn should_allow_negative_goal_difference() {
        let item = standing_item(&detail(0, 0, 1, 6), "Aurora FC".to_string());

        assert_eq!(item.goal_difference, -5);
    }
}
