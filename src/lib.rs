pub mod config;
pub mod domain;
pub mod global;
pub mod state;
pub mod utils;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        domain::tournament::handler::list_tournaments,
        domain::tournament::handler::create_tournament,
        domain::tournament::handler::get_tournament_detail,
        domain::tournament::handler::update_tournament,
        domain::tournament::handler::delete_tournament,
        domain::tournament::handler::add_group,
        domain::tournament::handler::get_group_detail,
        domain::tournament::handler::update_group,
        domain::tournament::handler::delete_group,
        domain::tournament::handler::add_standing,
        domain::tournament::handler::update_standing,
        domain::tournament::handler::delete_standing,
        domain::tournament::handler::add_match,
        domain::tournament::handler::update_match,
        domain::tournament::handler::delete_match,
        domain::team::handler::list_teams,
        domain::team::handler::create_team,
        domain::team::handler::update_team,
        domain::team::handler::delete_team,
        domain::team::handler::team_options,
        domain::team::handler::group_team_options,
    ),
    components(
        schemas(
            domain::tournament::dto::TournamentSaveRequest,
            domain::tournament::dto::TournamentResponse,
            domain::tournament::dto::SuccessTournamentResponse,
            domain::tournament::dto::TournamentListItem,
            domain::tournament::dto::SuccessTournamentListResponse,
            domain::tournament::dto::GroupSummary,
            domain::tournament::dto::TournamentDetailResponse,
            domain::tournament::dto::SuccessTournamentDetailResponse,
            domain::tournament::dto::DeleteTournamentResponse,
            domain::tournament::dto::SuccessDeleteTournamentResponse,
            domain::tournament::dto::GroupSaveRequest,
            domain::tournament::dto::GroupResponse,
            domain::tournament::dto::SuccessGroupResponse,
            domain::tournament::dto::GroupBlock,
            domain::tournament::dto::GroupDetailViewResponse,
            domain::tournament::dto::SuccessGroupDetailViewResponse,
            domain::tournament::dto::DeleteGroupResponse,
            domain::tournament::dto::SuccessDeleteGroupResponse,
            domain::tournament::dto::StandingSaveRequest,
            domain::tournament::dto::StandingItem,
            domain::tournament::dto::StandingResponse,
            domain::tournament::dto::SuccessStandingResponse,
            domain::tournament::dto::DeleteStandingResponse,
            domain::tournament::dto::SuccessDeleteStandingResponse,
            domain::tournament::dto::MatchSaveRequest,
            domain::tournament::dto::MatchItem,
            domain::tournament::dto::MatchResponse,
            domain::tournament::dto::SuccessMatchResponse,
            domain::tournament::dto::DeleteMatchResponse,
            domain::tournament::dto::SuccessDeleteMatchResponse,
            domain::team::dto::TeamSaveRequest,
            domain::team::dto::TeamResponse,
            domain::team::dto::SuccessTeamResponse,
            domain::team::dto::SuccessTeamListResponse,
            domain::team::dto::DeleteTeamResponse,
            domain::team::dto::SuccessDeleteTeamResponse,
            domain::team::dto::TeamOptionItem,
            domain::team::dto::SuccessTeamOptionsResponse,
            utils::response::ErrorResponse,
        )
    ),
    tags(
        (name = "Tournament", description = "Tournament CRUD"),
        (name = "Group", description = "Groups within a tournament"),
        (name = "Standing", description = "Team standings rows within a group"),
        (name = "Match", description = "Matches within a group"),
        (name = "Team", description = "Team reference data and dropdown options")
    )
)]
pub struct ApiDoc;

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(|| async { "OK" }))
        .route(
            "/api/v1/tournaments",
            get(domain::tournament::handler::list_tournaments)
                .post(domain::tournament::handler::create_tournament),
        )
        .route(
            "/api/v1/tournaments/:tournament_id",
            get(domain::tournament::handler::get_tournament_detail)
                .put(domain::tournament::handler::update_tournament)
                .delete(domain::tournament::handler::delete_tournament),
        )
        .route(
            "/api/v1/tournaments/:tournament_id/groups",
            post(domain::tournament::handler::add_group),
        )
        .route(
            "/api/v1/groups/:group_id",
            get(domain::tournament::handler::get_group_detail)
                .put(domain::tournament::handler::update_group)
                .delete(domain::tournament::handler::delete_group),
        )
        .route(
            "/api/v1/groups/:group_id/standings",
            post(domain::tournament::handler::add_standing),
        )
        .route(
            "/api/v1/standings/:group_detail_id",
            put(domain::tournament::handler::update_standing)
                .delete(domain::tournament::handler::delete_standing),
        )
        .route(
            "/api/v1/groups/:group_id/matches",
            post(domain::tournament::handler::add_match),
        )
        .route(
            "/api/v1/matches/:match_id",
            put(domain::tournament::handler::update_match)
                .delete(domain::tournament::handler::delete_match),
        )
        .route(
            "/api/v1/teams",
            get(domain::team::handler::list_teams).post(domain::team::handler::create_team),
        )
        .route(
            "/api/v1/teams/:team_id",
            put(domain::team::handler::update_team).delete(domain::team::handler::delete_team),
        )
        .route(
            "/api/v1/teams/options",
            get(domain::team::handler::team_options),
        )
        .route(
            "/api/v1/groups/:group_id/teams/options",
            get(domain::team::handler::group_team_options),
        )
        .layer(middleware::from_fn(global::middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
