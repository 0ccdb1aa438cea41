//! Error envelope tests.
//!
//! Covers the HTTP status and body shape produced for each error class,
//! including the 404 mapping for absent ids.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use serde_json::Value;
use soccer_server::utils::error::AppError;

async fn response_parts(err: AppError) -> (StatusCode, Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn should_return_404_for_absent_tournament() {
    let (status, body) =
        response_parts(AppError::TournamentNotFound("Tournament does not exist.".into())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["isSuccess"], false);
    assert_eq!(body["code"], "TOURNAMENT4041");
    assert_eq!(body["message"], "Tournament does not exist.");
}

#[tokio::test]
async fn should_return_404_for_absent_group() {
    let (status, body) =
        response_parts(AppError::GroupNotFound("Group does not exist.".into())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "GROUP4041");
}

#[tokio::test]
async fn should_return_400_for_equal_match_teams() {
    let (status, body) = response_parts(AppError::MatchTeamsEqual(
        "The local and visitor must be different teams.".into(),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MATCH4001");
    assert_eq!(
        body["message"],
        "The local and visitor must be different teams."
    );
}

#[tokio::test]
async fn should_return_409_for_duplicate_entry() {
    let (status, body) = response_parts(AppError::DuplicateEntry(
        "Tournament 'Copa' already exists.".into(),
    ))
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "COMMON409");
}

#[tokio::test]
async fn should_not_leak_internal_detail() {
    let (status, body) =
        response_parts(AppError::InternalError("db timeout at 10.0.0.3:3306".into())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal server error.");
    assert_eq!(body["code"], "COMMON500");
}

#[tokio::test]
async fn should_keep_result_null_in_error_envelope() {
    let (_, body) = response_parts(AppError::BadRequest("bad".into())).await;

    assert!(body["result"].is_null());
    assert_eq!(body["isSuccess"], false);
}
