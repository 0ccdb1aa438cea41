//! Match surface tests.
//!
//! Covers:
//! - POST /api/v1/groups/{id}/matches payload validation and defaults
//! - DELETE /api/v1/matches/{id} response pointing back at the group

use soccer_server::domain::tournament::dto::{DeleteMatchResponse, MatchItem, MatchSaveRequest};
use validator::Validate;

// ============== Validation ==============

#[test]
fn should_validate_match_save_request_success() {
    // Arrange
    let req = MatchSaveRequest {
        date: "2026-06-13 18:30".to_string(),
        local_team_id: 7,
        visitor_team_id: 8,
        local_goals: None,
        visitor_goals: None,
        is_closed: false,
    };

    // Act & Assert
    assert!(req.validate().is_ok());
}

#[test]
fn should_fail_validation_without_local_team() {
    // Arrange
    let req = MatchSaveRequest {
        date: "2026-06-13 18:30".to_string(),
        local_team_id: 0,
        visitor_team_id: 8,
        local_goals: None,
        visitor_goals: None,
        is_closed: false,
    };

    // Act
    let result = req.validate();

    // Assert
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .field_errors()
        .contains_key("local_team_id"));
}

#[test]
fn should_fail_validation_with_negative_goals() {
    // Arrange
    let req = MatchSaveRequest {
        date: "2026-06-13 18:30".to_string(),
        local_team_id: 7,
        visitor_team_id: 8,
        local_goals: Some(-1),
        visitor_goals: Some(2),
        is_closed: true,
    };

    // Act
    let result = req.validate();

    // Assert
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .field_errors()
        .contains_key("local_goals"));
}

// ============== Deserialization ==============

#[test]
fn should_deserialize_scheduling_payload_with_defaults() {
    // Arrange - scheduling a match sends no score and no closed flag
    let json = r#"{
        "date": "2026-06-13 18:30",
        "localTeamId": 7,
        "visitorTeamId": 8
    }"#;

    // Act
    let req: MatchSaveRequest = serde_json::from_str(json).unwrap();

    // Assert
    assert_eq!(req.local_team_id, 7);
    assert_eq!(req.visitor_team_id, 8);
    assert!(req.local_goals.is_none());
    assert!(req.visitor_goals.is_none());
    assert!(!req.is_closed);
}

// ============== Serialization ==============

#[test]
fn should_serialize_match_item_in_camel_case() {
    // Arrange
    let item = MatchItem {
        match_id: 31,
        date: "2026-06-13 18:30".to_string(),
        local_team_id: 7,
        local_team_name: "Aurora FC".to_string(),
        visitor_team_id: 8,
        visitor_team_name: "Puerto Viejo".to_string(),
        local_goals: Some(2),
        visitor_goals: Some(2),
        is_closed: true,
    };

    // Act
    let json = serde_json::to_string(&item).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    // Assert
    assert_eq!(parsed["matchId"], 31);
    assert_eq!(parsed["localTeamName"], "Aurora FC");
    assert_eq!(parsed["visitorGoals"], 2);
    assert_eq!(parsed["isClosed"], true);
    assert!(parsed.get("local_team_name").is_none());
}

#[test]
fn should_point_delete_response_back_at_parent_group() {
    // Arrange
    let response = DeleteMatchResponse {
        match_id: 31,
        group_id: 4,
    };

    // Act
    let json = serde_json::to_string(&response).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    // Assert
    assert_eq!(parsed["groupId"], 4);
    assert_eq!(parsed["matchId"], 31);
}
