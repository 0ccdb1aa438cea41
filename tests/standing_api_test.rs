//! Standings-row surface tests.
//!
//! Covers:
//! - POST /api/v1/groups/{id}/standings payload validation and defaults
//! - Derived columns (points, goal difference) in the standings view

use soccer_server::domain::tournament::dto::{
    DeleteStandingResponse, StandingItem, StandingSaveRequest,
};
use validator::Validate;

// ============== Validation ==============

#[test]
fn should_validate_standing_save_request_success() {
    // Arrange
    let req = StandingSaveRequest {
        team_id: 7,
        matches_played: 3,
        matches_won: 2,
        matches_tied: 1,
        matches_lost: 0,
        goals_for: 6,
        goals_against: 2,
    };

    // Act & Assert
    assert!(req.validate().is_ok());
}

#[test]
fn should_fail_validation_without_team() {
    // Arrange
    let req = StandingSaveRequest {
        team_id: 0,
        matches_played: 0,
        matches_won: 0,
        matches_tied: 0,
        matches_lost: 0,
        goals_for: 0,
        goals_against: 0,
    };

    // Act
    let result = req.validate();

    // Assert
    assert!(result.is_err());
    assert!(result.unwrap_err().field_errors().contains_key("team_id"));
}

#[test]
fn should_fail_validation_with_negative_stats() {
    // Arrange
    let req = StandingSaveRequest {
        team_id: 7,
        matches_played: -1,
        matches_won: 0,
        matches_tied: 0,
        matches_lost: 0,
        goals_for: 0,
        goals_against: 0,
    };

    // Act
    let result = req.validate();

    // Assert
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .field_errors()
        .contains_key("matches_played"));
}

// ============== Deserialization ==============

#[test]
fn should_default_stats_to_zero_on_registration() {
    // Arrange - registering a team sends only the team id
    let json = r#"{"teamId": 7}"#;

    // Act
    let req: StandingSaveRequest = serde_json::from_str(json).unwrap();

    // Assert
    assert_eq!(req.team_id, 7);
    assert_eq!(req.matches_played, 0);
    assert_eq!(req.matches_won, 0);
    assert_eq!(req.goals_against, 0);
}

// ============== Serialization ==============

#[test]
fn should_serialize_standing_item_with_derived_columns() {
    // Arrange
    let item = StandingItem {
        group_detail_id: 21,
        team_id: 7,
        team_name: "Aurora FC".to_string(),
        matches_played: 5,
        matches_won: 3,
        matches_tied: 1,
        matches_lost: 1,
        goals_for: 9,
        goals_against: 4,
        goal_difference: 5,
        points: 10,
    };

    // Act
    let json = serde_json::to_string(&item).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    // Assert
    assert_eq!(parsed["groupDetailId"], 21);
    assert_eq!(parsed["teamName"], "Aurora FC");
    assert_eq!(parsed["goalDifference"], 5);
    assert_eq!(parsed["points"], 10);
    assert!(parsed.get("goal_difference").is_none());
}

#[test]
fn should_point_delete_response_back_at_parent_group() {
    // Arrange
    let response = DeleteStandingResponse {
        group_detail_id: 21,
        group_id: 4,
    };

    // Act
    let json = serde_json::to_string(&response).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    // Assert
    assert_eq!(parsed["groupId"], 4);
    assert_eq!(parsed["groupDetailId"], 21);
}
