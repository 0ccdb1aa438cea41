//! Group CRUD surface tests.
//!
//! Covers:
//! - POST /api/v1/tournaments/{id}/groups payload validation
//! - DELETE /api/v1/groups/{id} response pointing back at the tournament

use soccer_server::domain::tournament::dto::{
    DeleteGroupResponse, GroupResponse, GroupSaveRequest, SuccessDeleteGroupResponse,
};
use validator::Validate;

// ============== Validation ==============

#[test]
fn should_validate_group_save_request_success() {
    // Arrange
    let req = GroupSaveRequest {
        name: "Group A".to_string(),
    };

    // Act & Assert
    assert!(req.validate().is_ok());
}

#[test]
fn should_fail_validation_when_group_name_is_empty() {
    // Arrange
    let req = GroupSaveRequest {
        name: "".to_string(),
    };

    // Act
    let result = req.validate();

    // Assert
    assert!(result.is_err());
    assert!(result.unwrap_err().field_errors().contains_key("name"));
}

#[test]
fn should_fail_validation_when_group_name_exceeds_50_chars() {
    // Arrange
    let req = GroupSaveRequest {
        name: "a".repeat(51),
    };

    // Act
    let result = req.validate();

    // Assert
    assert!(result.is_err());
    assert!(result.unwrap_err().field_errors().contains_key("name"));
}

// ============== Serialization ==============

#[test]
fn should_serialize_group_response_in_camel_case() {
    // Arrange
    let response = GroupResponse {
        group_id: 4,
        tournament_id: 2,
        name: "Group A".to_string(),
    };

    // Act
    let json = serde_json::to_string(&response).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    // Assert
    assert_eq!(parsed["groupId"], 4);
    assert_eq!(parsed["tournamentId"], 2);
    assert!(parsed.get("group_id").is_none());
}

#[test]
fn should_point_delete_response_back_at_parent_tournament() {
    // Arrange
    let response = DeleteGroupResponse {
        group_id: 4,
        tournament_id: 2,
    };

    // Act
    let json = serde_json::to_string(&response).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    // Assert - the caller navigates back to the parent tournament
    assert_eq!(parsed["tournamentId"], 2);
    assert_eq!(parsed["groupId"], 4);
}

#[test]
fn should_serialize_success_delete_group_envelope() {
    // Arrange
    let response = SuccessDeleteGroupResponse {
        is_success: true,
        code: "COMMON200".to_string(),
        message: "OK".to_string(),
        result: DeleteGroupResponse {
            group_id: 9,
            tournament_id: 5,
        },
    };

    // Act
    let json = serde_json::to_string(&response).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    // Assert
    assert_eq!(parsed["isSuccess"], true);
    assert_eq!(parsed["result"]["tournamentId"], 5);
}
