//! Team surface tests.
//!
//! Covers:
//! - POST/PUT /api/v1/teams payload validation
//! - Dropdown option serialization

use soccer_server::domain::team::dto::{TeamOptionItem, TeamResponse, TeamSaveRequest};
use validator::Validate;

// ============== Validation ==============

#[test]
fn should_validate_team_save_request_success() {
    // Arrange
    let req = TeamSaveRequest {
        name: "Aurora FC".to_string(),
        logo_path: Some("https://cdn.example.com/logos/aurora.png".to_string()),
    };

    // Act & Assert
    assert!(req.validate().is_ok());
}

#[test]
fn should_fail_validation_when_team_name_is_empty() {
    // Arrange
    let req = TeamSaveRequest {
        name: "".to_string(),
        logo_path: None,
    };

    // Act
    let result = req.validate();

    // Assert
    assert!(result.is_err());
    assert!(result.unwrap_err().field_errors().contains_key("name"));
}

#[test]
fn should_allow_missing_logo_path() {
    // Arrange
    let req = TeamSaveRequest {
        name: "Aurora FC".to_string(),
        logo_path: None,
    };

    // Act & Assert
    assert!(req.validate().is_ok());
}

// ============== Serialization ==============

#[test]
fn should_serialize_team_response_in_camel_case() {
    // Arrange
    let response = TeamResponse {
        team_id: 7,
        name: "Aurora FC".to_string(),
        logo_path: None,
    };

    // Act
    let json = serde_json::to_string(&response).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    // Assert
    assert_eq!(parsed["teamId"], 7);
    assert!(parsed.get("logoPath").is_some());
    assert!(parsed.get("team_id").is_none());
}

#[test]
fn should_serialize_option_item_with_id_and_name_only() {
    // Arrange
    let item = TeamOptionItem {
        team_id: 7,
        name: "Aurora FC".to_string(),
    };

    // Act
    let json = serde_json::to_string(&item).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    // Assert
    assert_eq!(parsed["teamId"], 7);
    assert_eq!(parsed["name"], "Aurora FC");
    assert_eq!(parsed.as_object().unwrap().len(), 2);
}
