//! Tournament CRUD surface tests.
//!
//! Covers:
//! - POST/PUT /api/v1/tournaments payload validation
//! - Response DTO serialization shape

use soccer_server::domain::tournament::dto::{
    GroupSummary, TournamentListItem, TournamentResponse, TournamentSaveRequest,
};
use validator::Validate;

// ============== Validation ==============

#[test]
fn should_validate_tournament_save_request_success() {
    // Arrange
    let req = TournamentSaveRequest {
        name: "Copa Aurora 2026".to_string(),
        start_date: "2026-06-01".to_string(),
        end_date: "2026-07-15".to_string(),
        logo_path: Some("https://cdn.example.com/logos/copa.png".to_string()),
    };

    // Act & Assert
    assert!(req.validate().is_ok());
}

#[test]
fn should_fail_validation_when_name_is_empty() {
    // Arrange
    let req = TournamentSaveRequest {
        name: "".to_string(),
        start_date: "2026-06-01".to_string(),
        end_date: "2026-07-15".to_string(),
        logo_path: None,
    };

    // Act
    let result = req.validate();

    // Assert
    assert!(result.is_err());
    let errors = result.unwrap_err();
    assert!(errors.field_errors().contains_key("name"));
}

#[test]
fn should_fail_validation_when_name_exceeds_100_chars() {
    // Arrange
    let req = TournamentSaveRequest {
        name: "a".repeat(101),
        start_date: "2026-06-01".to_string(),
        end_date: "2026-07-15".to_string(),
        logo_path: None,
    };

    // Act
    let result = req.validate();

    // Assert
    assert!(result.is_err());
    assert!(result.unwrap_err().field_errors().contains_key("name"));
}

#[test]
fn should_allow_name_with_exactly_100_chars() {
    // Arrange
    let req = TournamentSaveRequest {
        name: "a".repeat(100),
        start_date: "2026-06-01".to_string(),
        end_date: "2026-07-15".to_string(),
        logo_path: None,
    };

    // Act & Assert
    assert!(req.validate().is_ok());
}

#[test]
fn should_fail_validation_when_logo_path_too_long() {
    // Arrange
    let req = TournamentSaveRequest {
        name: "Copa Aurora 2026".to_string(),
        start_date: "2026-06-01".to_string(),
        end_date: "2026-07-15".to_string(),
        logo_path: Some("a".repeat(501)),
    };

    // Act
    let result = req.validate();

    // Assert
    assert!(result.is_err());
    assert!(result.unwrap_err().field_errors().contains_key("logo_path"));
}

// ============== Deserialization ==============

#[test]
fn should_deserialize_save_request_from_camel_case() {
    // Arrange
    let json = r#"{
        "name": "Copa Aurora 2026",
        "startDate": "2026-06-01",
        "endDate": "2026-07-15",
        "logoPath": null
    }"#;

    // Act
    let req: TournamentSaveRequest = serde_json::from_str(json).unwrap();

    // Assert
    assert_eq!(req.name, "Copa Aurora 2026");
    assert_eq!(req.start_date, "2026-06-01");
    assert!(req.logo_path.is_none());
}

// ============== Serialization ==============

#[test]
fn should_serialize_tournament_response_in_camel_case() {
    // Arrange
    let response = TournamentResponse {
        tournament_id: 12,
        name: "Copa Aurora 2026".to_string(),
        start_date: "2026-06-01".to_string(),
        end_date: "2026-07-15".to_string(),
        logo_path: None,
    };

    // Act
    let json = serde_json::to_string(&response).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    // Assert
    assert_eq!(parsed["tournamentId"], 12);
    assert!(parsed.get("startDate").is_some());
    assert!(parsed.get("endDate").is_some());
    assert!(parsed.get("tournament_id").is_none());
    assert!(parsed.get("start_date").is_none());
}

#[test]
fn should_serialize_list_item_with_groups() {
    // Arrange
    let item = TournamentListItem {
        tournament_id: 3,
        name: "Liga Norte".to_string(),
        start_date: "2026-03-01".to_string(),
        end_date: "2026-11-30".to_string(),
        logo_path: None,
        groups: vec![
            GroupSummary {
                group_id: 10,
                name: "Group A".to_string(),
            },
            GroupSummary {
                group_id: 11,
                name: "Group B".to_string(),
            },
        ],
    };

    // Act
    let json = serde_json::to_string(&item).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    // Assert
    assert_eq!(parsed["groups"].as_array().unwrap().len(), 2);
    assert_eq!(parsed["groups"][0]["groupId"], 10);
    assert_eq!(parsed["groups"][1]["name"], "Group B");
}
