use crate::{LEAD_COLLECTION, Lead};

#[test]
fn test_lead_new() {
    let lead = Lead::new("Ivan".to_string(), "+79001234567".to_string());

    assert_eq!(lead.name, "Ivan");
    assert_eq!(lead.phone, "+79001234567");
    assert_eq!(lead.car_model, None);
    assert_eq!(lead.budget, None);
    assert_eq!(lead.email, None);
    assert_eq!(lead.message, None);
}

#[test]
fn test_lead_collection_constant() {
    assert_eq!(LEAD_COLLECTION, "lead");
}

#[test]
fn test_validate_accepts_required_fields() {
    let lead = Lead::new("Ivan".to_string(), "+79001234567".to_string());

    assert!(lead.validate().is_ok());
}

#[test]
fn test_validate_rejects_empty_name() {
    let lead = Lead::new("".to_string(), "+79001234567".to_string());

    let err = lead.validate().unwrap_err();
    assert_eq!(err.field(), Some("name"));
}

#[test]
fn test_validate_rejects_whitespace_name() {
    let lead = Lead::new("   ".to_string(), "+79001234567".to_string());

    let err = lead.validate().unwrap_err();
    assert_eq!(err.field(), Some("name"));
}

#[test]
fn test_validate_rejects_empty_phone() {
    let lead = Lead::new("Ivan".to_string(), "".to_string());

    let err = lead.validate().unwrap_err();
    assert_eq!(err.field(), Some("phone"));
}

#[test]
fn test_optional_fields_serialize_as_null() {
    let lead = Lead::new("Ivan".to_string(), "+79001234567".to_string());

    let value = serde_json::to_value(&lead).unwrap();

    assert_eq!(value["name"], "Ivan");
    assert!(value["car_model"].is_null());
    assert!(value["budget"].is_null());
    assert!(value["email"].is_null());
    assert!(value["message"].is_null());
}

#[test]
fn test_deserialize_with_missing_optionals() {
    let lead: Lead = serde_json::from_str(r#"{"name":"Ivan","phone":"+79001234567"}"#).unwrap();

    assert_eq!(lead.name, "Ivan");
    assert_eq!(lead.car_model, None);
    assert_eq!(lead.message, None);
}

#[test]
fn test_deserialize_with_all_fields() {
    let lead: Lead = serde_json::from_str(
        r#"{
            "name": "Ivan",
            "phone": "+79001234567",
            "car_model": "Toyota Camry",
            "budget": "2.5m",
            "email": "ivan@example.com",
            "message": "Looking for a 2022 model"
        }"#,
    )
    .unwrap();

    assert_eq!(lead.car_model.as_deref(), Some("Toyota Camry"));
    assert_eq!(lead.budget.as_deref(), Some("2.5m"));
    assert_eq!(lead.email.as_deref(), Some("ivan@example.com"));
    assert_eq!(lead.message.as_deref(), Some("Looking for a 2022 model"));
}

#[test]
fn test_validation_error_display_includes_location() {
    let lead = Lead::new("".to_string(), "+79001234567".to_string());

    let err = lead.validate().unwrap_err();
    let rendered = err.to_string();

    assert!(rendered.contains("name must not be empty"));
    assert!(rendered.contains("lead.rs"));
}
