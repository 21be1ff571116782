//! Tests for the models module.

use jiff::Timestamp;
use rust_decimal::Decimal;

use super::*;

fn test_product() -> Product {
    Product {
        id: 3,
        title: "Diseño Floral".to_string(),
        description: Some("Flores pintadas a mano".to_string()),
        category: ProductCategory::Bodas,
        kind: ProductKind::ManicureSpa,
        price: Decimal::from(80),
        created_at: Timestamp::from_second(1717200000).unwrap(),
        updated_at: Timestamp::from_second(1717200000).unwrap(),
    }
}

fn test_appointment(date: &str) -> Appointment {
    Appointment {
        id: 1,
        client_name: "Ana".to_string(),
        phone: None,
        date: date.to_string(),
        slot: TimeSlot::LateMorning,
        payment_method: PaymentMethod::Yape,
        status: AppointmentStatus::Pendiente,
        design: ProductSnapshot::from(&test_product()),
        payment_reference: None,
        created_at: Timestamp::from_second(1717200000).unwrap(),
        updated_at: Timestamp::from_second(1717200000).unwrap(),
    }
}

#[test]
fn test_status_round_trip() {
    for status in [
        AppointmentStatus::Pendiente,
        AppointmentStatus::Cancelada,
        AppointmentStatus::Completado,
    ] {
        let parsed: AppointmentStatus = status.as_str().parse().unwrap();
        assert_eq!(parsed, status);
    }
}

#[test]
fn test_status_parse_is_case_insensitive() {
    assert_eq!(
        "COMPLETADO".parse::<AppointmentStatus>().unwrap(),
        AppointmentStatus::Completado
    );
    assert!("Terminado".parse::<AppointmentStatus>().is_err());
}

#[test]
fn test_status_serde_uses_exact_labels() {
    let json = serde_json::to_string(&AppointmentStatus::Pendiente).unwrap();
    assert_eq!(json, "\"Pendiente\"");

    let status: AppointmentStatus = serde_json::from_str("\"Cancelada\"").unwrap();
    assert_eq!(status, AppointmentStatus::Cancelada);
}

#[test]
fn test_payment_method_parse() {
    assert_eq!(
        "transferencia".parse::<PaymentMethod>().unwrap(),
        PaymentMethod::Transferencia
    );
    assert!("Efectivo".parse::<PaymentMethod>().is_err());
}

#[test]
fn test_time_slot_labels_are_exact() {
    assert_eq!(
        "8:15 a 10:00".parse::<TimeSlot>().unwrap(),
        TimeSlot::EarlyMorning
    );
    // Slot labels do not tolerate case or spacing variations
    assert!("8:15 A 10:00".parse::<TimeSlot>().is_err());
    assert!("08:15 a 10:00".parse::<TimeSlot>().is_err());
}

#[test]
fn test_time_slot_serde_round_trip() {
    let json = serde_json::to_string(&TimeSlot::LateEvening).unwrap();
    assert_eq!(json, "\"20:15 a 22:00\"");

    let slot: TimeSlot = serde_json::from_str("\"14:15 a 16:00\"").unwrap();
    assert_eq!(slot, TimeSlot::EarlyAfternoon);
}

#[test]
fn test_time_slot_all_is_chronological() {
    assert_eq!(TimeSlot::ALL.len(), 6);
    assert_eq!(TimeSlot::ALL[0], TimeSlot::EarlyMorning);
    assert_eq!(TimeSlot::ALL[5], TimeSlot::LateEvening);
}

#[test]
fn test_category_and_kind_parse() {
    assert_eq!(
        "Clásicas".parse::<ProductCategory>().unwrap(),
        ProductCategory::Clasicas
    );
    assert_eq!(
        "manicure spa".parse::<ProductKind>().unwrap(),
        ProductKind::ManicureSpa
    );
    assert!("Pedicure".parse::<ProductKind>().is_err());
}

#[test]
fn test_snapshot_copies_product_fields() {
    let product = test_product();
    let snapshot = ProductSnapshot::from(&product);

    assert_eq!(snapshot.product_id, Some(3));
    assert_eq!(snapshot.title, "Diseño Floral");
    assert_eq!(snapshot.description.as_deref(), Some("Flores pintadas a mano"));
    assert_eq!(snapshot.price, Decimal::from(80));
}

#[test]
fn test_calendar_date_parses_valid_date() {
    let appointment = test_appointment("2024-06-01");
    let date = appointment.calendar_date().expect("date should parse");
    assert_eq!(date.year(), 2024);
    assert_eq!(date.month(), 6);
}

#[test]
fn test_calendar_date_is_none_for_malformed_date() {
    assert!(test_appointment("mañana").calendar_date().is_none());
    assert!(test_appointment("2024-13-45").calendar_date().is_none());
}

#[test]
fn test_appointment_serde_defaults_status() {
    let appointment = test_appointment("2024-06-01");
    let json = serde_json::to_string(&appointment).unwrap();
    assert!(json.contains("\"Pendiente\""));

    // A payload missing the status field falls back to Pendiente
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let mut map = value.as_object().unwrap().clone();
    map.remove("status");
    let stripped = serde_json::Value::Object(map).to_string();

    let parsed: Appointment = serde_json::from_str(&stripped).unwrap();
    assert_eq!(parsed.status, AppointmentStatus::Pendiente);
}
