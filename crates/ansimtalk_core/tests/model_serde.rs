use ansimtalk_core::{
    CheckIn, DailyAdherence, MedicationRecord, MedicationStatus, MedicationSummary, Mood, Route,
};
use uuid::Uuid;

#[test]
fn medication_record_new_sets_defaults() {
    let record = MedicationRecord::new("혈압약", "18:00");

    assert!(!record.id.is_nil());
    assert_eq!(record.name, "혈압약");
    assert_eq!(record.scheduled_time, "18:00");
    assert!(!record.taken);
}

#[test]
fn mark_taken_is_one_way() {
    let mut record = MedicationRecord::new("소화제", "12:00");

    assert!(record.mark_taken());
    assert!(!record.mark_taken());
    assert!(record.taken);
}

#[test]
fn medication_record_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let record = MedicationRecord::with_id(id, "철분약", "08:00").taken(true);

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["name"], "철분약");
    assert_eq!(json["scheduled_time"], "08:00");
    assert_eq!(json["taken"], true);

    let decoded: MedicationRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn check_in_and_route_use_snake_case_ids() {
    let check_in = CheckIn {
        mood: Mood::Okay,
        confirmed_at_ms: 1_760_000_000_000,
    };
    let json = serde_json::to_value(check_in).unwrap();
    assert_eq!(json["mood"], "okay");
    assert_eq!(json["confirmed_at_ms"], 1_760_000_000_000_i64);

    assert_eq!(
        serde_json::to_value(Route::SafetyCheck).unwrap(),
        serde_json::json!(Route::SafetyCheck.as_str())
    );
}

#[test]
fn summary_and_status_serialize_for_status_card() {
    let summary = MedicationSummary {
        total_count: 5,
        taken_count: 5,
    };
    let json = serde_json::to_value(summary).unwrap();
    assert_eq!(json["total_count"], 5);
    assert_eq!(json["taken_count"], 5);
    assert_eq!(
        serde_json::to_value(summary.status()).unwrap(),
        serde_json::json!("complete")
    );
    assert_eq!(summary.status(), MedicationStatus::Complete);
}

#[test]
fn daily_adherence_labels() {
    let partial = DailyAdherence::new("2025-10-10", 3, 5);
    let done = DailyAdherence::new("2025-10-09", 5, 5);
    let empty = DailyAdherence::new("2025-10-05", 0, 0);

    assert_eq!(partial.progress_label(), "3/5");
    assert!(!partial.is_complete());
    assert!(done.is_complete());
    assert!(!empty.is_complete());
}
