use ansimtalk_core::{AddMedicationForm, MedicationError, MedicationField, MedicationService};

#[test]
fn open_shows_empty_dialog() {
    let mut form = AddMedicationForm::new();
    form.set_name("stale");
    form.open();

    assert!(form.is_visible());
    assert_eq!(form.name(), "");
    assert_eq!(form.time(), "");
}

#[test]
fn submit_adds_record_and_closes_dialog() {
    let mut service = MedicationService::in_memory();
    let mut form = AddMedicationForm::new();
    form.open();
    form.set_name("아스피린");
    form.set_time("20:00");

    let id = form.submit(&mut service).unwrap();

    assert!(!form.is_visible());
    assert_eq!(form.name(), "");
    assert_eq!(service.len(), 1);
    assert_eq!(service.get(id).unwrap().name, "아스피린");
}

#[test]
fn submit_with_blank_time_keeps_dialog_open() {
    let mut service = MedicationService::in_memory();
    let mut form = AddMedicationForm::new();
    form.open();
    form.set_name("아스피린");
    form.set_time("   ");

    let err = form.submit(&mut service).unwrap_err();

    assert_eq!(
        err,
        MedicationError::InvalidInput {
            field: MedicationField::ScheduledTime
        }
    );
    assert!(form.is_visible());
    assert_eq!(form.name(), "아스피린");
    assert!(service.is_empty());
}

#[test]
fn dismiss_discards_drafts_without_adding() {
    let mut service = MedicationService::in_memory();
    let mut form = AddMedicationForm::new();
    form.open();
    form.set_name("아스피린");
    form.set_time("20:00");

    form.dismiss();

    assert!(!form.is_visible());
    assert_eq!(form.time(), "");
    assert!(service.is_empty());
    assert!(service.add("", "").is_err());
}
