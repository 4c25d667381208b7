use crate::DoctorNote;

#[test]
fn test_new_note_is_trimmed() {
    let note = DoctorNote::new("d1", "u1", "  follow up in 7 days \n").unwrap();
    assert_eq!(note.note, "follow up in 7 days");
    assert_eq!(note.diagnosis_id, "d1");
}

#[test]
fn test_blank_note_is_rejected() {
    assert!(DoctorNote::new("d1", "u1", "   ").is_err());
}
