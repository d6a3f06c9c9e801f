use crate::Doctor;

#[test]
fn given_doctor_when_serialized_then_uses_camel_case_keys() {
    let mut doctor = Doctor::new(1, "Dr. Sarah Johnson", "Cardiology");
    doctor.consultation_fee = Some(150);
    doctor.next_available = Some("Today 3:00 PM".into());
    doctor.video_consultation = true;

    let json = serde_json::to_string(&doctor).unwrap();

    assert!(json.contains("\"consultationFee\":150"));
    assert!(json.contains("\"nextAvailable\":\"Today 3:00 PM\""));
    assert!(json.contains("\"videoConsultation\":true"));
}

#[test]
fn given_directory_record_with_extra_fields_when_deserialized_then_ignores_them() {
    let json = r#"{
        "id": 2,
        "name": "Dr. Michael Chen",
        "specialty": "General Medicine",
        "rating": 4.8,
        "languages": ["English", "Mandarin"],
        "consultationFee": 120
    }"#;

    let doctor: Doctor = serde_json::from_str(json).unwrap();

    assert_eq!(doctor.id, 2);
    assert_eq!(doctor.consultation_fee, Some(120));
    assert!(doctor.next_available.is_none());
    assert!(!doctor.in_person_consultation);
}
