use crate::ImagingType;

use std::str::FromStr;

#[test]
fn test_imaging_type_as_str() {
    assert_eq!(ImagingType::Xray.as_str(), "xray");
    assert_eq!(ImagingType::Ct.as_str(), "ct");
    assert_eq!(ImagingType::Mri.as_str(), "mri");
    assert_eq!(ImagingType::Skin.as_str(), "skin");
}

#[test]
fn test_imaging_type_from_str() {
    for imaging_type in ImagingType::ALL {
        assert_eq!(
            ImagingType::from_str(imaging_type.as_str()).unwrap(),
            imaging_type
        );
    }
    assert!(ImagingType::from_str("ultrasound").is_err());
    assert!(ImagingType::from_str("XRAY").is_err());
}

#[test]
fn test_imaging_type_labels() {
    assert_eq!(ImagingType::Ct.label(), "CT Scan");
    assert_eq!(ImagingType::Ct.short_label(), "CT");
    assert_eq!(ImagingType::Skin.label(), "Skin Photo");
    assert_eq!(ImagingType::Skin.short_label(), "Skin");
}

#[test]
fn test_imaging_type_serializes_lowercase() {
    let json = serde_json::to_string(&ImagingType::Mri).unwrap();
    assert_eq!(json, "\"mri\"");
}
