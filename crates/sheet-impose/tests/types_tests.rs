use sheet_impose::*;

#[test]
fn test_sheet_size_dimensions() {
    assert_eq!(SheetSize::Sra3.dimensions_mm(), (320.0, 450.0));
    assert_eq!(SheetSize::Sra4.dimensions_mm(), (225.0, 320.0));
    assert_eq!(SheetSize::A3.dimensions_mm(), (297.0, 420.0));
    assert_eq!(SheetSize::A4.dimensions_mm(), (210.0, 297.0));
    assert_eq!(SheetSize::B3.dimensions_mm(), (353.0, 500.0));
    assert_eq!(SheetSize::Commercial.dimensions_mm(), (500.0, 700.0));

    let custom = SheetSize::Custom {
        width_mm: 330.0,
        height_mm: 488.0,
    };
    assert_eq!(custom.dimensions_mm(), (330.0, 488.0));
}

#[test]
fn test_sheet_size_orientation() {
    assert_eq!(
        SheetSize::Sra3.dimensions_with_orientation(SheetOrientation::Portrait),
        (320.0, 450.0)
    );
    assert_eq!(
        SheetSize::Sra3.dimensions_with_orientation(SheetOrientation::Landscape),
        (450.0, 320.0)
    );
}

#[test]
fn test_presets_are_portrait() {
    for preset in SheetSize::PRESETS {
        let (w, h) = preset.dimensions_mm();
        assert!(w < h, "{} should be portrait", preset.name());
    }
}

#[test]
fn test_grip_margins() {
    let margins = GripMargins::default();
    assert_eq!(margins.top_mm, 10.0);
    assert_eq!(margins.left_mm, 10.0);
    assert_eq!(margins.valid_area(320.0, 450.0), (300.0, 430.0));

    let uneven = GripMargins {
        top_mm: 12.0,
        bottom_mm: 5.0,
        left_mm: 5.0,
        right_mm: 5.0,
    };
    assert_eq!(uneven.valid_area(320.0, 450.0), (310.0, 433.0));

    // Margins wider than the sheet leave nothing, never a negative area
    assert_eq!(GripMargins::uniform(200.0).valid_area(320.0, 450.0), (0.0, 50.0));
}

#[test]
fn test_orientation_names() {
    assert_eq!(LayoutOrientation::Horizontal.as_str(), "horizontal");
    assert_eq!(LayoutOrientation::Vertical.to_string(), "vertical");
    assert!(LayoutOrientation::Vertical.is_rotated());
    assert!(!LayoutOrientation::default().is_rotated());
}

#[test]
fn test_bleed_footprint() {
    let input = ImpositionInput::new(90.0, 50.0).with_bleed(2.0);
    assert_eq!(input.bleed_width(), 94.0);
    assert_eq!(input.bleed_height(), 54.0);
}

#[cfg(feature = "serde")]
#[test]
fn test_input_uses_camel_case_fields() {
    let json = r#"{
        "productWidth": 90, "productHeight": 50, "bleed": 2,
        "sheetWidth": 520, "sheetHeight": 370,
        "validWidth": 500, "validHeight": 350,
        "gutterH": 3, "gutterV": 3
    }"#;
    let input: ImpositionInput = serde_json::from_str(json).unwrap();
    assert_eq!(input.product_width, 90.0);
    assert_eq!(input.gutter_h, 3.0);
    assert_eq!(input.gutter_v, 3.0);
}

#[cfg(feature = "serde")]
#[test]
fn test_result_serializes_orientation_as_lowercase() {
    let result = ImpositionResult {
        repetitions_h: 7,
        repetitions_v: 1,
        total_repetitions: 7,
        utilization: 88.9,
        orientation: LayoutOrientation::Vertical,
    };
    let value = serde_json::to_value(result).unwrap();
    assert_eq!(value["orientation"], "vertical");
    assert_eq!(value["repetitionsH"], 7);
    assert_eq!(value["totalRepetitions"], 7);
    assert_eq!(value["utilization"], 88.9);
}

#[cfg(feature = "serde")]
#[test]
fn test_record_is_flat() {
    let input = ImpositionInput::new(100.0, 100.0).with_sheet(300.0, 300.0);
    let record = update_in_place(&ImpositionRecord::from(input));

    let value = serde_json::to_value(record).unwrap();
    assert_eq!(value["productWidth"], 100.0);
    assert_eq!(value["totalRepetitions"], 9);
    assert_eq!(value["orientation"], "horizontal");

    // A bare input deserializes as a record with no result
    let bare = serde_json::to_string(&input).unwrap();
    let record: ImpositionRecord = serde_json::from_str(&bare).unwrap();
    assert_eq!(record.input, input);
    assert!(record.result.is_none());
}
