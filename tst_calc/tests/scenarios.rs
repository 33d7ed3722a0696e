use tst_calc::{
    solve, tst_from_values, Field, FormStatus, InputError, Orientation, Point3, ReportConfig,
    TstForm,
};

#[test]
fn vertical_borehole_through_dipping_bed() {
    let tst = tst_from_values(0.0, 30.0, 0.0, 0.0, 0.0, 0.0, 0.0, 100.0);
    assert!((tst - 86.6).abs() < 0.01);
}

#[test]
fn horizontal_traverse_in_strike_bearing() {
    let tst = tst_from_values(90.0, 45.0, 0.0, 0.0, 0.0, 10.0, 0.0, 0.0);
    assert!((tst - 7.07).abs() < 0.01);
}

#[test]
fn projected_coordinates() {
    let a = Point3::new(512_340.0, 6_201_115.0, 412.0);
    let b = Point3::new(512_340.0, 6_201_115.0, 362.0);
    let sol = solve(Orientation::new(215.0, 60.0), a, b);
    assert!((sol.thickness - 25.0).abs() < 1e-9);
    assert!(sol.bearing.is_none());
}

#[test]
fn bearing_opposite_to_strike_flips_apparent_dip() {
    let o = Orientation::new(0.0, 45.0);
    let north = solve(o, Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 10.0, 0.0));
    let south = solve(o, Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, -10.0, 0.0));
    assert!((north.apparent_dip.unwrap() - 45.0).abs() < 1e-9);
    assert!((south.apparent_dip.unwrap() + 45.0).abs() < 1e-9);
    assert!((north.thickness - south.thickness).abs() < 1e-9);
}

#[test]
fn dialog_session() {
    let mut form = TstForm::new(ReportConfig::default());
    let entries = [
        (Field::Strike, "0"),
        (Field::Dip, "30"),
        (Field::X1, "0"),
        (Field::Y1, "0"),
        (Field::Z1, "0"),
        (Field::X2, "0"),
        (Field::Y2, "0"),
    ];
    for (field, text) in entries {
        form.set(field, text);
        assert_eq!(form.status(), &FormStatus::Invalid(InputError::Incomplete));
    }
    form.set(Field::Z2, "100");
    assert_eq!(form.message(), "True Stratigraphic Thickness: 86.6 meters");

    form.set(Field::Strike, "361");
    assert_eq!(form.message(), "Strike must be 0-360\u{00B0}");

    form.clear();
    assert_eq!(form.message(), "Enter values to calculate TST");
}
