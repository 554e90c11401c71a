use approx::assert_relative_eq;
use cross_section::prelude::*;

/// Four plates welded into a box: two flanges and two webs, arranged so
/// the assembly matches the closed-form hollow box exactly.
fn build_welded_box_plates(width: f64, depth: f64, t: f64) -> Vec<Section> {
    let flange = Section::rectangular(width, t).unwrap();
    let web = Section::rectangular(t, depth - 2.0 * t).unwrap();

    vec![
        flange.at(0.0, (depth - t) / 2.0),
        flange.at(0.0, -(depth - t) / 2.0),
        web.at((width - t) / 2.0, 0.0),
        web.at(-(width - t) / 2.0, 0.0),
    ]
}

#[test]
fn welded_plates_match_closed_form_box() {
    let width = 0.2;
    let depth = 0.3;
    let t = 0.01;

    let plates = build_welded_box_plates(width, depth, t);
    let combined = combine_sections(&plates).unwrap();
    let closed_form = Section::box_section(width, depth, t).unwrap();

    assert_relative_eq!(combined.a, closed_form.a, max_relative = 1e-12);
    assert_relative_eq!(combined.y_c, 0.0, epsilon = 1e-15);
    assert_relative_eq!(combined.z_c, 0.0, epsilon = 1e-15);
    assert_relative_eq!(combined.i_yy, closed_form.i_yy, max_relative = 1e-10);
    assert_relative_eq!(combined.i_zz, closed_form.i_zz, max_relative = 1e-10);
    assert_relative_eq!(combined.i_yz, 0.0, epsilon = 1e-15);
}

#[test]
fn reinforced_concrete_idealised_as_equivalent_concrete() {
    // 300 x 500 concrete section with its soffit at z = 0, reinforced by
    // 2000 of steel at z = 50. Transformed to equivalent concrete.
    let concrete = Section::rectangular(300.0, 500.0).unwrap().at(0.0, 250.0);
    let rebar = Section::new(2000.0, 0.0, 50.0, 0.0, 0.0, 0.0);

    let e_concrete = 30_000.0;
    let e_steel = 200_000.0;

    let transformed =
        idealised_section(&[concrete, rebar], &[e_concrete, e_steel], e_concrete).unwrap();

    // A* = 150_000 + 2000 * 200/30
    assert_relative_eq!(transformed.section.a, 490_000.0 / 3.0, max_relative = 1e-12);
    // Centroid pulled from mid-depth toward the reinforcement
    assert_relative_eq!(transformed.section.z_c, 11_450.0 / 49.0, max_relative = 1e-12);
    assert!(transformed.section.z_c < 250.0);
    // I_yy = 3.125e9 + 150_000*(800/49)^2 + (20/3)*2000*(9000/49)^2
    assert_relative_eq!(transformed.section.i_yy, 3_614_795_918.367, epsilon = 0.01);
    assert!(transformed.section.i_yy > concrete.i_yy);
    assert_relative_eq!(transformed.section.i_yz, 0.0, epsilon = 1e-6);
    assert_eq!(transformed.e, e_concrete);

    eprintln!("Transformed RC section (equivalent concrete):");
    eprintln!("  A* = {:.1}", transformed.section.a);
    eprintln!("  z_c = {:.3}", transformed.section.z_c);
    eprintln!("  I_yy = {:.3e}", transformed.section.i_yy);
}

#[test]
fn flitch_beam_unity_check_against_combine() {
    // Same geometry idealised at unity ratio must reproduce plain combination
    let timber = Section::rectangular(200.0, 400.0).unwrap();
    let plate = Section::rectangular(10.0, 400.0).unwrap().at(105.0, 0.0);

    let combined = combine_sections(&[timber, plate]).unwrap();
    let idealised =
        idealised_section(&[timber, plate], &[11_000.0, 11_000.0], 11_000.0).unwrap();

    assert_relative_eq!(idealised.section.a, combined.a, max_relative = 1e-12);
    assert_relative_eq!(idealised.section.y_c, combined.y_c, max_relative = 1e-12);
    assert_relative_eq!(idealised.section.i_yy, combined.i_yy, max_relative = 1e-12);
    assert_relative_eq!(idealised.section.i_zz, combined.i_zz, max_relative = 1e-12);
    assert_eq!(idealised.e, 11_000.0);
}

#[test]
fn section_serde_round_trip() {
    let original = MaterialisedSection::new(
        Section::ring(100.0, 10.0).unwrap().at(12.0, -3.5),
        210_000.0,
    );

    let json = serde_json::to_string(&original).unwrap();
    let restored: MaterialisedSection = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.section.a, original.section.a);
    assert_eq!(restored.section.y_c, original.section.y_c);
    assert_eq!(restored.section.z_c, original.section.z_c);
    assert_eq!(restored.section.i_yy, original.section.i_yy);
    assert_eq!(restored.section.i_zz, original.section.i_zz);
    assert_eq!(restored.section.i_yz, original.section.i_yz);
    assert_eq!(restored.e, original.e);
}

#[test]
fn error_messages_name_the_violated_precondition() {
    let err = combine_sections(&[]).unwrap_err();
    assert!(err.to_string().contains("at least one section"));

    let s = Section::circular(0.1).unwrap();
    let err = idealised_section(&[s], &[], 200.0e9).unwrap_err();
    assert!(err.to_string().contains("1 sections and 0 moduli"));

    let err = idealised_section(&[s], &[200.0e9], 0.0).unwrap_err();
    assert!(err.to_string().contains("positive"));

    let err = Section::ring(100.0, 60.0).unwrap_err();
    assert!(err.to_string().contains("Invalid geometry"));
}
