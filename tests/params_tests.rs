use tubemesh::{
    TubeError, TubeParameters, compose_tube,
    params::{MAX_SEGMENTS, MIN_SEGMENTS, PARAMETER_SPECS, ParameterUnit},
};

#[test]
fn host_defaults() {
    let params = TubeParameters::default();
    assert_eq!(params, TubeParameters::new(32, 4.0, 5.0, 360.0, 0.2));
    assert_eq!(params.ring_len(), 32);
    assert_eq!(params.half_width(), 0.1);
}

#[test]
fn parameter_table_describes_every_field() {
    let names: Vec<_> = PARAMETER_SPECS.iter().map(|s| s.name).collect();
    assert_eq!(names, ["vertices", "radius1", "radius2", "arc", "width"]);

    for spec in &PARAMETER_SPECS {
        assert!(spec.min <= spec.default && spec.default <= spec.max, "{}", spec.name);
        if let Some(soft_max) = spec.soft_max {
            assert!(spec.default <= soft_max, "{}", spec.name);
        }
    }

    let lengths: Vec<_> = PARAMETER_SPECS
        .iter()
        .filter(|s| s.unit == ParameterUnit::Length)
        .map(|s| s.name)
        .collect();
    assert_eq!(lengths, ["radius1", "radius2", "width"]);
}

#[test]
fn boundary_values_validate() {
    let edge = TubeParameters::new(MIN_SEGMENTS, 0.0, 0.0, 0.0, 0.0);
    assert!(edge.validate().is_ok());
    assert!(edge.with_arc(360.0).validate().is_ok());
    assert_eq!(
        edge.with_vertices(0).validate(),
        Err(TubeError::TooFewSegments { min: 3, actual: 0 })
    );
}

#[test]
fn oversized_segment_counts_are_rejected_before_allocation() {
    for vertices in [usize::MAX / 2, usize::MAX, MAX_SEGMENTS + 1] {
        let params = TubeParameters::new(vertices, 1.0, 2.0, 90.0, 1.0);
        let expected = TubeError::TooManySegments { max: MAX_SEGMENTS, actual: vertices };
        assert_eq!(params.validate(), Err(expected.clone()));
        assert_eq!(compose_tube(&params), Err(expected));
    }

    // the largest accepted count still has room for the closing point of every ring
    let params = TubeParameters::new(MAX_SEGMENTS, 1.0, 2.0, 90.0, 1.0);
    assert!(params.validate().is_ok());
    assert!(params.ring_len().checked_mul(4).is_some());

    let err = TubeParameters::default().with_vertices(usize::MAX).validate().unwrap_err();
    assert!(err.to_string().contains("TooManySegments"), "{err}");
}

#[test]
fn first_failing_field_is_reported() {
    let params = TubeParameters::new(1, -1.0, -1.0, 999.0, -1.0);
    assert!(matches!(params.validate(), Err(TubeError::TooFewSegments { .. })));

    let params = params.with_vertices(8);
    assert!(matches!(
        params.validate(),
        Err(TubeError::NegativeRadius { name: "radius1", .. })
    ));
}

#[cfg(feature = "serde")]
#[test]
fn parameters_deserialize_with_defaults() {
    let params: TubeParameters = serde_json::from_str(r#"{ "vertices": 12, "arc": 90.0 }"#).unwrap();
    assert_eq!(params, TubeParameters::default().with_vertices(12).with_arc(90.0));

    let json = serde_json::to_string(&params).unwrap();
    let back: TubeParameters = serde_json::from_str(&json).unwrap();
    assert_eq!(back, params);
}
