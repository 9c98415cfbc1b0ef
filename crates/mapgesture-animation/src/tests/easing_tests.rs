use super::*;

#[test]
fn linear_is_identity() {
    for t in [0.0, 0.1, 0.25, 0.5, 0.75, 1.0] {
        let value = EasingCurve::LINEAR.evaluate(t);
        assert!((value - t).abs() < 1e-4, "linear({t}) = {value}");
    }
}

#[test]
fn endpoints_are_fixed() {
    let curves = [
        EasingCurve::LINEAR,
        EasingCurve::EASE_OUT,
        EasingCurve::EASE_IN_OUT,
        EasingCurve::DEFAULT_PAN,
    ];

    for curve in curves {
        assert_eq!(curve.evaluate(0.0), 0.0, "start for {curve:?}");
        assert_eq!(curve.evaluate(1.0), 1.0, "end for {curve:?}");
    }
}

#[test]
fn out_of_range_input_is_clamped() {
    let curve = EasingCurve::default();
    assert_eq!(curve.evaluate(-3.0), 0.0);
    assert_eq!(curve.evaluate(7.5), 1.0);
    assert_eq!(curve.evaluate(f32::NAN), 0.0);
}

#[test]
fn default_pan_curve_is_monotonic() {
    let curve = EasingCurve::DEFAULT_PAN;
    let mut previous = 0.0;
    for step in 0..=200 {
        let t = step as f32 / 200.0;
        let value = curve.evaluate(t);
        assert!(
            value + 1e-5 >= previous,
            "curve decreased at t={t}: {previous} -> {value}"
        );
        assert!((0.0..=1.0).contains(&value));
        previous = value;
    }
}

#[test]
fn default_pan_curve_front_loads_progress() {
    // (0, 0, 0.3, 1) decelerates: most of the distance is covered early.
    let curve = EasingCurve::DEFAULT_PAN;
    assert!(curve.evaluate(0.25) > 0.45);
    assert!(curve.evaluate(0.5) > 0.75);
}

#[test]
fn ease_in_curve_lags_behind_time() {
    let curve = EasingCurve::new(1.0, 0.0, 1.0, 1.0);
    let value = curve.evaluate(0.5);
    assert!((0.0..=1.0).contains(&value));
    assert!(value < 0.5);
}

#[test]
fn new_clamps_x_control_points() {
    let curve = EasingCurve::new(-0.5, 0.0, 1.5, 1.0);
    assert_eq!(curve.control_points(), (0.0, 0.0, 1.0, 1.0));
}

#[test]
fn try_new_rejects_out_of_range_x() {
    let err = EasingCurve::try_new(0.0, 0.0, 1.2, 1.0).unwrap_err();
    assert_eq!(
        err,
        EasingError::ControlPointOutOfRange {
            name: "x2",
            value: 1.2
        }
    );
    assert_eq!(
        err.to_string(),
        "easing control point x2 out of range: 1.2"
    );
}

#[test]
fn try_new_accepts_overshooting_y() {
    let curve = EasingCurve::try_new(0.3, -0.2, 0.7, 1.4).expect("valid curve");
    assert_eq!(curve.control_points(), (0.3, -0.2, 0.7, 1.4));
}

#[test]
fn default_is_pan_curve() {
    assert_eq!(EasingCurve::default(), EasingCurve::new(0.0, 0.0, 0.3, 1.0));
}
