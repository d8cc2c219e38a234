use approx::assert_abs_diff_eq;
use rstest::rstest;

use sundir::coordinates::{parse_angle, parse_latitude, parse_longitude};
use sundir::error::{ErrorKind, SundirError};

#[rstest]
#[case("35d37m51s", 35.0 + 37.0 / 60.0 + 51.0 / 3600.0)]
#[case("32d48m0s", 32.8)]
#[case("130d43m0s", 130.0 + 43.0 / 60.0)]
#[case("139d47m3s", 139.0 + 47.0 / 60.0 + 3.0 / 3600.0)]
#[case("-33d52m10.5s", -(33.0 + 52.0 / 60.0 + 10.5 / 3600.0))]
#[case("+12d0m59.999s", 12.0 + 59.999 / 3600.0)]
#[case("0d0m0s", 0.0)]
fn test_sexagesimal(#[case] text: &str, #[case] expected: f64) {
    assert_abs_diff_eq!(parse_angle(text).unwrap(), expected, epsilon = 1e-12);
}

#[rstest]
#[case("35.6799d", 35.6799)]
#[case("139.6806d", 139.6806)]
#[case("-71.5d", -71.5)]
#[case("+8d", 8.0)]
#[case("0.25d", 0.25)]
#[case(".5d", 0.5)]
fn test_decimal_degrees(#[case] text: &str, #[case] expected: f64) {
    assert_eq!(parse_angle(text).unwrap(), expected);
}

#[test]
fn test_decimal_roundtrip() {
    for d in [-179.999, -90.0, -0.001, 0.0, 12.3456789, 45.0, 89.99999] {
        let text = format!("{}d", d);
        assert_eq!(parse_angle(&text).unwrap(), d, "{}", text);
    }
}

#[test]
fn test_sign_applies_to_whole_angle() {
    let south = parse_angle("-10d30m0s").unwrap();
    assert_abs_diff_eq!(south, -10.5, epsilon = 1e-12);
}

#[test]
fn test_surrounding_whitespace_ignored() {
    assert_eq!(parse_angle("  35.5d ").unwrap(), 35.5);
}

#[rstest]
#[case("")]
#[case("-")]
#[case("35")]
#[case("35.5")]
#[case("d")]
#[case("35d37m")]
#[case("35d37m51")]
#[case("35d37s")]
#[case("35.5d30m0s")]
#[case("35d37.5m0s")]
#[case("35d60m0s")]
#[case("35d37m60s")]
#[case("35d-1m0s")]
#[case("35d37m51ss")]
#[case("abcd")]
#[case("1e2d")]
#[case("nand")]
#[case("--35d")]
#[case("35dd")]
fn test_malformed_angles_rejected(#[case] text: &str) {
    match parse_angle(text) {
        Err(SundirError::InvalidAngle { input, .. }) => assert_eq!(input, text),
        other => panic!("{:?} parsed as {:?}", text, other),
    }
}

#[test]
fn test_latitude_keeps_original_text() {
    let lat = parse_latitude("32d48m0s").unwrap();
    assert_eq!(lat.text, "32d48m0s");
    assert_abs_diff_eq!(lat.degrees, 32.8, epsilon = 1e-12);
}

#[rstest]
#[case("90d", true)]
#[case("-90d0m0s", true)]
#[case("90.0001d", false)]
#[case("91d0m0s", false)]
#[case("-120d", false)]
fn test_latitude_range(#[case] text: &str, #[case] ok: bool) {
    let result = parse_latitude(text);
    assert_eq!(result.is_ok(), ok, "{:?}", result);
    if let Err(e) = result {
        assert!(matches!(e, SundirError::AngleOutOfRange { .. }));
        assert_eq!(e.kind(), ErrorKind::Parse);
    }
}

#[rstest]
#[case("180d", true)]
#[case("-180d", true)]
#[case("139d47m3s", true)]
#[case("180d0m1s", false)]
#[case("-200d", false)]
fn test_longitude_range(#[case] text: &str, #[case] ok: bool) {
    assert_eq!(parse_longitude(text).is_ok(), ok, "{}", text);
}

#[test]
fn test_error_message_echoes_input() {
    let err = parse_angle("35d37x").unwrap_err();
    assert!(err.to_string().contains("35d37x"), "{}", err);
}
