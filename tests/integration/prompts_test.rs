use consolekit::core::decorators::{deprecated, format_elapsed, timed};
use consolekit::ui::prompts::{select_options_from, validated_input_from, SelectMode};
use std::io::Cursor;
use std::time::Duration;

#[test]
fn test_validated_input_with_float_type() {
    let mut reader = Cursor::new(b"1.5.2\n-3\n0.75\n".to_vec());
    let mut output = Vec::new();

    let value: f64 = validated_input_from(
        &mut reader,
        &mut output,
        "Fraction: ",
        |v: &f64| (0.0..=1.0).contains(v),
        Some("between 0 and 1"),
    )
    .unwrap();

    assert_eq!(value, 0.75);
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Input must be of type: f64"));
    assert!(output.contains("Invalid Input! between 0 and 1\n"));
}

#[test]
fn test_select_accepts_display_values() {
    let mut reader = Cursor::new(b"3\n".to_vec());
    let mut output = Vec::new();

    let choice =
        select_options_from(&mut reader, &mut output, "Size?", &[10, 20, 30], SelectMode::Numeric, false)
            .unwrap();

    assert_eq!(choice, "30");
}

#[test]
fn test_select_input_is_trimmed() {
    let mut reader = Cursor::new(b"  red  \r\n".to_vec());
    let mut output = Vec::new();

    let choice =
        select_options_from(&mut reader, &mut output, "Colour?", &["Red", "Blue"], SelectMode::Bullet, false)
            .unwrap();

    assert_eq!(choice, "Red");
}

#[test]
fn test_wrappers_pass_results_through() {
    let (value, elapsed) = timed(|| deprecated("legacy_sum", Some("use sum"), || 2 + 3));
    assert_eq!(value, 5);
    assert!(!format_elapsed(elapsed).is_empty());
    assert_eq!(format_elapsed(Duration::from_micros(7)), "0:00:00.000007");
}
