// Host-side tests for sensor line decoding.

use rose_core::{decode_line, ProtocolError, RawSample};

#[test]
fn simple_form_is_potentiometer_only() {
    let s = decode_line("731").unwrap();
    assert_eq!(s, RawSample::potentiometer(731));
    assert_eq!(s.light, None);
    assert_eq!(s.button_down, None);
}

#[test]
fn structured_form_decodes_all_fields() {
    let s = decode_line("pot:300,light:1023,button:1").unwrap();
    assert_eq!(
        s,
        RawSample {
            potentiometer: 300,
            light: Some(1023),
            button_down: Some(true),
        }
    );
}

#[test]
fn surrounding_whitespace_and_line_endings_are_tolerated() {
    assert_eq!(decode_line("  42 \r\n").unwrap().potentiometer, 42);
    let s = decode_line("pot: 5, light: 6, button: 0\n").unwrap();
    assert_eq!(s.potentiometer, 5);
    assert_eq!(s.light, Some(6));
    assert_eq!(s.button_down, Some(false));
}

#[test]
fn non_numeric_simple_line_is_rejected() {
    assert_eq!(
        decode_line("abc"),
        Err(ProtocolError::NotANumber("abc".into()))
    );
}

#[test]
fn wrong_field_count_is_rejected() {
    assert_eq!(
        decode_line("pot:1,light:2"),
        Err(ProtocolError::FieldCount(2))
    );
    assert_eq!(
        decode_line("pot:1,light:2,button:0,extra:3"),
        Err(ProtocolError::FieldCount(4))
    );
}

#[test]
fn out_of_range_values_are_passed_through() {
    // clamping is the mapper's job
    let s = decode_line("pot:2000,light:-5,button:0").unwrap();
    assert_eq!(s.potentiometer, 2000);
    assert_eq!(s.light, Some(-5));
}

#[test]
fn errors_render_readable_messages() {
    let e = decode_line("pot:1,light:2").unwrap_err();
    assert_eq!(e.to_string(), "expected 3 fields, got 2");
}
