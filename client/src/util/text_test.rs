use super::*;

#[test]
fn capitalize_first_uppercases_leading_letter() {
    assert_eq!(capitalize_first("warehouse"), "Warehouse");
}

#[test]
fn capitalize_first_keeps_remaining_case() {
    assert_eq!(capitalize_first("hUB"), "HUB");
}

#[test]
fn capitalize_first_handles_empty_and_non_ascii() {
    assert_eq!(capitalize_first(""), "");
    assert_eq!(capitalize_first("éclair"), "Éclair");
    assert_eq!(capitalize_first("42nd"), "42nd");
}
