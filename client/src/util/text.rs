//! Small display-text helpers.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
